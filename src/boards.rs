use crate::decode::UnmappedFields;
use crate::error::Result;
use crate::feeds::Feed;
use crate::mime;
use crate::time::Time;
use crate::transport::{HttpResponse, Transport};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// BoardService provides methods for managing personal boards, aka tags.
pub struct BoardService {
    transport: Transport,
}

/// A Feedly board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customizable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_highlights: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_notes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Optional parameters for [`BoardService::create`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardCreateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeds: Option<Vec<Feed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_highlights: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_notes: Option<bool>,
}

/// Optional parameters for [`BoardService::list`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_enterprise: Option<bool>,
}

/// Optional parameters for [`BoardService::update`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_cover: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_highlights: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_notes: Option<bool>,
}

/// Response from [`BoardService::create`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardCreateResponse {
    pub boards: Vec<Board>,
}

/// Response from [`BoardService::list`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardListResponse {
    pub boards: Vec<Board>,
}

/// Response from [`BoardService::update`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardUpdateResponse {
    pub boards: Vec<Board>,
}

/// Response from [`BoardService::upload_cover_image`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardUploadCoverImageResponse {
    pub boards: Vec<Board>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryIdBody<'a> {
    entry_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryIdsBody<'a> {
    entry_ids: &'a [&'a str],
}

impl BoardService {
    pub(crate) fn new(transport: Transport) -> Self {
        BoardService { transport }
    }

    /// Adds one entry to one or more existing boards.
    pub fn add_entry(&self, board_ids: &[&str], entry_id: &str) -> Result<HttpResponse> {
        let request = self
            .transport
            .put(&["tags", &board_ids.join(",")])?
            .json(&EntryIdBody { entry_id });

        self.transport.execute(request)
    }

    /// Adds one or more entries to one or more existing boards.
    pub fn add_entries(&self, board_ids: &[&str], entry_ids: &[&str]) -> Result<HttpResponse> {
        let request = self
            .transport
            .put(&["tags", &board_ids.join(",")])?
            .json(&EntryIdsBody { entry_ids });

        self.transport.execute(request)
    }

    /// Creates a new board.
    pub fn create(
        &self,
        label: &str,
        params: Option<&BoardCreateParams>,
    ) -> Result<(BoardCreateResponse, HttpResponse)> {
        #[derive(Serialize)]
        struct Body<'a> {
            #[serde(flatten)]
            params: &'a BoardCreateParams,
            label: &'a str,
        }

        let default = BoardCreateParams::default();
        let body = Body {
            params: params.unwrap_or(&default),
            label,
        };

        let request = self.transport.post(&["boards"])?.json(&body);
        let (boards, response) = self.transport.receive::<Vec<Board>>(request)?;

        Ok((BoardCreateResponse { boards }, response))
    }

    /// Deletes one or more existing boards.
    pub fn delete(&self, board_ids: &[&str]) -> Result<HttpResponse> {
        let request = self.transport.delete(&["tags", &board_ids.join(",")])?;

        self.transport.execute(request)
    }

    /// Returns the list of boards.
    pub fn list(
        &self,
        params: Option<&BoardListParams>,
    ) -> Result<(BoardListResponse, HttpResponse)> {
        let mut request = self.transport.get(&["boards"])?;
        if let Some(params) = params {
            request = request.query(params);
        }

        let (boards, response) = self.transport.receive::<Vec<Board>>(request)?;

        Ok((BoardListResponse { boards }, response))
    }

    /// Removes one entry from one or more existing boards.
    pub fn remove_entry(&self, board_ids: &[&str], entry_id: &str) -> Result<HttpResponse> {
        let request = self
            .transport
            .delete(&["tags", &board_ids.join(",")])?
            .json(&EntryIdBody { entry_id });

        self.transport.execute(request)
    }

    /// Removes one or more entries from one or more existing boards.
    pub fn remove_entries(&self, board_ids: &[&str], entry_ids: &[&str]) -> Result<HttpResponse> {
        let request = self
            .transport
            .delete(&["tags", &board_ids.join(",")])?
            .json(&EntryIdsBody { entry_ids });

        self.transport.execute(request)
    }

    /// Updates an existing board.
    pub fn update(
        &self,
        board_id: &str,
        params: Option<&BoardUpdateParams>,
    ) -> Result<(BoardUpdateResponse, HttpResponse)> {
        #[derive(Serialize)]
        struct Body<'a> {
            #[serde(flatten)]
            params: &'a BoardUpdateParams,
            id: &'a str,
        }

        let default = BoardUpdateParams::default();
        let body = Body {
            params: params.unwrap_or(&default),
            id: board_id,
        };

        let request = self.transport.post(&["boards"])?.json(&body);
        let (boards, response) = self.transport.receive::<Vec<Board>>(request)?;

        Ok((BoardUpdateResponse { boards }, response))
    }

    /// Uploads a new cover image for an existing board.
    pub fn upload_cover_image<R: Read>(
        &self,
        board_id: &str,
        cover_image: R,
    ) -> Result<(BoardUploadCoverImageResponse, HttpResponse)> {
        let (body, content_type) = mime::multipart_attachment(cover_image)?;

        let request = self
            .transport
            .post(&["boards", board_id])?
            .header("Content-Type", content_type)
            .body(body);
        let (boards, response) = self.transport.receive::<Vec<Board>>(request)?;

        Ok((BoardUploadCoverImageResponse { boards }, response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_board_decode_captures_unknown_keys() {
        let wire = json!({
            "id": "user/abcd/tag/global.saved",
            "label": "Saved for later",
            "created": 1609459200000i64,
            "isPublic": false,
            "numEntries": 12
        });

        let board: Board = serde_json::from_value(wire).unwrap();
        assert_eq!(board.label.as_deref(), Some("Saved for later"));
        assert_eq!(board.is_public, Some(false));
        assert_eq!(board.created.unwrap().unix(), 1609459200);
        assert_eq!(board.unmapped_fields.get("numEntries"), Some(&json!(12)));
    }

    #[test]
    fn test_create_body_merges_label_and_params() {
        #[derive(Serialize)]
        struct Body<'a> {
            #[serde(flatten)]
            params: &'a BoardCreateParams,
            label: &'a str,
        }

        let params = BoardCreateParams {
            is_public: Some(true),
            ..Default::default()
        };
        let value = serde_json::to_value(Body {
            params: &params,
            label: "rust",
        })
        .unwrap();

        assert_eq!(value, json!({"label": "rust", "isPublic": true}));
    }
}
