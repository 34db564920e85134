use crate::decode::UnmappedFields;
use crate::entries::Entry;
use crate::error::Result;
use crate::time::Time;
use crate::transport::{HttpResponse, Transport};
use serde::{Deserialize, Serialize};

/// StreamService provides methods for reading streams of entries. A stream
/// can be a feed, a collection, a board, or one of the global resources.
pub struct StreamService {
    transport: Transport,
}

/// Ranking order for stream content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentRank {
    Engagement,
    Newest,
    Oldest,
}

/// A link attached to a stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// A page of entries from a stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate: Option<Vec<StreamLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Entry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Time>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Optional parameters for [`StreamService::content`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamContentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find_url_duplicates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newer_than: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranked: Option<ContentRank>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_muted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_only: Option<bool>,
}

/// Optional parameters for [`StreamService::entry_ids`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamEntryIdsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newer_than: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranked: Option<ContentRank>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_only: Option<bool>,
}

/// Response from [`StreamService::content`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamContentResponse {
    pub stream: Stream,
}

/// Response from [`StreamService::entry_ids`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamEntryIdsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

impl StreamService {
    pub(crate) fn new(transport: Transport) -> Self {
        StreamService { transport }
    }

    /// Returns a page of content from a stream.
    pub fn content(
        &self,
        stream_id: &str,
        params: Option<&StreamContentParams>,
    ) -> Result<(StreamContentResponse, HttpResponse)> {
        let mut request = self.transport.get(&["streams", stream_id, "contents"])?;
        if let Some(params) = params {
            request = request.query(params);
        }

        let (stream, response) = self.transport.receive::<Stream>(request)?;

        Ok((StreamContentResponse { stream }, response))
    }

    /// Returns a page of entry ids from a stream.
    pub fn entry_ids(
        &self,
        stream_id: &str,
        params: Option<&StreamEntryIdsParams>,
    ) -> Result<(StreamEntryIdsResponse, HttpResponse)> {
        let mut request = self.transport.get(&["streams", stream_id, "ids"])?;
        if let Some(params) = params {
            request = request.query(params);
        }

        self.transport.receive::<StreamEntryIdsResponse>(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stream_decode() {
        let wire = json!({
            "id": "feed/http://feeds.arstechnica.com/arstechnica/index",
            "title": "Ars Technica",
            "direction": "ltr",
            "updated": 1609459200500i64,
            "continuation": "174aeb7b1cb:1538:d4e3ef47",
            "alternate": [{"href": "https://arstechnica.com", "type": "text/html"}],
            "items": [
                {"id": "entry/1", "unread": true},
                {"id": "entry/2", "unread": false}
            ],
            "streamHint": "reload"
        });

        let stream: Stream = serde_json::from_value(wire).unwrap();
        assert_eq!(stream.title.as_deref(), Some("Ars Technica"));
        assert_eq!(stream.updated.unwrap().unix(), 1609459200);
        assert_eq!(stream.items.as_ref().unwrap().len(), 2);
        assert_eq!(
            stream.items.unwrap()[0].id.as_deref(),
            Some("entry/1")
        );
        assert!(stream.unmapped_fields.contains_key("streamHint"));
    }

    #[test]
    fn test_content_rank_encodes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContentRank::Engagement).unwrap(),
            "\"engagement\""
        );
        assert_eq!(serde_json::to_string(&ContentRank::Newest).unwrap(), "\"newest\"");
        assert_eq!(serde_json::to_string(&ContentRank::Oldest).unwrap(), "\"oldest\"");
    }

    #[test]
    fn test_content_params_omit_unset_fields() {
        let params = StreamContentParams {
            count: Some(20),
            ranked: Some(ContentRank::Oldest),
            ..Default::default()
        };
        let encoded = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(encoded, "count=20&ranked=oldest");
    }
}
