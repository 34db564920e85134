use crate::decode::UnmappedFields;
use crate::error::Result;
use crate::time::Time;
use crate::transport::{HttpResponse, Transport};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// MarkerService provides methods for managing markers.
pub struct MarkerService {
    transport: Transport,
}

/// Action applied by [`MarkerService::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkAction {
    KeepUnread,
    MarkAsRead,
    MarkAsSaved,
    MarkAsUnsaved,
    UndoMarkAsRead,
}

/// Kind of resource targeted by [`MarkerService::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkType {
    #[serde(rename = "categories")]
    Collections,
    #[serde(rename = "entries")]
    Entries,
    #[serde(rename = "feeds")]
    Feeds,
    #[serde(rename = "tags")]
    Tags,
}

/// Optional parameters for [`MarkerService::latest_read`] and
/// [`MarkerService::latest_tagged`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLatestParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newer_than: Option<Time>,
}

/// Optional parameters for [`MarkerService::mark`]. Only the fields relevant
/// to the requested action and type are sent.
#[derive(Debug, Clone, Default)]
pub struct MarkerMarkParams {
    pub as_of: Option<Time>,
    pub collection_ids: Option<Vec<String>>,
    pub entry_ids: Option<Vec<String>>,
    pub feed_ids: Option<Vec<String>>,
    pub last_read_entry_id: Option<String>,
    pub tag_ids: Option<Vec<String>>,
}

/// Optional parameters for [`MarkerService::unread_counts`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarkerUnreadCountsParams {
    #[serde(rename = "autorefresh", skip_serializing_if = "Option::is_none")]
    pub auto_refresh: Option<bool>,
    #[serde(rename = "newerThan", skip_serializing_if = "Option::is_none")]
    pub newer_than: Option<Time>,
    #[serde(rename = "streamId", skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,
}

/// Latest read marker for a feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMarker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Response from [`MarkerService::latest_read`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkerLatestReadResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeds: Option<Vec<FeedMarker>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Time>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Response from [`MarkerService::latest_tagged`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLatestTaggedResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagged_entries: Option<HashMap<String, Vec<String>>>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Unread count for a single stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnreadCount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Time>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Response from [`MarkerService::unread_counts`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkerUnreadCountsResponse {
    #[serde(rename = "unreadcounts", skip_serializing_if = "Option::is_none")]
    pub unread_counts: Option<Vec<UnreadCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Time>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkBody<'a> {
    action: MarkAction,
    #[serde(rename = "type")]
    mark_type: MarkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    as_of: Option<Time>,
    #[serde(rename = "categoryIds", skip_serializing_if = "Option::is_none")]
    collection_ids: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entry_ids: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    feed_ids: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_read_entry_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag_ids: Option<&'a [String]>,
}

impl<'a> MarkBody<'a> {
    // The API rejects fields that do not belong to the action/type pair, so
    // only the relevant ones are copied over.
    fn build(action: MarkAction, mark_type: MarkType, params: &'a MarkerMarkParams) -> Self {
        let mut body = MarkBody {
            action,
            mark_type,
            as_of: None,
            collection_ids: None,
            entry_ids: None,
            feed_ids: None,
            last_read_entry_id: None,
            tag_ids: None,
        };

        match mark_type {
            MarkType::Collections => match action {
                MarkAction::MarkAsRead => {
                    body.as_of = params.as_of;
                    body.collection_ids = params.collection_ids.as_deref();
                    body.last_read_entry_id = params.last_read_entry_id.as_deref();
                }
                MarkAction::UndoMarkAsRead => {
                    body.collection_ids = params.collection_ids.as_deref();
                }
                _ => {}
            },
            MarkType::Entries => {
                body.entry_ids = params.entry_ids.as_deref();
            }
            MarkType::Feeds => match action {
                MarkAction::MarkAsRead => {
                    body.as_of = params.as_of;
                    body.feed_ids = params.feed_ids.as_deref();
                    body.last_read_entry_id = params.last_read_entry_id.as_deref();
                }
                MarkAction::UndoMarkAsRead => {
                    body.feed_ids = params.feed_ids.as_deref();
                }
                _ => {}
            },
            MarkType::Tags => {
                body.as_of = params.as_of;
                body.last_read_entry_id = params.last_read_entry_id.as_deref();
                body.tag_ids = params.tag_ids.as_deref();
            }
        }

        body
    }
}

impl MarkerService {
    pub(crate) fn new(transport: Transport) -> Self {
        MarkerService { transport }
    }

    /// Returns the latest read operations.
    pub fn latest_read(
        &self,
        params: Option<&MarkerLatestParams>,
    ) -> Result<(MarkerLatestReadResponse, HttpResponse)> {
        let mut request = self.transport.get(&["markers", "reads"])?;
        if let Some(params) = params {
            request = request.query(params);
        }

        self.transport.receive::<MarkerLatestReadResponse>(request)
    }

    /// Returns the latest tagged entry ids.
    pub fn latest_tagged(
        &self,
        params: Option<&MarkerLatestParams>,
    ) -> Result<(MarkerLatestTaggedResponse, HttpResponse)> {
        let mut request = self.transport.get(&["markers", "tags"])?;
        if let Some(params) = params {
            request = request.query(params);
        }

        self.transport
            .receive::<MarkerLatestTaggedResponse>(request)
    }

    /// Marks one or more collections, entries, feeds, or tags as read,
    /// saved, or unread.
    pub fn mark(
        &self,
        action: MarkAction,
        mark_type: MarkType,
        params: &MarkerMarkParams,
    ) -> Result<HttpResponse> {
        let body = MarkBody::build(action, mark_type, params);
        let request = self.transport.post(&["markers"])?.json(&body);

        self.transport.execute(request)
    }

    /// Returns the list of unread counts.
    pub fn unread_counts(
        &self,
        params: Option<&MarkerUnreadCountsParams>,
    ) -> Result<(MarkerUnreadCountsResponse, HttpResponse)> {
        let mut request = self.transport.get(&["markers", "counts"])?;
        if let Some(params) = params {
            request = request.query(params);
        }

        self.transport
            .receive::<MarkerUnreadCountsResponse>(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mark_entries_sends_entry_ids_only() {
        let params = MarkerMarkParams {
            entry_ids: Some(vec!["entry/1".to_string(), "entry/2".to_string()]),
            feed_ids: Some(vec!["feed/ignored".to_string()]),
            ..Default::default()
        };
        let body = MarkBody::build(MarkAction::MarkAsRead, MarkType::Entries, &params);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "action": "markAsRead",
                "type": "entries",
                "entryIds": ["entry/1", "entry/2"]
            })
        );
    }

    #[test]
    fn test_mark_collections_as_read_sends_as_of_and_category_ids() {
        let params = MarkerMarkParams {
            as_of: Some(Time::from_unix(1609459200)),
            collection_ids: Some(vec!["user/abcd/category/tech".to_string()]),
            last_read_entry_id: Some("entry/1".to_string()),
            ..Default::default()
        };
        let body = MarkBody::build(MarkAction::MarkAsRead, MarkType::Collections, &params);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "action": "markAsRead",
                "type": "categories",
                "asOf": 1609459200000i64,
                "categoryIds": ["user/abcd/category/tech"],
                "lastReadEntryId": "entry/1"
            })
        );
    }

    #[test]
    fn test_undo_mark_feeds_as_read_drops_as_of() {
        let params = MarkerMarkParams {
            as_of: Some(Time::from_unix(1609459200)),
            feed_ids: Some(vec!["feed/http://example.com/rss".to_string()]),
            ..Default::default()
        };
        let body = MarkBody::build(MarkAction::UndoMarkAsRead, MarkType::Feeds, &params);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "action": "undoMarkAsRead",
                "type": "feeds",
                "feedIds": ["feed/http://example.com/rss"]
            })
        );
    }

    #[test]
    fn test_unread_counts_decode() {
        let wire = json!({
            "unreadcounts": [
                {"id": "user/abcd/category/tech", "count": 9, "updated": 1609459200000i64},
                {"id": "feed/http://example.com/rss", "count": 3, "velocity": 1.5}
            ],
            "updated": 1609459200000i64
        });

        let counts: MarkerUnreadCountsResponse = serde_json::from_value(wire).unwrap();
        let unread = counts.unread_counts.unwrap();
        assert_eq!(unread.len(), 2);
        assert_eq!(unread[0].count, Some(9));
        assert!(unread[1].unmapped_fields.contains_key("velocity"));
    }
}
