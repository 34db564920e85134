use crate::decode::UnmappedFields;
use crate::entries::Entry;
use crate::error::Result;
use crate::feeds::Feed;
use crate::streams::StreamLink;
use crate::time::Time;
use crate::transport::{HttpResponse, Transport};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// SearchService provides methods for searching feeds and stream content.
pub struct SearchService {
    transport: Transport,
}

/// Filter on the kind of media embedded in an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddedFilter {
    Any,
    Audio,
    Doc,
    Video,
}

/// Filter on the engagement level of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementFilter {
    High,
    Medium,
}

/// Selects which entry fields a content search matches against. Encodes as
/// "all" or a comma separated field list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldFilter {
    pub all: bool,
    pub author: bool,
    pub keywords: bool,
    pub title: bool,
}

impl Serialize for FieldFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.all {
            return serializer.serialize_str("all");
        }

        let mut fields = Vec::new();
        if self.author {
            fields.push("author");
        }
        if self.keywords {
            fields.push("keywords");
        }
        if self.title {
            fields.push("title");
        }

        serializer.serialize_str(&fields.join(","))
    }
}

/// Optional parameters for [`SearchService::feeds`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchFeedsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Optional parameters for [`SearchService::stream`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStreamParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded: Option<EmbeddedFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement: Option<EngagementFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newer_than: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_only: Option<bool>,
}

/// Response from [`SearchService::feeds`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFeedsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Feed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Response from [`SearchService::stream`]. The stream fields are carried
/// at the top level of the payload alongside the search metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStreamResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_search: Option<bool>,
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
    pub search_elapsed_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Time>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

impl SearchService {
    pub(crate) fn new(transport: Transport) -> Self {
        SearchService { transport }
    }

    /// Returns feeds matching a query.
    pub fn feeds(
        &self,
        query: &str,
        params: Option<&SearchFeedsParams>,
    ) -> Result<(SearchFeedsResponse, HttpResponse)> {
        #[derive(Serialize)]
        struct RequiredParams<'a> {
            query: &'a str,
        }

        let mut request = self
            .transport
            .get(&["search", "feeds"])?
            .query(&RequiredParams { query });
        if let Some(params) = params {
            request = request.query(params);
        }

        self.transport.receive::<SearchFeedsResponse>(request)
    }

    /// Returns content in a stream matching a query.
    pub fn stream(
        &self,
        stream_id: &str,
        query: &str,
        params: Option<&SearchStreamParams>,
    ) -> Result<(SearchStreamResponse, HttpResponse)> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct RequiredParams<'a> {
            query: &'a str,
            stream_id: &'a str,
        }

        let mut request = self
            .transport
            .get(&["search", "contents"])?
            .query(&RequiredParams { query, stream_id });
        if let Some(params) = params {
            request = request.query(params);
        }

        self.transport.receive::<SearchStreamResponse>(request)
    }
}
