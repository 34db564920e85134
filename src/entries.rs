use crate::boards::Board;
use crate::collections::Collection;
use crate::decode::UnmappedFields;
use crate::error::Result;
use crate::time::Time;
use crate::transport::{HttpResponse, Transport};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// EntryService provides methods for managing entries.
pub struct EntryService {
    transport: Transport,
}

/// A link attached to an entry (alternate or canonical).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Leo feedback prompt attached to an analyzed entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFeedbackPrompt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub prompt_type: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Entry content or summary block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Common topic detected by Leo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonTopic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Application that created an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// A media enclosure attached to an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enclosure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub enclosure_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// A mention of an entity within an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// An entity detected by Leo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<Mention>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salience_level: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// A trending meme an entry belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Source feed of an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryOrigin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// An entry thumbnail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Featured visual of an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visual {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_cache_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Webfeeds publisher branding attached to an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webfeeds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordmark: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// A Feedly entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_timestamp: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate: Option<Vec<Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amp_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_feedback_prompt: Option<AnalysisFeedbackPrompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<Vec<Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Collection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdn_amp_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_topics: Option<Vec<CommonTopic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<EntryContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawled: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Creator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Creator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclosure: Option<Vec<Enclosure>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memes: Option<Vec<Meme>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<EntryOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priorities: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recrawled: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<EntryContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Board>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Vec<Thumbnail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual: Option<Visual>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webfeeds: Option<Webfeeds>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Response from [`EntryService::content`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryContentResponse {
    pub entries: Vec<Entry>,
}

/// Response from [`EntryService::create`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCreateResponse {
    pub entry_ids: Vec<String>,
}

/// Response from [`EntryService::multiple_content`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryMultipleContentResponse {
    pub entries: Vec<Entry>,
}

impl EntryService {
    pub(crate) fn new(transport: Transport) -> Self {
        EntryService { transport }
    }

    /// Returns the content of an entry.
    pub fn content(&self, entry_id: &str) -> Result<(EntryContentResponse, HttpResponse)> {
        let request = self.transport.get(&["entries", entry_id])?;
        let (entries, response) = self.transport.receive::<Vec<Entry>>(request)?;

        Ok((EntryContentResponse { entries }, response))
    }

    /// Creates and tags an entry.
    pub fn create(&self, entry: &Entry) -> Result<(EntryCreateResponse, HttpResponse)> {
        let request = self.transport.post(&["entries"])?.json(entry);
        let (entry_ids, response) = self.transport.receive::<Vec<String>>(request)?;

        Ok((EntryCreateResponse { entry_ids }, response))
    }

    /// Returns the content for one or more entries.
    pub fn multiple_content(
        &self,
        entry_ids: &[&str],
    ) -> Result<(EntryMultipleContentResponse, HttpResponse)> {
        let request = self.transport.post(&["entries", ".mget"])?.json(&entry_ids);
        let (entries, response) = self.transport.receive::<Vec<Entry>>(request)?;

        Ok((EntryMultipleContentResponse { entries }, response))
    }
}
