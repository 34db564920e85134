use crate::decode::UnmappedFields;
use crate::error::Result;
use crate::time::Time;
use crate::transport::{HttpResponse, Transport};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// FeedService provides methods for looking up feed metadata.
pub struct FeedService {
    transport: Transport,
}

/// A Feedly feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_slot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_read_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delicious_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_engagement: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leo_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_long_read_entries_past_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_read_entries_past_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_tagged_entries_past_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsored: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_counts: Option<HashMap<String, i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_reading_time_past_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tag_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_followers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_screen_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordmark: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Response from [`FeedService::metadata`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedMetadataResponse {
    pub feed: Feed,
}

/// Response from [`FeedService::multiple_metadata`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedMultipleMetadataResponse {
    pub feeds: Vec<Feed>,
}

impl FeedService {
    pub(crate) fn new(transport: Transport) -> Self {
        FeedService { transport }
    }

    /// Returns the metadata for a single feed.
    pub fn metadata(&self, feed_id: &str) -> Result<(FeedMetadataResponse, HttpResponse)> {
        let request = self.transport.get(&["feeds", feed_id])?;
        let (feed, response) = self.transport.receive::<Feed>(request)?;

        Ok((FeedMetadataResponse { feed }, response))
    }

    /// Returns the metadata for a list of feeds.
    pub fn multiple_metadata(
        &self,
        feed_ids: &[&str],
    ) -> Result<(FeedMultipleMetadataResponse, HttpResponse)> {
        let request = self.transport.post(&["feeds", ".mget"])?.json(&feed_ids);
        let (feeds, response) = self.transport.receive::<Vec<Feed>>(request)?;

        Ok((FeedMultipleMetadataResponse { feeds }, response))
    }
}
