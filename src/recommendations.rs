use crate::decode::UnmappedFields;
use crate::error::Result;
use crate::feeds::Feed;
use crate::time::Time;
use crate::transport::{HttpResponse, Transport};
use serde::{Deserialize, Serialize};

/// RecommendationService provides methods for discovering feeds by topic.
pub struct RecommendationService {
    transport: Transport,
}

/// A Feedly topic with its recommended feeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_feed_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_topics: Option<Vec<Topic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_infos: Option<Vec<Feed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_topic: Option<Box<Topic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_feeds: Option<Vec<Feed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_topics: Option<Vec<Topic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Optional parameters for [`RecommendationService::topic`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecommendationTopicParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

/// Response from [`RecommendationService::topic`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationTopicResponse {
    pub topics: Vec<Topic>,
}

impl RecommendationService {
    pub(crate) fn new(transport: Transport) -> Self {
        RecommendationService { transport }
    }

    /// Returns feeds recommended for a topic in a locale.
    pub fn topic(
        &self,
        query: &str,
        locale: &str,
        params: Option<&RecommendationTopicParams>,
    ) -> Result<(RecommendationTopicResponse, HttpResponse)> {
        #[derive(Serialize)]
        struct RequiredParams<'a> {
            locale: &'a str,
            query: &'a str,
        }

        let mut request = self
            .transport
            .get(&["recommendations", "topics"])?
            .query(&RequiredParams { locale, query });
        if let Some(params) = params {
            request = request.query(params);
        }

        let (topics, response) = self.transport.receive::<Vec<Topic>>(request)?;

        Ok((RecommendationTopicResponse { topics }, response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_topic_decode_with_nested_topics() {
        let wire = json!({
            "topic": "rust",
            "topicId": "topic/rust",
            "size": 120,
            "updated": 1609459200000i64,
            "recommendedFeeds": [
                {"id": "feed/https://blog.rust-lang.org/feed.xml", "title": "Rust Blog"}
            ],
            "relatedTopics": [
                {"topic": "programming", "parentTopic": {"topic": "tech"}}
            ],
            "trendScore": 0.7
        });

        let topic: Topic = serde_json::from_value(wire).unwrap();
        assert_eq!(topic.topic.as_deref(), Some("rust"));
        assert_eq!(topic.recommended_feeds.unwrap().len(), 1);

        let related = topic.related_topics.unwrap();
        assert_eq!(
            related[0].parent_topic.as_ref().unwrap().topic.as_deref(),
            Some("tech")
        );
        assert!(topic.unmapped_fields.contains_key("trendScore"));
    }
}
