use crate::decode::UnmappedFields;
use crate::error::Result;
use crate::feeds::Feed;
use crate::mime;
use crate::time::Time;
use crate::transport::{HttpResponse, Transport};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// CollectionService provides methods for managing collections of feed
/// subscriptions, aka categories.
pub struct CollectionService {
    transport: Transport,
}

/// An access control entry on a shared collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionAcl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// A Feedly collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<Vec<CollectionAcl>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customizable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeds: Option<Vec<Feed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_feeds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Optional parameters for [`CollectionService::create`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCreateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeds: Option<Vec<Feed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Optional parameters for [`CollectionService::delete_feed`] and
/// [`CollectionService::delete_multiple_feeds`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDeleteFeedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_orphan_feeds: Option<bool>,
}

/// Optional parameters for [`CollectionService::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectionListParams {
    #[serde(rename = "withEnterprise", skip_serializing_if = "Option::is_none")]
    pub with_enterprise: Option<bool>,
    #[serde(rename = "withStats", skip_serializing_if = "Option::is_none")]
    pub with_stats: Option<bool>,
}

/// Optional parameters for [`CollectionService::update`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_cover: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeds: Option<Vec<Feed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Response from [`CollectionService::add_feed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionAddFeedResponse {
    pub feeds: Vec<Feed>,
}

/// Response from [`CollectionService::add_multiple_feeds`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionAddMultipleFeedsResponse {
    pub feeds: Vec<Feed>,
}

/// Response from [`CollectionService::create`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionCreateResponse {
    pub collections: Vec<Collection>,
}

/// Response from [`CollectionService::details`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionDetailResponse {
    pub collections: Vec<Collection>,
}

/// Response from [`CollectionService::list`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionListResponse {
    pub collections: Vec<Collection>,
}

/// Response from [`CollectionService::update`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionUpdateResponse {
    pub collections: Vec<Collection>,
}

/// Response from [`CollectionService::upload_cover_image`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionUploadCoverImageResponse {
    pub collections: Vec<Collection>,
}

impl CollectionService {
    pub(crate) fn new(transport: Transport) -> Self {
        CollectionService { transport }
    }

    /// Adds a feed to an existing collection.
    pub fn add_feed(
        &self,
        collection_id: &str,
        feed: &Feed,
    ) -> Result<(CollectionAddFeedResponse, HttpResponse)> {
        let request = self
            .transport
            .put(&["collections", collection_id, "feeds"])?
            .json(feed);
        let (feeds, response) = self.transport.receive::<Vec<Feed>>(request)?;

        Ok((CollectionAddFeedResponse { feeds }, response))
    }

    /// Adds one or more feeds to an existing collection.
    pub fn add_multiple_feeds(
        &self,
        collection_id: &str,
        feeds: &[Feed],
    ) -> Result<(CollectionAddMultipleFeedsResponse, HttpResponse)> {
        let request = self
            .transport
            .post(&["collections", collection_id, "feeds", ".mput"])?
            .json(&feeds);
        let (feeds, response) = self.transport.receive::<Vec<Feed>>(request)?;

        Ok((CollectionAddMultipleFeedsResponse { feeds }, response))
    }

    /// Creates a new collection.
    pub fn create(
        &self,
        label: &str,
        params: Option<&CollectionCreateParams>,
    ) -> Result<(CollectionCreateResponse, HttpResponse)> {
        #[derive(Serialize)]
        struct Body<'a> {
            #[serde(flatten)]
            params: &'a CollectionCreateParams,
            label: &'a str,
        }

        let default = CollectionCreateParams::default();
        let body = Body {
            params: params.unwrap_or(&default),
            label,
        };

        let request = self.transport.post(&["collections"])?.json(&body);
        let (collections, response) = self.transport.receive::<Vec<Collection>>(request)?;

        Ok((CollectionCreateResponse { collections }, response))
    }

    /// Deletes an existing collection.
    pub fn delete(&self, collection_id: &str) -> Result<HttpResponse> {
        let request = self.transport.delete(&["collections", collection_id])?;

        self.transport.execute(request)
    }

    /// Deletes a feed from an existing collection.
    pub fn delete_feed(
        &self,
        collection_id: &str,
        feed_id: &str,
        params: Option<&CollectionDeleteFeedParams>,
    ) -> Result<HttpResponse> {
        let mut request = self
            .transport
            .delete(&["collections", collection_id, "feeds", feed_id])?;
        if let Some(params) = params {
            request = request.query(params);
        }

        self.transport.execute(request)
    }

    /// Removes one or more feeds from an existing collection.
    pub fn delete_multiple_feeds(
        &self,
        collection_id: &str,
        feed_ids: &[&str],
        params: Option<&CollectionDeleteFeedParams>,
    ) -> Result<HttpResponse> {
        let mut request = self
            .transport
            .delete(&["collections", collection_id, "feeds", ".mdelete"])?
            .json(&feed_ids);
        if let Some(params) = params {
            request = request.query(params);
        }

        self.transport.execute(request)
    }

    /// Returns details about a collection.
    pub fn details(&self, collection_id: &str) -> Result<(CollectionDetailResponse, HttpResponse)> {
        let request = self.transport.get(&["collections", collection_id])?;
        let (collections, response) = self.transport.receive::<Vec<Collection>>(request)?;

        Ok((CollectionDetailResponse { collections }, response))
    }

    /// Returns the list of collections.
    pub fn list(
        &self,
        params: Option<&CollectionListParams>,
    ) -> Result<(CollectionListResponse, HttpResponse)> {
        let mut request = self.transport.get(&["collections"])?;
        if let Some(params) = params {
            request = request.query(params);
        }

        let (collections, response) = self.transport.receive::<Vec<Collection>>(request)?;

        Ok((CollectionListResponse { collections }, response))
    }

    /// Updates an existing collection.
    pub fn update(
        &self,
        collection_id: &str,
        params: Option<&CollectionUpdateParams>,
    ) -> Result<(CollectionUpdateResponse, HttpResponse)> {
        #[derive(Serialize)]
        struct Body<'a> {
            #[serde(flatten)]
            params: &'a CollectionUpdateParams,
            id: &'a str,
        }

        let default = CollectionUpdateParams::default();
        let body = Body {
            params: params.unwrap_or(&default),
            id: collection_id,
        };

        let request = self.transport.post(&["collections"])?.json(&body);
        let (collections, response) = self.transport.receive::<Vec<Collection>>(request)?;

        Ok((CollectionUpdateResponse { collections }, response))
    }

    /// Uploads a new cover image for an existing collection.
    pub fn upload_cover_image<R: Read>(
        &self,
        collection_id: &str,
        cover_image: R,
    ) -> Result<(CollectionUploadCoverImageResponse, HttpResponse)> {
        let (body, content_type) = mime::multipart_attachment(cover_image)?;

        let request = self
            .transport
            .post(&["collections", collection_id])?
            .header("Content-Type", content_type)
            .body(body);
        let (collections, response) = self.transport.receive::<Vec<Collection>>(request)?;

        Ok((CollectionUploadCoverImageResponse { collections }, response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_decode_with_nested_feeds() {
        let wire = json!({
            "id": "user/abcd/category/tech",
            "label": "Tech",
            "created": 1597242491000i64,
            "numFeeds": 2,
            "feeds": [
                {"id": "feed/http://example.com/a", "title": "A"},
                {"id": "feed/http://example.com/b", "title": "B", "newField": 1}
            ]
        });

        let collection: Collection = serde_json::from_value(wire).unwrap();
        assert_eq!(collection.label.as_deref(), Some("Tech"));
        assert_eq!(collection.num_feeds, Some(2));

        let feeds = collection.feeds.unwrap();
        assert_eq!(feeds.len(), 2);
        assert_eq!(feeds[1].unmapped_fields.get("newField"), Some(&json!(1)));
    }
}
