use crate::boards::Board;
use crate::collections::Collection;
use crate::decode::UnmappedFields;
use crate::error::Result;
use crate::transport::{HttpResponse, Transport};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// LibraryService provides methods for managing the user's public library
/// page and its shared resources.
pub struct LibraryService {
    transport: Transport,
}

/// The cover of a library page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cover {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(rename = "linkedIn", skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// A Feedly library: the publicly shared collections and boards of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<Collection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Cover>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Board>>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// A shared resource of a library, keyed by stream id in
/// [`LibraryService::list_shared_resources`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Response from [`LibraryService::alias_available`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryAliasAvailableResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Response from [`LibraryService::cover`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryCoverResponse {
    pub cover: Cover,
}

/// Response from [`LibraryService::details`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryDetailResponse {
    pub library: Library,
}

/// Response from [`LibraryService::leo_industries`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryLeoIndustriesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<Collection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Cover>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Response from [`LibraryService::list_shared_resources`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryListSharedResourcesResponse {
    pub shared_resources: HashMap<String, SharedResource>,
}

/// Response from [`LibraryService::update_cover`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryUpdateCoverResponse {
    pub cover: Cover,
}

#[derive(Serialize)]
struct ScopeBody<'a> {
    scope: &'a str,
}

impl LibraryService {
    pub(crate) fn new(transport: Transport) -> Self {
        LibraryService { transport }
    }

    /// Checks whether a library alias is still available.
    pub fn alias_available(
        &self,
        alias: &str,
    ) -> Result<(LibraryAliasAvailableResponse, HttpResponse)> {
        let request = self.transport.get(&["alias", alias])?;

        self.transport
            .receive::<LibraryAliasAvailableResponse>(request)
    }

    /// Returns the cover of the user's library.
    pub fn cover(&self) -> Result<(LibraryCoverResponse, HttpResponse)> {
        let request = self.transport.get(&["library", "cover"])?;
        let (cover, response) = self.transport.receive::<Cover>(request)?;

        Ok((LibraryCoverResponse { cover }, response))
    }

    /// Deletes the cover of the user's library.
    pub fn delete(&self) -> Result<HttpResponse> {
        let request = self.transport.delete(&["library", "cover"])?;

        self.transport.execute(request)
    }

    /// Returns the details of a library by alias.
    pub fn details(&self, alias: &str) -> Result<(LibraryDetailResponse, HttpResponse)> {
        let request = self.transport.get(&["library", alias])?;
        let (library, response) = self.transport.receive::<Library>(request)?;

        Ok((LibraryDetailResponse { library }, response))
    }

    /// Returns the Leo industry libraries.
    pub fn leo_industries(&self) -> Result<(LibraryLeoIndustriesResponse, HttpResponse)> {
        let request = self.transport.get(&["library", "leoIndustries"])?;

        self.transport
            .receive::<LibraryLeoIndustriesResponse>(request)
    }

    /// Returns the list of shared resources, keyed by stream id.
    pub fn list_shared_resources(
        &self,
    ) -> Result<(LibraryListSharedResourcesResponse, HttpResponse)> {
        let request = self.transport.get(&["library", "acl"])?;
        let (shared_resources, response) = self
            .transport
            .receive::<HashMap<String, SharedResource>>(request)?;

        Ok((
            LibraryListSharedResourcesResponse { shared_resources },
            response,
        ))
    }

    /// Makes a collection publicly visible in the user's library.
    pub fn share_resource(&self, collection_id: &str) -> Result<HttpResponse> {
        let request = self
            .transport
            .get(&["library", "acl", collection_id, "global.public"])?
            .json(&ScopeBody { scope: "view" });

        self.transport.execute(request)
    }

    /// Removes a collection from the user's library.
    pub fn unshare_resource(&self, collection_id: &str) -> Result<HttpResponse> {
        let request = self
            .transport
            .delete(&["library", "acl", collection_id, "global.public"])?;

        self.transport.execute(request)
    }

    /// Updates the cover of the user's library.
    pub fn update_cover(&self, cover: &Cover) -> Result<(LibraryUpdateCoverResponse, HttpResponse)> {
        let request = self.transport.post(&["library", "cover"])?.json(cover);
        let (cover, response) = self.transport.receive::<Cover>(request)?;

        Ok((LibraryUpdateCoverResponse { cover }, response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shared_resources_decode_by_stream_id() {
        let wire = json!({
            "user/abcd/category/tech": {"scope": "view"},
            "user/abcd/tag/global.saved": {"scope": "view", "since": 1609459200000i64}
        });

        let resources: HashMap<String, SharedResource> = serde_json::from_value(wire).unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(
            resources["user/abcd/category/tech"].scope.as_deref(),
            Some("view")
        );
        assert!(resources["user/abcd/tag/global.saved"]
            .unmapped_fields
            .contains_key("since"));
    }

    #[test]
    fn test_library_decode() {
        let wire = json!({
            "cover": {"alias": "alice", "fullName": "Alice"},
            "collections": [{"id": "user/abcd/category/tech", "label": "Tech"}],
            "tags": [{"id": "user/abcd/tag/global.saved"}],
            "theme": "dark"
        });

        let library: Library = serde_json::from_value(wire).unwrap();
        assert_eq!(library.cover.unwrap().alias.as_deref(), Some("alice"));
        assert_eq!(library.collections.unwrap().len(), 1);
        assert_eq!(library.tags.unwrap().len(), 1);
        assert!(library.unmapped_fields.contains_key("theme"));
    }
}
