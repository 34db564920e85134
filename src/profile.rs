use crate::decode::UnmappedFields;
use crate::error::Result;
use crate::time::Time;
use crate::transport::{HttpResponse, Transport};
use serde::{Deserialize, Serialize};

/// ProfileService provides methods for managing profile information.
pub struct ProfileService {
    transport: Transport,
}

/// A third-party login associated with a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Login {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// A Feedly user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymized_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohort_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohorts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropbox_connected: Option<bool>,
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evernote_connected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_connected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instapaper_connected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logins: Option<Vec<Login>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pocket_connected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_connected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_live_connected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_press_connected: Option<bool>,
    #[serde(flatten)]
    pub unmapped_fields: UnmappedFields,
}

/// Response from [`ProfileService::list`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileListResponse {
    pub profile: Profile,
}

impl ProfileService {
    pub(crate) fn new(transport: Transport) -> Self {
        ProfileService { transport }
    }

    /// Returns the profile of the user.
    pub fn list(&self) -> Result<(ProfileListResponse, HttpResponse)> {
        let request = self.transport.get(&["profile"])?;
        let (profile, response) = self.transport.receive::<Profile>(request)?;

        Ok((ProfileListResponse { profile }, response))
    }

    /// Updates the profile of the user.
    pub fn update(&self, profile: &Profile) -> Result<HttpResponse> {
        let request = self.transport.post(&["profile"])?.json(profile);

        self.transport.execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_decode() {
        let wire = json!({
            "id": "abcd-efgh",
            "email": "alice@example.com",
            "fullName": "Alice",
            "created": 1367539068016i64,
            "locale": "en-US",
            "logins": [
                {"provider": "Google", "providerId": "123", "verified": true}
            ],
            "twitterConnected": false,
            "subscriptionLevel": "pro"
        });

        let profile: Profile = serde_json::from_value(wire).unwrap();
        assert_eq!(profile.email.as_deref(), Some("alice@example.com"));
        assert_eq!(profile.created.unwrap().unix(), 1367539068);
        assert_eq!(
            profile.logins.unwrap()[0].provider.as_deref(),
            Some("Google")
        );
        assert!(profile.unmapped_fields.contains_key("subscriptionLevel"));
    }
}
