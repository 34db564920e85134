use crate::error::Result;
use crate::transport::{HttpResponse, Transport};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// PreferenceService provides methods for managing application preferences.
/// Preferences are opaque key/value pairs shared between Feedly clients.
pub struct PreferenceService {
    transport: Transport,
}

/// Response from [`PreferenceService::list`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceListResponse {
    pub preferences: HashMap<String, String>,
}

impl PreferenceService {
    pub(crate) fn new(transport: Transport) -> Self {
        PreferenceService { transport }
    }

    /// Returns the preferences of the user.
    pub fn list(&self) -> Result<(PreferenceListResponse, HttpResponse)> {
        let request = self.transport.get(&["preferences"])?;
        let (preferences, response) = self
            .transport
            .receive::<HashMap<String, String>>(request)?;

        Ok((PreferenceListResponse { preferences }, response))
    }

    /// Updates the preferences of the user. Set a key to the value
    /// "==DELETE==" to delete it.
    pub fn update(&self, preferences: &HashMap<String, String>) -> Result<HttpResponse> {
        let request = self.transport.post(&["preferences"])?.json(preferences);

        self.transport.execute(request)
    }
}
