use crate::error::Result;
use crate::streams::Stream;
use crate::time::Time;
use crate::transport::{HttpResponse, Transport};
use serde::{Deserialize, Serialize};

/// MixService provides methods for fetching the most engaging content of a
/// stream.
pub struct MixService {
    transport: Transport,
}

/// Optional parameters for [`MixService::most_engaging`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixMostEngagingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backfill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newer_than: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_only: Option<bool>,
}

/// Response from [`MixService::most_engaging`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixMostEngagingResponse {
    pub stream: Stream,
}

impl MixService {
    pub(crate) fn new(transport: Transport) -> Self {
        MixService { transport }
    }

    /// Returns the most engaging content in a stream.
    pub fn most_engaging(
        &self,
        stream_id: &str,
        params: Option<&MixMostEngagingParams>,
    ) -> Result<(MixMostEngagingResponse, HttpResponse)> {
        let mut request = self.transport.get(&["mixes", stream_id, "contents"])?;
        if let Some(params) = params {
            request = request.query(params);
        }

        let (stream, response) = self.transport.receive::<Stream>(request)?;

        Ok((MixMostEngagingResponse { stream }, response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_encode() {
        let params = MixMostEngagingParams {
            count: Some(5),
            hours: Some(12),
            unread_only: Some(true),
            ..Default::default()
        };
        let encoded = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(encoded, "count=5&hours=12&unreadOnly=true");
    }
}
