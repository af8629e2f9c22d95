// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No UI state lives here. Every call resolves to Result<_, ApiError>.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::config::{AppConfig, CONFIG};
use crate::models::{CampaignErrorBody, CampaignRequest, CampaignResponse, LoginResponse};
use crate::services::ApiError;

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    login_url: String,
    campaign_url: String,
    instructions_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(&CONFIG)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            login_url: config.endpoint("login"),
            campaign_url: config.endpoint("start-multi-campaign"),
            instructions_url: config.instructions_url.clone(),
        }
    }

    /// Asks the backend for the OAuth authorization URL.
    pub async fn login(&self) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Requesting authorization URL from {}", self.login_url);

        let response = Request::get(&self.login_url)
            .credentials(RequestCredentials::Include)
            .send()
            .await?;

        read_json(response).await
    }

    /// Starts the multi-account campaign seeded by `master_sheet_id`.
    /// The identifier is sent verbatim.
    pub async fn start_multi_campaign(&self, master_sheet_id: &str) -> Result<CampaignResponse, ApiError> {
        let body = CampaignRequest {
            master_sheet_id: master_sheet_id.to_string(),
        };

        log::info!("🚀 Starting campaign for master sheet {}", master_sheet_id);

        let response = Request::post(&self.campaign_url)
            .credentials(RequestCredentials::Include)
            .json(&body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await?;

        read_json(response).await
    }

    /// Downloads the bundled instructions document as raw Markdown.
    pub async fn fetch_instructions(&self) -> Result<String, ApiError> {
        let response = Request::get(&self.instructions_url).send().await?;

        let status = response.status();
        let ok = response.ok();
        let text = response.text().await?;
        if !ok {
            return Err(ApiError::Http { status, message: None });
        }
        Ok(text)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends the browser to `url`. The current page is torn down on success.
pub fn redirect_to(url: &str) -> Result<(), ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Navigation("no window".to_string()))?;
    window
        .location()
        .set_href(url)
        .map_err(|e| ApiError::Navigation(format!("{:?}", e)))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await?;
    decode_body(status, ok, &body)
}

fn decode_body<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, ApiError> {
    if !ok {
        let message = serde_json::from_str::<CampaignErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());
        log::error!("❌ HTTP {}: {:?}", status, message);
        return Err(ApiError::Http { status, message });
    }

    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn endpoints_come_from_config() {
        let config = AppConfig {
            api_url: "https://leadgen.example.com/api".to_string(),
            ..AppConfig::default()
        };
        let client = ApiClient::with_config(&config);
        assert_eq!(client.login_url, "https://leadgen.example.com/api/login");
        assert_eq!(client.campaign_url, "https://leadgen.example.com/api/start-multi-campaign");
        assert_eq!(client.instructions_url, "/INSTRUCTIONS.md");
    }

    #[test]
    fn success_body_decodes_status() {
        let response: CampaignResponse =
            decode_body(200, true, r#"{"status": "Campaign started for 12 accounts"}"#).unwrap();
        assert_eq!(response.status, "Campaign started for 12 accounts");
    }

    #[test]
    fn failure_body_carries_server_error() {
        let err = decode_body::<CampaignResponse>(400, false, r#"{"error": "Sheet not found"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: Some("Sheet not found".to_string()),
            }
        );
        assert_eq!(err.status_text(), "Error: Sheet not found");
    }

    #[test]
    fn failure_without_parseable_body() {
        let err = decode_body::<CampaignResponse>(502, false, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.status_text(), "Error: Request failed with status code 502");

        let err = decode_body::<CampaignResponse>(500, false, r#"{"error": ""}"#).unwrap_err();
        assert_eq!(err.status_text(), "Error: Request failed with status code 500");
    }

    #[test]
    fn success_with_wrong_shape_is_decode_error() {
        let err = decode_body::<CampaignResponse>(200, true, r#"{"ok": true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.status_text().starts_with("Error: Parse error: "));
    }
}
