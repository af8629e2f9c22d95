use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::prelude::Reducible;

use crate::services::ApiError;
use crate::utils::CAMPAIGN_IN_PROGRESS;

/// Body of `POST /api/start-multi-campaign`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRequest {
    pub master_sheet_id: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CampaignResponse {
    pub status: String,
}

/// Error payload the backend sends with non-success statuses.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct CampaignErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Text shown under the campaign form once a request settles.
pub struct CampaignStatus;

impl CampaignStatus {
    /// Server `status` verbatim on success, `"Error: …"` otherwise.
    pub fn from_result(result: Result<CampaignResponse, ApiError>) -> String {
        match result {
            Ok(response) => {
                log::info!("✅ Campaign accepted: {}", response.status);
                response.status
            }
            Err(e) => {
                log::error!("❌ Campaign request failed: {}", e);
                e.status_text()
            }
        }
    }
}

/// Campaign form state.
///
/// Every submission takes a ticket; only the outcome carrying the latest
/// ticket is displayed, so a slow earlier response can never overwrite the
/// status of a newer submission.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CampaignState {
    pub master_sheet_id: String,
    pub status: String,
    pub latest_ticket: u64,
    pub in_flight: bool,
}

impl CampaignState {
    /// Classes for the status line; the in-progress notice is styled as busy.
    pub fn status_class(&self) -> &'static str {
        if self.in_flight {
            "status-message in-progress"
        } else {
            "status-message"
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum CampaignAction {
    Edit(String),
    Submitted { ticket: u64 },
    Settled { ticket: u64, status: String },
}

impl Reducible for CampaignState {
    type Action = CampaignAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CampaignAction::Edit(master_sheet_id) => Rc::new(Self {
                master_sheet_id,
                ..(*self).clone()
            }),
            CampaignAction::Submitted { ticket } => Rc::new(Self {
                status: CAMPAIGN_IN_PROGRESS.to_string(),
                latest_ticket: ticket,
                in_flight: true,
                ..(*self).clone()
            }),
            CampaignAction::Settled { ticket, status } => {
                if ticket != self.latest_ticket {
                    log::info!("⏭️ Discarding stale campaign response (ticket {} superseded by {})", ticket, self.latest_ticket);
                    return self;
                }
                Rc::new(Self {
                    status,
                    in_flight: false,
                    ..(*self).clone()
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn submitted(id: &str, ticket: u64) -> Rc<CampaignState> {
        Rc::new(CampaignState::default())
            .reduce(CampaignAction::Edit(id.to_string()))
            .reduce(CampaignAction::Submitted { ticket })
    }

    #[test]
    fn request_uses_camel_case_field() {
        let body = serde_json::to_string(&CampaignRequest {
            master_sheet_id: "1AbcDefSheetId".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"masterSheetId":"1AbcDefSheetId"}"#);
    }

    #[test]
    fn error_body_field_is_optional() {
        let body: CampaignErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);

        let body: CampaignErrorBody = serde_json::from_str(r#"{"error": "Sheet not found"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Sheet not found"));
    }

    #[test]
    fn status_from_accepted_campaign() {
        let status = CampaignStatus::from_result(Ok(CampaignResponse {
            status: "Campaign started for 12 accounts".to_string(),
        }));
        assert_eq!(status, "Campaign started for 12 accounts");
    }

    #[test]
    fn status_from_server_error_body() {
        let status = CampaignStatus::from_result(Err(ApiError::Http {
            status: 404,
            message: Some("Sheet not found".to_string()),
        }));
        assert_eq!(status, "Error: Sheet not found");
    }

    #[test]
    fn status_from_failure_without_body() {
        let status = CampaignStatus::from_result(Err(ApiError::Http {
            status: 502,
            message: None,
        }));
        assert_eq!(status, "Error: Request failed with status code 502");

        let status = CampaignStatus::from_result(Err(ApiError::Network("TypeError: Failed to fetch".to_string())));
        assert_eq!(status, "Error: TypeError: Failed to fetch");
    }

    #[test]
    fn settled_status_replaces_in_progress_notice() {
        let status = CampaignStatus::from_result(Err(ApiError::Http {
            status: 400,
            message: Some("Master Sheet ID is required".to_string()),
        }));
        let state = submitted("x", 1).reduce(CampaignAction::Settled { ticket: 1, status });
        assert_eq!(state.status, "Error: Master Sheet ID is required");
        assert!(!state.in_flight);
    }

    #[test]
    fn submit_shows_in_progress_notice() {
        let state = submitted("1AbcDefSheetId", 1);
        assert_eq!(state.status, CAMPAIGN_IN_PROGRESS);
        assert!(state.in_flight);
        assert_eq!(state.master_sheet_id, "1AbcDefSheetId");
    }

    #[test]
    fn settle_replaces_status_wholesale() {
        let state = submitted("1AbcDefSheetId", 1).reduce(CampaignAction::Settled {
            ticket: 1,
            status: "Campaign started for 12 accounts".to_string(),
        });
        assert_eq!(state.status, "Campaign started for 12 accounts");
        assert!(!state.in_flight);
    }

    #[test]
    fn stale_response_is_discarded() {
        let state = submitted("first", 1)
            .reduce(CampaignAction::Edit("second".to_string()))
            .reduce(CampaignAction::Submitted { ticket: 2 })
            .reduce(CampaignAction::Settled {
                ticket: 1,
                status: "Error: Sheet not found".to_string(),
            });
        assert_eq!(state.status, CAMPAIGN_IN_PROGRESS);
        assert!(state.in_flight);

        let state = state.reduce(CampaignAction::Settled {
            ticket: 2,
            status: "Campaign started. Check terminal for progress.".to_string(),
        });
        assert_eq!(state.status, "Campaign started. Check terminal for progress.");
        assert!(!state.in_flight);
    }

    #[test]
    fn status_line_is_busy_only_while_in_flight() {
        let state = submitted("a", 1);
        assert_eq!(state.status_class(), "status-message in-progress");

        let state = state.reduce(CampaignAction::Settled {
            ticket: 1,
            status: "done".to_string(),
        });
        assert_eq!(state.status_class(), "status-message");
    }

    #[test]
    fn editing_keeps_last_status() {
        let state = submitted("a", 1)
            .reduce(CampaignAction::Settled {
                ticket: 1,
                status: "done".to_string(),
            })
            .reduce(CampaignAction::Edit("b".to_string()));
        assert_eq!(state.status, "done");
        assert_eq!(state.master_sheet_id, "b");
    }
}
