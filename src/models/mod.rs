pub mod auth;
pub mod campaign;

pub use auth::{is_oauth_return, LoginResponse, SessionAction, SessionState};
pub use campaign::{
    CampaignAction, CampaignErrorBody, CampaignRequest, CampaignResponse, CampaignState, CampaignStatus,
};
