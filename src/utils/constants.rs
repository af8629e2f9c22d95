/// Session-storage key holding the login marker.
pub const STORAGE_KEY_SESSION: &str = "leadgen_session";
pub const SESSION_MARKER_VALUE: &str = "1";

/// Path the OAuth provider redirects back to after authorization.
pub const OAUTH_RETURN_PATH: &str = "/dashboard";

pub const APP_TITLE: &str = "LeadGen Bot";

pub const CAMPAIGN_IN_PROGRESS: &str =
    "Starting campaign... This may take a long time. Check the terminal for progress.";
pub const ERROR_PREFIX: &str = "Error: ";
