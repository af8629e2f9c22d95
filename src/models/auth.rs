use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::prelude::Reducible;

use crate::utils::OAUTH_RETURN_PATH;

/// Body of `GET /api/login`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub authorization_url: String,
}

/// Login state owned by the dashboard.
///
/// `logged_in` only ever goes from `false` to `true` within a page lifetime;
/// no action resets it.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SessionState {
    pub logged_in: bool,
    /// Set while the login request is in flight, before the browser leaves the page.
    pub redirecting: bool,
    pub login_error: Option<String>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum SessionAction {
    /// Session marker found, or the OAuth provider sent us back.
    Authenticated,
    LoginStarted,
    /// Navigation to the provider was handed to the browser. The page may be
    /// restored from the back/forward cache, so it must not stay busy.
    Redirected,
    LoginFailed(String),
}

impl SessionState {
    pub fn restore(has_marker: bool) -> Self {
        Self {
            logged_in: has_marker,
            ..Self::default()
        }
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Authenticated => Rc::new(Self {
                logged_in: true,
                redirecting: false,
                login_error: None,
            }),
            SessionAction::LoginStarted => Rc::new(Self {
                redirecting: true,
                login_error: None,
                ..(*self).clone()
            }),
            SessionAction::Redirected => Rc::new(Self {
                redirecting: false,
                ..(*self).clone()
            }),
            SessionAction::LoginFailed(message) => Rc::new(Self {
                redirecting: false,
                login_error: Some(message),
                ..(*self).clone()
            }),
        }
    }
}

/// The OAuth provider redirects back to `/dashboard` once the user granted
/// access. Landing on a path containing it is taken as "logged in"; no token
/// is checked here, the backend keeps the credentials in its own session.
pub fn is_oauth_return(path: &str) -> bool {
    path.contains(OAUTH_RETURN_PATH)
}
