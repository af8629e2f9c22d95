// ============================================================================
// USE SESSION HOOK
// ============================================================================
// Login flag for the dashboard: session marker at mount, OAuth redirect,
// and the "back on /dashboard" shortcut.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::{is_oauth_return, SessionAction, SessionState};
use crate::services::{redirect_to, ApiClient};
use crate::utils::{has_session_marker, save_session_marker};

pub struct UseSessionHandle {
    pub state: UseReducerHandle<SessionState>,
    pub login: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let state = use_reducer(|| {
        let restored = SessionState::restore(has_session_marker());
        if restored.logged_in {
            log::info!("✅ Session marker found, skipping login");
        }
        restored
    });

    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    // The OAuth provider lands the user back on /dashboard
    {
        let dispatcher = state.dispatcher();
        let logged_in = state.logged_in;
        use_effect_with((path, logged_in), move |(path, logged_in)| {
            if !*logged_in && is_oauth_return(path) {
                log::info!("🔓 Returned on {}, treating user as logged in", path);
                if let Err(e) = save_session_marker() {
                    log::warn!("⚠️ {}", e);
                }
                dispatcher.dispatch(SessionAction::Authenticated);
            }
            || ()
        });
    }

    let login = {
        let dispatcher = state.dispatcher();
        let client = ApiClient::new();
        Callback::from(move |_| {
            let dispatcher = dispatcher.clone();
            let client = client.clone();
            dispatcher.dispatch(SessionAction::LoginStarted);

            wasm_bindgen_futures::spawn_local(async move {
                let result = match client.login().await {
                    Ok(response) => {
                        log::info!("↪️ Redirecting to authorization URL");
                        redirect_to(&response.authorization_url)
                    }
                    Err(e) => Err(e),
                };

                match result {
                    Ok(()) => dispatcher.dispatch(SessionAction::Redirected),
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        dispatcher.dispatch(SessionAction::LoginFailed(e.status_text()));
                    }
                }
            });
        })
    };

    UseSessionHandle { state, login }
}
