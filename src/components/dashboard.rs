use yew::prelude::*;

use super::{CampaignForm, LoginScreen};
use crate::hooks::use_session;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_session();

    if session.state.logged_in {
        return html! { <CampaignForm /> };
    }

    html! {
        <LoginScreen
            on_login={session.login.clone()}
            redirecting={session.state.redirecting}
            error={session.state.login_error.clone()}
        />
    }
}
