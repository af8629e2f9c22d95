use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<()>,
    #[prop_or_default]
    pub redirecting: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let button_text = if props.redirecting {
        "Redirecting to Google..."
    } else {
        "Login with Google"
    };

    html! {
        <div class="dashboard login-prompt">
            <h2>{"Welcome"}</h2>
            <p>{"Log in with the Google account that owns the campaign sheets to continue."}</p>
            <button
                type="button"
                class="btn-login"
                disabled={props.redirecting}
                onclick={props.on_login.reform(|_| ())}
            >
                {button_text}
            </button>
            if let Some(error) = &props.error {
                <p class="status-message">{error.clone()}</p>
            }
        </div>
    }
}
