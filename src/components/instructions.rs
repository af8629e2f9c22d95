use yew::prelude::*;
use yew_router::prelude::*;

use super::MarkdownView;
use crate::hooks::use_instructions;
use crate::router::Route;

#[function_component(Instructions)]
pub fn instructions() -> Html {
    let document = use_instructions();

    html! {
        <div class="instructions-container">
            <Link<Route> to={Route::Dashboard} classes="back-link">{"← Back to Dashboard"}</Link<Route>>
            if let Some(markdown) = (*document).clone() {
                <MarkdownView content={markdown} />
            } else {
                <div class="markdown-content" />
            }
        </div>
    }
}
