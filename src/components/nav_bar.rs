use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::utils::APP_TITLE;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    html! {
        <nav class="top-nav">
            <h1>{APP_TITLE}</h1>
            <div>
                <Link<Route> to={Route::Dashboard} classes="nav-link">{"Dashboard"}</Link<Route>>
                <Link<Route> to={Route::Docs} classes="nav-link">{"Docs"}</Link<Route>>
            </div>
        </nav>
    }
}
