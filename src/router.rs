use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Dashboard, Instructions};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/docs")]
    Docs,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Dashboard | Route::NotFound => html! { <Dashboard /> },
        Route::Docs => html! { <Instructions /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_paths_are_recognized() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::recognize("/docs"), Some(Route::Docs));
    }

    #[test]
    fn nav_links_point_at_expected_paths() {
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
        assert_eq!(Route::Docs.to_path(), "/docs");
    }
}
