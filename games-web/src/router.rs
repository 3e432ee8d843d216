use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::game::GamePage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/:game_type/:game_id")]
    Game { game_type: String, game_id: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Resolve an application path, falling back to [`Route::NotFound`].
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::NotFound)
    }
}

#[allow(clippy::needless_pass_by_value)] // `Switch` hands routes over by value.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Game { game_type, game_id } => html! {
            <GamePage game_type={AttrValue::from(game_type)} game_id={AttrValue::from(game_id)} />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
