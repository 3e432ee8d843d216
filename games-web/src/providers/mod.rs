//! Application-wide context scopes.
//!
//! [`AppProviders`] nests them in a fixed order, outermost first:
//! theme, toast, user, game. Each scope lives as long as the provider is
//! mounted, which for the application root is the page lifetime.

pub mod game;
pub mod theme;
pub mod toast;
pub mod user;

pub use game::{GameContext, GameProvider, use_game};
pub use theme::{NavigateCallback, ThemeContext, ThemeProvider, use_navigate, use_theme};
pub use toast::{ToastContext, ToastLevel, ToastProvider, use_toasts};
pub use user::{UserContext, UserProvider, use_user};

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProvidersProps {
    /// Router hook; receives every path requested through [`use_navigate`].
    #[prop_or_default]
    pub navigate: Callback<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppProviders)]
pub fn app_providers(props: &AppProvidersProps) -> Html {
    html! {
        <ThemeProvider navigate={props.navigate.clone()}>
            <ToastProvider>
                <UserProvider>
                    <GameProvider>
                        { props.children.clone() }
                    </GameProvider>
                </UserProvider>
            </ToastProvider>
        </ThemeProvider>
    }
}
