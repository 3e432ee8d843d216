//! Application root: router, context providers, page switch.

#[cfg(target_arch = "wasm32")]
use crate::providers::AppProviders;
#[cfg(target_arch = "wasm32")]
use crate::router::{Route, switch};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppShell />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppShell)]
fn app_shell() -> Html {
    let navigator = use_navigator();
    let navigate = router_callback(navigator);
    html! {
        <AppProviders {navigate}>
            <Switch<Route> render={switch} />
        </AppProviders>
    }
}

/// Turn application paths into router pushes.
#[cfg(target_arch = "wasm32")]
fn router_callback(navigator: Option<Navigator>) -> Callback<AttrValue> {
    Callback::from(move |path: AttrValue| {
        let Some(navigator) = navigator.as_ref() else {
            log::warn!("no router mounted; dropping navigation to {path}");
            return;
        };
        let route = Route::for_path(&path);
        if route == Route::NotFound {
            log::warn!("navigation to unknown path {path}");
        }
        navigator.push(&route);
    })
}
