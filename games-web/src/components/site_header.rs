use yew::prelude::*;

use crate::components::daisy_ui::{Navbar, ThemeController};
use crate::providers::{theme::theme_options, use_navigate, use_theme, use_user};
use games_core::{GUEST_LABEL, Navigate};

pub const BRAND: &str = "Games";

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let navigator = use_navigate();
    let theme = use_theme();
    let user = use_user();

    let go_home = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigator.push("/");
    });

    let brand = html! {
        <a class="btn btn-ghost text-xl" href={crate::paths::asset_path("/")} onclick={go_home}>
            { BRAND }
        </a>
    };

    let user_label = user
        .as_ref()
        .map(|ctx| ctx.session().label().to_owned())
        .unwrap_or_else(|| GUEST_LABEL.to_owned());
    let sign_out = user
        .filter(|ctx| ctx.session().display_name().is_some())
        .map(|ctx| {
            let onclick = Callback::from(move |_: MouseEvent| ctx.sign_out());
            html! { <button type="button" class="btn btn-ghost btn-sm" {onclick}>{ "Sign out" }</button> }
        });

    let controls = html! {
        <>
            <span class="user-label text-sm" data-testid="user-label">{ user_label }</span>
            { sign_out.unwrap_or_default() }
            { theme.map(|ctx| {
                let current = ctx.theme();
                let on_pick = Callback::from(move |next: AttrValue| ctx.set_theme(next));
                html! { <ThemeController themes={theme_options()} {current} {on_pick} /> }
            }).unwrap_or_default() }
        </>
    };

    html! { <Navbar {brand} {controls} /> }
}
