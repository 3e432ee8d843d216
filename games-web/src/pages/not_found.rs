use yew::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::providers::use_navigate;
use games_core::Navigate;

/// Shown for any path the router does not know.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let navigator = use_navigate();
    let go_home = Callback::from(move |_: MouseEvent| navigator.push("/"));

    html! {
        <>
            <SiteHeader />
            <section class="hero min-h-[50vh] not-found" aria-live="assertive">
                <div class="hero-content text-center flex-col">
                    <h1 class="text-3xl font-bold">{ "Page not found" }</h1>
                    <p>{ "There is nothing at this address." }</p>
                    <button type="button" class="btn btn-primary" onclick={go_home}>
                        { "Back to the lobby" }
                    </button>
                </div>
            </section>
        </>
    }
}
