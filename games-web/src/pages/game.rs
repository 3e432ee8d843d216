use games_core::{ActiveGame, Navigate};
use yew::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::providers::{use_game, use_navigate, use_user};

#[derive(Properties, PartialEq, Clone)]
pub struct GamePageProps {
    pub game_type: AttrValue,
    pub game_id: AttrValue,
}

/// Landing page for `/{game_type}/{game_id}`. Binds the game context for as
/// long as it is mounted. A lower-case ID is sent on to its canonical path.
#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let canonical = ActiveGame::canonical_path(&props.game_type, &props.game_id);
    let route = ActiveGame::from_route(&props.game_type, &props.game_id);
    let games = use_game();
    let user = use_user();
    let navigator = use_navigate();

    {
        let navigator = navigator.clone();
        use_effect_with(canonical.clone(), move |canonical| {
            if let Some(path) = canonical {
                log::debug!("redirecting to canonical game path {path}");
                navigator.push(path);
            }
        });
    }

    {
        let active = route.as_ref().ok().cloned();
        use_effect_with(active, move |active| {
            let bound = active.clone().zip(games);
            if let Some((game, ctx)) = &bound {
                ctx.enter(game.clone());
            }
            move || {
                if let Some((game, ctx)) = bound {
                    ctx.leave(&game.id);
                }
            }
        });
    }

    let back = Callback::from(move |_: MouseEvent| navigator.push("/"));
    let player = user.map(|ctx| ctx.session().label().to_owned());

    let body = match (&route, &canonical) {
        (_, Some(path)) => html! {
            <p class="text-sm" role="status">{ format!("Opening {path}…") }</p>
        },
        (Ok(game), None) => html! {
            <div class="game-panel" data-game-type={game.game_type.clone()} data-game-id={game.id.to_string()}>
                <h1 class="text-2xl font-bold">{ format!("{} game {}", game.game_type, game.id) }</h1>
                { player.map(|name| html! { <p class="text-sm">{ format!("Playing as {name}") }</p> }).unwrap_or_default() }
            </div>
        },
        (Err(err), None) => {
            log::warn!("{err}");
            html! {
                <div class="alert alert-error" role="alert">{ "This game link is not valid." }</div>
            }
        }
    };

    html! {
        <>
            <SiteHeader />
            <main class="container mx-auto max-w-md p-4 flex flex-col gap-4">
                { body }
                <button type="button" class="btn btn-ghost" onclick={back}>{ "Back to the lobby" }</button>
            </main>
        </>
    }
}
