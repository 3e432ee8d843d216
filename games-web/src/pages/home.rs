use yew::prelude::*;

use crate::components::daisy_ui::Card;
use crate::components::join_game_form::JoinGameForm;
use crate::components::player_name_form::PlayerNameForm;
use crate::components::site_header::SiteHeader;
use crate::game::LookupHandle;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct HomePageProps {
    /// Forwarded to the join form; the configured games API when unset.
    #[prop_or_default]
    pub lookup: Option<LookupHandle>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    html! {
        <>
            <SiteHeader />
            <main class="container mx-auto max-w-md p-4 flex flex-col gap-4">
                <PlayerNameForm />
                <Card title="Join a game" heading_id="join-heading">
                    <JoinGameForm lookup={props.lookup.clone()} />
                </Card>
            </main>
        </>
    }
}
