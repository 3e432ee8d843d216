//! Join-game form: one game ID field and a submit button.
//!
//! Submitting shape-checks the ID locally, looks the game up, and on success
//! navigates to `/{game_type}/{ID}`. Field errors replace each other on every
//! attempt; the controls are disabled while the lookup is in flight.

mod handlers;
mod view;

#[cfg(test)]
mod tests;

use std::ops::Deref;
use std::rc::Rc;

use games_core::{JoinEvent, JoinForm};
use yew::prelude::*;

use crate::game::LookupHandle;
use crate::providers::{use_navigate, use_toasts};

pub use view::render_join_form;

pub const INPUT_ID: &str = "game-id";
pub const ERROR_ID: &str = "game-id-error";
pub const INPUT_LABEL: &str = "GameID";
pub const INPUT_HINT: &str = "5 letters";
pub const INPUT_PLACEHOLDER: &str = "Enter the 5 character GameID";
pub const SUBMIT_LABEL: &str = "Join a game!";
pub const LOADING_LABEL: &str = "Looking up game…";
pub const SERVER_UNREACHABLE: &str = "Could not reach the games server";
pub const SERVER_CONFUSED: &str = "The games server sent an unexpected response";

/// Yew-side holder of the join state machine.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct JoinFormState(JoinForm);

impl Deref for JoinFormState {
    type Target = JoinForm;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for JoinFormState {
    type Action = JoinEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.clone().apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    /// Metadata source; the configured games API when unset.
    #[prop_or_default]
    pub lookup: Option<LookupHandle>,
}

#[function_component(JoinGameForm)]
pub fn join_game_form(p: &Props) -> Html {
    let form = use_reducer(JoinFormState::default);
    let in_flight = use_mut_ref(|| false);
    let input_ref = use_node_ref();
    let navigator = use_navigate();
    let toasts = use_toasts();
    let lookup = p.lookup.clone().unwrap_or_default();

    let onsubmit = handlers::submit_handler(handlers::SubmitContext {
        form: form.clone(),
        in_flight: handlers::InFlight::new(in_flight),
        input_ref: input_ref.clone(),
        lookup,
        navigator,
        toasts,
    });

    render_join_form(&form, &input_ref, onsubmit)
}
