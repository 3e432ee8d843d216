//! Game scope: the game the current page is bound to, if any.

use std::rc::Rc;

use games_core::{ActiveGame, GameId, GameSession};
use yew::prelude::*;

#[derive(Clone, PartialEq, Default, Debug)]
pub struct GameSessionState(GameSession);

#[derive(Clone, Debug)]
pub enum GameAction {
    Enter(ActiveGame),
    Leave(GameId),
}

impl Reducible for GameSessionState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let session = self.0.clone();
        let next = match action {
            GameAction::Enter(game) => session.enter(game),
            GameAction::Leave(id) => session.leave(&id),
        };
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct GameContext {
    session: UseReducerHandle<GameSessionState>,
}

impl GameContext {
    #[must_use]
    pub fn current(&self) -> Option<ActiveGame> {
        self.session.0.current().cloned()
    }

    pub fn enter(&self, game: ActiveGame) {
        log::debug!("entering {} game {}", game.game_type, game.id);
        self.session.dispatch(GameAction::Enter(game));
    }

    pub fn leave(&self, id: &GameId) {
        log::debug!("leaving game {id}");
        self.session.dispatch(GameAction::Leave(id.clone()));
    }
}

#[derive(Properties, PartialEq)]
pub struct GameProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(GameProvider)]
pub fn game_provider(props: &GameProviderProps) -> Html {
    let session = use_reducer(GameSessionState::default);
    let context = GameContext { session };
    html! {
        <ContextProvider<GameContext> context={context}>
            { props.children.clone() }
        </ContextProvider<GameContext>>
    }
}

#[hook]
pub fn use_game() -> Option<GameContext> {
    use_context::<GameContext>()
}
