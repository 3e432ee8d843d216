//! User scope: who is browsing. Anonymous until a display name is chosen.

use games_core::{SessionError, UserSession};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct UserContext {
    session: UseStateHandle<UserSession>,
}

impl UserContext {
    #[must_use]
    pub fn session(&self) -> UserSession {
        (*self.session).clone()
    }

    /// # Errors
    ///
    /// Returns an error if `name` is not an acceptable display name; the
    /// current session is left untouched.
    pub fn sign_in(&self, name: &str) -> Result<(), SessionError> {
        let next = UserSession::signed_in(name)?;
        log::info!("signed in as {}", next.label());
        self.session.set(next);
        Ok(())
    }

    pub fn sign_out(&self) {
        self.session.set(UserSession::anonymous());
    }
}

#[derive(Properties, PartialEq)]
pub struct UserProviderProps {
    #[prop_or_default]
    pub initial: Option<UserSession>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(UserProvider)]
pub fn user_provider(props: &UserProviderProps) -> Html {
    let initial = props.initial.clone().unwrap_or_default();
    let session = use_state(move || initial);
    let context = UserContext { session };
    html! {
        <ContextProvider<UserContext> context={context}>
            { props.children.clone() }
        </ContextProvider<UserContext>>
    }
}

#[hook]
pub fn use_user() -> Option<UserContext> {
    use_context::<UserContext>()
}
