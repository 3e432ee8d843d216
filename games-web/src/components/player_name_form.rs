//! Display-name form. Signs the browsing user in under the chosen name and
//! disappears once a name is set; the header offers sign-out.

use games_core::{MAX_NAME_LEN, SessionError};
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::components::daisy_ui::{
    Button, Card, DaisyColor, Input, Label, ValidationState, Validator,
};
use crate::providers::use_user;

pub const NAME_INPUT_ID: &str = "player-name";
pub const NAME_ERROR_ID: &str = "player-name-error";
pub const NAME_LABEL: &str = "Your name";
pub const NAME_PLACEHOLDER: &str = "Shown to other players";
pub const NAME_SUBMIT_LABEL: &str = "Set name";

#[must_use]
pub fn name_error_message(err: &SessionError) -> String {
    match err {
        SessionError::NameTooLong => {
            format!("Names can be at most {MAX_NAME_LEN} characters.")
        }
        SessionError::EmptyName | SessionError::InvalidGameRoute { .. } => {
            "Enter a name first.".to_owned()
        }
    }
}

pub fn render_name_form(
    error: Option<AttrValue>,
    input_ref: &NodeRef,
    onsubmit: Callback<SubmitEvent>,
) -> Html {
    let invalid = error.is_some();
    let state = invalid.then_some(ValidationState::Error);
    html! {
        <Card title="Choose a name" heading_id="name-heading">
            <form class="player-name-form flex flex-col gap-3" {onsubmit}>
                <Validator {state} message={error} message_id={NAME_ERROR_ID}>
                    <Label target={NAME_INPUT_ID} text={NAME_LABEL} />
                    <Input
                        id={NAME_INPUT_ID}
                        name="display_name"
                        placeholder={NAME_PLACEHOLDER}
                        autocomplete={"nickname"}
                        {invalid}
                        described_by={NAME_ERROR_ID}
                        node_ref={input_ref.clone()}
                    />
                </Validator>
                <Button label={NAME_SUBMIT_LABEL} submit=true variant={DaisyColor::Neutral} />
            </form>
        </Card>
    }
}

#[function_component(PlayerNameForm)]
pub fn player_name_form() -> Html {
    let user = use_user();
    let input_ref = use_node_ref();
    let error = use_state(|| None::<AttrValue>);

    let Some(user) = user.filter(|ctx| ctx.session().display_name().is_none()) else {
        return Html::default();
    };

    let onsubmit = {
        let input_ref = input_ref.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            match user.sign_in(&name) {
                Ok(()) => error.set(None),
                Err(err) => {
                    log::debug!("display name rejected: {err}");
                    error.set(Some(name_error_message(&err).into()));
                }
            }
        })
    };

    render_name_form((*error).clone(), &input_ref, onsubmit)
}
