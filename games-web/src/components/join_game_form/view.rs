use games_core::{GAME_ID_FIELD, JoinForm};
use web_sys::SubmitEvent;
use yew::prelude::*;

use super::{
    ERROR_ID, INPUT_HINT, INPUT_ID, INPUT_LABEL, INPUT_PLACEHOLDER, LOADING_LABEL, SUBMIT_LABEL,
};
use crate::components::daisy_ui::{
    Button, DaisyColor, Input, Label, Loading, ValidationState, Validator,
};

pub fn render_join_form(
    form: &JoinForm,
    input_ref: &NodeRef,
    onsubmit: Callback<SubmitEvent>,
) -> Html {
    let loading = form.is_loading();
    let error = form.game_id_error().map(|msg| AttrValue::from(msg.to_owned()));
    let invalid = error.is_some();
    let state = invalid.then_some(ValidationState::Error);

    html! {
      <form class="join-game-form flex flex-col gap-3" aria-busy={loading.to_string()} {onsubmit}>
        <Validator {state} message={error} message_id={ERROR_ID}>
          <Label target={INPUT_ID} text={INPUT_LABEL} hint={INPUT_HINT} />
          <Input
            id={INPUT_ID}
            name={GAME_ID_FIELD}
            placeholder={INPUT_PLACEHOLDER}
            autocomplete={"off"}
            disabled={loading}
            {invalid}
            described_by={ERROR_ID}
            node_ref={input_ref.clone()}
          />
        </Validator>
        <Button label={SUBMIT_LABEL} submit=true variant={DaisyColor::Primary} {loading} />
        if loading {
          <Loading label={LOADING_LABEL} />
        }
      </form>
    }
}
