use crate::components::daisy_ui::foundation as f;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValidationState {
    Success,
    Error,
}

/// Wraps one form field and renders its feedback line underneath.
#[derive(f::Properties, PartialEq, Clone)]
pub struct ValidatorProps {
    #[prop_or_default]
    pub state: Option<ValidationState>,
    #[prop_or_default]
    pub message: Option<f::AttrValue>,
    /// Element id for the message, referenced by the field's `aria-describedby`.
    #[prop_or_default]
    pub message_id: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Validator)]
pub fn validator(props: &ValidatorProps) -> f::Html {
    let mut class = f::class_list(&["validator", "form-control"], &props.class);
    if let Some(state) = props.state {
        class.push(match state {
            ValidationState::Success => "input-success",
            ValidationState::Error => "input-error",
        });
    }
    f::html! {
        <div class={class}>
            { for props.children.iter() }
            { props.message.as_ref().map(|msg| {
                let (msg_class, role) = match props.state {
                    Some(ValidationState::Success) => ("validator-hint text-success", None),
                    Some(ValidationState::Error) => ("validator-hint text-error", Some("alert")),
                    None => ("validator-hint", None),
                };
                f::html! {
                    <p id={f::attr_value(&props.message_id)} class={msg_class} role={role}>
                        { msg.clone() }
                    </p>
                }
            }).unwrap_or_default() }
        </div>
    }
}
