use crate::components::daisy_ui::foundation as f;

/// Uncontrolled text input; read its value through `node_ref`.
#[derive(f::Properties, PartialEq, Clone)]
pub struct InputProps {
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub name: Option<f::AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<f::AttrValue>,
    #[prop_or_default]
    pub autocomplete: Option<f::AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    /// Marks the field invalid and points assistive tech at `described_by`.
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub described_by: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub node_ref: f::NodeRef,
}

#[f::function_component(Input)]
pub fn input(props: &InputProps) -> f::Html {
    let mut class = f::class_list(&["input", "input-bordered"], &props.class);
    if props.invalid {
        class.push(f::DaisyColor::Error.class("input"));
    }
    let aria_invalid = props.invalid.then_some("true");
    let described_by = props
        .described_by
        .clone()
        .filter(|_| props.invalid);
    f::html! {
        <input
            ref={props.node_ref.clone()}
            class={class}
            type="text"
            id={f::attr_value(&props.id)}
            name={f::attr_value(&props.name)}
            placeholder={f::attr_value(&props.placeholder)}
            autocomplete={f::attr_value(&props.autocomplete)}
            disabled={props.disabled}
            aria-invalid={aria_invalid}
            aria-describedby={described_by}
        />
    }
}
