use crate::components::daisy_ui::foundation as f;

/// Caption for a form field, optionally with a right-aligned hint.
#[derive(f::Properties, PartialEq, Clone)]
pub struct LabelProps {
    /// Id of the field this label names.
    pub target: f::AttrValue,
    pub text: f::AttrValue,
    #[prop_or_default]
    pub hint: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Label)]
pub fn label(props: &LabelProps) -> f::Html {
    let hint = props
        .hint
        .clone()
        .map(|hint| f::html! { <span class="label-text-alt opacity-70">{ hint }</span> });
    f::html! {
        <label class={f::class_list(&["label"], &props.class)} for={props.target.clone()}>
            <span class="label-text font-semibold">{ props.text.clone() }</span>
            { hint.unwrap_or_default() }
        </label>
    }
}
