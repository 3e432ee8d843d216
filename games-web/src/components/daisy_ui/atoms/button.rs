use crate::components::daisy_ui::foundation as f;

/// DaisyUI `btn`. While `loading` it is disabled, shows a spinner and reports
/// itself busy.
#[derive(f::Properties, PartialEq, Clone)]
pub struct ButtonProps {
    pub label: f::AttrValue,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub loading: bool,
    /// Set for form submit buttons; plain `button` otherwise.
    #[prop_or_default]
    pub submit: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub onclick: f::Callback<f::MouseEvent>,
}

#[f::function_component(Button)]
pub fn button(props: &ButtonProps) -> f::Html {
    let mut class = f::class_list(&["btn"], &props.class);
    if let Some(variant) = props.variant {
        class.push(variant.class("btn"));
    }
    let kind = if props.submit { "submit" } else { "button" };
    let busy = props.loading.then_some("true");
    let spinner = if props.loading {
        f::html! { <span class="loading loading-spinner loading-sm" aria-hidden="true"></span> }
    } else {
        f::Html::default()
    };

    f::html! {
        <button
            type={kind}
            {class}
            disabled={props.disabled || props.loading}
            aria-busy={busy}
            onclick={props.onclick.clone()}
        >
            { spinner }
            { props.label.clone() }
        </button>
    }
}
