use crate::components::daisy_ui::foundation as f;
use f::TargetCast;

/// Theme picker. Emits the chosen theme name; applying it is the caller's job.
#[derive(f::Properties, PartialEq, Clone)]
pub struct ThemeControllerProps {
    pub themes: Vec<f::AttrValue>,
    /// Currently applied theme; the first entry when unset.
    #[prop_or_default]
    pub current: Option<f::AttrValue>,
    #[prop_or_default]
    pub on_pick: f::Callback<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(ThemeController)]
pub fn theme_controller(props: &ThemeControllerProps) -> f::Html {
    let current = props.current.as_ref().or_else(|| props.themes.first());
    let onchange = props.on_pick.reform(|e: f::Event| {
        e.target_unchecked_into::<f::HtmlSelectElement>()
            .value()
            .into()
    });
    let options = props.themes.iter().map(|theme| {
        let selected = current == Some(theme);
        f::html! { <option value={theme.clone()} {selected}>{ theme.clone() }</option> }
    });
    f::html! {
        <select
            class={f::class_list(&["select", "select-bordered", "select-sm"], &props.class)}
            aria-label="Theme selector"
            {onchange}
        >
            { for options }
        </select>
    }
}
