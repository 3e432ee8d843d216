use crate::components::daisy_ui::foundation as f;

#[derive(Clone, PartialEq, Debug)]
pub struct ToastItem {
    pub id: u32,
    pub message: f::AttrValue,
    pub variant: f::DaisyColor,
}

/// Bottom-right notification stack. Items render oldest first.
#[derive(f::Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub toasts: Vec<ToastItem>,
    /// Receives the id of the toast whose close button was pressed.
    #[prop_or_default]
    pub on_dismiss: Option<f::Callback<u32>>,
    #[prop_or_default]
    pub class: f::Classes,
}

fn toast_entry(item: &ToastItem, on_dismiss: Option<&f::Callback<u32>>) -> f::Html {
    let close = on_dismiss.map(|cb| {
        let id = item.id;
        let onclick = cb.reform(move |_: f::MouseEvent| id);
        f::html! {
            <button type="button" class="btn btn-ghost btn-xs" aria-label="Dismiss" {onclick}>{ "✕" }</button>
        }
    });
    let class = f::classes!("alert", item.variant.class("alert"), "shadow");
    f::html! {
        <div key={item.id} {class}>
            <span>{ item.message.clone() }</span>
            { close.unwrap_or_default() }
        </div>
    }
}

#[f::function_component(Toast)]
pub fn toast(props: &ToastProps) -> f::Html {
    f::html! {
        <div class={f::class_list(&["toast", "toast-end", "toast-bottom"], &props.class)} aria-live="polite">
            { for props.toasts.iter().map(|item| toast_entry(item, props.on_dismiss.as_ref())) }
        </div>
    }
}
