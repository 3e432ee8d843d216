use crate::components::daisy_ui::foundation as f;

/// Busy indicator announced politely to screen readers.
#[derive(f::Properties, PartialEq, Clone)]
pub struct LoadingProps {
    /// Announced text shown next to the dots.
    pub label: f::AttrValue,
}

#[f::function_component(Loading)]
pub fn loading(props: &LoadingProps) -> f::Html {
    f::html! {
        <p class="join-busy inline-flex items-center gap-2" role="status" aria-live="polite">
            <span class="loading loading-dots loading-sm" aria-hidden="true"></span>
            <span>{ props.label.clone() }</span>
        </p>
    }
}
