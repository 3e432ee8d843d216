use crate::components::daisy_ui::foundation as f;

/// Top bar: brand on the left, controls on the right.
#[derive(f::Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub brand: f::Html,
    #[prop_or_default]
    pub controls: f::Html,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> f::Html {
    f::html! {
        <header class={f::class_list(&["navbar", "bg-base-200", "px-4"], &props.class)}>
            <nav class="flex-1" aria-label="Main">{ props.brand.clone() }</nav>
            <div class="flex-none flex items-center gap-3">{ props.controls.clone() }</div>
        </header>
    }
}
