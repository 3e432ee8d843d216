//! Theme scope: the active DaisyUI theme plus the navigation hook handed to
//! everything below it.

use games_core::Navigate;
use yew::prelude::*;

pub const DEFAULT_THEME: &str = "light";
pub const THEMES: [&str; 4] = ["light", "dark", "retro", "synthwave"];

#[must_use]
pub fn is_known_theme(theme: &str) -> bool {
    THEMES.contains(&theme)
}

#[must_use]
pub fn theme_options() -> Vec<AttrValue> {
    THEMES.iter().copied().map(AttrValue::Static).collect()
}

#[cfg(target_arch = "wasm32")]
fn apply_theme(theme: &str) {
    if let Some(document) = crate::dom::document()
        && let Some(root) = document.document_element()
    {
        let _ = root.set_attribute("data-theme", theme);
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    theme: UseStateHandle<AttrValue>,
    navigate: Callback<AttrValue>,
}

impl ThemeContext {
    #[must_use]
    pub fn theme(&self) -> AttrValue {
        (*self.theme).clone()
    }

    /// Switch themes. Unknown names are ignored.
    pub fn set_theme(&self, theme: AttrValue) {
        if !is_known_theme(&theme) {
            log::warn!("ignoring unknown theme {theme}");
            return;
        }
        log::debug!("theme -> {theme}");
        self.theme.set(theme);
    }

    #[must_use]
    pub fn navigator(&self) -> NavigateCallback {
        NavigateCallback(self.navigate.clone())
    }
}

/// [`Navigate`] implementation that forwards paths to a Yew callback.
#[derive(Clone, PartialEq, Default)]
pub struct NavigateCallback(Callback<AttrValue>);

impl NavigateCallback {
    #[must_use]
    pub const fn new(callback: Callback<AttrValue>) -> Self {
        Self(callback)
    }
}

impl Navigate for NavigateCallback {
    fn push(&self, path: &str) {
        self.0.emit(AttrValue::from(path.to_string()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    /// Receives every navigation request made through the context.
    #[prop_or_default]
    pub navigate: Callback<AttrValue>,
    #[prop_or_default]
    pub initial_theme: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let initial = props
        .initial_theme
        .clone()
        .filter(|t| is_known_theme(t))
        .unwrap_or(AttrValue::Static(DEFAULT_THEME));
    let theme = use_state(move || initial);

    {
        let current = (*theme).clone();
        use_effect_with(current, |current| {
            #[cfg(target_arch = "wasm32")]
            apply_theme(current);
            #[cfg(not(target_arch = "wasm32"))]
            let _ = current;
        });
    }

    let context = ThemeContext {
        theme,
        navigate: props.navigate.clone(),
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}

/// Navigation hook for components below [`ThemeProvider`]; a no-op elsewhere.
#[hook]
pub fn use_navigate() -> NavigateCallback {
    use_context::<ThemeContext>()
        .map(|ctx| ctx.navigator())
        .unwrap_or_default()
}
