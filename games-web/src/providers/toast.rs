//! Toast scope: a shared notification queue and the surface that shows it.

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::components::daisy_ui::{DaisyColor, Toast, ToastItem};

/// Toasts shown at once; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;
/// How long a toast stays up before it dismisses itself.
pub const TOAST_TTL_MS: i32 = 5_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    const fn color(self) -> DaisyColor {
        match self {
            Self::Info => DaisyColor::Info,
            Self::Success => DaisyColor::Success,
            Self::Warning => DaisyColor::Warning,
            Self::Error => DaisyColor::Error,
        }
    }
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct ToastQueue {
    items: Vec<ToastItem>,
}

impl ToastQueue {
    #[must_use]
    pub fn items(&self) -> &[ToastItem] {
        &self.items
    }
}

#[derive(Clone, Debug)]
pub enum ToastAction {
    Push {
        id: u32,
        message: AttrValue,
        level: ToastLevel,
    },
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Push { id, message, level } => {
                items.push(ToastItem {
                    id,
                    message,
                    variant: level.color(),
                });
                let overflow = items.len().saturating_sub(MAX_VISIBLE_TOASTS);
                items.drain(..overflow);
            }
            ToastAction::Dismiss(id) => {
                if !items.iter().any(|item| item.id == id) {
                    return self;
                }
                items.retain(|item| item.id != id);
            }
        }
        Rc::new(Self { items })
    }
}

#[derive(Clone)]
pub struct ToastContext {
    queue: UseReducerHandle<ToastQueue>,
    next_id: Rc<RefCell<u32>>,
}

impl PartialEq for ToastContext {
    fn eq(&self, other: &Self) -> bool {
        self.queue == other.queue
    }
}

impl ToastContext {
    /// Show `message`; it dismisses itself after [`TOAST_TTL_MS`].
    pub fn push(&self, message: impl Into<AttrValue>, level: ToastLevel) {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next = next.wrapping_add(1);
            *next
        };
        self.queue.dispatch(ToastAction::Push {
            id,
            message: message.into(),
            level,
        });

        #[cfg(target_arch = "wasm32")]
        {
            let queue = self.queue.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = crate::dom::sleep_ms(TOAST_TTL_MS).await {
                    log::warn!("toast timer failed: {}", crate::dom::js_error_message(&err));
                }
                queue.dispatch(ToastAction::Dismiss(id));
            });
        }
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.dispatch(ToastAction::Dismiss(id));
    }

    #[must_use]
    pub fn items(&self) -> Vec<ToastItem> {
        self.queue.items().to_vec()
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_mut_ref(|| 0_u32);
    let context = ToastContext {
        queue: queue.clone(),
        next_id,
    };
    let on_dismiss = {
        let context = context.clone();
        Callback::from(move |id: u32| context.dismiss(id))
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            { props.children.clone() }
            <Toast toasts={queue.items().to_vec()} on_dismiss={Some(on_dismiss)} />
        </ContextProvider<ToastContext>>
    }
}

#[hook]
pub fn use_toasts() -> Option<ToastContext> {
    use_context::<ToastContext>()
}
