use games_core::{
    GameId, GameMetadata, JoinError, JoinEvent, JoinForm, LookupError, Navigate, Redirect,
    plan_submit, resolve_lookup,
};
use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use super::{JoinFormState, SERVER_CONFUSED, SERVER_UNREACHABLE};
use crate::game::LookupHandle;
use crate::providers::{NavigateCallback, ToastContext, ToastLevel};

#[derive(Clone)]
pub(super) struct SubmitContext {
    pub form: UseReducerHandle<JoinFormState>,
    pub in_flight: InFlight,
    pub input_ref: NodeRef,
    pub lookup: LookupHandle,
    pub navigator: NavigateCallback,
    pub toasts: Option<ToastContext>,
}

/// Claim on the single lookup slot.
///
/// The reducer handle seen by the submit callback only changes on re-render,
/// so a second submit in the same task still reads the idle form. This flag
/// is set and read synchronously.
#[derive(Clone, Default)]
pub(super) struct InFlight(Rc<RefCell<bool>>);

impl InFlight {
    pub fn new(slot: Rc<RefCell<bool>>) -> Self {
        Self(slot)
    }

    pub fn is_claimed(&self) -> bool {
        *self.0.borrow()
    }

    fn claim(&self) {
        *self.0.borrow_mut() = true;
    }

    pub fn release(&self) {
        *self.0.borrow_mut() = false;
    }
}

/// What a submit event turns into before any network call.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Begin {
    Busy,
    Rejected(JoinError),
    Lookup(GameId),
}

/// Decide what a submit does. A lookup claims `in_flight` until released.
pub(super) fn begin(form: &JoinForm, in_flight: &InFlight, raw: &str) -> Begin {
    if form.is_loading() || in_flight.is_claimed() {
        return Begin::Busy;
    }
    match plan_submit(raw) {
        Ok(id) => {
            in_flight.claim();
            Begin::Lookup(id)
        }
        Err(err) => Begin::Rejected(err),
    }
}

/// Everything that follows from a finished lookup.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct Settlement {
    pub event: JoinEvent,
    pub redirect: Option<Redirect>,
    pub toast: Option<&'static str>,
}

const fn failure_toast(err: &JoinError) -> Option<&'static str> {
    match err {
        JoinError::ShapeInvalid | JoinError::NotFound => None,
        JoinError::Lookup(LookupError::Transport(_) | LookupError::Server { .. }) => {
            Some(SERVER_UNREACHABLE)
        }
        JoinError::Lookup(LookupError::Malformed(_)) => Some(SERVER_CONFUSED),
    }
}

pub(super) fn settle(
    id: &GameId,
    outcome: Result<Option<GameMetadata>, LookupError>,
) -> Settlement {
    let resolved = resolve_lookup(id, outcome);
    let (redirect, toast) = match &resolved {
        Ok(redirect) => {
            log::info!("joining game {id} at {}", redirect.path());
            (Some(redirect.clone()), None)
        }
        Err(err) => {
            log::warn!("join of {id} failed ({}): {err}", err.kind());
            (None, failure_toast(err))
        }
    };
    Settlement {
        event: JoinEvent::Resolved(resolved),
        redirect,
        toast,
    }
}

fn read_input(input_ref: &NodeRef) -> String {
    input_ref
        .cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn apply_settlement(ctx: &SubmitContext, settlement: Settlement) {
    ctx.in_flight.release();
    ctx.form.dispatch(settlement.event);
    if let (Some(message), Some(toasts)) = (settlement.toast, ctx.toasts.as_ref()) {
        toasts.push(message, ToastLevel::Error);
    }
    if let Some(redirect) = settlement.redirect {
        ctx.navigator.push(redirect.path());
    }
}

pub(super) fn submit_handler(ctx: SubmitContext) -> Callback<SubmitEvent> {
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        let raw = read_input(&ctx.input_ref);
        let id = match begin(&ctx.form, &ctx.in_flight, &raw) {
            Begin::Busy => {
                log::debug!("submit ignored: lookup already in flight");
                return;
            }
            Begin::Rejected(err) => {
                log::debug!("join rejected before lookup: {err}");
                ctx.form.dispatch(JoinEvent::Rejected(err));
                return;
            }
            Begin::Lookup(id) => id,
        };

        ctx.form.dispatch(JoinEvent::Started);
        log::debug!("looking up game {id}");
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = ctx.lookup.lookup().game_metadata(&id).await;
            apply_settlement(&ctx, settle(&id, outcome));
        });
    })
}
