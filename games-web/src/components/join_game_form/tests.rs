use std::rc::Rc;

use super::handlers::{Begin, InFlight, begin, settle};
use super::{
    INPUT_LABEL, INPUT_PLACEHOLDER, JoinFormState, JoinGameForm, LOADING_LABEL, SERVER_CONFUSED,
    SERVER_UNREACHABLE, SUBMIT_LABEL, render_join_form,
};
use futures::executor::block_on;
use games_core::{
    GameId, GameMetadata, INVALID_GAME_MESSAGE, JoinError, JoinEvent, JoinForm, LookupError,
    SHAPE_INVALID_MESSAGE,
};
use yew::LocalServerRenderer;
use yew::prelude::*;

fn id(raw: &str) -> GameId {
    GameId::parse(raw).expect("valid id")
}

#[derive(Properties, PartialEq)]
struct HarnessProps {
    form: JoinForm,
}

#[function_component(FormHarness)]
fn form_harness(p: &HarnessProps) -> Html {
    let input_ref = use_node_ref();
    render_join_form(&p.form, &input_ref, Callback::noop())
}

fn render_state(form: JoinForm) -> String {
    block_on(LocalServerRenderer::<FormHarness>::with_props(HarnessProps { form }).render())
}

#[test]
fn join_form_renders_label_placeholder_and_button() {
    let html = block_on(LocalServerRenderer::<JoinGameForm>::new().render());
    assert!(html.contains(INPUT_LABEL));
    assert!(html.contains(INPUT_PLACEHOLDER));
    assert!(html.contains(SUBMIT_LABEL));
    assert!(html.contains("name=\"GameID\""));
    assert!(!html.contains("role=\"alert\""));
    assert!(!html.contains("disabled"));
}

#[test]
fn rejected_form_shows_shape_message_on_the_field() {
    let form = JoinForm::new().apply(JoinEvent::Rejected(JoinError::ShapeInvalid));
    let html = render_state(form);
    assert!(html.contains(SHAPE_INVALID_MESSAGE));
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("aria-invalid=\"true\""));
    assert!(html.contains("aria-describedby=\"game-id-error\""));
}

#[test]
fn loading_form_disables_controls_and_shows_indicator() {
    let form = JoinForm::new().apply(JoinEvent::Started);
    let html = render_state(form);
    assert!(html.contains("disabled"));
    assert!(html.contains("aria-busy=\"true\""));
    assert!(html.contains(LOADING_LABEL));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn begin_rejects_bad_shapes_and_normalizes_good_ones() {
    let idle = JoinForm::new();
    let slot = InFlight::default();
    assert_eq!(begin(&idle, &slot, "abc"), Begin::Rejected(JoinError::ShapeInvalid));
    assert_eq!(begin(&idle, &slot, "ab1de"), Begin::Rejected(JoinError::ShapeInvalid));
    assert!(!slot.is_claimed());
    assert_eq!(begin(&idle, &slot, "  abcde "), Begin::Lookup(id("ABCDE")));
    assert!(slot.is_claimed());
}

#[test]
fn begin_is_busy_while_a_lookup_is_in_flight() {
    let loading = JoinForm::new().apply(JoinEvent::Started);
    assert_eq!(begin(&loading, &InFlight::default(), "ABCDE"), Begin::Busy);
}

#[test]
fn back_to_back_submits_before_a_render_start_one_lookup() {
    // Both submits see the same pre-render form value.
    let stale = JoinForm::new();
    let slot = InFlight::default();
    assert_eq!(begin(&stale, &slot, "ABCDE"), Begin::Lookup(id("ABCDE")));
    assert_eq!(begin(&stale, &slot, "ABCDE"), Begin::Busy);

    slot.release();
    assert_eq!(begin(&stale, &slot, "FGHIJ"), Begin::Lookup(id("FGHIJ")));
}

#[test]
fn settle_found_game_redirects_without_toast() {
    let game = id("ABCDE");
    let settlement = settle(&game, Ok(Some(GameMetadata::new("trivia"))));
    assert_eq!(
        settlement.redirect.as_ref().map(|r| r.path().to_owned()),
        Some("/trivia/ABCDE".to_owned())
    );
    assert!(settlement.toast.is_none());
    let form = JoinForm::new()
        .apply(JoinEvent::Started)
        .apply(settlement.event);
    assert!(!form.is_loading());
    assert!(form.errors().is_empty());
}

#[test]
fn settle_missing_game_reports_invalid_id_quietly() {
    let settlement = settle(&id("ABCDE"), Ok(None));
    assert!(settlement.redirect.is_none());
    assert!(settlement.toast.is_none());
    let form = JoinForm::new()
        .apply(JoinEvent::Started)
        .apply(settlement.event);
    assert_eq!(form.game_id_error(), Some(INVALID_GAME_MESSAGE));
    assert!(!form.is_loading());
}

#[test]
fn settle_failures_show_field_error_and_toast() {
    let game = id("ABCDE");
    let cases = [
        (LookupError::Transport("offline".into()), SERVER_UNREACHABLE),
        (LookupError::Server { status: 503 }, SERVER_UNREACHABLE),
        (LookupError::Malformed("missing game_type".into()), SERVER_CONFUSED),
    ];
    for (err, toast) in cases {
        let settlement = settle(&game, Err(err));
        assert_eq!(settlement.toast, Some(toast));
        assert!(settlement.redirect.is_none());
        let form = JoinForm::new()
            .apply(JoinEvent::Started)
            .apply(settlement.event);
        assert_eq!(form.game_id_error(), Some(INVALID_GAME_MESSAGE));
    }
}

#[test]
fn reducer_keeps_state_for_ignored_events() {
    let loading = Rc::new(JoinFormState::default()).reduce(JoinEvent::Started);
    let again = Rc::clone(&loading).reduce(JoinEvent::Started);
    assert!(Rc::ptr_eq(&loading, &again));
    assert!(again.is_loading());
}
