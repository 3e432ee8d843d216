#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlButtonElement, HtmlInputElement};
use yew::prelude::*;
use yew::Renderer;

use games_web::components::join_game_form::JoinGameForm;
use games_web::dom;
use games_web::game::{GameId, GameMetadata, LookupError, LookupHandle, MetadataLookup};
use games_web::components::player_name_form::PlayerNameForm;
use games_web::components::site_header::SiteHeader;
use games_web::pages::game::GamePage;
use games_web::providers::AppProviders;

wasm_bindgen_test_configure!(run_in_browser);

struct StaticLookup {
    answer: Result<Option<GameMetadata>, LookupError>,
    calls: Rc<RefCell<Vec<String>>>,
}

#[async_trait(?Send)]
impl MetadataLookup for StaticLookup {
    async fn game_metadata(&self, id: &GameId) -> Result<Option<GameMetadata>, LookupError> {
        self.calls.borrow_mut().push(id.to_string());
        self.answer.clone()
    }
}

#[derive(Properties, PartialEq)]
struct HarnessProps {
    lookup: LookupHandle,
    navigate: Callback<AttrValue>,
}

#[function_component(Harness)]
fn harness(p: &HarnessProps) -> Html {
    html! {
        <AppProviders navigate={p.navigate.clone()}>
            <JoinGameForm lookup={p.lookup.clone()} />
        </AppProviders>
    }
}

struct Mounted {
    calls: Rc<RefCell<Vec<String>>>,
    visited: Rc<RefCell<Vec<String>>>,
}

fn fresh_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn mount(answer: Result<Option<GameMetadata>, LookupError>) -> Mounted {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let visited = Rc::new(RefCell::new(Vec::new()));
    let lookup = LookupHandle::new(StaticLookup {
        answer,
        calls: Rc::clone(&calls),
    });
    let navigate = {
        let visited = Rc::clone(&visited);
        Callback::from(move |path: AttrValue| visited.borrow_mut().push(path.to_string()))
    };
    Renderer::<Harness>::with_root_and_props(fresh_root(), HarnessProps { lookup, navigate })
        .render();
    Mounted { calls, visited }
}

async fn settle() {
    dom::sleep_ms(20).await.expect("timer");
}

fn dispatch_submit() {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).expect("submit event");
    dom::document()
        .expect("document")
        .query_selector("form.join-game-form")
        .expect("query form")
        .expect("form exists")
        .dispatch_event(&event)
        .expect("dispatch submit");
}

fn fill_id(raw: &str) {
    let input: HtmlInputElement = dom::document()
        .expect("document")
        .get_element_by_id("game-id")
        .expect("game id input")
        .dyn_into()
        .expect("input element");
    input.set_value(raw);
}

async fn submit_id(raw: &str) {
    settle().await;
    fill_id(raw);
    dispatch_submit();
    settle().await;
}

fn error_text() -> Option<String> {
    dom::document()
        .expect("document")
        .get_element_by_id("game-id-error")
        .and_then(|el| el.text_content())
}

#[wasm_bindgen_test]
async fn malformed_id_shows_shape_error_without_lookup() {
    let mounted = mount(Ok(None));
    submit_id("abc").await;
    assert_eq!(
        error_text().as_deref(),
        Some("Game IDs need to be a 5 letter string.")
    );
    assert!(mounted.calls.borrow().is_empty());
    assert!(mounted.visited.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn known_game_navigates_to_its_route() {
    let mounted = mount(Ok(Some(GameMetadata::new("trivia"))));
    submit_id("  abcde ").await;
    assert_eq!(*mounted.calls.borrow(), vec!["ABCDE".to_string()]);
    assert_eq!(*mounted.visited.borrow(), vec!["/trivia/ABCDE".to_string()]);
    assert!(error_text().is_none());
}

#[wasm_bindgen_test]
async fn back_to_back_submits_look_up_and_navigate_once() {
    let mounted = mount(Ok(Some(GameMetadata::new("trivia"))));
    settle().await;
    fill_id("ABCDE");
    dispatch_submit();
    dispatch_submit();
    settle().await;
    assert_eq!(*mounted.calls.borrow(), vec!["ABCDE".to_string()]);
    assert_eq!(*mounted.visited.borrow(), vec!["/trivia/ABCDE".to_string()]);
}

#[wasm_bindgen_test]
async fn unknown_game_reports_invalid_id_and_reenables_controls() {
    let mounted = mount(Ok(None));
    submit_id("ZZZZZ").await;
    assert_eq!(error_text().as_deref(), Some("Invalid game ID"));
    assert!(mounted.visited.borrow().is_empty());

    let button: HtmlButtonElement = dom::document()
        .expect("document")
        .query_selector("form.join-game-form button[type='submit']")
        .expect("query button")
        .expect("submit button")
        .dyn_into()
        .expect("button element");
    assert!(!button.disabled());
}

#[wasm_bindgen_test]
async fn lookup_failure_raises_a_toast() {
    mount(Err(LookupError::Transport("offline".into())));
    submit_id("ABCDE").await;
    assert_eq!(error_text().as_deref(), Some("Invalid game ID"));
    let toast = dom::document()
        .expect("document")
        .query_selector(".toast .alert")
        .expect("query toast");
    assert!(toast.is_some());
}

#[derive(Properties, PartialEq)]
struct GameHarnessProps {
    navigate: Callback<AttrValue>,
}

#[function_component(GameHarness)]
fn game_harness(p: &GameHarnessProps) -> Html {
    html! {
        <AppProviders navigate={p.navigate.clone()}>
            <GamePage game_type="trivia" game_id="abcde" />
        </AppProviders>
    }
}

#[wasm_bindgen_test]
async fn lowercase_game_link_moves_to_canonical_path() {
    let visited = Rc::new(RefCell::new(Vec::<String>::new()));
    let navigate = {
        let visited = Rc::clone(&visited);
        Callback::from(move |path: AttrValue| visited.borrow_mut().push(path.to_string()))
    };
    Renderer::<GameHarness>::with_root_and_props(fresh_root(), GameHarnessProps { navigate })
        .render();
    settle().await;
    assert_eq!(*visited.borrow(), vec!["/trivia/ABCDE".to_string()]);
}

#[function_component(NameHarness)]
fn name_harness() -> Html {
    html! {
        <AppProviders>
            <SiteHeader />
            <PlayerNameForm />
        </AppProviders>
    }
}

fn submit_name(name: &str) {
    let doc = dom::document().expect("document");
    let input: HtmlInputElement = doc
        .get_element_by_id("player-name")
        .expect("name input")
        .dyn_into()
        .expect("input element");
    input.set_value(name);
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).expect("submit event");
    doc.query_selector("form.player-name-form")
        .expect("query form")
        .expect("name form exists")
        .dispatch_event(&event)
        .expect("dispatch submit");
}

fn page_text() -> String {
    dom::document()
        .expect("document")
        .body()
        .and_then(|body| body.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn chosen_name_appears_in_header_until_sign_out() {
    Renderer::<NameHarness>::with_root(fresh_root()).render();
    settle().await;

    submit_name("   ");
    settle().await;
    assert!(page_text().contains("Enter a name first."));

    submit_name("  Alice ");
    settle().await;
    let text = page_text();
    assert!(text.contains("Alice"));
    assert!(text.contains("Sign out"));
    assert!(dom::document().expect("document").get_element_by_id("player-name").is_none());

    let sign_out: HtmlButtonElement = dom::document()
        .expect("document")
        .query_selector("header button.btn-sm")
        .expect("query sign out")
        .expect("sign out button")
        .dyn_into()
        .expect("button element");
    sign_out.click();
    settle().await;
    assert!(page_text().contains("Guest"));
    assert!(dom::document().expect("document").get_element_by_id("player-name").is_some());
}
