use nanoid::nanoid;
use ratatui::{
    crossterm::event::{KeyEvent, KeyModifiers},
    layout::Rect,
};
use std::{
    fs,
    sync::{mpsc::channel, Arc, Mutex},
    time::Duration,
};

use crate::{config::ConfigManager, ui::store::derived};

use super::*;

fn setup() -> (ContactForm, Arc<Store>, String) {
    fs::create_dir_all("generated").unwrap();
    let tmp_path = format!("generated/{}.yml", nanoid!());
    let conf_manager = Arc::new(Mutex::new(ConfigManager::new(tmp_path.as_str())));
    let store = Arc::new(Store::new(conf_manager));
    store.dispatch(Action::Resize(80, 32));
    let form = ContactForm::new(Arc::clone(&store));
    (form, store, tmp_path)
}

fn tear_down(conf_path: String) {
    fs::remove_file(conf_path).unwrap();
}

fn ctx_for(store: &Arc<Store>) -> CustomWidgetContext {
    let (tx, _rx) = channel();
    CustomWidgetContext {
        state: store.get_state(),
        app_area: Rect::new(0, 0, 80, 32),
        events: tx,
    }
}

fn press(form: &ContactForm, ctx: &CustomWidgetContext, code: KeyCode) -> bool {
    form.process_event(&CrossTermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)), ctx)
}

fn type_str(form: &ContactForm, ctx: &CustomWidgetContext, value: &str) {
    for char in value.chars() {
        press(form, ctx, KeyCode::Char(char));
    }
}

fn rendered_text(form: &ContactForm, state: &State) -> String {
    form.lines(state)
        .iter()
        .flat_map(|line| line.spans.iter())
        .map(|span| span.content.clone())
        .collect()
}

#[test]
fn test_renders_form_fields() {
    let (form, store, conf_path) = setup();

    let text = rendered_text(&form, &store.get_state());
    assert!(text.contains("Contact"));
    assert!(text.contains("Name:"));
    assert!(text.contains("Email:"));
    assert!(text.contains("Message:"));
    assert!(text.contains("[ Send ]"));

    tear_down(conf_path);
}

#[test]
fn test_fits_inside_the_section() {
    let (form, store, conf_path) = setup();

    let state = store.get_state();
    assert!(form.lines(&state).len() <= SectionId::Contact.height() as usize);

    tear_down(conf_path);
}

#[test]
fn test_e_enters_edit_mode_and_jumps_to_the_form() {
    let (form, store, conf_path) = setup();
    let ctx = ctx_for(&store);

    assert!(!form.is_editing());
    assert!(press(&form, &ctx, KeyCode::Char('e')));
    assert!(form.is_editing());

    let state = store.get_state();
    assert!(state.scroll > 0);
    assert_eq!(state.scroll, derived::max_scroll(&state));

    tear_down(conf_path);
}

#[test]
fn test_typing_fills_the_focused_field() {
    let (form, store, conf_path) = setup();
    let ctx = ctx_for(&store);

    press(&form, &ctx, KeyCode::Char('e'));
    type_str(&form, &ctx, "Adaa");
    press(&form, &ctx, KeyCode::Backspace);
    press(&form, &ctx, KeyCode::Tab);
    type_str(&form, &ctx, "ada@lovelace.io");
    press(&form, &ctx, KeyCode::Tab);
    type_str(&form, &ctx, "Hello there");

    let text = rendered_text(&form, &store.get_state());
    assert!(text.contains("Name: Ada"));
    assert!(text.contains("Email: ada@lovelace.io"));
    assert!(text.contains("Message: Hello there"));

    tear_down(conf_path);
}

#[test]
fn test_tab_cycles_and_backtab_reverses() {
    let (form, store, conf_path) = setup();
    let ctx = ctx_for(&store);

    press(&form, &ctx, KeyCode::Char('e'));
    assert_eq!(*form.focus.borrow(), Focus::Name);

    press(&form, &ctx, KeyCode::Tab);
    assert_eq!(*form.focus.borrow(), Focus::Email);

    press(&form, &ctx, KeyCode::Tab);
    press(&form, &ctx, KeyCode::Tab);
    assert_eq!(*form.focus.borrow(), Focus::Name);

    press(&form, &ctx, KeyCode::BackTab);
    assert_eq!(*form.focus.borrow(), Focus::Message);

    tear_down(conf_path);
}

#[test]
fn test_esc_leaves_editing_but_keeps_values() {
    let (form, store, conf_path) = setup();
    let ctx = ctx_for(&store);

    press(&form, &ctx, KeyCode::Char('e'));
    type_str(&form, &ctx, "Ada");
    press(&form, &ctx, KeyCode::Esc);

    assert!(!form.is_editing());
    assert!(rendered_text(&form, &store.get_state()).contains("Name: Ada"));

    tear_down(conf_path);
}

#[test]
fn test_enter_submits_and_a_completed_send_clears_the_fields() {
    let (form, store, conf_path) = setup();
    let ctx = ctx_for(&store);

    press(&form, &ctx, KeyCode::Char('e'));
    type_str(&form, &ctx, "Ada");
    press(&form, &ctx, KeyCode::Tab);
    type_str(&form, &ctx, "ada@lovelace.io");
    press(&form, &ctx, KeyCode::Tab);
    type_str(&form, &ctx, "Hello there");
    press(&form, &ctx, KeyCode::Enter);

    assert!(!form.is_editing());

    let state = store.get_state();
    assert!(matches!(state.contact, ContactStatus::Sending { .. }));
    assert!(rendered_text(&form, &state).contains("Sending..."));

    store.dispatch(Action::Tick(Instant::now() + Duration::from_millis(2000)));

    let state = store.get_state();
    assert_eq!(state.contact, ContactStatus::Idle);
    assert_eq!(state.contact_epoch, 1);

    let text = rendered_text(&form, &state);
    assert!(!text.contains("Ada"));
    assert!(text.contains("[ Send ]"));

    tear_down(conf_path);
}

#[test]
fn test_invalid_submission_keeps_what_was_typed() {
    let (form, store, conf_path) = setup();
    let ctx = ctx_for(&store);

    press(&form, &ctx, KeyCode::Char('e'));
    type_str(&form, &ctx, "Ada");
    press(&form, &ctx, KeyCode::Enter);

    let state = store.get_state();
    assert_eq!(state.contact, ContactStatus::Idle);
    assert_eq!(
        state.notice.as_ref().unwrap().message,
        "Please fill in all fields."
    );
    assert!(rendered_text(&form, &state).contains("Name: Ada"));

    tear_down(conf_path);
}

#[test]
fn test_ignores_keys_while_an_overlay_is_open() {
    let (form, store, conf_path) = setup();

    let (tx, _rx) = channel();
    let mut state = store.get_state();
    state.overlay = Overlay::Prompt;
    let ctx = CustomWidgetContext {
        state,
        app_area: Rect::new(0, 0, 80, 32),
        events: tx,
    };

    assert!(!press(&form, &ctx, KeyCode::Char('e')));
    assert!(!form.is_editing());

    tear_down(conf_path);
}
