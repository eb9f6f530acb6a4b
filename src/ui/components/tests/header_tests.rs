use crate::ui::store::state::State;

use super::*;
use ratatui::{backend::TestBackend, Terminal};

#[test]
fn renders_name_nav_and_theme() {
    let header = Header::new("Riley Navarro".to_string());
    let mut terminal = Terminal::new(TestBackend::new(80, 5)).unwrap();
    let state = State::default();
    let channel = std::sync::mpsc::channel();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
                events: channel.0,
            };

            header.render(frame.area(), frame.buffer_mut(), &ctx);
        })
        .unwrap();

    let rendered = terminal.backend().to_string();
    assert!(rendered.contains("Riley Navarro"));
    assert!(rendered.contains("(1) hero"));
    assert!(rendered.contains("(6) contact"));
    assert!(rendered.contains("default"));
}

#[test]
fn marks_the_section_on_screen() {
    let header = Header::new("Riley Navarro".to_string());
    let mut terminal = Terminal::new(TestBackend::new(80, 5)).unwrap();
    let mut state = State::default();
    state.scroll = crate::ui::store::derived::section_top(SectionId::Projects);
    let channel = std::sync::mpsc::channel();

    let active = derived::active_section(&state);
    assert_eq!(active, SectionId::Projects);

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
                events: channel.0,
            };

            header.render(frame.area(), frame.buffer_mut(), &ctx);
        })
        .unwrap();

    assert!(terminal.backend().to_string().contains("(3) projects"));
}
