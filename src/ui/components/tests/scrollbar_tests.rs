use crate::ui::store::state::State;

use super::*;
use ratatui::{backend::TestBackend, Terminal};

#[test]
fn renders_scrollbar_component() {
    let scroll = ScrollBar::new();
    let mut scroll_state = ScrollbarState::new(50).position(25);
    let mut terminal = Terminal::new(TestBackend::new(10, 12)).unwrap();
    let state = State::default();
    let channel = std::sync::mpsc::channel();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
                events: channel.0,
            };

            scroll.render(frame.area(), frame.buffer_mut(), &mut scroll_state, &ctx);
        })
        .unwrap();

    let rendered = terminal.backend().to_string();
    assert!(rendered.contains('█'));
    assert!(rendered.contains('│'));
}

#[test]
fn skips_areas_too_small_for_a_bar() {
    let scroll = ScrollBar::new();
    let mut scroll_state = ScrollbarState::new(50);
    let mut terminal = Terminal::new(TestBackend::new(2, 2)).unwrap();
    let state = State::default();
    let channel = std::sync::mpsc::channel();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
                events: channel.0,
            };

            scroll.render(frame.area(), frame.buffer_mut(), &mut scroll_state, &ctx);
        })
        .unwrap();

    assert!(!terminal.backend().to_string().contains('█'));
}
