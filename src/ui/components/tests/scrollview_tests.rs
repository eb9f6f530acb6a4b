use crate::ui::store::state::State;

use super::*;
use ratatui::{backend::TestBackend, Terminal};

fn numbered_lines(count: usize) -> Vec<Line<'static>> {
    (0..count)
        .map(|i| Line::from(format!("row {i}")))
        .collect()
}

#[test]
fn renders_lines_from_the_top() {
    let view = ScrollView::new(numbered_lines(50));
    let state = State::default();
    let channel = std::sync::mpsc::channel();
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
                events: channel.0,
            };

            let mut scroll_state = ScrollbarState::new(50).position(0);

            view.render(frame.area(), frame.buffer_mut(), &mut scroll_state, &ctx);
        })
        .unwrap();

    let rendered = terminal.backend().to_string();
    assert!(rendered.contains("row 0"));
    assert!(rendered.contains("row 9"));
    assert!(!rendered.contains("row 10"));
}

#[test]
fn scroll_position_moves_the_window() {
    let view = ScrollView::new(numbered_lines(50));
    let mut state = State::default();
    state.scroll = 20;
    let channel = std::sync::mpsc::channel();
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
                events: channel.0,
            };

            let mut scroll_state = ScrollbarState::new(50).position(20);

            view.render(frame.area(), frame.buffer_mut(), &mut scroll_state, &ctx);
        })
        .unwrap();

    let rendered = terminal.backend().to_string();
    assert!(!rendered.contains("row 19"));
    assert!(rendered.contains("row 20"));
    assert!(rendered.contains("row 29"));
}
