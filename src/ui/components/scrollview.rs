//! Scrollable page pane.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Text},
    widgets::{Paragraph, ScrollbarState, Widget},
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

use super::scrollbar::ScrollBar;

/// Renders pre-built page lines offset by the scroll position in state,
/// with a scrollbar along the right edge. Lines are never wrapped, so row
/// positions inside the page stay fixed regardless of terminal width.
pub struct ScrollView {
    lines: Vec<Line<'static>>,
}

impl ScrollView {
    pub fn new(lines: Vec<Line<'static>>) -> Self {
        Self { lines }
    }
}

impl CustomStatefulWidget for ScrollView {
    type State = ScrollbarState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) {
        // page content + right aligned scrollbar
        let [content_area, scroll_bar_area] =
            Layout::horizontal([Constraint::Min(5), Constraint::Length(3)]).areas(area);

        let p = Paragraph::new(Text::from(self.lines)).scroll((ctx.state.scroll, 0));
        p.render(content_area, buf);

        let scrollbar = ScrollBar::new();
        scrollbar.render(scroll_bar_area, buf, state, ctx);
    }
}

#[cfg(test)]
#[path = "./tests/scrollview_tests.rs"]
mod tests;
