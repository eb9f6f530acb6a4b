use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Widget},
};
use strum::IntoEnumIterator;

use crate::ui::store::{derived, state::SectionId};
use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Top bar: site name on the left, section nav in the middle with the
/// section currently on screen highlighted, theme indicator on the right.
pub struct Header {
    title: String,
}

impl Header {
    pub fn new(title: String) -> Self {
        Self { title }
    }
}

impl CustomWidget for Header {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized,
    {
        let colors = &ctx.state.colors;

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(colors.border_color))
            .padding(Padding::horizontal(2));
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, nav_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

        let [name_area, theme_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(16)]).areas(title_area);

        let name = Paragraph::new(Line::from(self.title.as_str())).style(
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        );
        name.render(name_area, buf);

        let theme_label = format!(
            "{} {}",
            ctx.state.theme.icon(),
            ctx.state.theme
        );
        let theme = Paragraph::new(Line::from(theme_label))
            .right_aligned()
            .style(Style::new().fg(colors.text_dim));
        theme.render(theme_area, buf);

        let active = derived::active_section(&ctx.state);
        let mut spans: Vec<Span> = Vec::new();

        for (i, section) in SectionId::iter().enumerate() {
            if i > 0 {
                spans.push(Span::from("  ").style(Style::new().fg(colors.text_dim)));
            }

            let style = if section == active {
                Style::new()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::new().fg(colors.text_dim)
            };

            spans.push(Span::from(format!("({}) {section}", i + 1)).style(style));
        }

        Line::from(spans).render(nav_area, buf);
    }
}

#[cfg(test)]
#[path = "./tests/header_tests.rs"]
mod tests;
