//! Single-slot notification box.

use ratatui::{
    layout::Rect,
    style::{palette::tailwind, Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Widget},
};

use crate::ui::store::state::{Notice, Severity};
use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Severity colors are fixed and do not follow the theme palette.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => tailwind::BLUE.c500,
        Severity::Success => tailwind::GREEN.c500,
        Severity::Warning => tailwind::AMBER.c500,
        Severity::Error => tailwind::RED.c500,
    }
}

pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ",
        Severity::Success => "✔",
        Severity::Warning => "⚠",
        Severity::Error => "✖",
    }
}

pub struct Toast {
    notice: Notice,
}

impl Toast {
    pub fn new(notice: Notice) -> Self {
        Self { notice }
    }

    /// Columns needed to show the message plus icon, border, and padding.
    pub fn width(&self) -> u16 {
        self.notice.message.chars().count() as u16 + 8
    }
}

impl CustomWidget for Toast {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized,
    {
        let color = severity_color(self.notice.severity);
        let icon = severity_icon(self.notice.severity);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(color))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(ctx.state.colors.surface_bg));
        let inner = block.inner(area);

        Clear.render(area, buf);
        block.render(area, buf);

        let text = Paragraph::new(Line::from(format!("{icon} {}", self.notice.message))).style(
            Style::new()
                .fg(color)
                .add_modifier(Modifier::BOLD),
        );
        text.render(inner, buf);
    }
}

#[cfg(test)]
#[path = "./tests/toast_tests.rs"]
mod tests;
