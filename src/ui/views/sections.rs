//! Page sections in document order. Each module builds the styled lines
//! for its slice of the page; geometry (row offsets, fixed heights) is
//! owned by the store so scrolling and reveal checks agree with rendering.

pub mod contact;
pub mod hero;
pub mod journey;
pub mod projects;
pub mod quotes;
pub mod skills;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::colors::Colors;

/// Shared heading treatment so every section starts the same way.
pub(crate) fn heading(title: &str, colors: &Colors) -> Line<'static> {
    Line::from(vec![
        Span::from("▍ ").style(Style::new().fg(colors.accent)),
        Span::from(title.to_string())
            .style(Style::new().fg(colors.heading).add_modifier(Modifier::BOLD)),
    ])
}
