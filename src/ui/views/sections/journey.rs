//! Timeline of roles and milestones.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::{content, ui::store::state::State};

use super::heading;

pub fn lines(state: &State) -> Vec<Line<'static>> {
    let colors = &state.colors;
    let mut lines = vec![heading("Journey", colors), Line::default()];

    for entry in content::TIMELINE.iter() {
        lines.push(Line::from(vec![
            Span::from(format!("{}  ", entry.year))
                .style(Style::new().fg(colors.accent).add_modifier(Modifier::BOLD)),
            Span::from(entry.title)
                .style(Style::new().fg(colors.text).add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(
            Span::from(format!("      {}", entry.detail)).style(Style::new().fg(colors.text_dim)),
        ));
        lines.push(Line::default());
    }

    lines
}
