//! Selected projects with tags.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::{content, ui::store::state::State};

use super::heading;

pub fn lines(state: &State) -> Vec<Line<'static>> {
    let colors = &state.colors;
    let mut lines = vec![heading("Projects", colors), Line::default()];

    for project in content::PROJECTS.iter() {
        lines.push(Line::from(vec![
            Span::from(project.name)
                .style(Style::new().fg(colors.accent).add_modifier(Modifier::BOLD)),
            Span::from(format!("  [{}]", project.tags.join(", ")))
                .style(Style::new().fg(colors.text_dim)),
        ]));
        lines.push(Line::from(
            Span::from(format!("  {}", project.summary)).style(Style::new().fg(colors.text)),
        ));
        lines.push(Line::default());
    }

    lines
}
