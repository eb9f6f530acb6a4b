//! Skill bars that grow to their target widths once scrolled into view.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::{content, ui::store::state::State};

use super::heading;

/// Total columns a full bar occupies.
pub const BAR_WIDTH: u16 = 30;

pub fn lines(state: &State) -> Vec<Line<'static>> {
    let colors = &state.colors;
    let mut lines = vec![heading("Skills", colors), Line::default()];

    let label_width = content::SKILLS
        .iter()
        .map(|skill| UnicodeWidthStr::width(skill.name))
        .max()
        .unwrap_or(0)
        + 2;

    for (i, skill) in content::SKILLS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }

        let filled = filled_columns(skill.percent, state.skills_fill);
        let empty = BAR_WIDTH - filled;

        lines.push(Line::from(vec![
            Span::from(format!("{:label_width$}", skill.name))
                .style(Style::new().fg(colors.text).add_modifier(Modifier::BOLD)),
            Span::from("█".repeat(filled as usize)).style(Style::new().fg(colors.accent)),
            Span::from("░".repeat(empty as usize)).style(Style::new().fg(colors.scroll_bar_fg)),
            Span::from(format!(" {}%", skill.percent)).style(Style::new().fg(colors.text_dim)),
        ]));
    }

    lines
}

/// Columns of the bar that are filled at the given animation progress.
pub fn filled_columns(percent: u16, fill: f32) -> u16 {
    let target = f32::from(percent.min(100)) / 100.0 * f32::from(BAR_WIDTH);
    (target * fill).round() as u16
}

#[cfg(test)]
mod tests {
    use crate::ui::store::state::SectionId;

    use super::*;

    #[test]
    fn fits_inside_the_section() {
        let state = State::default();
        assert!(lines(&state).len() <= SectionId::Skills.height() as usize);
    }

    #[test]
    fn bars_start_empty_and_grow_with_fill() {
        assert_eq!(filled_columns(90, 0.0), 0);
        assert_eq!(filled_columns(90, 0.5), 14);
        assert_eq!(filled_columns(90, 1.0), 27);
        assert_eq!(filled_columns(100, 1.0), BAR_WIDTH);
    }

    #[test]
    fn percent_labels_show_targets_before_the_fill_finishes() {
        let state = State::default();
        let text = lines(&state)
            .iter()
            .flat_map(|line| line.spans.iter())
            .map(|span| span.content.clone())
            .collect::<String>();

        assert!(text.contains("90%"));
        assert!(!text.contains('█'));
    }
}
