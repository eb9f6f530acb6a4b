//! Opening section: name, animated role line, passions, project counter.

use itertools::Itertools;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::{content, ui::store::state::State};

pub fn lines(state: &State) -> Vec<Line<'static>> {
    let colors = &state.colors;
    let dim = Style::new().fg(colors.text_dim);

    let mut lines = vec![
        Line::from(
            Span::from(content::NAME)
                .style(Style::new().fg(colors.heading).add_modifier(Modifier::BOLD)),
        ),
        Line::from(Span::from(content::TAGLINE).style(dim)),
        Line::from(
            Span::from(format!("{} · {}", content::LOCATION, content::CONTACT_EMAIL)).style(dim),
        ),
        Line::default(),
        typewriter_line(state),
        Line::default(),
    ];

    if !state.focus_mode {
        lines.push(passions_line(state));
        lines.push(Line::default());
    }

    lines.push(counter_line(state));
    lines.push(Line::from(
        Span::from("(+) add  (-) remove  (r) reset").style(dim),
    ));

    if !state.focus_mode {
        lines.push(Line::default());
        lines.push(Line::from(
            Span::from("✦ press (c) for a little celebration").style(dim),
        ));
    }

    lines
}

/// The role line the typewriter is currently typing, with a block cursor.
fn typewriter_line(state: &State) -> Line<'static> {
    let colors = &state.colors;

    Line::from(vec![
        Span::from("> ").style(Style::new().fg(colors.text_dim)),
        Span::from(state.typewriter.line().to_string())
            .style(Style::new().fg(colors.accent).add_modifier(Modifier::BOLD)),
        Span::from("█").style(Style::new().fg(colors.accent_soft)),
    ])
}

fn passions_line(state: &State) -> Line<'static> {
    let text = content::PASSIONS
        .iter()
        .map(|passion| format!("{} {}", passion.icon, passion.name))
        .join("  ·  ");

    Line::from(Span::from(text).style(Style::new().fg(state.colors.accent_soft)))
}

fn counter_line(state: &State) -> Line<'static> {
    let colors = &state.colors;

    // the short pulse after a change reads as a flash of emphasis
    let value_style = if state.pulse_until.is_some() {
        Style::new().fg(colors.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(colors.text)
    };

    Line::from(vec![
        Span::from("Projects shipped: ").style(Style::new().fg(colors.text)),
        Span::from(state.project_count.to_string()).style(value_style),
    ])
}
