use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::{content, ui::store::state::State};

use super::heading;

pub fn lines(state: &State) -> Vec<Line<'static>> {
    let colors = &state.colors;
    let quote = &content::QUOTES[state.quote_idx % content::QUOTES.len()];

    vec![
        heading("Quotes", colors),
        Line::default(),
        Line::from(
            Span::from(format!("\u{201c}{}\u{201d}", quote.text)).style(
                Style::new()
                    .fg(colors.accent_soft)
                    .add_modifier(Modifier::ITALIC),
            ),
        ),
        Line::from(
            Span::from(format!("   \u{2014} {}", quote.author))
                .style(Style::new().fg(colors.text_dim)),
        ),
        Line::default(),
        Line::from(Span::from("(n) another quote").style(Style::new().fg(colors.text_dim))),
    ]
}

#[cfg(test)]
mod tests {
    use crate::ui::store::state::SectionId;

    use super::*;

    #[test]
    fn fits_inside_the_section() {
        let state = State::default();
        assert!(lines(&state).len() <= SectionId::Quotes.height() as usize);
    }

    #[test]
    fn shows_the_current_quote() {
        let mut state = State::default();
        state.quote_idx = 3;

        let text = lines(&state)
            .iter()
            .flat_map(|line| line.spans.iter())
            .map(|span| span.content.clone())
            .collect::<String>();

        assert!(text.contains(content::QUOTES[3].text));
        assert!(text.contains(content::QUOTES[3].author));
    }
}
