use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::colors::Colors;
use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

#[derive(Debug, Clone)]
pub struct InputState {
    pub editing: bool,
    pub value: String,
}

impl InputState {
    pub fn empty() -> Self {
        Self {
            editing: false,
            value: String::new(),
        }
    }
}

pub struct Input {
    label: String,
}

impl Input {
    pub fn new(label: &str) -> Self {
        Self {
            label: String::from(label),
        }
    }

    /// Builds the one-line representation of the field. A trailing block
    /// marks where the next character lands while editing.
    pub fn line(&self, state: &InputState, colors: &Colors) -> Line<'static> {
        let label = Span::from(format!("{0}: ", self.label));
        let mut style = Style::default();
        let mut shown = state.value.clone();

        if state.editing {
            style = style.fg(colors.input_editing);
            shown.push('█');
        }

        let value = Span::from(shown).style(style);
        Line::from(vec![label, value])
    }
}

impl CustomStatefulWidget for Input {
    type State = InputState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let line = self.line(state, &ctx.state.colors);
        line.render(area, buf);
    }
}

#[cfg(test)]
#[path = "./tests/input_tests.rs"]
mod tests;
