use std::sync::mpsc::Sender;

use ratatui::{crossterm::event::Event as CrossTermEvent, layout::Rect};

use crate::ui::{events::types::Event, store::state::State};

pub trait EventHandler {
    fn process_event(&self, evt: &CrossTermEvent, ctx: &CustomWidgetContext) -> bool;
}

pub struct CustomWidgetContext {
    // snapshot of app state for this frame
    pub state: State,
    // total area for the entire application - useful for calculating
    // popover areas
    pub app_area: Rect,
    // event producer - this is how components and views communicate user
    // behavior back to the main loop for work that isn't a state update -
    // writing to the clipboard or exporting a file
    pub events: Sender<Event>,
}

pub trait CustomWidget {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext);
}

pub trait CustomWidgetRef {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext);
}

pub trait CustomStatefulWidget {
    type State;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    );
}
