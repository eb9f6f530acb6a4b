use std::{cell::RefCell, sync::Arc, time::Instant};

use log::*;
use ratatui::{
    crossterm::event::{Event as CrossTermEvent, KeyCode, KeyEventKind, KeyModifiers},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Clear, Padding, Paragraph, ScrollbarState, Widget},
};
use strum::IntoEnumIterator;

use crate::{
    content,
    ui::{
        colors::Theme,
        components::{
            footer::InfoFooter,
            header::Header,
            popover::{get_popover_area, get_toast_area},
            scrollview::ScrollView,
            toast::Toast,
        },
        events::types::{Command, Event},
        prompt::{self, PromptCommand},
        store::{
            action::Action,
            derived,
            state::{Overlay, SectionId, Severity, State},
            Store,
        },
    },
};

use super::{
    sections::{contact::ContactForm, hero, journey, projects, quotes, skills},
    traits::{
        CustomStatefulWidget, CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler,
    },
};

const THEMES: [Theme; 3] = [Theme::Default, Theme::Dark, Theme::Creative];

/// The whole portfolio page: header, scrollable sections, footer legend,
/// plus whatever floats on top of them (dialogs, toasts, confetti).
pub struct PageView {
    store: Arc<Store>,
    contact: ContactForm,
    prompt_value: RefCell<String>,
    theme_index: RefCell<usize>,
}

impl PageView {
    pub fn new(store: Arc<Store>) -> Self {
        let contact = ContactForm::new(Arc::clone(&store));

        Self {
            store,
            contact,
            prompt_value: RefCell::new(String::new()),
            theme_index: RefCell::new(0),
        }
    }

    fn render_buffer_bg(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, state: &State) {
        let block = Block::new().style(Style::new().bg(state.colors.buffer_bg));
        block.render(area, buf);
    }

    /// Builds the full virtual page. Every section occupies its fixed row
    /// range whether revealed or not, so scroll offsets always line up
    /// with [`derived::section_top`]. Unrevealed sections stay blank.
    fn build_page_lines(&self, state: &State) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(derived::content_height() as usize);

        for (i, section) in SectionId::iter().enumerate() {
            if i > 0 {
                for _ in 0..derived::SECTION_GAP {
                    lines.push(Line::default());
                }
            }

            let mut section_lines = if state.revealed[i] {
                self.section_lines(section, state)
            } else {
                Vec::new()
            };

            section_lines.truncate(section.height() as usize);
            let pad = section.height() as usize - section_lines.len();
            lines.append(&mut section_lines);

            for _ in 0..pad {
                lines.push(Line::default());
            }
        }

        lines
    }

    fn section_lines(&self, id: SectionId, state: &State) -> Vec<Line<'static>> {
        match id {
            SectionId::Hero => hero::lines(state),
            SectionId::Journey => journey::lines(state),
            SectionId::Projects => projects::lines(state),
            SectionId::Skills => skills::lines(state),
            SectionId::Quotes => quotes::lines(state),
            SectionId::Contact => self.contact.lines(state),
        }
    }

    fn render_page(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let mut scroll_state = ScrollbarState::new(derived::content_height() as usize)
            .position(ctx.state.scroll as usize);

        let scroll_view = ScrollView::new(self.build_page_lines(&ctx.state));
        scroll_view.render(area, buf, &mut scroll_state, ctx);
    }

    fn render_footer(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let legend = if self.contact.is_editing() {
            String::from("(esc) leave form | (tab) next field | (enter) send")
        } else {
            let mut info = String::from("(q) quit | (t) theme | (e) contact | (:) commands");

            if derived::show_back_to_top(&ctx.state) {
                info = format!("{info} | (Home) top");
            }

            info
        };

        let footer = InfoFooter::new(legend);
        footer.render(area, buf, ctx);
    }

    fn render_confirm_reset(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(colors.border_color))
            .padding(Padding::uniform(1))
            .style(Style::default().bg(colors.surface_bg));
        let inner = block.inner(area);

        Clear.render(area, buf);
        block.render(area, buf);

        let lines = vec![
            Line::from(
                Span::from("Reset the project counter?").style(
                    Style::new()
                        .fg(colors.heading)
                        .add_modifier(Modifier::BOLD),
                ),
            ),
            Line::default(),
            Line::from(
                Span::from("(y) reset   (n) keep counting")
                    .style(Style::new().fg(colors.text_dim)),
            ),
        ];

        Paragraph::new(Text::from(lines)).centered().render(inner, buf);
    }

    fn render_theme_picker(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;
        let selected = *self.theme_index.borrow();

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(colors.border_color))
            .padding(Padding::uniform(1))
            .style(Style::default().bg(colors.surface_bg));
        let inner = block.inner(area);

        Clear.render(area, buf);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(
                Span::from("Pick a theme").style(
                    Style::new()
                        .fg(colors.heading)
                        .add_modifier(Modifier::BOLD),
                ),
            ),
            Line::default(),
        ];

        for (i, theme) in THEMES.iter().enumerate() {
            let (marker, style) = if i == selected {
                (
                    "❯ ",
                    Style::new().fg(colors.accent).add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::new().fg(colors.text))
            };

            lines.push(Line::from(
                Span::from(format!("{marker}{} {theme}", theme.icon())).style(style),
            ));
        }

        Paragraph::new(Text::from(lines)).render(inner, buf);
    }

    fn render_prompt(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(colors.border_color))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(colors.surface_bg));
        let inner = block.inner(area);

        Clear.render(area, buf);
        block.render(area, buf);

        let mut shown = self.prompt_value.borrow().clone();
        shown.push('█');

        let lines = vec![
            Line::from(vec![
                Span::from(": ").style(
                    Style::new().fg(colors.accent).add_modifier(Modifier::BOLD),
                ),
                Span::from(shown).style(Style::new().fg(colors.input_editing)),
            ]),
            Line::default(),
            Line::from(
                Span::from("try: confetti, theme dark, count 3, share, top")
                    .style(Style::new().fg(colors.text_dim)),
            ),
        ];

        Paragraph::new(Text::from(lines)).render(inner, buf);
    }

    fn render_confetti(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, state: &State) {
        if let Some(confetti) = &state.confetti {
            for particle in confetti.visible() {
                let x = area.x.saturating_add(particle.col);
                let y = area.y.saturating_add(particle.row as u16);

                if x < area.right() && y < area.bottom() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(particle.glyph);
                        cell.set_fg(particle.color);
                    }
                }
            }
        }
    }

    fn send_command(&self, command: Command, ctx: &CustomWidgetContext) {
        if let Err(e) = ctx.events.send(Event::ExecCommand(command)) {
            error!("failed to queue command: {e}");
        }
    }

    fn open_prompt(&self) {
        self.prompt_value.borrow_mut().clear();
        self.store.dispatch(Action::OpenOverlay(Overlay::Prompt));
    }

    fn open_theme_picker(&self, current: Theme) {
        let idx = THEMES.iter().position(|t| *t == current).unwrap_or(0);
        *self.theme_index.borrow_mut() = idx;
        self.store.dispatch(Action::OpenOverlay(Overlay::ThemePicker));
    }

    fn run_prompt_command(&self, input: &str, ctx: &CustomWidgetContext) {
        self.store.dispatch(Action::CloseOverlay);

        match prompt::parse(input) {
            Ok(command) => match command {
                PromptCommand::Confetti => self.store.dispatch(Action::LaunchConfetti {
                    now: Instant::now(),
                }),
                PromptCommand::Focus => self.store.dispatch(Action::ToggleFocusMode {
                    now: Instant::now(),
                }),
                PromptCommand::Access => self.store.dispatch(Action::ToggleAccessibility {
                    now: Instant::now(),
                }),
                PromptCommand::Share => self.send_command(Command::Share, ctx),
                PromptCommand::Print => self.send_command(Command::Print, ctx),
                PromptCommand::Theme(theme) => self.store.dispatch(Action::SetTheme(theme)),
                PromptCommand::Quote => self.store.dispatch(Action::NextQuote),
                PromptCommand::Count(delta) => self.store.dispatch(Action::AdjustCount {
                    delta,
                    now: Instant::now(),
                }),
                PromptCommand::Reset => self.store.dispatch(Action::RequestResetCount),
                PromptCommand::Top => self.store.dispatch(Action::ScrollTo(0)),
            },
            Err(message) => self.store.dispatch(Action::Notify {
                message,
                severity: Severity::Warning,
                now: Instant::now(),
            }),
        }
    }

    fn process_confirm_reset_event(&self, evt: &CrossTermEvent) -> bool {
        if let CrossTermEvent::Key(key) = evt {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => {
                        self.store.dispatch(Action::ConfirmResetCount {
                            now: Instant::now(),
                        });
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        self.store.dispatch(Action::CloseOverlay);
                    }
                    _ => {}
                }
            }

            // dialogs are modal - keys never reach the page below
            return true;
        }

        false
    }

    fn process_theme_picker_event(&self, evt: &CrossTermEvent) -> bool {
        if let CrossTermEvent::Key(key) = evt {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Up => {
                        let idx = *self.theme_index.borrow();
                        *self.theme_index.borrow_mut() = (idx + THEMES.len() - 1) % THEMES.len();
                    }
                    KeyCode::Down => {
                        let idx = *self.theme_index.borrow();
                        *self.theme_index.borrow_mut() = (idx + 1) % THEMES.len();
                    }
                    KeyCode::Enter => {
                        let theme = THEMES[*self.theme_index.borrow()];
                        self.store.dispatch(Action::SetTheme(theme));
                        self.store.dispatch(Action::CloseOverlay);
                    }
                    KeyCode::Esc => {
                        self.store.dispatch(Action::CloseOverlay);
                    }
                    _ => {}
                }
            }

            return true;
        }

        false
    }

    fn process_prompt_event(&self, evt: &CrossTermEvent, ctx: &CustomWidgetContext) -> bool {
        if let CrossTermEvent::Key(key) = evt {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Esc => {
                        self.prompt_value.borrow_mut().clear();
                        self.store.dispatch(Action::CloseOverlay);
                    }
                    KeyCode::Enter => {
                        let input = self.prompt_value.borrow().clone();
                        self.prompt_value.borrow_mut().clear();
                        self.run_prompt_command(&input, ctx);
                    }
                    KeyCode::Backspace => {
                        self.prompt_value.borrow_mut().pop();
                    }
                    KeyCode::Char(char) => {
                        self.prompt_value.borrow_mut().push(char);
                    }
                    _ => {}
                }
            }

            return true;
        }

        false
    }
}

impl CustomWidgetRef for PageView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        // header, page, legend
        let page_areas = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

        self.render_buffer_bg(area, buf, &ctx.state);

        let header = Header::new(String::from(content::NAME));
        header.render(page_areas[0], buf, ctx);

        self.render_page(page_areas[1], buf, ctx);
        self.render_footer(page_areas[2], buf, ctx);

        match ctx.state.overlay {
            Overlay::ConfirmReset => {
                self.render_confirm_reset(get_popover_area(area, 44, 7), buf, ctx)
            }
            Overlay::ThemePicker => {
                self.render_theme_picker(get_popover_area(area, 30, 9), buf, ctx)
            }
            Overlay::Prompt => self.render_prompt(get_popover_area(area, 60, 5), buf, ctx),
            Overlay::None => {}
        }

        if let Some(notice) = ctx.state.notice.clone() {
            let toast = Toast::new(notice);
            let toast_area = get_toast_area(area, toast.width(), 3);
            toast.render(toast_area, buf, ctx);
        }

        // rendered last so particles fall over everything else
        self.render_confetti(area, buf, &ctx.state);
    }
}

impl EventHandler for PageView {
    fn process_event(&self, evt: &CrossTermEvent, ctx: &CustomWidgetContext) -> bool {
        match ctx.state.overlay {
            Overlay::ConfirmReset => return self.process_confirm_reset_event(evt),
            Overlay::ThemePicker => return self.process_theme_picker_event(evt),
            Overlay::Prompt => return self.process_prompt_event(evt, ctx),
            Overlay::None => {}
        }

        let mut handled = self.contact.process_event(evt, ctx);

        if !handled {
            if let CrossTermEvent::Key(key) = evt {
                // ctrl combinations belong to the app loop
                if key.kind == KeyEventKind::Press
                    && !key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    handled = true;

                    match key.code {
                        KeyCode::Char('t') => self.store.dispatch(Action::CycleTheme),
                        KeyCode::Char('T') => self.open_theme_picker(ctx.state.theme),
                        KeyCode::Char('n') => self.store.dispatch(Action::NextQuote),
                        KeyCode::Char('c') => self.store.dispatch(Action::LaunchConfetti {
                            now: Instant::now(),
                        }),
                        KeyCode::Char('f') => self.store.dispatch(Action::ToggleFocusMode {
                            now: Instant::now(),
                        }),
                        KeyCode::Char('a') => self.store.dispatch(Action::ToggleAccessibility {
                            now: Instant::now(),
                        }),
                        KeyCode::Char(':') => self.open_prompt(),
                        KeyCode::Char('+') | KeyCode::Char('=') => {
                            self.store.dispatch(Action::AdjustCount {
                                delta: 1,
                                now: Instant::now(),
                            })
                        }
                        KeyCode::Char('-') => self.store.dispatch(Action::AdjustCount {
                            delta: -1,
                            now: Instant::now(),
                        }),
                        KeyCode::Char('r') => self.store.dispatch(Action::RequestResetCount),
                        KeyCode::Char(c @ '1'..='6') => {
                            let idx = c as usize - '1' as usize;

                            if let Some(section) = SectionId::iter().nth(idx) {
                                self.store.dispatch(Action::JumpToSection(section));
                            }
                        }
                        KeyCode::Down => self.store.dispatch(Action::ScrollBy(1)),
                        KeyCode::Up => self.store.dispatch(Action::ScrollBy(-1)),
                        KeyCode::PageDown => {
                            let page = i32::from(derived::body_height(&ctx.state).max(1));
                            self.store.dispatch(Action::ScrollBy(page));
                        }
                        KeyCode::PageUp => {
                            let page = i32::from(derived::body_height(&ctx.state).max(1));
                            self.store.dispatch(Action::ScrollBy(-page));
                        }
                        KeyCode::Home => self.store.dispatch(Action::ScrollTo(0)),
                        KeyCode::End => self.store.dispatch(Action::ScrollTo(u16::MAX)),
                        _ => handled = false,
                    }
                }
            }
        }

        handled
    }
}

#[cfg(test)]
#[path = "./page_tests.rs"]
mod tests;
