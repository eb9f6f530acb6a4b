use std::{cell::RefCell, sync::Arc, time::Instant};

use ratatui::{
    crossterm::event::{Event as CrossTermEvent, KeyCode, KeyEventKind, KeyModifiers},
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::{
    content,
    ui::{
        components::input::{Input, InputState},
        store::{
            action::Action,
            state::{ContactStatus, Overlay, SectionId, State},
            Store,
        },
        views::traits::{CustomWidgetContext, EventHandler},
    },
};

use super::heading;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Focus {
    Name,
    Email,
    Message,
}

/// Interactive contact form living inside the page. Keyboard focus is
/// modal: (e) starts editing and the form captures keys until Esc leaves
/// or Enter submits. Field values survive leaving edit mode so a failed
/// validation never throws away what was typed.
pub struct ContactForm {
    store: Arc<Store>,
    editing: RefCell<bool>,
    focus: RefCell<Focus>,
    name_state: RefCell<InputState>,
    email_state: RefCell<InputState>,
    message_state: RefCell<InputState>,
    // epoch of the last completed send we cleared the fields for
    seen_epoch: RefCell<u32>,
}

impl ContactForm {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            editing: RefCell::new(false),
            focus: RefCell::new(Focus::Name),
            name_state: RefCell::new(InputState::empty()),
            email_state: RefCell::new(InputState::empty()),
            message_state: RefCell::new(InputState::empty()),
            seen_epoch: RefCell::new(0),
        }
    }

    pub fn is_editing(&self) -> bool {
        *self.editing.borrow()
    }

    pub fn lines(&self, state: &State) -> Vec<Line<'static>> {
        let colors = &state.colors;

        // a completed send bumps the epoch - clear the fields once per bump
        if *self.seen_epoch.borrow() != state.contact_epoch {
            self.name_state.borrow_mut().value.clear();
            self.email_state.borrow_mut().value.clear();
            self.message_state.borrow_mut().value.clear();
            *self.seen_epoch.borrow_mut() = state.contact_epoch;
        }

        let send_row = match state.contact {
            ContactStatus::Sending { .. } => Line::from(
                Span::from("Sending...").style(
                    Style::new()
                        .fg(colors.text_dim)
                        .add_modifier(Modifier::ITALIC),
                ),
            ),
            ContactStatus::Idle => Line::from(
                Span::from("[ Send ]").style(
                    Style::new()
                        .fg(colors.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ),
        };

        vec![
            heading("Contact", colors),
            Line::default(),
            Line::from(
                Span::from("Have a project in mind? Send a note.")
                    .style(Style::new().fg(colors.text_dim)),
            ),
            Line::default(),
            Input::new("Name").line(&self.name_state.borrow(), colors),
            Line::default(),
            Input::new("Email").line(&self.email_state.borrow(), colors),
            Line::default(),
            Input::new("Message").line(&self.message_state.borrow(), colors),
            Line::default(),
            send_row,
            Line::default(),
            Line::from(
                Span::from(format!("{} · {}", content::CONTACT_EMAIL, content::LOCATION))
                    .style(Style::new().fg(colors.text_dim)),
            ),
        ]
    }

    fn start_editing(&self) {
        *self.editing.borrow_mut() = true;
        *self.focus.borrow_mut() = Focus::Name;
        self.apply_focus();
        self.store
            .dispatch(Action::JumpToSection(SectionId::Contact));
    }

    fn stop_editing(&self) {
        *self.editing.borrow_mut() = false;
        *self.focus.borrow_mut() = Focus::Name;
        self.name_state.borrow_mut().editing = false;
        self.email_state.borrow_mut().editing = false;
        self.message_state.borrow_mut().editing = false;
    }

    fn submit(&self) {
        self.store.dispatch(Action::SubmitContact {
            name: self.name_state.borrow().value.clone(),
            email: self.email_state.borrow().value.clone(),
            message: self.message_state.borrow().value.clone(),
            now: Instant::now(),
        });
    }

    fn apply_focus(&self) {
        let focus = *self.focus.borrow();
        self.name_state.borrow_mut().editing = focus == Focus::Name;
        self.email_state.borrow_mut().editing = focus == Focus::Email;
        self.message_state.borrow_mut().editing = focus == Focus::Message;
    }

    fn focus_next(&self) {
        let next = match *self.focus.borrow() {
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Message,
            Focus::Message => Focus::Name,
        };
        *self.focus.borrow_mut() = next;
        self.apply_focus();
    }

    fn focus_previous(&self) {
        let previous = match *self.focus.borrow() {
            Focus::Name => Focus::Message,
            Focus::Email => Focus::Name,
            Focus::Message => Focus::Email,
        };
        *self.focus.borrow_mut() = previous;
        self.apply_focus();
    }

    fn push_input_char(&self, char: char) {
        match *self.focus.borrow() {
            Focus::Name => self.name_state.borrow_mut().value.push(char),
            Focus::Email => self.email_state.borrow_mut().value.push(char),
            Focus::Message => self.message_state.borrow_mut().value.push(char),
        };
    }

    fn pop_input_char(&self) {
        match *self.focus.borrow() {
            Focus::Name => {
                self.name_state.borrow_mut().value.pop();
            }
            Focus::Email => {
                self.email_state.borrow_mut().value.pop();
            }
            Focus::Message => {
                self.message_state.borrow_mut().value.pop();
            }
        };
    }
}

impl EventHandler for ContactForm {
    fn process_event(&self, evt: &CrossTermEvent, ctx: &CustomWidgetContext) -> bool {
        if ctx.state.overlay != Overlay::None {
            return false;
        }

        let mut handled = false;

        if let CrossTermEvent::Key(key) = evt {
            if key.kind == KeyEventKind::Press && !key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Esc => {
                        if *self.editing.borrow() {
                            self.stop_editing();
                            handled = true;
                        }
                    }
                    KeyCode::Tab => {
                        if *self.editing.borrow() {
                            self.focus_next();
                            handled = true;
                        }
                    }
                    KeyCode::BackTab => {
                        if *self.editing.borrow() {
                            self.focus_previous();
                            handled = true;
                        }
                    }
                    KeyCode::Enter => {
                        if *self.editing.borrow() {
                            self.submit();
                            self.stop_editing();
                            handled = true;
                        }
                    }
                    KeyCode::Backspace => {
                        if *self.editing.borrow() {
                            self.pop_input_char();
                            handled = true;
                        }
                    }
                    KeyCode::Char(c) => {
                        if *self.editing.borrow() {
                            self.push_input_char(c);
                            handled = true;
                        } else if c == 'e' {
                            self.start_editing();
                            handled = true;
                        }
                    }
                    _ => {}
                }
            }
        }

        handled
    }
}

#[cfg(test)]
#[path = "./contact_tests.rs"]
mod tests;
