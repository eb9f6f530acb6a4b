use std::time::Instant;

use strum::{Display, EnumCount, EnumIter};

use crate::ui::{
    colors::{Colors, Theme},
    effects::{confetti::Confetti, typewriter::Typewriter},
};

/// Vertical slices of the page, in document order.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Display, EnumCount, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SectionId {
    Hero,
    Journey,
    Projects,
    Skills,
    Quotes,
    Contact,
}

impl SectionId {
    /// Fixed row count of the section inside the virtual page.
    pub fn height(self) -> u16 {
        match self {
            SectionId::Hero => 14,
            SectionId::Journey => 16,
            SectionId::Projects => 16,
            SectionId::Skills => 16,
            SectionId::Quotes => 8,
            SectionId::Contact => 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Single-slot toast. A new notice always replaces the current one.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

/// Modal overlays drawn on top of the page. At most one is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    ConfirmReset,
    ThemePicker,
    Prompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    Idle,
    Sending { since: Instant },
}

#[derive(Debug, Clone)]
pub struct State {
    pub true_color_enabled: bool,
    pub theme: Theme,
    pub colors: Colors,
    pub accessibility: bool,
    pub focus_mode: bool,
    pub project_count: u32,
    pub pulse_until: Option<Instant>,
    pub typewriter: Typewriter,
    pub quote_idx: usize,
    pub notice: Option<Notice>,
    pub revealed: [bool; SectionId::COUNT],
    pub skills_fill_started: Option<Instant>,
    pub skills_fill: f32,
    pub scroll: u16,
    pub viewport: (u16, u16),
    pub confetti: Option<Confetti>,
    pub contact: ContactStatus,
    pub contact_epoch: u32,
    pub overlay: Overlay,
    pub quit: bool,
}

#[cfg(test)]
impl State {
    pub fn default() -> Self {
        let theme = Theme::Default;
        let true_color_enabled = true;
        let colors = Colors::new(theme.to_palette(true_color_enabled), true_color_enabled);

        Self {
            true_color_enabled,
            theme,
            colors,
            accessibility: false,
            focus_mode: false,
            project_count: 0,
            pulse_until: None,
            typewriter: Typewriter::new(&crate::content::TYPEWRITER_PHRASES, Instant::now()),
            quote_idx: 0,
            notice: None,
            revealed: [false; SectionId::COUNT],
            skills_fill_started: None,
            skills_fill: 0.0,
            scroll: 0,
            viewport: (80, 24),
            confetti: None,
            contact: ContactStatus::Idle,
            contact_epoch: 0,
            overlay: Overlay::None,
            quit: false,
        }
    }
}
