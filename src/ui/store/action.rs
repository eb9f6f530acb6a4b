use std::time::Instant;

use crate::ui::colors::Theme;

use super::state::{Overlay, SectionId, Severity};

/// Everything that can change [`super::state::State`]. Time-sensitive
/// actions carry the `Instant` they happened at so reducers never read the
/// clock themselves.
#[derive(Debug, Clone)]
pub enum Action {
    Tick(Instant),
    Resize(u16, u16),
    ScrollBy(i32),
    ScrollTo(u16),
    JumpToSection(SectionId),
    SetTheme(Theme),
    CycleTheme,
    AdjustCount { delta: i32, now: Instant },
    RequestResetCount,
    ConfirmResetCount { now: Instant },
    NextQuote,
    Notify { message: String, severity: Severity, now: Instant },
    DismissNotice,
    ToggleFocusMode { now: Instant },
    ToggleAccessibility { now: Instant },
    LaunchConfetti { now: Instant },
    SubmitContact { name: String, email: String, message: String, now: Instant },
    OpenOverlay(Overlay),
    CloseOverlay,
    FocusChanged { focused: bool, now: Instant },
    Quit,
}
