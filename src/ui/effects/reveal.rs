//! Visibility geometry for reveal-on-scroll.
//!
//! Sections live at fixed row offsets inside a virtual page; whether one
//! counts as visible is a pure function of the scroll offset and viewport
//! height, so the tick reducer can run these checks with no terminal
//! attached.

/// Rows excluded at the bottom of the viewport, so sections reveal slightly
/// after they scroll on screen rather than the instant a row appears.
pub const BOTTOM_MARGIN_ROWS: u16 = 2;

/// Share of a section that must be visible before it reveals.
pub const REVEAL_RATIO: f32 = 0.1;

/// Share of the skills section that must be visible before the bars start
/// filling.
pub const FILL_RATIO: f32 = 0.5;

/// Number of section rows inside the (margin-trimmed) viewport.
pub fn visible_rows(top: u16, height: u16, scroll: u16, viewport_rows: u16) -> u16 {
    let window_start = scroll;
    let window_end = scroll.saturating_add(viewport_rows.saturating_sub(BOTTOM_MARGIN_ROWS));
    let section_end = top.saturating_add(height);

    let start = window_start.max(top);
    let end = window_end.min(section_end);
    end.saturating_sub(start)
}

fn ratio_visible(top: u16, height: u16, scroll: u16, viewport_rows: u16, ratio: f32) -> bool {
    if height == 0 {
        return false;
    }

    let rows = visible_rows(top, height, scroll, viewport_rows);
    rows > 0 && rows as f32 >= ratio * height as f32
}

/// True once at least [`REVEAL_RATIO`] of the section is on screen.
pub fn is_visible(top: u16, height: u16, scroll: u16, viewport_rows: u16) -> bool {
    ratio_visible(top, height, scroll, viewport_rows, REVEAL_RATIO)
}

/// True once at least [`FILL_RATIO`] of the section is on screen.
pub fn is_half_visible(top: u16, height: u16, scroll: u16, viewport_rows: u16) -> bool {
    ratio_visible(top, height, scroll, viewport_rows, FILL_RATIO)
}

#[cfg(test)]
#[path = "./reveal_tests.rs"]
mod tests;
