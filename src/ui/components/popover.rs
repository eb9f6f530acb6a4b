use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};

/// Centered area for a fixed-size dialog, shrunk to fit small terminals.
pub fn get_popover_area(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Area in the top right corner where notices slide in, inset one cell so
/// the toast never sits on the app border.
pub fn get_toast_area(area: Rect, width: u16, height: u16) -> Rect {
    let inset = area.inner(Margin {
        vertical: 1,
        horizontal: 1,
    });
    let width = width.min(inset.width);
    let height = height.min(inset.height);

    Rect {
        x: inset.right().saturating_sub(width),
        y: inset.y,
        width,
        height,
    }
}
