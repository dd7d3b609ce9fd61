//! Small layout helpers shared by overlays.

use ratatui::layout::Rect;

/// Rect of `percent_x`% by `percent_y`% centered in `area`.
pub fn centered_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x.min(100) / 100;
    let height = area.height * percent_y.min(100) / 100;
    centered_fixed(width, height, area)
}

/// Rect of fixed size centered in `area`, shrunk to fit.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
