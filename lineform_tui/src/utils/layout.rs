use ratatui::layout::{Constraint, Layout, Rect};

/// Area of `width` x `height` centered in `rect`, shrunk to fit.
pub fn get_popup_area_centered(rect: Rect, width: u16, height: u16) -> Rect {
    let height = height.min(rect.height);
    let width = width.min(rect.width);
    let top_margin = (rect.height - height) / 2;
    let left_margin = (rect.width - width) / 2;
    let chunks = Layout::vertical(vec![
        Constraint::Length(top_margin),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(rect);
    let chunks = Layout::horizontal(vec![
        Constraint::Length(left_margin),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(chunks[1]);
    chunks[1]
}
