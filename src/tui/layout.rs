//! Layout definitions for the TUI
//!
//! Accounts on the left, services and the selected service's details on the
//! right, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Accounts list
    pub sidebar: Rect,
    /// Services list and details
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(36), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the main panel
pub struct MainPanelLayout {
    /// Services list
    pub services: Rect,
    /// Details of the selected service
    pub details: Rect,
}

impl MainPanelLayout {
    /// Calculate main panel layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        Self {
            services: chunks[0],
            details: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(70, 20, area);
        assert_eq!(rect, Rect::new(0, 0, 40, 10));

        let rect = centered_rect_fixed(20, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }
}
