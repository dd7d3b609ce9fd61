//! Frame layout: current screen above the status bar, overlays on top.

use super::alert::render_alert;
use super::constants::STATUS_BAR_HEIGHT;
use super::detail::render_detail;
use super::help::render_help_overlay;
use super::home::render_home;
use super::picker::render_picker_popup;
use super::points::render_points;
use super::status_bar::render_status_bar;
use super::styles::Theme;
use crate::controller::{Screen, ScreenStack};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

/// Render one frame for the top of `stack`.
pub fn render_layout(frame: &mut Frame, stack: &ScreenStack, theme: &Theme, help_visible: bool) {
    let Some(screen) = stack.current() else {
        return;
    };

    let [content, status] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(STATUS_BAR_HEIGHT)])
            .areas(frame.area());
    let content = inset(content);

    match screen {
        Screen::Home(home) => {
            render_home(frame, content, home, theme);
            render_picker_popup(frame, home, theme);
        }
        Screen::Points(points) => render_points(frame, content, points, theme),
        Screen::Detail(detail) => {
            render_detail(frame, content, detail, theme);
            if let Some(alert) = &detail.state().alert {
                render_alert(frame, alert, theme);
            }
        }
    }

    render_status_bar(frame, status, screen, theme);

    if help_visible {
        render_help_overlay(frame, theme);
    }
}

/// Horizontal and top padding around screen content.
fn inset(area: Rect) -> Rect {
    let dx = 2.min(area.width / 4);
    let dy = 1.min(area.height / 4);
    Rect {
        x: area.x + dx,
        y: area.y + dy,
        width: area.width - 2 * dx,
        height: area.height - dy,
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
