//! Blocking alert dialog.

use super::constants::{ALERT_HEIGHT, ALERT_WIDTH};
use super::helpers::centered_fixed;
use super::styles::Theme;
use crate::controller::Alert;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render `alert` centered over the frame with an OK hint.
pub fn render_alert(frame: &mut Frame, alert: &Alert, theme: &Theme) {
    let area = centered_fixed(ALERT_WIDTH, ALERT_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let body = vec![
        Line::from(""),
        Line::from(Span::styled(alert.message.clone(), theme.text)),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", theme.button)),
    ];
    let dialog = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Line::from(Span::styled(format!(" {} ", alert.title), theme.alert)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.alert),
        );
    frame.render_widget(dialog, area);
}
