//! Detail screen rendering.
//!
//! Nothing is drawn until the point has loaded.

use super::styles::Theme;
use crate::controller::DetailController;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Heading above the address.
pub const ADDRESS_HEADING: &str = "Endereço";

/// Render the point detail into `area`.
pub fn render_detail(frame: &mut Frame, area: Rect, detail: &DetailController, theme: &Theme) {
    let Some(data) = &detail.state().data else {
        return;
    };

    let [image, name, items, _, address_heading, address, _, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Imagem: ", theme.muted),
            Span::styled(data.point.image_url.clone(), theme.text),
        ])),
        image,
    );
    frame.render_widget(
        Paragraph::new(data.point.name.clone()).style(theme.title),
        name,
    );
    frame.render_widget(
        Paragraph::new(data.items_summary())
            .style(theme.text)
            .wrap(Wrap { trim: true }),
        items,
    );
    frame.render_widget(
        Paragraph::new(ADDRESS_HEADING).style(theme.heading),
        address_heading,
    );
    frame.render_widget(
        Paragraph::new(data.address()).style(theme.text),
        address,
    );

    let [whatsapp, email] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(footer);
    render_action(frame, whatsapp, "[w] WhatsApp", theme);
    render_action(frame, email, "[e] E-mail", theme);
}

fn render_action(frame: &mut Frame, area: Rect, label: &str, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Span::styled(label.to_string(), theme.button))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme.focused),
            ),
        area,
    );
}
