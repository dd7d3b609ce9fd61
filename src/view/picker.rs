//! Picker popup rendering.

use super::constants::PICKER_POPUP_WIDTH;
use super::helpers::centered_fixed;
use super::home::{CITY_PLACEHOLDER, UF_PLACEHOLDER};
use super::styles::Theme;
use crate::controller::HomeScreen;
use crate::state::PickerField;
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// Render the open picker popup, if any, over the whole frame.
///
/// Row 0 is the placeholder; the rest are the option labels in fetch order.
/// The list widget keeps the selected row scrolled into view.
pub fn render_picker_popup(frame: &mut Frame, home: &HomeScreen, theme: &Theme) {
    let Some(popup) = &home.form.popup else {
        return;
    };
    let state = home.controller.state();
    let (title, placeholder, options) = match popup.field() {
        PickerField::Uf => (" Estado ", UF_PLACEHOLDER, &state.states),
        PickerField::City => (" Cidade ", CITY_PLACEHOLDER, &state.cities),
    };

    let area = frame.area();
    let height = (options.len() as u16 + 3).min(area.height.saturating_sub(2));
    let popup_area = centered_fixed(PICKER_POPUP_WIDTH, height, area);
    frame.render_widget(Clear, popup_area);

    let items: Vec<ListItem> = std::iter::once(ListItem::new(placeholder).style(theme.muted))
        .chain(
            options
                .iter()
                .map(|option| ListItem::new(option.label.as_str()).style(theme.text)),
        )
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Line::from(title).alignment(Alignment::Center))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.focused),
        )
        .highlight_style(theme.highlight)
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(popup.selected_row()));
    frame.render_stateful_widget(list, popup_area, &mut list_state);

    let hint_area = Rect {
        y: popup_area.y + popup_area.height.saturating_sub(1),
        height: 1,
        ..popup_area
    };
    if popup_area.height > 3 {
        frame.render_widget(
            ratatui::widgets::Paragraph::new(" Enter: escolher  Esc: cancelar ")
                .style(theme.muted)
                .alignment(Alignment::Center),
            hint_area,
        );
    }
}
