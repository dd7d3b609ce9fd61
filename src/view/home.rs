//! Home screen rendering: title, description, two pickers and the button.

use super::constants::{BUTTON_HEIGHT, FORM_MAX_WIDTH, PICKER_FIELD_HEIGHT};
use super::styles::Theme;
use crate::controller::HomeScreen;
use crate::model::PickerOption;
use crate::state::HomeField;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Application name shown above the title.
pub const BRAND: &str = "♻ Ecoleta";

/// Home title.
pub const TITLE: &str = "Seu marketplace de coleta de resíduos.";

/// Home description.
pub const DESCRIPTION: &str = "Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente.";

/// Placeholder of the state picker.
pub const UF_PLACEHOLDER: &str = "Selecione o estado";

/// Placeholder of the city picker.
pub const CITY_PLACEHOLDER: &str = "Selecione uma Cidade";

/// Label of the confirm button.
pub const SUBMIT_LABEL: &str = "Entrar";

/// Render the Home screen into `area`.
pub fn render_home(frame: &mut Frame, area: Rect, home: &HomeScreen, theme: &Theme) {
    let width = area.width.min(FORM_MAX_WIDTH);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let [_, brand, title, description, _, uf, city, _, button, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(PICKER_FIELD_HEIGHT),
        Constraint::Length(PICKER_FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Fill(1),
    ])
    .areas(column);

    frame.render_widget(Paragraph::new(BRAND).style(theme.title), brand);
    frame.render_widget(
        Paragraph::new(TITLE)
            .style(theme.title)
            .wrap(Wrap { trim: true }),
        title,
    );
    frame.render_widget(
        Paragraph::new(DESCRIPTION)
            .style(theme.text)
            .wrap(Wrap { trim: true }),
        description,
    );

    let state = home.controller.state();
    let focus = home.form.focus;
    render_picker_field(
        frame,
        uf,
        display_value(&state.states, state.selection.uf()),
        UF_PLACEHOLDER,
        focus == HomeField::UfPicker,
        theme,
    );
    render_picker_field(
        frame,
        city,
        display_value(&state.cities, state.selection.city()),
        CITY_PLACEHOLDER,
        focus == HomeField::CityPicker,
        theme,
    );
    render_button(frame, button, focus == HomeField::Submit, theme);
}

/// Label to show for a picker value: the option label when listed, the raw
/// value otherwise, `None` when unselected.
fn display_value<'a>(options: &'a [PickerOption], value: &'a str) -> Option<&'a str> {
    if value.is_empty() {
        return None;
    }
    Some(
        options
            .iter()
            .find(|option| option.value == value)
            .map_or(value, |option| option.label.as_str()),
    )
}

fn render_picker_field(
    frame: &mut Frame,
    area: Rect,
    value: Option<&str>,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    let border = if focused { theme.focused } else { theme.unfocused };
    let text = match value {
        Some(value) => Span::styled(value.to_string(), theme.text),
        None => Span::styled(placeholder.to_string(), theme.muted),
    };
    let line = Line::from(vec![text, Span::styled("  ▾", theme.muted)]);
    let field = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border),
    );
    frame.render_widget(field, area);
}

fn render_button(frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
    let label = if focused {
        format!("▶ {SUBMIT_LABEL} ◀")
    } else {
        SUBMIT_LABEL.to_string()
    };
    let border = if focused { theme.focused } else { theme.unfocused };
    let button = Paragraph::new(Line::from(Span::styled(label, theme.button)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    frame.render_widget(button, area);
}
