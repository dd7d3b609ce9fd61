//! Points screen rendering.

use super::styles::Theme;
use crate::controller::{LoadPhase, PointsController};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the list of collection points for the city.
pub fn render_points(frame: &mut Frame, area: Rect, points: &PointsController, theme: &Theme) {
    let state = points.state();
    let [header, body] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);

    let heading = Line::from(vec![
        Span::styled("Pontos de coleta", theme.title),
        Span::styled(format!("  {}, {}", state.city, state.uf), theme.text),
    ]);
    frame.render_widget(Paragraph::new(heading), header);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.unfocused);

    if state.points.is_empty() {
        let message = match state.phase {
            LoadPhase::Loaded => "Nenhum ponto de coleta encontrado.",
            _ => "Carregando...",
        };
        frame.render_widget(Paragraph::new(message).style(theme.muted).block(block), body);
        return;
    }

    let items: Vec<ListItem> = state
        .points
        .iter()
        .map(|point| {
            ListItem::new(Line::from(vec![
                Span::styled(point.name.clone(), theme.title),
                Span::styled(format!("  {}, {}", point.city, point.uf), theme.text),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight)
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, body, &mut list_state);
}
