//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by
//! screen. Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::centered_percent;
use super::styles::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
///
/// Shortcuts are grouped as:
/// - Navigation
/// - Home
/// - Detail
/// - Application
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let popup_area = centered_percent(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(theme))
        .block(
            Block::default()
                .title(" Atalhos de teclado ")
                .borders(Borders::ALL)
                .border_style(theme.focused),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Esc ou ? para fechar ",
        theme.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

fn section(title: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(title, theme.heading)])
}

fn shortcut(keys: &'static str, description: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<14}"), theme.focused.add_modifier(Modifier::BOLD)),
        Span::styled(description, theme.text),
    ])
}

/// Build the help content lines grouped by screen.
fn build_help_content(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        section("Navegação", theme),
        shortcut("j/↓  k/↑", "Mover seleção", theme),
        shortcut("g/Home G/End", "Primeiro / último item", theme),
        shortcut("Enter/Space", "Abrir / escolher / confirmar", theme),
        shortcut("Esc/Backspace", "Fechar lista ou voltar", theme),
        Line::from(""),
        section("Início", theme),
        shortcut("Tab/Shift+Tab", "Próximo / anterior campo", theme),
        Line::from(""),
        section("Detalhe", theme),
        shortcut("w", "Conversar pelo WhatsApp", theme),
        shortcut("e", "Enviar e-mail", theme),
        Line::from(""),
        section("Aplicação", theme),
        shortcut("?", "Mostrar / esconder ajuda", theme),
        shortcut("q/Ctrl+c", "Sair", theme),
    ]
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
