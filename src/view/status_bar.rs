//! One-line status bar: current screen and key hints.

use super::styles::Theme;
use crate::controller::Screen;
use crate::state::Route;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key hints for the current screen.
pub fn hints(screen: &Screen) -> &'static str {
    match screen {
        Screen::Home(home) if home.form.popup.is_some() => {
            "↑/↓: mover  Enter: escolher  Esc: cancelar"
        }
        Screen::Home(_) => "Tab: próximo campo  Enter: abrir/confirmar  ?: ajuda  q: sair",
        Screen::Points(_) => "↑/↓: mover  Enter: detalhes  Esc: voltar  ?: ajuda  q: sair",
        Screen::Detail(_) => "w: WhatsApp  e: E-mail  Esc: voltar  ?: ajuda  q: sair",
    }
}

/// Render the status bar.
pub fn render_status_bar(frame: &mut Frame, area: Rect, screen: &Screen, theme: &Theme) {
    let name = match screen.route() {
        Route::Points { city, uf } => format!(" Points · {city}/{uf} "),
        route => format!(" {} ", route.name()),
    };
    let line = Line::from(vec![
        Span::styled(name, theme.button),
        Span::raw(" "),
        Span::styled(hints(screen), theme.muted),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
