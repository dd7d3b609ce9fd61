//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// What an action does depends on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Movement
    /// Move the cursor up one row. Default: k/↑
    MoveUp,
    /// Move the cursor down one row. Default: j/↓
    MoveDown,
    /// Jump to the first row. Default: g/Home
    MoveFirst,
    /// Jump to the last row. Default: G/End
    MoveLast,

    // Form focus
    /// Focus the next form field. Default: Tab
    NextField,
    /// Focus the previous form field. Default: Shift+Tab
    PrevField,

    // Activation
    /// Open a picker, choose a row, press a button, or dismiss an alert. Default: Enter/Space
    Activate,
    /// Close the open popup, or go back one screen. Default: Esc/Backspace
    Back,

    // Detail screen
    /// Compose an e-mail to the collection point. Default: e
    ComposeEmail,
    /// Open a WhatsApp chat with the collection point. Default: w
    OpenWhatsapp,

    // Application
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
