//! Layout dimension constants for TUI rendering.

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of a picker field (border + value).
pub const PICKER_FIELD_HEIGHT: u16 = 3;

/// Height of the "Entrar" button.
pub const BUTTON_HEIGHT: u16 = 3;

/// Maximum width of the Home form column.
pub const FORM_MAX_WIDTH: u16 = 60;

/// Width of the picker popup in columns.
pub const PICKER_POPUP_WIDTH: u16 = 50;

/// Width of the alert dialog in columns.
pub const ALERT_WIDTH: u16 = 54;

/// Height of the alert dialog in lines.
pub const ALERT_HEIGHT: u16 = 7;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
