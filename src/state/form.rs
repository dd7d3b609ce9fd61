//! Home screen form focus.

use super::picker::PickerPopup;

/// Focusable elements of the Home form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeField {
    /// State picker.
    #[default]
    UfPicker,
    /// City picker.
    CityPicker,
    /// "Entrar" button.
    Submit,
}

impl HomeField {
    /// Next field in tab order, wrapping.
    pub fn next(self) -> Self {
        match self {
            HomeField::UfPicker => HomeField::CityPicker,
            HomeField::CityPicker => HomeField::Submit,
            HomeField::Submit => HomeField::UfPicker,
        }
    }

    /// Previous field in tab order, wrapping.
    pub fn prev(self) -> Self {
        match self {
            HomeField::UfPicker => HomeField::Submit,
            HomeField::CityPicker => HomeField::UfPicker,
            HomeField::Submit => HomeField::CityPicker,
        }
    }
}

/// Keyboard state of the Home form: focus and the open popup, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeForm {
    /// Focused field.
    pub focus: HomeField,
    /// Open picker popup. Captures movement keys while present.
    pub popup: Option<PickerPopup>,
}
