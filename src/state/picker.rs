//! State for the picker popup list.
//!
//! Row 0 is always the placeholder ("Selecione ..."); choosing it clears the
//! selection. Rows `1..=n` map to `options[0..n]`.

use crate::model::PickerOption;

/// Which Home picker a popup belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerField {
    /// State (UF) picker.
    Uf,
    /// City picker.
    City,
}

/// Open picker popup.
///
/// `selected_row` stays in `0..row_count`, clamped on every move. Scrolling
/// is left to the list widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerPopup {
    field: PickerField,
    selected_row: usize,
}

impl PickerPopup {
    /// Open a popup with the cursor on `current_row`.
    pub fn open(field: PickerField, current_row: usize) -> Self {
        Self {
            field,
            selected_row: current_row,
        }
    }

    /// Picker this popup edits.
    pub fn field(&self) -> PickerField {
        self.field
    }

    /// Row under the cursor.
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Move selection up, clamping at 0.
    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Move selection down, clamping at the last row.
    pub fn select_next(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected_row = (self.selected_row + 1).min(row_count - 1);
        }
    }

    /// Jump to the placeholder row.
    pub fn select_first(&mut self) {
        self.selected_row = 0;
    }

    /// Jump to the last row.
    pub fn select_last(&mut self, row_count: usize) {
        self.selected_row = row_count.saturating_sub(1);
    }
}

/// Number of rows in a popup over `options`, placeholder included.
pub fn row_count(options: &[PickerOption]) -> usize {
    options.len() + 1
}

/// Value chosen by selecting `row`; the placeholder yields `""`.
///
/// `None` when the row is out of range (the list shrank under the cursor).
pub fn value_at_row(options: &[PickerOption], row: usize) -> Option<String> {
    match row {
        0 => Some(String::new()),
        n => options.get(n - 1).map(|option| option.value.clone()),
    }
}

/// Row holding `value`, or the placeholder row when not listed.
pub fn row_of_value(options: &[PickerOption], value: &str) -> usize {
    if value.is_empty() {
        return 0;
    }
    options
        .iter()
        .position(|option| option.value == value)
        .map_or(0, |i| i + 1)
}
