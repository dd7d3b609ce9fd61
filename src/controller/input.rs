//! Key action dispatch to the current screen.
//!
//! Global actions (help, quit) are handled by the shell before reaching
//! this module.

use super::{DetailController, Effect, HomeScreen, PointsController, Screen};
use crate::links::LinkOpener;
use crate::model::KeyAction;
use crate::state::picker::{row_count, row_of_value, value_at_row};
use crate::state::{HomeField, PickerField, PickerPopup};

/// Apply a key action to `screen`.
///
/// Returns the fetch or navigation the action produced, if any.
pub fn handle_action(
    screen: &mut Screen,
    action: KeyAction,
    opener: &dyn LinkOpener,
) -> Option<Effect> {
    match screen {
        Screen::Home(home) => handle_home(home, action),
        Screen::Points(points) => handle_points(points, action),
        Screen::Detail(detail) => handle_detail(detail, action, opener),
    }
}

fn handle_home(home: &mut HomeScreen, action: KeyAction) -> Option<Effect> {
    if let Some(popup) = home.form.popup.take() {
        return handle_popup(home, popup, action);
    }

    match action {
        KeyAction::NextField | KeyAction::MoveDown => {
            home.form.focus = home.form.focus.next();
            None
        }
        KeyAction::PrevField | KeyAction::MoveUp => {
            home.form.focus = home.form.focus.prev();
            None
        }
        KeyAction::MoveFirst => {
            home.form.focus = HomeField::UfPicker;
            None
        }
        KeyAction::MoveLast => {
            home.form.focus = HomeField::Submit;
            None
        }
        KeyAction::Activate => match home.form.focus {
            HomeField::UfPicker => {
                let state = home.controller.state();
                let row = row_of_value(&state.states, state.selection.uf());
                home.form.popup = Some(PickerPopup::open(PickerField::Uf, row));
                None
            }
            HomeField::CityPicker => {
                let state = home.controller.state();
                let row = row_of_value(&state.cities, state.selection.city());
                home.form.popup = Some(PickerPopup::open(PickerField::City, row));
                None
            }
            HomeField::Submit => home.controller.confirm().map(Effect::Navigate),
        },
        _ => None,
    }
}

/// Popup captures every action until it is closed. `popup` was taken out of
/// the form and is put back unless the action closes it.
fn handle_popup(home: &mut HomeScreen, mut popup: PickerPopup, action: KeyAction) -> Option<Effect> {
    let state = home.controller.state();
    let options = match popup.field() {
        PickerField::Uf => &state.states,
        PickerField::City => &state.cities,
    };
    let rows = row_count(options);

    match action {
        KeyAction::MoveUp | KeyAction::PrevField => popup.select_prev(),
        KeyAction::MoveDown | KeyAction::NextField => popup.select_next(rows),
        KeyAction::MoveFirst => popup.select_first(),
        KeyAction::MoveLast => popup.select_last(rows),
        KeyAction::Back => return None,
        KeyAction::Activate => {
            let Some(value) = value_at_row(options, popup.selected_row()) else {
                return None;
            };
            return match popup.field() {
                PickerField::Uf => home.controller.select_uf(value).map(Effect::Fetch),
                PickerField::City => {
                    home.controller.select_city(value);
                    None
                }
            };
        }
        _ => {}
    }

    home.form.popup = Some(popup);
    None
}

fn handle_points(points: &mut PointsController, action: KeyAction) -> Option<Effect> {
    match action {
        KeyAction::MoveUp => points.select_prev(),
        KeyAction::MoveDown => points.select_next(),
        KeyAction::MoveFirst => points.select_first(),
        KeyAction::MoveLast => points.select_last(),
        KeyAction::Activate => return points.open_selected().map(Effect::Navigate),
        KeyAction::Back => return Some(Effect::Navigate(points.go_back())),
        _ => {}
    }
    None
}

fn handle_detail(
    detail: &mut DetailController,
    action: KeyAction,
    opener: &dyn LinkOpener,
) -> Option<Effect> {
    // Alert is modal.
    if detail.state().alert.is_some() {
        if matches!(action, KeyAction::Activate | KeyAction::Back) {
            detail.dismiss_alert();
        }
        return None;
    }

    match action {
        KeyAction::Back => Some(Effect::Navigate(detail.go_back())),
        KeyAction::ComposeEmail => {
            detail.compose_email(opener);
            None
        }
        KeyAction::OpenWhatsapp => {
            detail.open_whatsapp(opener);
            None
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
