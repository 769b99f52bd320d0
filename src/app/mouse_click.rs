//! Mouse click handling
//!
//! Clicks on a dropdown row select that city; any other click closes the dropdown.

use super::state::App;

/// Handle left mouse button click at the given terminal cell
pub fn handle_click(app: &mut App, column: u16, row: u16) {
    let index = app
        .popup_layout
        .as_ref()
        .and_then(|layout| layout.item_at(column, row));

    match index {
        Some(index) => {
            app.widget.on_item_click(index);
        }
        None => app.widget.on_outside_click(),
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
