//! Input field demo page: the gallery of configurations.

use egui::{ScrollArea, Ui};
use gridform_widgets::{InputField, InputSize, InputVariant};

use crate::state::DemoState;

/// Width the gallery constrains its fields to.
const FIELD_WIDTH: f32 = 360.0;

/// Renders the input field gallery.
pub fn input_page(state: &mut DemoState, ui: &mut Ui) {
    ui.heading("Input Field");
    ui.add_space(12.0);

    ScrollArea::vertical().show(ui, |ui| {
        ui.set_max_width(FIELD_WIDTH);

        // Basic outlined input with helper text.
        InputField::new(&mut state.text)
            .label("Name")
            .placeholder("Enter your name")
            .helper_text("This is a helper text")
            .show(ui);
        ui.add_space(16.0);

        ui.strong("Variants");
        ui.add_space(4.0);
        InputField::new(&mut state.text)
            .label("Outlined")
            .placeholder("Outlined variant")
            .variant(InputVariant::Outlined)
            .show(ui);
        InputField::new(&mut state.text)
            .label("Filled")
            .placeholder("Filled variant")
            .variant(InputVariant::Filled)
            .show(ui);
        InputField::new(&mut state.text)
            .label("Ghost")
            .placeholder("Ghost variant")
            .variant(InputVariant::Ghost)
            .show(ui);
        ui.add_space(16.0);

        ui.strong("Sizes");
        ui.add_space(4.0);
        InputField::new(&mut state.text)
            .label("Small")
            .placeholder("Small input")
            .size(InputSize::Sm)
            .show(ui);
        InputField::new(&mut state.text)
            .label("Medium")
            .placeholder("Medium input")
            .size(InputSize::Md)
            .show(ui);
        InputField::new(&mut state.text)
            .label("Large")
            .placeholder("Large input")
            .size(InputSize::Lg)
            .show(ui);
        ui.add_space(16.0);

        // Password with visibility toggle.
        InputField::new(&mut state.password)
            .label("Password")
            .placeholder("Enter password")
            .password_toggle(true)
            .show(ui);
        ui.add_space(16.0);

        // Clearable input.
        InputField::new(&mut state.text)
            .label("Search")
            .placeholder("Type something...")
            .clearable(true)
            .show(ui);
        ui.add_space(16.0);

        // Invalid state.
        InputField::new(&mut state.text)
            .label("Email")
            .placeholder("Invalid email example")
            .invalid(true)
            .error_message("Invalid email format")
            .show(ui);
        ui.add_space(16.0);

        // Disabled.
        InputField::new(&mut state.disabled_text)
            .label("Disabled")
            .placeholder("This is disabled")
            .disabled(true)
            .show(ui);
        ui.add_space(16.0);

        // Loading state.
        InputField::new(&mut state.text)
            .label("Loading")
            .placeholder("Loading input...")
            .loading(true)
            .show(ui);
    });
}
