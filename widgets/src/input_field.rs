//! Labeled single-line text input with optional adornments.
//!
//! Wraps [`egui::TextEdit`] with the trimmings a form field needs: a
//! label above, helper or error text below, and trailing affordances
//! for clearing the value, toggling password visibility, and showing
//! a busy spinner. The caller owns the value; the widget edits it in
//! place and reports whether it changed this frame.

use egui::{
    Align, Color32, FontId, Frame, Layout, Margin, Response, RichText, Stroke, TextEdit, Ui,
};

/// Red used for the invalid frame and the error message.
const COLOR_ERROR: Color32 = Color32::from_rgb(220, 53, 69);

/// Visual treatment of the input frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    /// Background-filled, no border.
    Filled,
    /// Bordered, transparent background.
    #[default]
    Outlined,
    /// No border, no background.
    Ghost,
}

/// Input size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    fn font_size(self) -> f32 {
        match self {
            Self::Sm => 12.0,
            Self::Md => 14.0,
            Self::Lg => 18.0,
        }
    }

    fn inner_margin(self) -> Margin {
        match self {
            Self::Sm => Margin::symmetric(6, 3),
            Self::Md => Margin::symmetric(8, 5),
            Self::Lg => Margin::symmetric(10, 8),
        }
    }
}

/// The underlying input kind.
///
/// Only masking is functionally observable here; `Email` exists so
/// callers can state intent, and so the password-toggle override has
/// something to override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
}

/// What one call to [`InputField::show`] reports back.
pub struct InputFieldResponse {
    /// The response of the inner text edit.
    pub response: Response,
    /// True when the value changed this frame, through typing or the
    /// clear affordance.
    pub changed: bool,
}

/// A labeled single-line text input.
///
/// ```no_run
/// # fn demo(ui: &mut egui::Ui, search: &mut String) {
/// use gridform_widgets::InputField;
///
/// let output = InputField::new(search)
///     .label("Search")
///     .placeholder("Type something...")
///     .clearable(true)
///     .show(ui);
/// if output.changed {
///     // react to the new value
/// }
/// # }
/// ```
pub struct InputField<'a> {
    value: &'a mut String,
    label: Option<String>,
    placeholder: Option<String>,
    helper_text: Option<String>,
    error_message: Option<String>,
    disabled: bool,
    invalid: bool,
    loading: bool,
    variant: InputVariant,
    size: InputSize,
    kind: InputKind,
    clearable: bool,
    password_toggle: bool,
    id_salt: Option<egui::Id>,
}

impl<'a> InputField<'a> {
    /// A new input field editing `value` in place.
    pub fn new(value: &'a mut String) -> Self {
        Self {
            value,
            label: None,
            placeholder: None,
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            loading: false,
            variant: InputVariant::default(),
            size: InputSize::default(),
            kind: InputKind::default(),
            clearable: false,
            password_toggle: false,
            id_salt: None,
        }
    }

    /// Label rendered above the input.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Hint text shown while the value is empty.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Assistive text shown below the input when the field is valid.
    pub fn helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    /// Text shown below the input when the field is marked invalid.
    pub fn error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }

    /// Grey out and reject edits.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark the value invalid: red frame, error message instead of
    /// helper text.
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Show a busy spinner. Purely visual; does not disable the input.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Frame treatment; defaults to [`InputVariant::Outlined`].
    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Size preset; defaults to [`InputSize::Md`].
    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Underlying input kind; defaults to [`InputKind::Text`]. With
    /// [`Self::password_toggle`] enabled the kind is overridden to a
    /// masked input whenever visibility is off, whatever is set here.
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Show a clear button while the value is non-empty and the field
    /// is enabled. Clearing reports a change with the empty value, as
    /// if the user had erased the text.
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Show a visibility toggle and start masked. The toggle renders
    /// regardless of the disabled and loading flags.
    pub fn password_toggle(mut self, password_toggle: bool) -> Self {
        self.password_toggle = password_toggle;
        self
    }

    /// Distinguishes the visibility state of password fields that
    /// share a label (or have none) within one parent `Ui`.
    pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = Some(egui::Id::new(id_salt));
        self
    }

    /// Renders the field.
    pub fn show(self, ui: &mut Ui) -> InputFieldResponse {
        let visibility_id = self.visibility_id(ui);
        let visible = ui
            .data(|d| d.get_temp::<bool>(visibility_id))
            .unwrap_or(false);
        let masked = self.effective_masked(visible);

        let Self {
            value,
            label,
            placeholder,
            helper_text,
            error_message,
            disabled,
            invalid,
            loading,
            variant,
            size,
            kind: _,
            clearable,
            password_toggle,
            id_salt: _,
        } = self;

        let mut clear_clicked = false;
        let mut toggle_clicked = false;

        let frame_stroke = if invalid {
            Stroke::new(1.0, COLOR_ERROR)
        } else {
            match variant {
                InputVariant::Outlined => ui.visuals().widgets.inactive.bg_stroke,
                InputVariant::Filled | InputVariant::Ghost => Stroke::NONE,
            }
        };
        let frame_fill = match variant {
            InputVariant::Filled => ui.visuals().faint_bg_color,
            InputVariant::Outlined | InputVariant::Ghost => Color32::TRANSPARENT,
        };
        let show_clear = clearable && !value.is_empty() && !disabled;

        let mut response = ui
            .vertical(|ui| {
                if let Some(label) = &label {
                    ui.label(RichText::new(label).strong());
                }

                let response = Frame::NONE
                    .stroke(frame_stroke)
                    .fill(frame_fill)
                    .corner_radius(6.0)
                    .inner_margin(size.inner_margin())
                    .show(ui, |ui| {
                        // Trailing adornments first (right to left):
                        // clear button outermost, then password
                        // toggle, then the spinner innermost, next to
                        // the text.
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if show_clear && ui.small_button("\u{2715}").clicked() {
                                clear_clicked = true;
                            }
                            if password_toggle {
                                let toggle_text = if visible { "Hide" } else { "Show" };
                                if ui.small_button(toggle_text).clicked() {
                                    toggle_clicked = true;
                                }
                            }
                            if loading {
                                ui.spinner();
                            }

                            let edit = TextEdit::singleline(&mut *value)
                                .hint_text(placeholder.unwrap_or_default())
                                .password(masked)
                                .font(FontId::proportional(size.font_size()))
                                .frame(false)
                                .desired_width(ui.available_width());
                            ui.add_enabled(!disabled, edit)
                        })
                        .inner
                    })
                    .inner;

                render_assistive_text(ui, invalid, error_message.as_deref(), helper_text.as_deref());
                response
            })
            .inner;
        let mut changed = response.changed();

        if toggle_clicked {
            ui.data_mut(|d| d.insert_temp(visibility_id, !visible));
        }

        if clear_clicked {
            // Synthesized change, as if the user had cleared the text.
            value.clear();
            response.mark_changed();
            changed = true;
        }

        InputFieldResponse { response, changed }
    }

    /// The effective masking after resolving the password-toggle
    /// override: an enabled toggle forces masking whenever visibility
    /// is off, regardless of the configured kind (one-way override, no
    /// merge). Without the toggle, only [`InputKind::Password`] masks.
    fn effective_masked(&self, visible: bool) -> bool {
        if self.password_toggle && !visible {
            true
        } else {
            self.kind == InputKind::Password
        }
    }

    /// Where this instance keeps its password-visibility flag. Local
    /// to the mounted instance, not persisted across app runs.
    fn visibility_id(&self, ui: &Ui) -> egui::Id {
        let salt = self.id_salt.unwrap_or_else(|| {
            egui::Id::new(self.label.as_deref().unwrap_or("input_field"))
        });
        ui.make_persistent_id(("input_field_visibility", salt))
    }
}

/// Error message when invalid, helper text otherwise. An invalid field
/// without an error message shows nothing; the helper never stands in
/// for a missing error.
fn render_assistive_text(
    ui: &mut Ui,
    invalid: bool,
    error_message: Option<&str>,
    helper_text: Option<&str>,
) {
    if invalid {
        if let Some(message) = error_message
            && !message.is_empty()
        {
            ui.label(RichText::new(message).small().color(COLOR_ERROR));
        }
    } else if let Some(helper) = helper_text {
        ui.label(RichText::new(helper).small().weak());
    }
}

#[cfg(test)]
mod input_field_tests {
    use super::{InputField, InputKind};

    fn field(value: &mut String) -> InputField<'_> {
        InputField::new(value)
    }

    #[test]
    fn password_toggle_masks_while_hidden() {
        let mut value = String::new();
        let f = field(&mut value).password_toggle(true);
        assert!(f.effective_masked(false));
        assert!(!f.effective_masked(true));
    }

    #[test]
    fn password_toggle_overrides_explicit_kind() {
        let mut value = String::new();
        let f = field(&mut value).kind(InputKind::Email).password_toggle(true);
        // One-way override: hidden forces masking even for kind Email.
        assert!(f.effective_masked(false));
        assert!(!f.effective_masked(true));
    }

    #[test]
    fn password_kind_masks_without_toggle() {
        let mut value = String::new();
        let f = field(&mut value).kind(InputKind::Password);
        assert!(f.effective_masked(false));
        // Without the toggle, visibility state is irrelevant.
        assert!(f.effective_masked(true));
    }

    #[test]
    fn text_kind_is_unmasked_without_toggle() {
        let mut value = String::new();
        let f = field(&mut value);
        assert!(!f.effective_masked(false));
    }
}
