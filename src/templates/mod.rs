// src/templates/mod.rs
pub mod login;
pub mod signup;

mod layout;

pub use layout::render_page;

use crate::events::Field;
use crate::translate::Translate;

// Helper function for HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders one labeled text input bound to the supplied value. The
/// label and placeholder both come from the field's translation key.
pub(crate) fn form_input(field: Field, value: &str, t: &dyn Translate) -> String {
    let label = t.t(field.label_key());
    format!(
        r#"<div class="form-group">
                <label for="{name}">{label}</label>
                <input class="text-input" type="{kind}" id="{name}" name="{name}" placeholder="{label}" value="{value}" required>
            </div>"#,
        name = field.name(),
        kind = field.input_type(),
        label = label,
        value = html_escape(value),
    )
}
