// src/events.rs
use serde::{Deserialize, Serialize};

/// The four signup form controls, identified by the `name` attribute
/// they carry in the rendered markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    FullName,
    Username,
    Password,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Email,
        Field::FullName,
        Field::Username,
        Field::Password,
    ];

    /// Wire name used for the control's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::FullName => "fullname",
            Field::Username => "username",
            Field::Password => "password",
        }
    }

    /// HTML `type` attribute for the control.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::FullName => "text",
            Field::Username => "text",
            Field::Password => "password",
        }
    }

    /// Translation key for the control's label and placeholder.
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::FullName => "Full Name",
            Field::Username => "Username",
            Field::Password => "Password",
        }
    }

    /// Maps a posted control name back to its field.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// Emitted once per field edit, carrying the control's wire name and
/// the new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub field: Field,
    pub value: String,
}

impl ChangeEvent {
    pub fn name(&self) -> &'static str {
        self.field.name()
    }
}

/// Emitted once per form submission. The form has nothing to report
/// beyond the fact of submission; the values live in the caller-owned
/// view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitEvent;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_wire_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("full_name"), None);
    }

    #[test]
    fn test_input_types() {
        assert_eq!(Field::Email.input_type(), "email");
        assert_eq!(Field::Password.input_type(), "password");
        // "username" is not a real input type; the control is plain text
        assert_eq!(Field::Username.input_type(), "text");
        assert_eq!(Field::FullName.input_type(), "text");
    }

    #[test]
    fn test_change_event_exposes_wire_name() {
        let event = ChangeEvent {
            field: Field::FullName,
            value: "Princess Zelda".to_string(),
        };
        assert_eq!(event.name(), "fullname");
    }
}
