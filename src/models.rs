// src/models.rs
use serde::{Deserialize, Serialize};

/// View model for the signup form. All four values are required; an
/// absent field is a caller bug the type system catches, not a runtime
/// condition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupFormProps {
    pub email_value: String,
    pub fullname_value: String,
    pub username_value: String,
    pub password_value: String,
}

/// View model for the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginFormProps {
    pub username_value: String,
    pub password_value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_props_from_json() {
        let props: SignupFormProps = serde_json::from_str(
            r#"{
                "email_value": "link@hyrule.example",
                "fullname_value": "Link",
                "username_value": "link",
                "password_value": "hunter22"
            }"#,
        )
        .unwrap();
        assert_eq!(props.email_value, "link@hyrule.example");
        assert_eq!(props.username_value, "link");
    }

    #[test]
    fn test_signup_props_reject_missing_field() {
        // password_value absent: caller contract violation, caught at the edge
        let result = serde_json::from_str::<SignupFormProps>(
            r#"{
                "email_value": "a@b.c",
                "fullname_value": "A B",
                "username_value": "ab"
            }"#,
        );
        assert!(result.is_err());
    }
}
