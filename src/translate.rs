// src/translate.rs

/// Seam for the external translation function: a literal string key in,
/// a localized string out. The localization machinery itself lives
/// outside this crate.
pub trait Translate {
    fn t(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn t(&self, key: &str) -> String {
        self(key)
    }
}

/// Passthrough translator returning the key unchanged. Useful for
/// previews and tests when no catalog is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translate for Identity {
    fn t(&self, key: &str) -> String {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_returns_key() {
        assert_eq!(Identity.t("Sign up"), "Sign up");
    }

    #[test]
    fn test_closures_are_translators() {
        let upper = |key: &str| key.to_uppercase();
        assert_eq!(upper.t("or"), "OR");
    }
}
