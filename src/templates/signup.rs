// src/templates/signup.rs
use super::{form_input, render_page};
use crate::events::Field;
use crate::models::SignupFormProps;
use crate::translate::Translate;

/// Renders the signup form fragment: header, social login button,
/// divider, the four bound inputs plus submit, and the terms notice.
/// Every displayed literal goes through the translation function.
pub fn render(props: &SignupFormProps, t: &dyn Translate) -> String {
    let inputs = Field::ALL
        .map(|field| form_input(field, value_for(props, field), t))
        .join("\n            ");

    format!(
        r#"
    <div class="form-component">
        <h3 class="signup-header">{header}</h3>
        <button class="button button-facebook" type="button">
            <span class="icon icon-facebook" aria-hidden="true"></span>
            {facebook}
        </button>
        <span class="divider">{divider}</span>
        <form class="form" method="POST" action="/signup">
            {inputs}
            <input class="button" type="submit" value="{submit}">
        </form>
        <p class="terms">{terms_lead} <span>{terms_link}</span>.</p>
    </div>
    "#,
        header = t.t("Sign up to see photos and videos from your friends."),
        facebook = t.t("Log in With Facebook"),
        divider = t.t("or"),
        inputs = inputs,
        submit = t.t("Sign up"),
        terms_lead = t.t("By signing up, you agree to our"),
        terms_link = t.t("Terms & Privacy Policy"),
    )
}

/// The signup fragment wrapped in the page shell.
pub fn page(props: &SignupFormProps, t: &dyn Translate) -> String {
    render_page("Sign up", &render(props, t), t)
}

fn value_for(props: &SignupFormProps, field: Field) -> &str {
    match field {
        Field::Email => &props.email_value,
        Field::FullName => &props.fullname_value,
        Field::Username => &props.username_value,
        Field::Password => &props.password_value,
    }
}
