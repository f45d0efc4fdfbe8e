// src/templates/login.rs
use super::{form_input, render_page};
use crate::events::Field;
use crate::models::LoginFormProps;
use crate::translate::Translate;

/// Renders the login form fragment: the signup form's sibling, with
/// just the username and password controls.
pub fn render(props: &LoginFormProps, t: &dyn Translate) -> String {
    format!(
        r#"
    <div class="form-component">
        <h3 class="login-header">{header}</h3>
        <form class="form" method="POST" action="/login">
            {username}
            {password}
            <input class="button" type="submit" value="{submit}">
        </form>
        <p class="auth-footer">{footer_lead} <a href="/signup">{footer_link}</a></p>
    </div>
    "#,
        header = t.t("Log in to Davidgram"),
        username = form_input(Field::Username, &props.username_value, t),
        password = form_input(Field::Password, &props.password_value, t),
        submit = t.t("Log in"),
        footer_lead = t.t("Don't have an account?"),
        footer_link = t.t("Sign up"),
    )
}

/// The login fragment wrapped in the page shell.
pub fn page(props: &LoginFormProps, t: &dyn Translate) -> String {
    render_page("Log in", &render(props, t), t)
}
