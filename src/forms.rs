// src/forms.rs
use crate::events::{ChangeEvent, Field, SubmitEvent};
use crate::models::{LoginFormProps, SignupFormProps};
use crate::templates;
use crate::translate::Translate;

type ChangeHandler<'h> = Box<dyn FnMut(ChangeEvent) + 'h>;
type SubmitHandler<'h> = Box<dyn FnMut(SubmitEvent) + 'h>;

/// The signup form component: a view model plus the two handlers the
/// parent supplies. Rendering is pure; `change` and `submit` each
/// dispatch exactly one handler call and touch nothing else.
pub struct SignupForm<'h> {
    props: SignupFormProps,
    on_change: ChangeHandler<'h>,
    on_submit: SubmitHandler<'h>,
}

impl<'h> SignupForm<'h> {
    pub fn new(
        props: SignupFormProps,
        on_change: impl FnMut(ChangeEvent) + 'h,
        on_submit: impl FnMut(SubmitEvent) + 'h,
    ) -> Self {
        Self {
            props,
            on_change: Box::new(on_change),
            on_submit: Box::new(on_submit),
        }
    }

    pub fn props(&self) -> &SignupFormProps {
        &self.props
    }

    /// Renders the form fragment from the current view model.
    pub fn render(&self, t: &dyn Translate) -> String {
        templates::signup::render(&self.props, t)
    }

    /// Renders the full page (fragment plus shell).
    pub fn render_page(&self, t: &dyn Translate) -> String {
        templates::signup::page(&self.props, t)
    }

    /// Forwards a field edit to the change handler. Values are owned by
    /// the parent; the component does not update its own view model.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if field == Field::Password {
            tracing::debug!(field = field.name(), "field changed");
        } else {
            tracing::debug!(field = field.name(), value = %value, "field changed");
        }
        (self.on_change)(ChangeEvent { field, value });
    }

    /// Forwards a form submission to the submit handler.
    pub fn submit(&mut self) {
        tracing::debug!("signup form submitted");
        (self.on_submit)(SubmitEvent);
    }
}

/// The login form component, same contract as [`SignupForm`].
pub struct LoginForm<'h> {
    props: LoginFormProps,
    on_change: ChangeHandler<'h>,
    on_submit: SubmitHandler<'h>,
}

impl<'h> LoginForm<'h> {
    pub fn new(
        props: LoginFormProps,
        on_change: impl FnMut(ChangeEvent) + 'h,
        on_submit: impl FnMut(SubmitEvent) + 'h,
    ) -> Self {
        Self {
            props,
            on_change: Box::new(on_change),
            on_submit: Box::new(on_submit),
        }
    }

    pub fn props(&self) -> &LoginFormProps {
        &self.props
    }

    pub fn render(&self, t: &dyn Translate) -> String {
        templates::login::render(&self.props, t)
    }

    pub fn render_page(&self, t: &dyn Translate) -> String {
        templates::login::page(&self.props, t)
    }

    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if field == Field::Password {
            tracing::debug!(field = field.name(), "field changed");
        } else {
            tracing::debug!(field = field.name(), value = %value, "field changed");
        }
        (self.on_change)(ChangeEvent { field, value });
    }

    pub fn submit(&mut self) {
        tracing::debug!("login form submitted");
        (self.on_submit)(SubmitEvent);
    }
}
