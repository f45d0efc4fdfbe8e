// davidgram-ui/src/lib.rs
//! Presentational form components for the Davidgram web client.
//!
//! Everything here is stateless: a view model and a translation function
//! go in, an HTML fragment comes out. Validation, authentication,
//! routing and styling all live upstream.

pub mod events;
pub mod forms;
pub mod models;
pub mod templates;
pub mod translate;

pub use events::{ChangeEvent, Field, SubmitEvent};
pub use forms::{LoginForm, SignupForm};
pub use models::{LoginFormProps, SignupFormProps};
pub use translate::{Identity, Translate};
