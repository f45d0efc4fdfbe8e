// src/bin/preview.rs
// Renders the signup and login pages to stdout, optionally seeding the
// signup view model from a JSON file passed as the first argument.
use davidgram_ui::models::{LoginFormProps, SignupFormProps};
use davidgram_ui::templates;
use davidgram_ui::translate::Identity;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let signup_props = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("loading signup props from {}", path);
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str::<SignupFormProps>(&raw)?
        }
        None => SignupFormProps::default(),
    };

    println!("{}", templates::signup::page(&signup_props, &Identity));
    println!("{}", templates::login::page(&LoginFormProps::default(), &Identity));

    Ok(())
}
