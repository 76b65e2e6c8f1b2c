use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// `OPENAI_API_KEY` is the hard gate: if it is absent the process refuses to
/// start, so no form is ever served and no completion call is ever attempted
/// without a credential.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    /// Path to the logo image embedded in every letter header.
    pub logo_path: String,
    /// Directory that generated `.docx` files are written into.
    pub output_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            logo_path: std::env::var("LOGO_PATH")
                .unwrap_or_else(|_| "coursemon_pic_logo.jpg".to_string()),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or_else(|_| ".".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
