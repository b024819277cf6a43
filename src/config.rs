use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

// --- Public config types ---

pub struct Config {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

// --- TOML deserialization types ---

#[derive(Deserialize, Default)]
struct FileConfig {
    server: Option<ServerFileSection>,
}

#[derive(Deserialize)]
struct ServerFileSection {
    host: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

// --- File helpers ---

fn host_from_file(fc: &FileConfig) -> Option<String> {
    fc.server
        .as_ref()
        .and_then(|s| s.host.clone())
        .filter(|s| !s.is_empty())
}

fn username_from_file(fc: &FileConfig) -> Option<String> {
    fc.server
        .as_ref()
        .and_then(|s| s.username.clone())
        .filter(|s| !s.is_empty())
}

fn password_from_file(fc: &FileConfig) -> Option<String> {
    fc.server
        .as_ref()
        .and_then(|s| s.password.clone())
        .filter(|s| !s.is_empty())
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

// --- Public API ---

fn config_path() -> PathBuf {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let home = std::env::var_os("HOME").unwrap_or_default();
            PathBuf::from(home).join(".config")
        });
    config_dir.join("wpsmoke").join("config.toml")
}

/// Parse config from TOML content only (no env vars, no prompts).
/// Exposed for testing.
pub fn parse_toml_config(content: &str) -> Result<Config> {
    let fc: FileConfig = toml::from_str(content).context("Failed to parse config")?;
    Ok(Config {
        host: host_from_file(&fc),
        username: username_from_file(&fc),
        password: password_from_file(&fc),
    })
}

/// Load config from file and env vars.
///
/// Precedence for each field:
/// 1. Environment variables (WPSMOKE_HOST, WPSMOKE_USERNAME, WPSMOKE_PASSWORD)
/// 2. Config file [server] section
///
/// Missing fields stay `None`; callers decide whether to prompt or bail.
pub fn load_config() -> Result<Config> {
    let file_contents = match std::fs::read_to_string(config_path()) {
        Ok(c) => c,
        Err(_) => String::new(),
    };
    let fc: FileConfig =
        toml::from_str(&file_contents).context("Failed to parse config file")?;

    Ok(Config {
        host: env_var("WPSMOKE_HOST").or_else(|| host_from_file(&fc)),
        username: env_var("WPSMOKE_USERNAME").or_else(|| username_from_file(&fc)),
        password: env_var("WPSMOKE_PASSWORD").or_else(|| password_from_file(&fc)),
    })
}

// --- Interactive prompts ---

pub fn prompt_username() -> Result<String> {
    if !io::stdin().is_terminal() {
        bail!(
            "No username provided. Set WPSMOKE_USERNAME or add username to \
             ~/.config/wpsmoke/config.toml"
        );
    }
    eprint!("Username: ");
    io::stderr().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim().to_string();
    if trimmed.is_empty() {
        bail!("Username cannot be empty");
    }
    Ok(trimmed)
}

pub fn prompt_password() -> Result<String> {
    if !io::stdin().is_terminal() {
        bail!(
            "No password provided. Set WPSMOKE_PASSWORD or add password to \
             ~/.config/wpsmoke/config.toml"
        );
    }
    eprint!("Password: ");
    io::stderr().flush()?;
    let password = rpassword::read_password().context("Failed to read password")?;
    if password.is_empty() {
        bail!("Password cannot be empty");
    }
    Ok(password)
}
