use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::debug;
pub mod models;
pub use models::*;

/// Prefix of environment variables that override configuration values,
/// e.g. `SLOTBOOK__API__BASE_URL`.
pub const ENV_PREFIX: &str = "SLOTBOOK";

/// Separator between path segments in overriding environment variables.
pub const ENV_SEPARATOR: &str = "__";

/// Longest accepted session TTL: one hundred years.
pub const MAX_SESSION_TTL_MINUTES: i64 = 525_600 * 100;

/// Loads the application configuration.
///
/// Sources are layered in this order, later ones winning:
/// `config/default.*`, `config/{RUN_ENV}.*` and `SLOTBOOK__*` environment
/// variables. The directory can be moved with `SLOTBOOK_CONFIG_DIR`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("SLOTBOOK_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);
    debug!(
        "Loading configuration from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false));

    build_config(builder)
}

/// Finishes a builder with the environment layer, deserializes and validates it.
pub fn build_config(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
        .build()?
        .try_deserialize()?;
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    /// Rejects values the front-end cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::Message("api.base_url must not be empty".into()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Message(format!(
                "api.base_url must be an http(s) URL, got '{base_url}'"
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Message("api.timeout_secs must be positive".into()));
        }
        if self.session.ttl_minutes <= 0 {
            return Err(ConfigError::Message("session.ttl_minutes must be positive".into()));
        }
        if self.session.ttl_minutes > MAX_SESSION_TTL_MINUTES {
            return Err(ConfigError::Message(format!(
                "session.ttl_minutes must be at most {MAX_SESSION_TTL_MINUTES}"
            )));
        }
        Ok(())
    }
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment once.
///
/// The file defaults to `.env` and can be overridden with `DOTENV_OVERRIDE`.
/// Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
