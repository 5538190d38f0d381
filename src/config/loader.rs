//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PrivGuardConfig;
use crate::domain::errors::PrivGuardError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`PrivGuardConfig`]
/// 4. Applies environment variable overrides (`PRIVGUARD_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is not set, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use privguard::config::load_config;
///
/// let config = load_config("privguard.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PrivGuardConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PrivGuardError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PrivGuardError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PrivGuardConfig = toml::from_str(&contents)
        .map_err(|e| PrivGuardError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        PrivGuardError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads the configuration file when present, defaults otherwise
///
/// The CLI works out of the box without a `privguard.toml`; environment
/// overrides still apply to the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<PrivGuardConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        let mut config = PrivGuardConfig::default();
        apply_env_overrides(&mut config)?;
        config.validate().map_err(|e| {
            PrivGuardError::Configuration(format!("Configuration validation failed: {e}"))
        })?;
        Ok(config)
    }
}

/// Substitutes environment variables in the format `${VAR_NAME}`
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line so placeholders in comments are left alone.
    for line in input.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PrivGuardError::Configuration(format!(
            "Missing environment variables referenced in configuration: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies `PRIVGUARD_*` environment variable overrides
fn apply_env_overrides(config: &mut PrivGuardConfig) -> Result<()> {
    if let Ok(val) = std::env::var("PRIVGUARD_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("PRIVGUARD_POLICY_PATH") {
        config.policy.path = Some(val.into());
    }

    if let Ok(val) = std::env::var("PRIVGUARD_OUTPUT_DIR") {
        config.protection.output_dir = val.into();
    }

    if let Ok(val) = std::env::var("PRIVGUARD_AUDIT_ENABLED") {
        config.audit.enabled = val
            .parse()
            .map_err(|_| PrivGuardError::Configuration(format!(
                "Invalid PRIVGUARD_AUDIT_ENABLED value: {val}"
            )))?;
    }

    if let Ok(val) = std::env::var("PRIVGUARD_AUDIT_LOG_PATH") {
        config.audit.log_path = val.into();
    }

    Ok(())
}
