//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ExporterConfig;
use crate::domain::errors::ExporterError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Loads configuration from an optional TOML file and the environment
///
/// This function:
/// 1. Reads the TOML file, if one is given
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ExporterConfig (defaults when no file is given)
/// 4. Applies environment variable overrides
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - A file is given but cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use log_exporter::config::loader::load_config;
/// use std::path::Path;
///
/// let from_env = load_config(None).expect("Failed to load config");
/// let from_file = load_config(Some(Path::new("log-exporter.toml"))).expect("Failed to load config");
/// ```
pub fn load_config(path: Option<&Path>) -> Result<ExporterConfig> {
    let mut config = match path {
        Some(path) => parse_config_file(path)?,
        None => ExporterConfig::default(),
    };

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ExporterError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<ExporterConfig> {
    if !path.exists() {
        return Err(ExporterError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExporterError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    toml::from_str(&contents)
        .map_err(|e| ExporterError::Configuration(format!("Failed to parse TOML: {e}")))
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("environment variable pattern is valid")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExporterError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(val) => val.trim().parse().map(Some).map_err(|_| {
            ExporterError::Configuration(format!("Invalid value for {key}: '{val}'"))
        }),
        Err(_) => Ok(None),
    }
}

/// Applies environment variable overrides
///
/// The three deployment variables (`S3_BUCKET`, `SSM_LOG_GROUP_PARAM`,
/// `AWS_ACCOUNT`) keep their historical names; tuning keys use the
/// `LOG_EXPORTER_` prefix.
fn apply_env_overrides(config: &mut ExporterConfig) -> Result<()> {
    if let Ok(val) = std::env::var("S3_BUCKET") {
        config.export.destination_bucket = Some(val);
    }
    if let Ok(val) = std::env::var("SSM_LOG_GROUP_PARAM") {
        config.export.prefixes_parameter = Some(val);
    }
    if let Ok(val) = std::env::var("AWS_ACCOUNT") {
        config.export.account_id = Some(val);
    }

    if let Ok(val) = std::env::var("LOG_EXPORTER_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(dry_run) = parse_env("LOG_EXPORTER_DRY_RUN")? {
        config.export.dry_run = dry_run;
    }
    if let Some(hours) = parse_env("LOG_EXPORTER_INTERVAL_HOURS")? {
        config.export.interval_hours = hours;
    }
    if let Some(page_size) = parse_env("LOG_EXPORTER_PAGE_SIZE")? {
        config.export.page_size = page_size;
    }
    if let Ok(val) = std::env::var("LOG_EXPORTER_WATERMARK_PREFIX") {
        config.export.watermark_prefix = val;
    }
    if let Some(attempts) = parse_env("LOG_EXPORTER_RETRY_MAX_ATTEMPTS")? {
        config.export.retry.max_attempts = attempts;
    }
    if let Some(delay) = parse_env("LOG_EXPORTER_RETRY_DELAY_SECS")? {
        config.export.retry.delay_secs = delay;
    }

    if let Ok(val) = std::env::var("LOG_EXPORTER_AWS_REGION") {
        config.aws.region = Some(val);
    }

    if let Ok(val) = std::env::var("LOG_EXPORTER_LOGGING_FORMAT") {
        config.logging.format = val;
    }
    if let Some(enabled) = parse_env("LOG_EXPORTER_LOGGING_LOCAL_ENABLED")? {
        config.logging.local_enabled = enabled;
    }
    if let Ok(val) = std::env::var("LOG_EXPORTER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
