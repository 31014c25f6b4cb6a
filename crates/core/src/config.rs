use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "pizza-demo.toml";
pub const NESTED_CONFIG_FILE: &str = "config/pizza-demo.toml";

const MAX_CREDENTIAL_VARIABLES: usize = 16;
const MAX_VISIBLE_PREFIX: usize = 64;

#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub checks: ChecksConfig,
    pub credentials: CredentialsConfig,
    pub tour: TourConfig,
    pub logging: LoggingConfig,
}

/// Targets of the environment checks. Paths are resolved against the
/// working directory at check time.
#[derive(Clone, Debug)]
pub struct ChecksConfig {
    pub skills_dir: PathBuf,
    pub examples_dir: PathBuf,
    pub agent_creator_skill: PathBuf,
    pub tool_builder_skill: PathBuf,
    pub minimum_version: Version,
}

#[derive(Clone, Debug)]
pub struct CredentialsConfig {
    pub variables: Vec<String>,
    pub visible_prefix: usize,
    pub mask_char: char,
}

#[derive(Clone, Debug)]
pub struct TourConfig {
    pub pause_after_screen: bool,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub pause_after_screen: Option<bool>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            checks: ChecksConfig {
                skills_dir: PathBuf::from("skills"),
                examples_dir: PathBuf::from("examples"),
                agent_creator_skill: PathBuf::from("skills/datapizza-agent-creator/SKILL.md"),
                tool_builder_skill: PathBuf::from("skills/datapizza-tool-builder/SKILL.md"),
                minimum_version: Version::new(0, 1, 0),
            },
            credentials: CredentialsConfig {
                variables: vec![
                    "OPENAI_API_KEY".to_string(),
                    "ANTHROPIC_API_KEY".to_string(),
                    "GOOGLE_API_KEY".to_string(),
                ],
                visible_prefix: 8,
                mask_char: '*',
            },
            tour: TourConfig { pause_after_screen: true },
            logging: LoggingConfig { level: "warn".to_string(), format: LogFormat::Compact },
        }
    }
}

impl LogFormat {
    /// Name as written in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl DemoConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch)?;
        } else if options.require_file {
            let expected =
                options.config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) -> Result<(), ConfigError> {
        if let Some(checks) = patch.checks {
            if let Some(skills_dir) = checks.skills_dir {
                self.checks.skills_dir = skills_dir;
            }
            if let Some(examples_dir) = checks.examples_dir {
                self.checks.examples_dir = examples_dir;
            }
            if let Some(agent_creator_skill) = checks.agent_creator_skill {
                self.checks.agent_creator_skill = agent_creator_skill;
            }
            if let Some(tool_builder_skill) = checks.tool_builder_skill {
                self.checks.tool_builder_skill = tool_builder_skill;
            }
            if let Some(minimum_version) = checks.minimum_version {
                self.checks.minimum_version =
                    parse_version("checks.minimum_version", &minimum_version)?;
            }
        }

        if let Some(credentials) = patch.credentials {
            if let Some(variables) = credentials.variables {
                self.credentials.variables = variables;
            }
            if let Some(visible_prefix) = credentials.visible_prefix {
                self.credentials.visible_prefix = visible_prefix;
            }
            if let Some(mask_char) = credentials.mask_char {
                let Some(mask_char) = parse_mask_char(&mask_char) else {
                    return Err(ConfigError::Validation(
                        "credentials.mask_char must be exactly one character".to_string(),
                    ));
                };
                self.credentials.mask_char = mask_char;
            }
        }

        if let Some(tour) = patch.tour {
            if let Some(pause_after_screen) = tour.pause_after_screen {
                self.tour.pause_after_screen = pause_after_screen;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("PIZZA_DEMO_SKILLS_DIR") {
            self.checks.skills_dir = PathBuf::from(value);
        }
        if let Some(value) = read_env("PIZZA_DEMO_EXAMPLES_DIR") {
            self.checks.examples_dir = PathBuf::from(value);
        }
        if let Some(value) = read_env("PIZZA_DEMO_AGENT_CREATOR_SKILL") {
            self.checks.agent_creator_skill = PathBuf::from(value);
        }
        if let Some(value) = read_env("PIZZA_DEMO_TOOL_BUILDER_SKILL") {
            self.checks.tool_builder_skill = PathBuf::from(value);
        }
        if let Some(value) = read_env("PIZZA_DEMO_MINIMUM_VERSION") {
            let Ok(minimum_version) = Version::parse(value.trim()) else {
                return Err(invalid_override("PIZZA_DEMO_MINIMUM_VERSION", &value));
            };
            self.checks.minimum_version = minimum_version;
        }

        if let Some(value) = read_env("PIZZA_DEMO_CREDENTIAL_VARS") {
            self.credentials.variables = value
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(value) = read_env("PIZZA_DEMO_VISIBLE_PREFIX") {
            self.credentials.visible_prefix = parse_usize("PIZZA_DEMO_VISIBLE_PREFIX", &value)?;
        }
        if let Some(value) = read_env("PIZZA_DEMO_MASK_CHAR") {
            let Some(mask_char) = parse_mask_char(&value) else {
                return Err(invalid_override("PIZZA_DEMO_MASK_CHAR", &value));
            };
            self.credentials.mask_char = mask_char;
        }

        if let Some(value) = read_env("PIZZA_DEMO_PAUSE_AFTER_SCREEN") {
            self.tour.pause_after_screen = parse_bool("PIZZA_DEMO_PAUSE_AFTER_SCREEN", &value)?;
        }

        let log_level =
            read_env("PIZZA_DEMO_LOGGING_LEVEL").or_else(|| read_env("PIZZA_DEMO_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("PIZZA_DEMO_LOGGING_FORMAT").or_else(|| read_env("PIZZA_DEMO_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(log_format) = overrides.log_format {
            self.logging.format = log_format;
        }
        if let Some(pause_after_screen) = overrides.pause_after_screen {
            self.tour.pause_after_screen = pause_after_screen;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_checks(&self.checks)?;
        validate_credentials(&self.credentials)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

/// Returns the config file that `load` would read: the explicit path when it
/// exists, otherwise the first existing well-known location.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from(NESTED_CONFIG_FILE)]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_checks(checks: &ChecksConfig) -> Result<(), ConfigError> {
    let paths = [
        ("checks.skills_dir", &checks.skills_dir),
        ("checks.examples_dir", &checks.examples_dir),
        ("checks.agent_creator_skill", &checks.agent_creator_skill),
        ("checks.tool_builder_skill", &checks.tool_builder_skill),
    ];

    for (key, path) in paths {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(format!("{key} must not be empty")));
        }
    }

    Ok(())
}

fn validate_credentials(credentials: &CredentialsConfig) -> Result<(), ConfigError> {
    if credentials.variables.len() > MAX_CREDENTIAL_VARIABLES {
        return Err(ConfigError::Validation(format!(
            "credentials.variables accepts at most {MAX_CREDENTIAL_VARIABLES} entries"
        )));
    }

    for name in &credentials.variables {
        if name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "credentials.variables must not contain empty names".to_string(),
            ));
        }
        if name.contains('=') || name.contains('\0') {
            return Err(ConfigError::Validation(format!(
                "credentials.variables entry `{name}` is not a valid environment variable name"
            )));
        }
    }

    if credentials.visible_prefix > MAX_VISIBLE_PREFIX {
        return Err(ConfigError::Validation(format!(
            "credentials.visible_prefix must be in range 0..={MAX_VISIBLE_PREFIX}"
        )));
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_version(key: &str, value: &str) -> Result<Version, ConfigError> {
    Version::parse(value.trim()).map_err(|error| {
        ConfigError::Validation(format!("{key} must be a semantic version like `0.1.0`: {error}"))
    })
}

fn parse_mask_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse::<usize>().map_err(|_| invalid_override(key, value))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.trim().parse::<bool>().map_err(|_| invalid_override(key, value))
}

fn invalid_override(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnvOverride { key: key.to_string(), value: value.to_string() }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    checks: Option<ChecksPatch>,
    credentials: Option<CredentialsPatch>,
    tour: Option<TourPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct ChecksPatch {
    skills_dir: Option<PathBuf>,
    examples_dir: Option<PathBuf>,
    agent_creator_skill: Option<PathBuf>,
    tool_builder_skill: Option<PathBuf>,
    minimum_version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CredentialsPatch {
    variables: Option<Vec<String>>,
    visible_prefix: Option<usize>,
    mask_char: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TourPatch {
    pause_after_screen: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
