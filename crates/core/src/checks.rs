//! Environment readiness checks.
//!
//! The checker evaluates a fixed, ordered list of predicates against an
//! [`EnvironmentProbe`], then previews the configured credential variables.
//! Every check is evaluated even when an earlier one fails or errors; the
//! aggregate [`Verdict`] is informational only.

use std::env;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use semver::Version;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::DemoConfig;
use crate::errors::CheckError;
use crate::mask::MaskPolicy;

/// Source of filesystem and environment facts for the checks.
pub trait EnvironmentProbe {
    fn path_exists(&self, path: &Path) -> Result<bool, CheckError>;

    /// Returns the variable's value, or `None` when it is unset or empty.
    fn env_var(&self, name: &str) -> Option<SecretString>;

    fn running_version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Probe backed by the real process environment and working directory.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProbe;

impl EnvironmentProbe for SystemProbe {
    fn path_exists(&self, path: &Path) -> Result<bool, CheckError> {
        path.try_exists()
            .map_err(|source| CheckError::Filesystem { path: path.to_path_buf(), source })
    }

    fn env_var(&self, name: &str) -> Option<SecretString> {
        let value = env::var_os(name)?.to_string_lossy().into_owned();
        if value.is_empty() {
            return None;
        }
        Some(value.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Predicate {
    RuntimeVersion { minimum: Version },
    PathExists(PathBuf),
}

impl Predicate {
    pub fn evaluate(&self, probe: &dyn EnvironmentProbe) -> Result<bool, CheckError> {
        match self {
            Self::RuntimeVersion { minimum } => {
                let value = probe.running_version();
                let running = match Version::parse(value.trim()) {
                    Ok(version) => version,
                    Err(source) => return Err(CheckError::RuntimeVersion { value, source }),
                };
                Ok(running >= *minimum)
            }
            Self::PathExists(path) => probe.path_exists(path),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConfigCheck {
    pub name: &'static str,
    pub predicate: Predicate,
    pub failure_message: String,
}

impl ConfigCheck {
    pub fn new(
        name: &'static str,
        predicate: Predicate,
        failure_message: impl Into<String>,
    ) -> Self {
        Self { name, predicate, failure_message: failure_message.into() }
    }

    pub fn evaluate(&self, probe: &dyn EnvironmentProbe) -> CheckResult {
        let outcome = match self.predicate.evaluate(probe) {
            Ok(true) => CheckOutcome::Pass,
            Ok(false) => CheckOutcome::Fail { message: self.failure_message.clone() },
            Err(error) => CheckOutcome::Error { message: error.to_string() },
        };

        debug!(
            event_name = "checks.evaluated",
            check = self.name,
            status = outcome.label(),
            "environment check evaluated"
        );

        CheckResult { name: self.name, outcome }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Pass,
    Fail { message: String },
    Error { message: String },
}

impl CheckOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail { .. } => "fail",
            Self::Error { .. } => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// A credential variable and its masked preview, `None` when unset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CredentialStatus {
    pub name: String,
    pub preview: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    AllGood,
    IssuesFound,
}

#[derive(Clone, Debug, Serialize)]
pub struct ConfigurationReport {
    pub verdict: Verdict,
    pub checks: Vec<CheckResult>,
    pub credentials: Vec<CredentialStatus>,
}

impl ConfigurationReport {
    pub fn is_healthy(&self) -> bool {
        self.verdict == Verdict::AllGood
    }
}

#[derive(Clone, Debug)]
pub struct ConfigurationChecker {
    checks: Vec<ConfigCheck>,
    credential_variables: Vec<String>,
    mask: MaskPolicy,
}

impl ConfigurationChecker {
    pub fn new(
        checks: Vec<ConfigCheck>,
        credential_variables: Vec<String>,
        mask: MaskPolicy,
    ) -> Self {
        Self { checks, credential_variables, mask }
    }

    /// Builds the standard five checks from the loaded configuration.
    pub fn from_config(config: &DemoConfig) -> Self {
        let checks = &config.checks;
        let minimum = checks.minimum_version.clone();

        Self::new(
            vec![
                ConfigCheck::new(
                    "Runtime Version",
                    Predicate::RuntimeVersion { minimum: minimum.clone() },
                    format!("pizza-demo {minimum}+ is required"),
                ),
                ConfigCheck::new(
                    "Data Pizza Directory",
                    Predicate::PathExists(checks.skills_dir.clone()),
                    format!("{} directory not found", checks.skills_dir.display()),
                ),
                ConfigCheck::new(
                    "Agent Creator Skill",
                    Predicate::PathExists(checks.agent_creator_skill.clone()),
                    "datapizza-agent-creator skill file not found",
                ),
                ConfigCheck::new(
                    "Tool Builder Skill",
                    Predicate::PathExists(checks.tool_builder_skill.clone()),
                    "datapizza-tool-builder skill file not found",
                ),
                ConfigCheck::new(
                    "Example Files",
                    Predicate::PathExists(checks.examples_dir.clone()),
                    format!("{} directory not found", checks.examples_dir.display()),
                ),
            ],
            config.credentials.variables.clone(),
            MaskPolicy::from(&config.credentials),
        )
    }

    pub fn run(&self, probe: &dyn EnvironmentProbe) -> ConfigurationReport {
        let checks: Vec<CheckResult> =
            self.checks.iter().map(|check| check.evaluate(probe)).collect();

        let credentials = self
            .credential_variables
            .iter()
            .map(|name| CredentialStatus {
                name: name.clone(),
                preview: probe.env_var(name).map(|value| self.mask.preview_secret(&value)),
            })
            .collect::<Vec<_>>();

        let passed = checks.iter().filter(|check| check.outcome.is_pass()).count();
        let verdict = if passed == checks.len() { Verdict::AllGood } else { Verdict::IssuesFound };

        info!(
            event_name = "checks.completed",
            passed,
            total = checks.len(),
            credentials_set = credentials.iter().filter(|status| status.preview.is_some()).count(),
            "configuration checks completed"
        );

        ConfigurationReport { verdict, checks, credentials }
    }
}
