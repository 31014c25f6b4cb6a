use pizza_demo_core::catalog::SETUP_GUIDE;
use pizza_demo_core::checks::{
    CheckOutcome, ConfigurationChecker, ConfigurationReport, EnvironmentProbe, SystemProbe,
};
use pizza_demo_core::config::DemoConfig;

use crate::commands::CommandResult;

const ALL_GOOD: &str = "🎉 Configuration looks good! You're ready to use Data Pizza skills.";
const ISSUES_FOUND: &str =
    "⚠️  Some configuration issues were found. Please review the failed checks.";

pub fn run(config: &DemoConfig, json_output: bool, strict: bool) -> CommandResult {
    run_with_probe(config, &SystemProbe, json_output, strict)
}

pub fn run_with_probe(
    config: &DemoConfig,
    probe: &dyn EnvironmentProbe,
    json_output: bool,
    strict: bool,
) -> CommandResult {
    let report = ConfigurationChecker::from_config(config).run(probe);
    let output = if json_output { render_json(&report) } else { render_human(&report) };

    if strict && !report.is_healthy() {
        return CommandResult::failure(output, 1);
    }
    CommandResult::success(output)
}

pub fn render_human(report: &ConfigurationReport) -> String {
    let mut lines = vec!["Running configuration checks...".to_string(), String::new()];

    for check in &report.checks {
        lines.push(match &check.outcome {
            CheckOutcome::Pass => format!("✅ {}: OK", check.name),
            CheckOutcome::Fail { message } => format!("❌ {}: FAILED - {message}", check.name),
            CheckOutcome::Error { message } => format!("⚠️  {}: ERROR - {message}", check.name),
        });
    }

    lines.push(String::new());
    lines.push("Environment Variables:".to_string());
    for credential in &report.credentials {
        lines.push(match &credential.preview {
            Some(preview) => format!("✅ {}: {preview}", credential.name),
            None => format!("⚠️  {}: Not set (optional)", credential.name),
        });
    }

    lines.push(String::new());
    if report.is_healthy() {
        lines.push(ALL_GOOD.to_string());
    } else {
        lines.push(ISSUES_FOUND.to_string());
        lines.push(format!("   Refer to the setup guide for assistance: {SETUP_GUIDE}"));
    }

    lines.join("\n")
}

fn render_json(report: &ConfigurationReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|error| {
        format!(
            "{{\"verdict\":\"issues_found\",\"summary\":\"check serialization failed\",\"error\":\"{}\"}}",
            escape_json(&error.to_string())
        )
    })
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use pizza_demo_core::checks::EnvironmentProbe;
    use pizza_demo_core::config::DemoConfig;
    use pizza_demo_core::errors::CheckError;
    use secrecy::SecretString;

    use super::run_with_probe;

    struct StubProbe {
        paths_exist: bool,
        vars: HashMap<&'static str, &'static str>,
    }

    impl EnvironmentProbe for StubProbe {
        fn path_exists(&self, _path: &Path) -> Result<bool, CheckError> {
            Ok(self.paths_exist)
        }

        fn env_var(&self, name: &str) -> Option<SecretString> {
            self.vars.get(name).map(|value| SecretString::from(value.to_string()))
        }
    }

    #[test]
    fn healthy_report_lists_every_check_and_optional_variable() {
        let probe = StubProbe { paths_exist: true, vars: HashMap::new() };

        let result = run_with_probe(&DemoConfig::default(), &probe, false, true);

        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("✅ Runtime Version: OK"));
        assert!(result.output.contains("✅ Example Files: OK"));
        assert!(result.output.contains("⚠️  OPENAI_API_KEY: Not set (optional)"));
        assert!(result.output.contains("⚠️  GOOGLE_API_KEY: Not set (optional)"));
        assert!(result.output.ends_with("You're ready to use Data Pizza skills."));
    }

    #[test]
    fn failed_checks_keep_exit_status_zero_unless_strict() {
        let probe = StubProbe { paths_exist: false, vars: HashMap::new() };

        let lenient = run_with_probe(&DemoConfig::default(), &probe, false, false);
        let strict = run_with_probe(&DemoConfig::default(), &probe, false, true);

        assert_eq!(lenient.exit_code, 0);
        assert_eq!(strict.exit_code, 1);
        assert!(lenient
            .output
            .contains("❌ Data Pizza Directory: FAILED - skills directory not found"));
        assert!(lenient.output.contains("Refer to the setup guide for assistance"));
        assert_eq!(lenient.output, strict.output);
    }

    #[test]
    fn json_output_masks_credentials() -> Result<(), String> {
        let probe = StubProbe {
            paths_exist: true,
            vars: HashMap::from([("ANTHROPIC_API_KEY", "sk-ant-api03-abcdef")]),
        };

        let result = run_with_probe(&DemoConfig::default(), &probe, true, false);
        let value: serde_json::Value =
            serde_json::from_str(&result.output).map_err(|err| err.to_string())?;

        assert_eq!(value["verdict"], "all_good");
        assert_eq!(value["credentials"][1]["name"], "ANTHROPIC_API_KEY");
        assert_eq!(value["credentials"][1]["preview"], "sk-ant-a***********");
        assert!(!result.output.contains("abcdef"));
        Ok(())
    }
}
