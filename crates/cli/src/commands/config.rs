use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use pizza_demo_core::config::{resolve_config_path, ConfigOverrides, DemoConfig};
use toml::Value;

pub fn run(
    config: &DemoConfig,
    explicit_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> String {
    let config_file_path = resolve_config_path(explicit_path);
    let sources = SourceResolver {
        file_doc: load_config_file_doc(config_file_path.as_deref()),
        file_path: config_file_path,
    };

    let checks = &config.checks;
    let credentials = &config.credentials;
    let mut lines =
        vec!["effective config (source precedence: cli > env > file > default):".to_string()];

    lines.push(render_line(
        "checks.skills_dir",
        &checks.skills_dir.display().to_string(),
        sources.source("checks.skills_dir", &["PIZZA_DEMO_SKILLS_DIR"], false),
    ));
    lines.push(render_line(
        "checks.examples_dir",
        &checks.examples_dir.display().to_string(),
        sources.source("checks.examples_dir", &["PIZZA_DEMO_EXAMPLES_DIR"], false),
    ));
    lines.push(render_line(
        "checks.agent_creator_skill",
        &checks.agent_creator_skill.display().to_string(),
        sources.source("checks.agent_creator_skill", &["PIZZA_DEMO_AGENT_CREATOR_SKILL"], false),
    ));
    lines.push(render_line(
        "checks.tool_builder_skill",
        &checks.tool_builder_skill.display().to_string(),
        sources.source("checks.tool_builder_skill", &["PIZZA_DEMO_TOOL_BUILDER_SKILL"], false),
    ));
    lines.push(render_line(
        "checks.minimum_version",
        &checks.minimum_version.to_string(),
        sources.source("checks.minimum_version", &["PIZZA_DEMO_MINIMUM_VERSION"], false),
    ));

    let variables = if credentials.variables.is_empty() {
        "<none>".to_string()
    } else {
        credentials.variables.join(", ")
    };
    lines.push(render_line(
        "credentials.variables",
        &variables,
        sources.source("credentials.variables", &["PIZZA_DEMO_CREDENTIAL_VARS"], false),
    ));
    lines.push(render_line(
        "credentials.visible_prefix",
        &credentials.visible_prefix.to_string(),
        sources.source("credentials.visible_prefix", &["PIZZA_DEMO_VISIBLE_PREFIX"], false),
    ));
    lines.push(render_line(
        "credentials.mask_char",
        &credentials.mask_char.to_string(),
        sources.source("credentials.mask_char", &["PIZZA_DEMO_MASK_CHAR"], false),
    ));

    lines.push(render_line(
        "tour.pause_after_screen",
        &config.tour.pause_after_screen.to_string(),
        sources.source(
            "tour.pause_after_screen",
            &["PIZZA_DEMO_PAUSE_AFTER_SCREEN"],
            overrides.pause_after_screen.is_some(),
        ),
    ));

    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        sources.source(
            "logging.level",
            &["PIZZA_DEMO_LOGGING_LEVEL", "PIZZA_DEMO_LOG_LEVEL"],
            overrides.log_level.is_some(),
        ),
    ));
    lines.push(render_line(
        "logging.format",
        config.logging.format.as_str(),
        sources.source(
            "logging.format",
            &["PIZZA_DEMO_LOGGING_FORMAT", "PIZZA_DEMO_LOG_FORMAT"],
            overrides.log_format.is_some(),
        ),
    ));

    lines.join("\n")
}

struct SourceResolver {
    file_doc: Option<Value>,
    file_path: Option<PathBuf>,
}

impl SourceResolver {
    fn source(&self, key_path: &str, env_keys: &[&str], overridden: bool) -> String {
        if overridden {
            return "cli".to_string();
        }

        if let Some(env_key) = env_keys.iter().find(|key| env_is_set(key)) {
            return format!("env ({env_key})");
        }

        if let Some(doc) = &self.file_doc {
            if contains_path(doc, key_path) {
                let file_path = self
                    .file_path
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "config file".to_string());
                return format!("file ({file_path})");
            }
        }

        "default".to_string()
    }
}

fn env_is_set(key: &str) -> bool {
    env::var(key).map(|value| !value.trim().is_empty()).unwrap_or(false)
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
