pub mod catalog;
pub mod checks;
pub mod config;
pub mod errors;
pub mod knowledge;
pub mod mask;
pub mod menu;

pub use checks::{
    CheckOutcome, CheckResult, ConfigCheck, ConfigurationChecker, ConfigurationReport,
    CredentialStatus, EnvironmentProbe, Predicate, SystemProbe, Verdict,
};
pub use config::{ConfigError, ConfigOverrides, DemoConfig, LoadOptions, LogFormat};
pub use errors::CheckError;
pub use knowledge::{find_relevant, KnowledgeSnippet, KNOWLEDGE_SNIPPETS};
pub use mask::MaskPolicy;
pub use menu::{Menu, MenuChoice, MenuEntry};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    pub(crate) fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }
}
