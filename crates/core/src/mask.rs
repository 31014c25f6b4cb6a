//! Masked previews for secret-like values.

use secrecy::{ExposeSecret, SecretString};

use crate::config::CredentialsConfig;

/// How much of a secret to reveal and what to hide the rest behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskPolicy {
    pub visible_prefix: usize,
    pub mask_char: char,
}

impl Default for MaskPolicy {
    fn default() -> Self {
        Self { visible_prefix: 8, mask_char: '*' }
    }
}

impl From<&CredentialsConfig> for MaskPolicy {
    fn from(config: &CredentialsConfig) -> Self {
        Self { visible_prefix: config.visible_prefix, mask_char: config.mask_char }
    }
}

impl MaskPolicy {
    /// Keeps the first `visible_prefix` characters and masks the remainder.
    /// Values no longer than the prefix are masked entirely. Lengths are
    /// counted in characters, so the preview always has the same character
    /// count as the input.
    pub fn preview(&self, value: &str) -> String {
        let length = value.chars().count();
        if length <= self.visible_prefix {
            return self.mask_char.to_string().repeat(length);
        }

        let mut preview: String = value.chars().take(self.visible_prefix).collect();
        preview.extend(std::iter::repeat(self.mask_char).take(length - self.visible_prefix));
        preview
    }

    pub fn preview_secret(&self, value: &SecretString) -> String {
        self.preview(value.expose_secret())
    }
}
