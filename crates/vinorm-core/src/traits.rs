//! Trait definitions for normalizer components.

use serde::{Deserialize, Serialize};

use crate::types::NormText;

/// Text normalization trait.
///
/// Implementations turn raw mixed Vietnamese/Latin text into a sequence of
/// speakable Vietnamese words. Normalization is total: every input yields
/// some output, and unresolved fragments pass through verbatim.
pub trait TextNormalizer: Send + Sync {
    /// Normalize the input text.
    ///
    /// # Arguments
    /// * `input` - Raw input text
    /// * `options` - Per-call switches
    ///
    /// # Returns
    /// Normalized text together with the substrings that were shielded.
    fn normalize(&self, input: &str, options: &NormalizeOptions) -> NormText;

    /// Normalize and return only the text.
    fn normalize_str(&self, input: &str, options: &NormalizeOptions) -> String {
        self.normalize(input, options).text
    }
}

/// Per-call normalization switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Keep raw punctuation instead of collapsing it to "." or ",".
    #[serde(default)]
    pub keep_punctuation: bool,
    /// Emit unresolved upper-case or unclassifiable tokens verbatim.
    #[serde(default)]
    pub unknown_passthrough: bool,
    /// Lower-case the final output.
    #[serde(default)]
    pub lowercase_output: bool,
    /// Stop after the rule categories, before tokenization.
    #[serde(default)]
    pub rule_only: bool,
}

impl NormalizeOptions {
    /// Create options with every switch off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep raw punctuation.
    pub fn with_keep_punctuation(mut self, keep: bool) -> Self {
        self.keep_punctuation = keep;
        self
    }

    /// Pass unknown tokens through verbatim.
    pub fn with_unknown_passthrough(mut self, passthrough: bool) -> Self {
        self.unknown_passthrough = passthrough;
        self
    }

    /// Lower-case the output.
    pub fn with_lowercase_output(mut self, lowercase: bool) -> Self {
        self.lowercase_output = lowercase;
        self
    }

    /// Return right after the rule categories.
    pub fn with_rule_only(mut self, rule_only: bool) -> Self {
        self.rule_only = rule_only;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_options_builder() {
        let opts = NormalizeOptions::new()
            .with_keep_punctuation(true)
            .with_unknown_passthrough(true)
            .with_lowercase_output(true)
            .with_rule_only(true);

        assert!(opts.keep_punctuation);
        assert!(opts.unknown_passthrough);
        assert!(opts.lowercase_output);
        assert!(opts.rule_only);
    }

    #[test]
    fn test_normalize_options_default() {
        let opts = NormalizeOptions::default();
        assert!(!opts.keep_punctuation);
        assert!(!opts.unknown_passthrough);
        assert!(!opts.lowercase_output);
        assert!(!opts.rule_only);
    }

    #[test]
    fn test_normalize_options_partial_json() {
        let opts: NormalizeOptions = serde_json::from_str(r#"{"lowercase_output": true}"#).unwrap();
        assert!(opts.lowercase_output);
        assert!(!opts.keep_punctuation);
    }
}
