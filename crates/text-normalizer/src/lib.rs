//! # text-normalizer
//!
//! Rule-based Vietnamese text normalization for speech synthesis.
//!
//! Raw text mixing Vietnamese and Latin script is rewritten into words a
//! synthesizer can read aloud:
//! - Numbers of any size, decimals and Roman numerals
//! - Dates, date ranges and clock times
//! - Currency, measurements and unit ranges
//! - Addresses, room numbers and product codes
//! - Emails, phone numbers and websites
//! - Acronyms, informal spellings and symbols
//!
//! # Example
//!
//! ```ignore
//! use text_normalizer::Normalizer;
//! use vinorm_core::{NormalizeOptions, TextNormalizer};
//!
//! let normalizer = Normalizer::new();
//! let text = normalizer.normalize_str("2km", &NormalizeOptions::default());
//! assert_eq!(text, "hai kí lô mét.");
//! ```

pub mod classifier;
pub mod mapping;
pub mod masker;
pub mod num2words;
pub mod resources;
pub mod rules;
pub mod scan;
pub mod text;

use std::sync::Arc;

use fancy_regex::Regex;
use once_cell::sync::Lazy;
use tracing::{debug, instrument};
use vinorm_core::{Category, NormText, NormalizeOptions, ResourceConfig, TextNormalizer};

use classifier::Classifier;
use masker::MaskSet;
use resources::Resources;
use rules::{CategoryRules, apply_category};
use text::{collapse_whitespace, remove_noise, tokenize_symbols, unicode_cleanup};

pub use rules::RuleKind;

static EMBEDDED: Lazy<Arc<Resources>> = Lazy::new(|| Arc::new(Resources::embedded()));

static SPLIT_DIGITS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(\d)\s+(?=\d)").ok());

/// Vietnamese text normalizer.
///
/// Tables are shared read-only; one instance serves any number of threads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    resources: Arc<Resources>,
    categories: Arc<Vec<Box<dyn CategoryRules>>>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer over the tables compiled into the crate.
    pub fn new() -> Self {
        Self::from_resources(Arc::clone(&EMBEDDED))
    }

    /// Create a normalizer over already loaded tables.
    pub fn from_resources(resources: Arc<Resources>) -> Self {
        Self {
            resources,
            categories: Arc::new(rules::default_categories()),
        }
    }

    /// Create a normalizer from a resource configuration.
    pub fn from_config(config: &ResourceConfig) -> Self {
        match &config.data_dir {
            Some(dir) => Self::from_resources(Arc::new(Resources::from_dir(dir))),
            None => Self::new(),
        }
    }

    /// Tables in use.
    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Run the category engines in order.
    fn apply_categories(&self, input: &str, masks: &mut MaskSet) -> String {
        let mut text = input.to_string();
        for rules in self.categories.iter() {
            let category = rules.category();
            text = apply_category(rules.as_ref(), &text, &self.resources, masks);
            if category == Category::Math {
                text = merge_digit_runs(&text);
            }
            debug!(%category, len = text.len(), "category applied");
        }
        text
    }
}

impl TextNormalizer for Normalizer {
    #[instrument(skip(self, options), fields(input_len = input.len()))]
    fn normalize(&self, input: &str, options: &NormalizeOptions) -> NormText {
        let text = collapse_whitespace(&unicode_cleanup(input));
        if text.is_empty() {
            return NormText::new("");
        }

        let mut masks = MaskSet::new();
        let text = self.apply_categories(&text, &mut masks);
        let text = collapse_whitespace(&remove_noise(&tokenize_symbols(&text), false));

        if options.rule_only {
            let text = masks.restore(&text, &self.resources);
            return NormText::with_masked(text, masks.into_spans());
        }

        let mut text = Classifier::new(&self.resources, options).classify_text(&text);
        debug!(len = text.len(), "tokens classified");
        if options.lowercase_output {
            text = text.to_lowercase();
        }

        let text = finish_sentence(&text, options.keep_punctuation);
        let text = masks.restore(&text, &self.resources);
        NormText::with_masked(text, masks.into_spans())
    }
}

/// Join digits an earlier stage left separated by whitespace.
fn merge_digit_runs(text: &str) -> String {
    match SPLIT_DIGITS.as_ref() {
        Some(re) => re.replace_all(text, "$1").into_owned(),
        None => text.to_string(),
    }
}

/// Strip noise and end the text with exactly one terminal mark.
fn finish_sentence(text: &str, keep_punctuation: bool) -> String {
    let text = if keep_punctuation {
        collapse_whitespace(text)
    } else {
        collapse_whitespace(&remove_noise(text, false))
    };
    let body = text.trim_end_matches([',', ' ']);

    if keep_punctuation && body.ends_with(['.', '!', '?']) {
        return body.to_string();
    }
    let body = body.trim_end_matches(['.', ' ']);
    format!("{body}.")
}
