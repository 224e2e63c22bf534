//! Normalize command implementation.

use text_normalizer::Normalizer;
use vinorm_core::{NormalizeOptions, TextNormalizer};

/// Run the normalize command.
pub fn run(normalizer: &Normalizer, input: &str, options: &NormalizeOptions) {
    let result = normalizer.normalize(input, options);
    println!("{}", result.text);

    for span in &result.masked {
        tracing::debug!(kind = %span.kind, original = %span.original, "masked span");
    }
}
