//! File command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use text_normalizer::Normalizer;
use tracing::info;
use vinorm_core::{NormalizeOptions, TextNormalizer};

/// Terminator written after every normalized line.
pub const LINE_SENTINEL: &str = "#line#";

/// Normalize every line of `input`, each followed by [`LINE_SENTINEL`].
pub fn normalize_lines(normalizer: &Normalizer, input: &str, options: &NormalizeOptions) -> String {
    input
        .lines()
        .map(|line| normalizer.normalize_str(line, options) + LINE_SENTINEL)
        .collect()
}

/// Run the file command.
pub fn run(
    normalizer: &Normalizer,
    input: &Path,
    output: Option<&Path>,
    options: &NormalizeOptions,
) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let normalized = normalize_lines(normalizer, &content, options);

    match output {
        Some(path) => {
            std::fs::write(path, &normalized)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(
                lines = content.lines().count(),
                output = %path.display(),
                "file normalized"
            );
        }
        None => println!("{normalized}"),
    }

    Ok(())
}
