//! Info command implementation.

use text_normalizer::{Normalizer, RuleKind};
use vinorm_core::{Category, ResourceConfig};

/// Run the info command.
pub fn run(normalizer: &Normalizer, config: &ResourceConfig) {
    let res = normalizer.resources();

    println!("vinorm: Vietnamese text normalizer");
    println!("==================================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!();
    match &config.data_dir {
        Some(dir) => println!("Tables: {}", dir.display()),
        None => println!("Tables: built-in"),
    }
    println!();
    println!("Rule patterns: {}", res.rules.len());
    for category in Category::ORDER {
        let count: usize = RuleKind::of(category)
            .iter()
            .map(|&kind| res.rules.patterns(kind).len())
            .sum();
        println!("  {:<12} {count}", category.dir_name());
    }
    println!();
    println!("Mapping tables:");
    println!("  LetterSoundVN {}", res.letters_vn.len());
    println!("  LetterSoundEN {}", res.letters_en.len());
    println!("  BaseUnit      {}", res.base_units.len());
    println!("  PrefixUnit    {}", res.prefix_units.len());
    println!("  CurrencyUnit  {}", res.currency.len());
    println!("  Symbol        {}", res.symbols.len());
    println!("  Acronyms      {}", res.acronyms.len());
    println!("  Teencode      {}", res.teencode.len());
    println!("Popular words: {}", res.popular.len());
}
