//! Rule patterns, mapping tables and dictionaries.
//!
//! Everything here is built once and shared read-only between calls. Tables
//! come either from the copies compiled into the crate or from a data
//! directory with the layout:
//!
//! ```text
//! <dir>/RegexRule/<Category>/<Kind>.txt
//! <dir>/Mapping/<Table>.txt
//! <dir>/Dict/Popular.txt
//! ```
//!
//! A missing or unreadable file and an invalid pattern are logged and
//! skipped; the affected table is simply empty. An embedded pattern that
//! fails to compile is a bug and panics in debug builds.

use std::collections::HashMap;
use std::path::Path;

use fancy_regex::Regex;
use tracing::{debug, info, warn};
use vinorm_core::{NormError, NormResult};

use crate::mapping::{MappingTable, WordSet};
use crate::rules::RuleKind;

/// Compiled patterns for every rule kind.
#[derive(Debug, Default)]
pub struct RuleSet {
    patterns: HashMap<RuleKind, Vec<Regex>>,
}

impl RuleSet {
    /// Compile the rule files shipped with the crate.
    pub fn embedded() -> Self {
        let patterns = RuleKind::all()
            .map(|kind| (kind, compile_embedded(kind)))
            .collect();
        Self { patterns }
    }

    /// Compile the rule files under `<dir>/RegexRule`.
    pub fn from_dir(dir: &Path) -> Self {
        let patterns = RuleKind::all()
            .map(|kind| {
                let path = dir
                    .join("RegexRule")
                    .join(kind.category().dir_name())
                    .join(format!("{}.txt", kind.file_stem()));
                let compiled = match std::fs::read_to_string(&path) {
                    Ok(content) => compile_logged(kind, &content),
                    Err(e) => {
                        warn!(error = %NormError::load(&path, e), "rule file skipped");
                        Vec::new()
                    }
                };
                (kind, compiled)
            })
            .collect();
        Self { patterns }
    }

    /// Patterns of `kind` in file order.
    pub fn patterns(&self, kind: RuleKind) -> &[Regex] {
        self.patterns.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of compiled patterns.
    pub fn len(&self) -> usize {
        self.patterns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compile one rule file. Blank lines and `#` comments are skipped.
pub fn compile_rules(kind: RuleKind, content: &str) -> Vec<NormResult<Regex>> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            Regex::new(line)
                .map_err(|e| NormError::pattern(kind.category(), line, e.to_string()))
        })
        .collect()
}

fn compile_embedded(kind: RuleKind) -> Vec<Regex> {
    compile_rules(kind, embedded_rules(kind))
        .into_iter()
        .filter_map(|compiled| match compiled {
            Ok(regex) => Some(regex),
            Err(e) => {
                if cfg!(debug_assertions) {
                    panic!("embedded {kind} pattern rejected: {e}");
                }
                warn!(%kind, error = %e, "pattern skipped");
                None
            }
        })
        .collect()
}

fn compile_logged(kind: RuleKind, content: &str) -> Vec<Regex> {
    compile_rules(kind, content)
        .into_iter()
        .filter_map(|compiled| match compiled {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!(%kind, error = %e, "pattern skipped");
                None
            }
        })
        .collect()
}

/// All tables used by one normalizer.
#[derive(Debug, Default)]
pub struct Resources {
    pub rules: RuleSet,
    /// Vietnamese letter names ("b" -> "bê").
    pub letters_vn: MappingTable,
    /// English letter names ("b" -> "bi").
    pub letters_en: MappingTable,
    pub base_units: MappingTable,
    pub prefix_units: MappingTable,
    pub currency: MappingTable,
    pub symbols: MappingTable,
    pub acronyms: MappingTable,
    pub teencode: MappingTable,
    /// Common words kept verbatim by the classifier.
    pub popular: WordSet,
}

impl Resources {
    /// Tables compiled into the crate.
    pub fn embedded() -> Self {
        let res = Self {
            rules: RuleSet::embedded(),
            letters_vn: MappingTable::parse(include_str!("../data/Mapping/LetterSoundVN.txt")),
            letters_en: MappingTable::parse(include_str!("../data/Mapping/LetterSoundEN.txt")),
            base_units: MappingTable::parse(include_str!("../data/Mapping/BaseUnit.txt")),
            prefix_units: MappingTable::parse(include_str!("../data/Mapping/PrefixUnit.txt")),
            currency: MappingTable::parse(include_str!("../data/Mapping/CurrencyUnit.txt")),
            symbols: MappingTable::parse(include_str!("../data/Mapping/Symbol.txt")),
            acronyms: MappingTable::parse(include_str!("../data/Mapping/Acronyms.txt")),
            teencode: MappingTable::parse(include_str!("../data/Mapping/Teencode.txt"))
                .into_shorthand(),
            popular: WordSet::parse(include_str!("../data/Dict/Popular.txt")),
        };
        debug!(patterns = res.rules.len(), "embedded resources loaded");
        res
    }

    /// Tables read from a data directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mapping = |name: &str| {
            let path = dir.join("Mapping").join(format!("{name}.txt"));
            MappingTable::load(&path).unwrap_or_else(|e| {
                warn!(error = %e, "mapping table skipped");
                MappingTable::default()
            })
        };
        let popular_path = dir.join("Dict").join("Popular.txt");

        let res = Self {
            rules: RuleSet::from_dir(dir),
            letters_vn: mapping("LetterSoundVN"),
            letters_en: mapping("LetterSoundEN"),
            base_units: mapping("BaseUnit"),
            prefix_units: mapping("PrefixUnit"),
            currency: mapping("CurrencyUnit"),
            symbols: mapping("Symbol"),
            acronyms: mapping("Acronyms"),
            teencode: mapping("Teencode").into_shorthand(),
            popular: WordSet::load(&popular_path).unwrap_or_else(|e| {
                warn!(error = %e, "dictionary skipped");
                WordSet::default()
            }),
        };
        info!(dir = %dir.display(), patterns = res.rules.len(), "resources loaded");
        res
    }
}

fn embedded_rules(kind: RuleKind) -> &'static str {
    use RuleKind::*;
    match kind {
        Email => include_str!("../data/RegexRule/SpecialCase/Email.txt"),
        Phone => include_str!("../data/RegexRule/SpecialCase/Phone.txt"),
        Website => include_str!("../data/RegexRule/SpecialCase/Website.txt"),
        FootballUnder => include_str!("../data/RegexRule/SpecialCase/FootballUnder.txt"),
        FootballScore => include_str!("../data/RegexRule/SpecialCase/FootballScore.txt"),
        DateRange => include_str!("../data/RegexRule/DateTime/DateRange.txt"),
        DayRange => include_str!("../data/RegexRule/DateTime/DayRange.txt"),
        MonthRange => include_str!("../data/RegexRule/DateTime/MonthRange.txt"),
        FullDate => include_str!("../data/RegexRule/DateTime/FullDate.txt"),
        RomanPeriod => include_str!("../data/RegexRule/DateTime/RomanPeriod.txt"),
        DayMonth => include_str!("../data/RegexRule/DateTime/DayMonth.txt"),
        MonthYear => include_str!("../data/RegexRule/DateTime/MonthYear.txt"),
        Year => include_str!("../data/RegexRule/DateTime/Year.txt"),
        Time => include_str!("../data/RegexRule/DateTime/Time.txt"),
        Code => include_str!("../data/RegexRule/Math/Code.txt"),
        CurrencyGrouped => include_str!("../data/RegexRule/Math/CurrencyGrouped.txt"),
        Currency => include_str!("../data/RegexRule/Math/Currency.txt"),
        UnitRange => include_str!("../data/RegexRule/Math/UnitRange.txt"),
        UnitRangeAfter => include_str!("../data/RegexRule/Math/UnitRangeAfter.txt"),
        DecimalMeasure => include_str!("../data/RegexRule/Math/DecimalMeasure.txt"),
        Measure => include_str!("../data/RegexRule/Math/Measure.txt"),
        Roman => include_str!("../data/RegexRule/Math/Roman.txt"),
        GroupedNumber => include_str!("../data/RegexRule/Math/GroupedNumber.txt"),
        DecimalNumber => include_str!("../data/RegexRule/Math/DecimalNumber.txt"),
        Number => include_str!("../data/RegexRule/Math/Number.txt"),
        Political => include_str!("../data/RegexRule/Address/Political.txt"),
        Street => include_str!("../data/RegexRule/Address/Street.txt"),
        Office => include_str!("../data/RegexRule/Address/Office.txt"),
        Codenumber => include_str!("../data/RegexRule/Address/Codenumber.txt"),
    }
}
