//! Emails, phone numbers, websites and football notation.
//!
//! Emails, phone numbers and websites are masking kinds: the engine shields
//! them and they are only spoken when the pipeline finishes.

use fancy_regex::Captures;
use vinorm_core::Category;

use super::{CategoryRules, RuleKind, group};
use crate::num2words::to_words;
use crate::resources::Resources;

#[derive(Debug)]
pub struct SpecialCaseRules;

impl CategoryRules for SpecialCaseRules {
    fn category(&self) -> Category {
        Category::SpecialCase
    }

    fn rewrite(&self, kind: RuleKind, caps: &Captures<'_>, _res: &Resources) -> Option<String> {
        match kind {
            // "U23" -> "u hai mươi ba"
            RuleKind::FootballUnder => {
                let age = group(caps, "age")?;
                Some(format!("u {}", to_words(age)))
            }
            // "2-1" -> "hai , một"
            RuleKind::FootballScore => {
                let home = group(caps, "home")?;
                let away = group(caps, "away")?;
                Some(format!("{} , {}", to_words(home), to_words(away)))
            }
            _ => None,
        }
    }
}
