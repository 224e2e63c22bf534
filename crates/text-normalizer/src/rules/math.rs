//! Currency, measurements, Roman numerals and plain numbers.
//!
//! Amounts with one separator followed by exactly three digits ("2.500",
//! "1,500") and amounts with several such groups are thousand-grouped;
//! any other separator is a decimal point read as "phẩy".

use fancy_regex::Captures;
use vinorm_core::Category;

use super::units::read_unit;
use super::{CategoryRules, RuleKind, group};
use crate::num2words::{read_number, roman_to_words, to_words};
use crate::resources::Resources;

#[derive(Debug)]
pub struct MathRules;

impl CategoryRules for MathRules {
    fn category(&self) -> Category {
        Category::Math
    }

    fn rewrite(&self, kind: RuleKind, caps: &Captures<'_>, res: &Resources) -> Option<String> {
        match kind {
            RuleKind::CurrencyGrouped | RuleKind::Currency => {
                let amount = read_amount(group(caps, "amount")?);
                let currency = res.currency.get(group(caps, "symbol")?)?;
                Some(format!("{amount} {currency}"))
            }
            RuleKind::UnitRange => {
                let unit = read_unit(group(caps, "unit")?, res)?;
                let from = read_amount(group(caps, "from")?);
                let to = read_amount(group(caps, "to")?);
                Some(format!("{from} {unit} đến {to} {unit}"))
            }
            RuleKind::UnitRangeAfter => {
                let unit = match group(caps, "unit")? {
                    "%" => res.symbols.get("%")?.to_string(),
                    unit => read_unit(unit, res)?,
                };
                let from = read_amount(group(caps, "from")?);
                let to = read_amount(group(caps, "to")?);
                Some(format!("{from} đến {to} {unit}"))
            }
            RuleKind::DecimalMeasure | RuleKind::Measure => {
                let unit = read_unit(group(caps, "unit")?, res)?;
                Some(format!("{} {unit}", read_amount(group(caps, "amount")?)))
            }
            RuleKind::Roman => {
                let roman = group(caps, "roman")?;
                if read_unit(roman, res).is_some() || res.acronyms.contains(roman) {
                    return None;
                }
                roman_to_words(roman)
            }
            RuleKind::GroupedNumber | RuleKind::DecimalNumber | RuleKind::Number => {
                Some(read_amount(group(caps, "amount")?))
            }
            _ => None,
        }
    }
}

/// Read a numeric literal, dropping thousand separators.
fn read_amount(amount: &str) -> String {
    if is_grouped(amount) {
        let digits: String = amount.chars().filter(char::is_ascii_digit).collect();
        to_words(&digits)
    } else {
        read_number(amount)
    }
}

fn is_grouped(amount: &str) -> bool {
    let mut groups = amount.split(['.', ',']);
    let Some(head) = groups.next() else {
        return false;
    };
    let mut tail = groups.peekable();

    (1..=3).contains(&head.len())
        && !head.starts_with('0')
        && head.bytes().all(|b| b.is_ascii_digit())
        && tail.peek().is_some()
        && tail.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}
