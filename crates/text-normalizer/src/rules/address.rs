//! Administrative divisions, house and room numbers, free-form codes.
//!
//! House and room numbers with a letter, a separator or a leading zero are
//! shielded by the Math code masks, so they arrive here with their digits
//! intact. Plain ones ("số 5") are already words by then.

use fancy_regex::Captures;
use vinorm_core::Category;

use super::{CategoryRules, RuleKind, group};
use crate::mapping::is_upper_word;
use crate::num2words::{spell_digits, to_words};
use crate::resources::Resources;
use crate::scan::{CODE, OFFICE, STREET, scan, spell_letters};

/// Codes with at most this many digits read them as one number.
const MAX_NUMBER_DIGITS: usize = 3;

#[derive(Debug)]
pub struct AddressRules;

impl CategoryRules for AddressRules {
    fn category(&self) -> Category {
        Category::Address
    }

    fn rewrite(&self, kind: RuleKind, caps: &Captures<'_>, res: &Resources) -> Option<String> {
        match kind {
            RuleKind::Political => {
                let prefix = group(caps, "prefix")?.to_lowercase();
                division_name(&prefix).map(str::to_string)
            }
            RuleKind::Street => {
                let number = scan(group(caps, "number")?, &STREET, res);
                Some(format!("{} {number}", group(caps, "prefix")?))
            }
            RuleKind::Office => {
                let number = scan(group(caps, "number")?, &OFFICE, res);
                Some(format!("{} {number}", group(caps, "prefix")?))
            }
            RuleKind::Codenumber => read_code(caps.get(0)?.as_str(), res),
            _ => None,
        }
    }
}

fn division_name(prefix: &str) -> Option<&'static str> {
    Some(match prefix {
        "kp" => "khu phố",
        "tx" => "thị xã",
        "tp" => "thành phố",
        "q" => "quận",
        "p" => "phường",
        "h" => "huyện",
        "x" => "xã",
        _ => return None,
    })
}

/// Read a product, order or model code.
fn read_code(code: &str, res: &Resources) -> Option<String> {
    if !code.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    // LETTERS-DIGITS-LETTERS
    if let [head, digits, tail] = code.split('-').collect::<Vec<_>>()[..] {
        if is_letters(head) && is_digits(digits) && is_letters(tail) {
            return Some(format!(
                "{} {} {}",
                spell_auto(head, res),
                spell_digits(digits),
                spell_auto(tail, res)
            ));
        }
    }

    // LETTERS[-]DIGITS
    let letters_end = code
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(code.len());
    let (letters, rest) = code.split_at(letters_end);
    let digits = rest.strip_prefix('-').unwrap_or(rest);
    if !letters.is_empty() && is_digits(digits) {
        let letters = if res.popular.contains(letters) {
            letters.to_string()
        } else {
            spell_auto(letters, res)
        };
        let number = if digits.len() <= MAX_NUMBER_DIGITS {
            to_words(digits)
        } else {
            spell_digits(digits)
        };
        return Some(format!("{letters} {number}"));
    }

    Some(scan(code, &CODE, res))
}

fn is_letters(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn spell_auto(letters: &str, res: &Resources) -> String {
    spell_letters(letters, res, is_upper_word(letters))
}
