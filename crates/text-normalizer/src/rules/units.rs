//! Measurement unit reading.
//!
//! Unit lookups are case-sensitive: "mm" and "Mm" differ, and "5G" is not grams.

use crate::num2words::to_words;
use crate::resources::Resources;

/// Read a unit such as "km", "m²" or "km/h".
///
/// Returns `None` when any part is not a known unit, so the caller can
/// leave the whole match alone.
pub fn read_unit(unit: &str, res: &Resources) -> Option<String> {
    if unit.is_empty() {
        return None;
    }
    if let Some(words) = res.base_units.get_exact(unit) {
        return Some(words.to_string());
    }

    unit.split('/')
        .map(|part| read_part(part, res))
        .collect::<Option<Vec<_>>>()
        .map(|parts| parts.join(" trên "))
}

fn read_part(part: &str, res: &Resources) -> Option<String> {
    if let Some(words) = res.base_units.get_exact(part) {
        return Some(words.to_string());
    }

    let body = part.trim_end_matches(is_power_char);
    let power = read_power(&part[body.len()..])?;
    if body.is_empty() {
        return None;
    }

    let mut words = read_body(body, res)?;
    if let Some(power) = power {
        words.push(' ');
        words.push_str(&power);
    }
    Some(words)
}

/// A base unit, or a prefix followed by a base unit.
fn read_body(body: &str, res: &Resources) -> Option<String> {
    if let Some(words) = res.base_units.get_exact(body) {
        return Some(words.to_string());
    }

    for prefix_len in [2, 1] {
        let Some((split, _)) = body.char_indices().nth(prefix_len) else {
            continue;
        };
        let (prefix, base) = body.split_at(split);
        let prefix = res.prefix_units.get_exact(prefix);
        if let (Some(p), Some(b)) = (prefix, res.base_units.get_exact(base)) {
            return Some(format!("{p} {b}"));
        }
    }
    None
}

fn is_power_char(c: char) -> bool {
    c.is_ascii_digit() || c == '²' || c == '³'
}

/// `Some(None)` for no power, `Some(Some(words))` for a valid one.
fn read_power(power: &str) -> Option<Option<String>> {
    match power {
        "" => Some(None),
        "2" | "²" => Some(Some("vuông".to_string())),
        "3" | "³" => Some(Some("khối".to_string())),
        _ if power.bytes().all(|b| b.is_ascii_digit()) => {
            Some(Some(format!("mũ {}", to_words(power))))
        }
        _ => None,
    }
}
