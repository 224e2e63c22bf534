//! Dates, date ranges and clock times.

use fancy_regex::Captures;
use vinorm_core::Category;

use super::{CategoryRules, RuleKind, group};
use crate::num2words::{roman_to_words, to_words};
use crate::resources::Resources;
use crate::scan::{DAY_RANGE, MONTH_RANGE, scan};

const DATE_SEPARATORS: [char; 3] = ['/', '.', '-'];

#[derive(Debug)]
pub struct DateTimeRules;

impl CategoryRules for DateTimeRules {
    fn category(&self) -> Category {
        Category::DateTime
    }

    fn rewrite(&self, kind: RuleKind, caps: &Captures<'_>, res: &Resources) -> Option<String> {
        let whole = caps.get(0)?.as_str();
        match kind {
            RuleKind::DateRange => {
                let from = read_full_date(group(caps, "from")?)?;
                let to = read_full_date(group(caps, "to")?)?;
                Some(format!("{from} đến {to}"))
            }
            RuleKind::DayRange => {
                let (day, month) = split_pair(group(caps, "to")?)?;
                valid_day_month(day, month).then(|| scan(whole, &DAY_RANGE, res))
            }
            RuleKind::MonthRange => {
                let (month, _) = split_pair(group(caps, "to")?)?;
                let from = group(caps, "from")?;
                let from_month = split_pair(from).map_or(from, |(m, _)| m);
                (valid_month(month) && valid_month(from_month))
                    .then(|| scan(whole, &MONTH_RANGE, res))
            }
            RuleKind::FullDate => {
                let day = group(caps, "day")?;
                let month = group(caps, "month")?;
                let year = group(caps, "year")?;
                read_date(day, month, year)
            }
            RuleKind::RomanPeriod => {
                let mut words = Vec::new();
                if let Some(prefix) = group(caps, "prefix") {
                    words.push(prefix.to_string());
                }
                words.push(roman_to_words(group(caps, "roman")?)?);
                if let Some(year) = group(caps, "year") {
                    words.push(format!("năm {}", to_words(year)));
                }
                Some(words.join(" "))
            }
            RuleKind::DayMonth => {
                let day = group(caps, "day")?;
                let month = group(caps, "month")?;
                if !valid_day_month(day, month) {
                    return None;
                }
                let prefix = group(caps, "prefix").map_or(String::new(), |p| format!("{p} "));
                Some(format!("{prefix}{} tháng {}", to_words(day), to_words(month)))
            }
            RuleKind::MonthYear => {
                let month = group(caps, "month")?;
                if !valid_month(month) {
                    return None;
                }
                let prefix = group(caps, "prefix").unwrap_or("tháng");
                let year = to_words(group(caps, "year")?);
                Some(format!("{prefix} {} năm {year}", to_words(month)))
            }
            RuleKind::Year => {
                let prefix = group(caps, "prefix")?;
                let year = to_words(group(caps, "year")?);
                Some(match group(caps, "to") {
                    Some(to) => format!("{prefix} {year} đến {}", to_words(to)),
                    None => format!("{prefix} {year}"),
                })
            }
            RuleKind::Time => read_time(caps),
            _ => None,
        }
    }
}

/// "7:30PM -" -> "bảy giờ ba mươi bi em đến".
fn read_time(caps: &Captures<'_>) -> Option<String> {
    let mut words = vec![to_words(group(caps, "hour")?), "giờ".to_string()];

    if let Some(minute) = group(caps, "minute") {
        if minute.bytes().any(|b| b != b'0') {
            words.push(to_words(minute));
        }
    }

    match group(caps, "ampm").map(|s| s.to_ascii_lowercase()).as_deref() {
        Some("a") => words.push("ây em".to_string()),
        Some("p") => words.push("bi em".to_string()),
        _ => {}
    }

    if group(caps, "range").is_some() {
        words.push("đến".to_string());
    }
    Some(words.join(" "))
}

/// "25/12/2020" -> "hai mươi lăm tháng mười hai năm hai nghìn không trăm hai mươi".
fn read_full_date(date: &str) -> Option<String> {
    let mut parts = date.split(DATE_SEPARATORS);
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    read_date(day, month, year)
}

fn read_date(day: &str, month: &str, year: &str) -> Option<String> {
    valid_day_month(day, month).then(|| {
        format!(
            "{} tháng {} năm {}",
            to_words(day),
            to_words(month),
            to_words(year)
        )
    })
}

fn split_pair(text: &str) -> Option<(&str, &str)> {
    text.split_once(DATE_SEPARATORS)
}

fn valid_month(month: &str) -> bool {
    month.parse::<u32>().is_ok_and(|m| (1..=12).contains(&m))
}

fn valid_day_month(day: &str, month: &str) -> bool {
    day.parse::<u32>().is_ok_and(|d| (1..=31).contains(&d)) && valid_month(month)
}
