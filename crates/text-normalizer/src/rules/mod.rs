//! Regex rule categories.
//!
//! Each category owns an ordered list of [`RuleKind`]s. A kind maps to one
//! rule file holding any number of patterns, tried in file order. Every
//! match of a pattern is rewritten by the category's [`CategoryRules::rewrite`]
//! handler and spliced back between the untouched text around it.

mod address;
mod datetime;
mod math;
mod special;
pub mod units;

use fancy_regex::{Captures, Regex};
use tracing::{trace, warn};
use vinorm_core::{Category, MaskKind};

use crate::masker::MaskSet;
use crate::resources::Resources;

pub use address::AddressRules;
pub use datetime::DateTimeRules;
pub use math::MathRules;
pub use special::SpecialCaseRules;

/// One rule file: a family of patterns sharing a rewrite handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Email,
    Phone,
    Website,
    FootballUnder,
    FootballScore,

    DateRange,
    DayRange,
    MonthRange,
    FullDate,
    RomanPeriod,
    DayMonth,
    MonthYear,
    Year,
    Time,

    Code,
    CurrencyGrouped,
    Currency,
    UnitRange,
    UnitRangeAfter,
    DecimalMeasure,
    Measure,
    Roman,
    GroupedNumber,
    DecimalNumber,
    Number,

    Political,
    Street,
    Office,
    Codenumber,
}

impl RuleKind {
    /// Kinds of `category` in application order.
    pub fn of(category: Category) -> &'static [RuleKind] {
        use RuleKind::*;
        match category {
            Category::SpecialCase => &[Email, Phone, Website, FootballUnder, FootballScore],
            Category::DateTime => &[
                DateRange,
                DayRange,
                MonthRange,
                FullDate,
                RomanPeriod,
                DayMonth,
                MonthYear,
                Year,
                Time,
            ],
            Category::Math => &[
                Code,
                CurrencyGrouped,
                Currency,
                UnitRange,
                UnitRangeAfter,
                DecimalMeasure,
                Measure,
                Roman,
                GroupedNumber,
                DecimalNumber,
                Number,
            ],
            Category::Address => &[Political, Street, Office, Codenumber],
        }
    }

    /// Every kind, category by category.
    pub fn all() -> impl Iterator<Item = RuleKind> {
        Category::ORDER
            .into_iter()
            .flat_map(|category| RuleKind::of(category).iter().copied())
    }

    pub fn category(self) -> Category {
        use RuleKind::*;
        match self {
            Email | Phone | Website | FootballUnder | FootballScore => Category::SpecialCase,
            DateRange | DayRange | MonthRange | FullDate | RomanPeriod | DayMonth | MonthYear
            | Year | Time => Category::DateTime,
            Code | CurrencyGrouped | Currency | UnitRange | UnitRangeAfter | DecimalMeasure
            | Measure | Roman | GroupedNumber | DecimalNumber | Number => Category::Math,
            Political | Street | Office | Codenumber => Category::Address,
        }
    }

    /// Rule file name without extension.
    pub fn file_stem(self) -> &'static str {
        use RuleKind::*;
        match self {
            Email => "Email",
            Phone => "Phone",
            Website => "Website",
            FootballUnder => "FootballUnder",
            FootballScore => "FootballScore",
            DateRange => "DateRange",
            DayRange => "DayRange",
            MonthRange => "MonthRange",
            FullDate => "FullDate",
            RomanPeriod => "RomanPeriod",
            DayMonth => "DayMonth",
            MonthYear => "MonthYear",
            Year => "Year",
            Time => "Time",
            Code => "Code",
            CurrencyGrouped => "CurrencyGrouped",
            Currency => "Currency",
            UnitRange => "UnitRange",
            UnitRangeAfter => "UnitRangeAfter",
            DecimalMeasure => "DecimalMeasure",
            Measure => "Measure",
            Roman => "Roman",
            GroupedNumber => "GroupedNumber",
            DecimalNumber => "DecimalNumber",
            Number => "Number",
            Political => "Political",
            Street => "Street",
            Office => "Office",
            Codenumber => "Codenumber",
        }
    }

    /// Matches of masking kinds are replaced by placeholders instead of
    /// being rewritten.
    pub fn mask_kind(self) -> Option<MaskKind> {
        match self {
            RuleKind::Email => Some(MaskKind::Email),
            RuleKind::Phone => Some(MaskKind::Phone),
            RuleKind::Website => Some(MaskKind::Web),
            RuleKind::Code => Some(MaskKind::Code),
            _ => None,
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.category().dir_name(), self.file_stem())
    }
}

/// Rewrite handlers for one category.
pub trait CategoryRules: Send + Sync + std::fmt::Debug {
    /// The category these handlers serve.
    fn category(&self) -> Category;

    /// Rewrite one match of a `kind` pattern.
    ///
    /// `None` leaves the matched text unchanged.
    fn rewrite(&self, kind: RuleKind, caps: &Captures<'_>, res: &Resources) -> Option<String>;
}

/// Handlers for every category, in pipeline order.
pub fn default_categories() -> Vec<Box<dyn CategoryRules>> {
    vec![
        Box::new(SpecialCaseRules),
        Box::new(DateTimeRules),
        Box::new(MathRules),
        Box::new(AddressRules),
    ]
}

/// Run every pattern of one category over `text`.
///
/// Code masks created by the category are restored before returning;
/// other masks stay in place until the end of the pipeline.
pub fn apply_category(
    rules: &dyn CategoryRules,
    text: &str,
    res: &Resources,
    masks: &mut MaskSet,
) -> String {
    let category = rules.category();
    let mut text = text.to_string();

    for &kind in RuleKind::of(category) {
        for regex in res.rules.patterns(kind) {
            text = match kind.mask_kind() {
                Some(mask) => splice(regex, &text, |caps| {
                    caps.get(0).map(|m| masks.insert(mask, m.as_str()))
                }),
                None => splice(regex, &text, |caps| rules.rewrite(kind, caps, res)),
            };
        }
        trace!(%kind, text = %text, "rule kind applied");
    }

    masks.restore_scoped(&text)
}

/// Rebuild `text` with every match of `regex` replaced by `rewrite`'s
/// output, padded with spaces.
///
/// Unmatched stretches are copied through unchanged. A `None` from
/// `rewrite` keeps the matched text as it was.
pub fn splice<F>(regex: &Regex, text: &str, mut rewrite: F) -> String
where
    F: FnMut(&Captures<'_>) -> Option<String>,
{
    let mut result = String::with_capacity(text.len() + 16);
    let mut last = 0;

    for caps in regex.captures_iter(text) {
        let caps = match caps {
            Ok(caps) => caps,
            Err(e) => {
                warn!(pattern = regex.as_str(), error = %e, "regex match aborted");
                break;
            }
        };
        let Some(whole) = caps.get(0) else {
            continue;
        };

        result.push_str(&text[last..whole.start()]);
        match rewrite(&caps) {
            Some(replacement) => {
                result.push(' ');
                result.push_str(&replacement);
                result.push(' ');
            }
            None => result.push_str(whole.as_str()),
        }
        last = whole.end();
    }

    result.push_str(&text[last..]);
    result
}

/// Text of a named capture group, if it took part in the match.
pub(crate) fn group<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order_matches_category() {
        for category in Category::ORDER {
            for kind in RuleKind::of(category) {
                assert_eq!(kind.category(), category, "{kind}");
            }
        }
        assert_eq!(RuleKind::all().count(), 29);
    }

    #[test]
    fn test_masking_kinds() {
        assert_eq!(RuleKind::Email.mask_kind(), Some(MaskKind::Email));
        assert_eq!(RuleKind::Code.mask_kind(), Some(MaskKind::Code));
        assert_eq!(RuleKind::Number.mask_kind(), None);
        assert_eq!(RuleKind::Time.to_string(), "DateTime/Time");
    }

    #[test]
    fn test_splice_pads_and_keeps_gaps() {
        let regex = Regex::new(r"\d+").unwrap();
        let result = splice(&regex, "a1b22c", |caps| {
            Some(format!("<{}>", caps.get(0).unwrap().as_str()))
        });
        assert_eq!(result, "a <1> b <22> c");
    }

    #[test]
    fn test_splice_none_keeps_match() {
        let regex = Regex::new(r"\d+").unwrap();
        let result = splice(&regex, "x 12 y 345", |caps| {
            let m = caps.get(0).unwrap().as_str();
            (m.len() == 2).then(|| "hai".to_string())
        });
        assert_eq!(result, "x  hai  y 345");
    }

    #[test]
    fn test_splice_no_match() {
        let regex = Regex::new(r"\d+").unwrap();
        assert_eq!(splice(&regex, "không số", |_| None), "không số");
    }

    #[test]
    fn test_default_categories_in_order() {
        let categories: Vec<Category> = default_categories()
            .iter()
            .map(|rules| rules.category())
            .collect();
        assert_eq!(categories, Category::ORDER);
    }
}
