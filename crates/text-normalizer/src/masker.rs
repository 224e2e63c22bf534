//! Placeholder shielding for emails, phone numbers, URLs and codes.
//!
//! A shielded substring is swapped for an inert lower-case placeholder of
//! the form `zzmask<kind><index>zz`, where the index is written in letters.
//! Placeholders contain no digits and no punctuation, so no rule matches
//! them and the classifier passes them through. At the end of the call each
//! placeholder is replaced by the spoken form of its original text.

use tracing::debug;
use vinorm_core::{MaskKind, MaskedSpan};

use crate::mapping::MappingTable;
use crate::num2words::digit_word;
use crate::resources::Resources;

const PREFIX: &str = "zzmask";
const SUFFIX: &str = "zz";

const URL_SCHEMES: [&str; 4] = ["https://", "http://", "sftp://", "ftp://"];

/// Shielded substrings of one normalization call.
#[derive(Debug, Default)]
pub struct MaskSet {
    spans: Vec<MaskedSpan>,
}

impl MaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `original` and return the placeholder standing in for it.
    pub fn insert(&mut self, kind: MaskKind, original: &str) -> String {
        let index = self.spans.len();
        self.spans.push(MaskedSpan {
            kind,
            original: original.to_string(),
        });
        debug!(%kind, index, "shielded substring");
        placeholder(kind, index)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Put category-scoped masks (codes) back verbatim.
    pub fn restore_scoped(&self, text: &str) -> String {
        self.restore_with(text, |span| {
            (span.kind == MaskKind::Code).then(|| span.original.clone())
        })
    }

    /// Replace every remaining placeholder with its spoken form.
    pub fn restore(&self, text: &str, res: &Resources) -> String {
        self.restore_with(text, |span| {
            Some(match span.kind {
                MaskKind::Email => speak_email(&span.original, res),
                MaskKind::Phone => speak_phone(&span.original),
                MaskKind::Web => speak_website(&span.original, res),
                MaskKind::Code => span.original.clone(),
            })
        })
    }

    fn restore_with<F>(&self, text: &str, mut spoken: F) -> String
    where
        F: FnMut(&MaskedSpan) -> Option<String>,
    {
        if !text.contains(PREFIX) {
            return text.to_string();
        }

        let mut result = text.to_string();
        for (index, span) in self.spans.iter().enumerate() {
            let key = placeholder(span.kind, index);
            if result.contains(&key) {
                if let Some(replacement) = spoken(span) {
                    result = result.replace(&key, &replacement);
                }
            }
        }
        result
    }

    /// Shielded substrings in insertion order.
    pub fn into_spans(self) -> Vec<MaskedSpan> {
        self.spans
    }
}

fn placeholder(kind: MaskKind, index: usize) -> String {
    format!("{PREFIX}{}{}{SUFFIX}", kind.tag(), index_letters(index))
}

/// Bijective base-26: 0 -> "a", 25 -> "z", 26 -> "aa".
fn index_letters(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(char::from(b'a' + (index % 26) as u8));
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Spoken form of one character of an address, if it has one.
fn speak_char(c: char, letters: &MappingTable, res: &Resources) -> Option<String> {
    match c {
        '.' => Some("chấm".to_string()),
        '/' => Some("xuyệt".to_string()),
        '@' => Some("a còng".to_string()),
        _ if c.is_ascii_digit() => digit_word(c).map(str::to_string),
        _ => letters
            .get_char(c)
            .or_else(|| res.symbols.get_char(c))
            .map(str::to_string),
    }
}

/// "abc@gmail.com" -> "ây bi si a còng giy meo chấm com".
pub fn speak_email(email: &str, res: &Resources) -> String {
    let lowered = email.to_lowercase();
    let (local, domain) = lowered.split_once('@').unwrap_or((lowered.as_str(), ""));

    let mut parts: Vec<String> = local
        .chars()
        .filter_map(|c| speak_char(c, &res.letters_en, res))
        .collect();
    parts.push("a còng".to_string());

    if domain == "gmail.com" {
        parts.push("giy meo chấm com".to_string());
    } else {
        parts.extend(
            domain
                .chars()
                .filter_map(|c| speak_char(c, &res.letters_en, res)),
        );
    }
    parts.join(" ")
}

/// "www.example.com" -> "vê kép vê kép vê kép chấm e ích a mờ pê lờ e chấm com".
pub fn speak_website(url: &str, res: &Resources) -> String {
    let lowered = url.to_lowercase();
    let body = URL_SCHEMES
        .iter()
        .find_map(|scheme| lowered.strip_prefix(scheme))
        .unwrap_or(lowered.as_str());

    let mut parts = Vec::new();
    for (i, segment) in body.split('.').enumerate() {
        if i > 0 {
            parts.push("chấm".to_string());
        }
        if i > 0 && (segment == "com" || segment.starts_with("com/")) {
            parts.push("com".to_string());
            let rest = &segment[3..];
            parts.extend(rest.chars().filter_map(|c| speak_char(c, &res.letters_vn, res)));
            continue;
        }
        parts.extend(
            segment
                .chars()
                .filter_map(|c| speak_char(c, &res.letters_vn, res)),
        );
    }
    parts.join(" ")
}

/// "+84 912.345" -> "cộng tám bốn chín một hai ba bốn năm".
pub fn speak_phone(phone: &str) -> String {
    phone
        .chars()
        .filter_map(|c| match c {
            '+' => Some("cộng"),
            _ => digit_word(c),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_letters() {
        assert_eq!(index_letters(0), "a");
        assert_eq!(index_letters(25), "z");
        assert_eq!(index_letters(26), "aa");
        assert_eq!(index_letters(27), "ab");
        assert_eq!(index_letters(702), "aaa");
    }

    #[test]
    fn test_placeholder_is_inert() {
        let key = placeholder(MaskKind::Phone, 3);
        assert_eq!(key, "zzmaskphonedzz");
        assert!(key.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_insert_and_restore() {
        let res = Resources::embedded();
        let mut masks = MaskSet::new();
        let key = masks.insert(MaskKind::Phone, "0912345678");
        let text = format!("gọi {key} nhé");

        let restored = masks.restore(&text, &res);
        assert_eq!(
            restored,
            "gọi không chín một hai ba bốn năm sáu bảy tám nhé"
        );
        assert_eq!(masks.len(), 1);
    }

    #[test]
    fn test_scoped_restore_only_touches_codes() {
        let mut masks = MaskSet::new();
        let email = masks.insert(MaskKind::Email, "a@b.vn");
        let code = masks.insert(MaskKind::Code, "BCH-02273");
        let text = format!("{email} {code}");

        let scoped = masks.restore_scoped(&text);
        assert_eq!(scoped, format!("{email} BCH-02273"));

        let spans = masks.into_spans();
        assert_eq!(spans[1].original, "BCH-02273");
    }

    #[test]
    fn test_speak_email() {
        let res = Resources::embedded();
        assert_eq!(
            speak_email("abc@gmail.com", &res),
            "ây bi si a còng giy meo chấm com"
        );
        assert_eq!(
            speak_email("hotro@dienmayabc.com", &res),
            "ếch âu ti a âu a còng đi ai i en em ây quai ây bi si chấm si âu em"
        );
        assert_eq!(
            speak_email("user_xyz@abc.io", &res),
            "diu ét i a ít quai giét a còng ây bi si chấm ai âu"
        );
    }

    #[test]
    fn test_speak_website() {
        let res = Resources::embedded();
        assert_eq!(
            speak_website("www.example.com", &res),
            "vê kép vê kép vê kép chấm e ích a mờ pê lờ e chấm com"
        );
        assert_eq!(
            speak_website("https://www.abc.com.vn", &res),
            "vê kép vê kép vê kép chấm a bê xê chấm com chấm vê nờ"
        );
    }

    #[test]
    fn test_speak_phone() {
        assert_eq!(speak_phone("+84 91"), "cộng tám bốn chín một");
        assert_eq!(speak_phone("(028) 38"), "không hai tám ba tám");
    }
}
