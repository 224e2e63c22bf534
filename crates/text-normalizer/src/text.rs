//! Character-level cleanup shared by the pipeline stages.

use unicode_normalization::UnicodeNormalization;

/// Characters dropped as noise before and after token classification.
const NOISE: &[char] = &[
    '"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '(', ')', '[', ']', '{', '}', '.',
];

/// Collapse runs of whitespace into single spaces and trim.
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compose to NFC and fold typographic variants into their plain forms.
pub fn unicode_cleanup(input: &str) -> String {
    input
        .nfc()
        .collect::<String>()
        .replace(['\u{00A0}', '\u{2009}', '\u{202F}'], " ")
        .replace('\u{2014}', " - ")
        .replace(['\u{2013}', '\u{2212}'], "-")
        .replace('\u{2026}', "...")
        .replace(['\u{200B}', '\u{FEFF}'], "")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Surround every non-word, non-space character with spaces.
///
/// Hyphens become plain spaces.
pub fn tokenize_symbols(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '-' => result.push(' '),
            _ if is_word_char(c) || c.is_whitespace() => result.push(c),
            _ => {
                result.push(' ');
                result.push(c);
                result.push(' ');
            }
        }
    }
    result
}

/// Drop quotes, brackets, periods and hyphens not joining two word characters.
///
/// With `space_replace` the dropped characters become spaces instead of
/// vanishing.
pub fn remove_noise(input: &str, space_replace: bool) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len());

    for (i, &c) in chars.iter().enumerate() {
        let noisy = match c {
            '-' => {
                let before = i.checked_sub(1).and_then(|j| chars.get(j));
                let after = chars.get(i + 1);
                !matches!((before, after), (Some(b), Some(a)) if is_word_char(*b) && is_word_char(*a))
            }
            _ => NOISE.contains(&c),
        };

        if !noisy {
            result.push(c);
        } else if space_replace {
            result.push(' ');
        }
    }
    result
}

/// Whether `text` contains a Vietnamese or Latin vowel letter.
pub fn has_vowel(text: &str) -> bool {
    text.chars().any(|c| {
        let base = c.to_lowercase().nfd().next().unwrap_or(c);
        matches!(base, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'ư' | 'ơ')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  hello   world  "), "hello world");
        assert_eq!(collapse_whitespace("a\t\nb"), "a b");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_unicode_cleanup() {
        assert_eq!(unicode_cleanup("hello\u{00A0}world"), "hello world");
        assert_eq!(unicode_cleanup("3\u{2013}5"), "3-5");
        assert_eq!(unicode_cleanup("wait\u{2026}"), "wait...");
        // "ệ" written as e + combining marks composes to one char
        assert_eq!(unicode_cleanup("e\u{0323}\u{0302}"), "\u{1EC7}");
    }

    #[test]
    fn test_tokenize_symbols() {
        assert_eq!(tokenize_symbols("15%"), "15 % ");
        assert_eq!(tokenize_symbols("Covid-19"), "Covid 19");
        assert_eq!(tokenize_symbols("user_xyz"), "user_xyz");
    }

    #[test]
    fn test_remove_noise() {
        assert_eq!(remove_noise("\"xin\" (chào).", false), "xin chào");
        assert_eq!(remove_noise("a - b", false), "a  b");
        assert_eq!(remove_noise("F-16", false), "F-16");
        assert_eq!(remove_noise("(x)", true), " x ");
        assert_eq!(remove_noise("3", false), "3");
    }

    #[test]
    fn test_has_vowel() {
        assert!(has_vowel("Covid"));
        assert!(has_vowel("người"));
        assert!(has_vowel("ĐƯỜNG"));
        assert!(!has_vowel("xmz"));
        assert!(!has_vowel("đc"));
    }
}
