//! Token classification.
//!
//! Runs after the rule categories on text whose symbols are already spaced
//! out. Each whitespace token loses at most one trailing punctuation mark and
//! its stem is resolved by the first matching step:
//!
//! 1. no letters or digits: symbol name, collapsed punctuation, or verbatim
//! 2. popular word: verbatim
//! 3. acronym: expansion
//! 4. teencode: expansion
//! 5. split at symbols and classify each piece, spelling letter runs that
//!    cannot be read as words
//!
//! A stem never resolves to nothing; an empty result falls back to the stem.

use tracing::trace;
use vinorm_core::{NormalizeOptions, PunctClass};

use crate::mapping::is_upper_word;
use crate::num2words::roman_to_words;
use crate::resources::Resources;
use crate::scan::spell_letters;
use crate::text::{has_vowel, remove_noise, tokenize_symbols};

/// Single letters read as letters, never as 50, 100, 500 or 1000. Math
/// applies the same rule to standalone numerals; see "Roman numerals" in
/// DESIGN.md.
const PLAIN_LETTERS: [&str; 4] = ["L", "C", "D", "M"];

/// Classifies tokens against the shared tables.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    res: &'a Resources,
    options: &'a NormalizeOptions,
}

impl<'a> Classifier<'a> {
    pub fn new(res: &'a Resources, options: &'a NormalizeOptions) -> Self {
        Self { res, options }
    }

    /// Classify every whitespace-separated token of `text`.
    pub fn classify_text(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|token| self.classify_token(token))
            .filter(|out| !out.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Classify one token, keeping its trailing punctuation as a separate word.
    pub fn classify_token(&self, token: &str) -> String {
        let (stem, trailing) = split_trailing(token);
        let mut words = Vec::with_capacity(2);

        if !stem.is_empty() {
            words.push(self.resolve(stem));
        }
        if let Some(mark) = trailing {
            words.push(self.punctuation(mark));
        }

        let out = words.join(" ");
        trace!(token, out = %out, "classified");
        out
    }

    fn resolve(&self, stem: &str) -> String {
        if !stem.chars().any(char::is_alphanumeric) {
            return self.symbolic(stem);
        }
        if let Some(word) = self.known(stem) {
            return word;
        }

        let pieces = remove_noise(&tokenize_symbols(stem), true);
        let out = pieces
            .split_whitespace()
            .map(|piece| self.piece(piece))
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if out.is_empty() {
            stem.to_string()
        } else {
            out
        }
    }

    /// Popular words, then acronyms, then teencode.
    fn known(&self, word: &str) -> Option<String> {
        if self.res.popular.contains(word) {
            return Some(word.to_string());
        }
        self.res
            .acronyms
            .get(word)
            .or_else(|| self.res.teencode.get(word))
            .map(str::to_string)
    }

    fn piece(&self, piece: &str) -> String {
        if !piece.chars().any(char::is_alphanumeric) {
            return self.symbolic(piece);
        }
        if let Some(word) = self.known(piece) {
            return word;
        }
        if !self.is_alphabet_word(piece) {
            return piece.to_string();
        }

        if is_upper_word(piece) {
            if !PLAIN_LETTERS.contains(&piece) {
                if let Some(number) = roman_to_words(piece) {
                    return number;
                }
            }
            if self.options.unknown_passthrough {
                return piece.to_string();
            }
            return spell_letters(piece, self.res, true);
        }

        if has_vowel(piece) || self.options.unknown_passthrough {
            piece.to_string()
        } else {
            spell_letters(piece, self.res, false)
        }
    }

    /// Letters of the Vietnamese alphabet only, without tone marks.
    fn is_alphabet_word(&self, word: &str) -> bool {
        word.chars()
            .flat_map(char::to_lowercase)
            .all(|c| self.res.letters_vn.get_char(c).is_some())
    }

    fn symbolic(&self, stem: &str) -> String {
        let mut chars = stem.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(name) = self.res.symbols.get_char(c) {
                return name.to_string();
            }
            if PunctClass::of(c).is_some() {
                return self.punctuation(c);
            }
            if c == '/' {
                return PunctClass::Listing.mark().to_string();
            }
        }
        stem.to_string()
    }

    fn punctuation(&self, mark: char) -> String {
        match PunctClass::of(mark) {
            Some(class) if !self.options.keep_punctuation => class.mark().to_string(),
            _ => mark.to_string(),
        }
    }
}

/// Split off one trailing punctuation mark.
fn split_trailing(token: &str) -> (&str, Option<char>) {
    match token.char_indices().last() {
        Some((i, c)) if i > 0 && PunctClass::of(c).is_some() => (&token[..i], Some(c)),
        _ => (token, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str, options: NormalizeOptions) -> String {
        let res = Resources::embedded();
        Classifier::new(&res, &options).classify_text(text)
    }

    fn default(text: &str) -> String {
        classify(text, NormalizeOptions::default())
    }

    #[test]
    fn test_split_trailing() {
        assert_eq!(split_trailing("nhà,"), ("nhà", Some(',')));
        assert_eq!(split_trailing("đi!"), ("đi", Some('!')));
        assert_eq!(split_trailing("."), (".", None));
        assert_eq!(split_trailing("abc"), ("abc", None));
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(default("Chào bạn!"), "Chào bạn .");
        assert_eq!(default("một; hai: ba"), "một , hai . ba");
        assert_eq!(default("Chào bạn ?"), "Chào bạn .");
    }

    #[test]
    fn test_keep_punctuation() {
        let options = NormalizeOptions::new().with_keep_punctuation(true);
        assert_eq!(classify("Chào bạn!", options), "Chào bạn !");
        assert_eq!(classify("một ; hai", options), "một ; hai");
    }

    #[test]
    fn test_symbols() {
        assert_eq!(default("mười lăm %"), "mười lăm phần trăm");
        assert_eq!(default("A & B"), "ây và bi");
        assert_eq!(default("và / hoặc"), "và , hoặc");
    }

    #[test]
    fn test_dictionary_precedence() {
        assert_eq!(default("Covid"), "Covid");
        assert_eq!(default("TIN"), "TIN");
        assert_eq!(default("UBND"), "ủy ban nhân dân");
        assert_eq!(default("ko đc"), "không được");
        assert_eq!(default("KO"), "cây âu");
    }

    #[test]
    fn test_upper_case_words() {
        assert_eq!(default("ABC"), "ây bi si");
        assert_eq!(default("XIV"), "mười bốn");
        assert_eq!(default("C"), "si");
        let options = NormalizeOptions::new().with_unknown_passthrough(true);
        assert_eq!(classify("ABC", options), "ABC");
    }

    #[test]
    fn test_lower_case_words() {
        assert_eq!(default("nhà"), "nhà");
        assert_eq!(default("hello"), "hello");
        assert_eq!(default("tp"), "tê pê");
        let options = NormalizeOptions::new().with_unknown_passthrough(true);
        assert_eq!(classify("tp", options), "tp");
    }

    #[test]
    fn test_tone_marked_words_kept() {
        assert_eq!(default("NGÀY"), "NGÀY");
    }

    #[test]
    fn test_placeholders_pass_through() {
        assert_eq!(default("zzmaskemailazz"), "zzmaskemailazz");
    }

    #[test]
    fn test_split_into_pieces() {
        assert_eq!(default("ABC/XYZ"), "ây bi si , ít quai giét");
    }
}
