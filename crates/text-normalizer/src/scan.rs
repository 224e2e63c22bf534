//! Digit-run scan shared by the rule handlers.
//!
//! The scan walks a matched substring, accumulating digit runs and letter
//! runs. A run is flushed when a character of another class arrives: digit
//! runs are read as one number, letter runs are kept or spelled depending on
//! the [`LetterMode`]. Separator characters emit the word their policy
//! assigns (an empty word is silent). Whitespace only ends runs.
//!
//! House and room numbers say a leading zero on its own: "05" is
//! "không năm", while "105" stays one number.

use crate::mapping::is_upper_word;
use crate::num2words::to_words;
use crate::resources::Resources;

/// How letter runs are spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterMode {
    /// Keep the run as written.
    Verbatim,
    /// Spell every letter with the Vietnamese letter names.
    Vietnamese,
    /// Spell all-caps runs with English letter names, others with
    /// Vietnamese ones.
    Auto,
}

/// Per-handler scan behaviour.
#[derive(Debug, Clone, Copy)]
pub struct ScanPolicy {
    /// Characters with a fixed spoken word.
    pub separators: &'static [(char, &'static str)],
    pub letters: LetterMode,
    /// Keep letter runs found in the popular-word set.
    pub known_words: bool,
    /// A '0' that would start a digit run is spoken alone.
    pub leading_zero: bool,
}

impl ScanPolicy {
    fn separator(&self, c: char) -> Option<&'static str> {
        self.separators
            .iter()
            .find_map(|&(sep, word)| (sep == c).then_some(word))
    }
}

/// Day/month ranges: "01/03-05/03".
pub const DAY_RANGE: ScanPolicy = ScanPolicy {
    separators: &[('/', "tháng"), ('.', "tháng"), ('-', "đến")],
    letters: LetterMode::Verbatim,
    known_words: false,
    leading_zero: false,
};

/// Month/year ranges: "3/2020 - 4/2020".
pub const MONTH_RANGE: ScanPolicy = ScanPolicy {
    separators: &[('/', "năm"), ('.', "năm"), ('-', "đến tháng")],
    letters: LetterMode::Verbatim,
    known_words: false,
    leading_zero: false,
};

/// House numbers after "số", "ngõ", "hẻm".
pub const STREET: ScanPolicy = ScanPolicy {
    separators: &[('/', "xuyệt"), ('-', ","), ('.', "chấm")],
    letters: LetterMode::Vietnamese,
    known_words: false,
    leading_zero: true,
};

/// Room and floor numbers after "phòng", "tầng".
pub const OFFICE: ScanPolicy = ScanPolicy {
    separators: &[('/', ""), ('-', ","), ('.', "chấm")],
    letters: LetterMode::Vietnamese,
    known_words: false,
    leading_zero: true,
};

/// Free-form product and order codes.
pub const CODE: ScanPolicy = ScanPolicy {
    separators: &[('/', "xuyệt"), ('-', ""), ('.', "chấm")],
    letters: LetterMode::Auto,
    known_words: true,
    leading_zero: false,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    None,
    Digits,
    Letters,
}

struct Scanner<'a> {
    policy: &'a ScanPolicy,
    res: &'a Resources,
    words: Vec<String>,
    run: String,
    kind: Run,
}

impl<'a> Scanner<'a> {
    fn push(&mut self, c: char, kind: Run) {
        if self.kind != kind {
            self.flush();
            self.kind = kind;
        }
        self.run.push(c);
    }

    fn emit(&mut self, word: &str) {
        if !word.is_empty() {
            self.words.push(word.to_string());
        }
    }

    fn flush(&mut self) {
        let run = std::mem::take(&mut self.run);
        match self.kind {
            Run::None => {}
            Run::Digits => {
                let words = to_words(&run);
                self.emit(&words);
            }
            Run::Letters => {
                let words = self.letters(&run);
                self.emit(&words);
            }
        }
        self.kind = Run::None;
    }

    fn letters(&self, run: &str) -> String {
        if self.policy.letters == LetterMode::Verbatim
            || (self.policy.known_words && self.res.popular.contains(run))
        {
            return run.to_string();
        }

        let english = self.policy.letters == LetterMode::Auto && is_upper_word(run);
        spell_letters(run, self.res, english)
    }
}

/// Speak `text` under `policy`.
pub fn scan(text: &str, policy: &ScanPolicy, res: &Resources) -> String {
    let mut scanner = Scanner {
        policy,
        res,
        words: Vec::new(),
        run: String::new(),
        kind: Run::None,
    };

    for c in text.chars() {
        if let Some(word) = policy.separator(c) {
            scanner.flush();
            scanner.emit(word);
        } else if c == '0' && policy.leading_zero && scanner.kind != Run::Digits {
            scanner.flush();
            scanner.emit(&to_words("0"));
        } else if c.is_ascii_digit() {
            scanner.push(c, Run::Digits);
        } else if c.is_alphabetic() {
            scanner.push(c, Run::Letters);
        } else if c.is_whitespace() {
            scanner.flush();
        } else {
            scanner.flush();
            scanner.emit(&c.to_string());
        }
    }
    scanner.flush();

    scanner.words.join(" ")
}

/// Spell `word` letter by letter.
///
/// Letters without a name in the chosen table are kept as they are.
pub fn spell_letters(word: &str, res: &Resources, english: bool) -> String {
    let table = if english {
        &res.letters_en
    } else {
        &res.letters_vn
    };

    word.chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            table
                .get_char(c)
                .map_or_else(|| c.to_string(), str::to_string)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
