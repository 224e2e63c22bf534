//! Core data types for the normalization pipeline.

use serde::{Deserialize, Serialize};

/// Rule category. Categories run in the order of [`Category::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Emails, phone numbers, football notation, websites.
    SpecialCase,
    /// Dates, date ranges and clock times.
    DateTime,
    /// Currency, measurements, Roman numerals and plain numbers.
    Math,
    /// Administrative divisions, street/office numbering and codes.
    Address,
}

impl Category {
    /// Pipeline-wide application order.
    pub const ORDER: [Category; 4] = [
        Category::SpecialCase,
        Category::DateTime,
        Category::Math,
        Category::Address,
    ];

    /// Directory name holding this category's rule files.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::SpecialCase => "SpecialCase",
            Category::DateTime => "DateTime",
            Category::Math => "Math",
            Category::Address => "Address",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::SpecialCase => write!(f, "special_case"),
            Category::DateTime => write!(f, "datetime"),
            Category::Math => write!(f, "math"),
            Category::Address => write!(f, "address"),
        }
    }
}

/// Kind of substring shielded from rewriting during a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskKind {
    /// Email address.
    Email,
    /// Phone number or hotline.
    Phone,
    /// Website URL.
    Web,
    /// Alphanumeric code protected from number rules.
    Code,
}

impl MaskKind {
    /// Lower-case tag used inside placeholders.
    pub fn tag(self) -> &'static str {
        match self {
            MaskKind::Email => "email",
            MaskKind::Phone => "phone",
            MaskKind::Web => "web",
            MaskKind::Code => "code",
        }
    }
}

impl std::fmt::Display for MaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Class of a punctuation mark trailing a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunctClass {
    /// `.`, `!`, `?`, `:`; spoken as a full stop.
    Sentence,
    /// `,`, `;`; spoken as a short pause.
    Listing,
}

impl PunctClass {
    /// Class of `c`, if it is a mark the classifier normalizes.
    pub fn of(c: char) -> Option<Self> {
        match c {
            '.' | '!' | '?' | ':' => Some(PunctClass::Sentence),
            ',' | ';' => Some(PunctClass::Listing),
            _ => None,
        }
    }

    /// Collapsed written form.
    pub fn mark(self) -> char {
        match self {
            PunctClass::Sentence => '.',
            PunctClass::Listing => ',',
        }
    }
}

/// Normalized text with metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormText {
    /// The normalized text content.
    pub text: String,
    /// Substrings that were shielded and restored, in input order.
    pub masked: Vec<MaskedSpan>,
}

/// A shielded substring as it appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedSpan {
    /// What the substring was recognized as.
    pub kind: MaskKind,
    /// Original text.
    pub original: String,
}

impl NormText {
    /// Create a new NormText with no masked spans.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            masked: Vec::new(),
        }
    }

    /// Create NormText with masked span information.
    pub fn with_masked(text: impl Into<String>, masked: Vec<MaskedSpan>) -> Self {
        Self {
            text: text.into(),
            masked,
        }
    }
}

impl std::fmt::Display for NormText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
