//! Number to Vietnamese words conversion, plus Roman numerals.

const DIGITS: [&str; 10] = [
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

const TEN: &str = "mười";
const TENS: &str = "mươi";
const HUNDRED: &str = "trăm";
const THOUSAND: &str = "nghìn";
const MILLION: &str = "triệu";
const BILLION: &str = "tỷ";
const ONE_AFTER_TENS: &str = "mốt";
const FOUR_AFTER_TENS: &str = "tư";
const FIVE_AFTER_TENS: &str = "lăm";
const ZERO_TENS: &str = "linh";
const POINT: &str = "phẩy";

/// Longest digit string read as a numeral; longer ones are spelled digit by digit.
const MAX_GRAMMATICAL_DIGITS: usize = 15;

/// Below this length a billion separator comma is dropped.
const SHORT_RESULT_CHARS: usize = 60;

const ROMAN_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert a decimal digit string to Vietnamese words.
///
/// Returns "" for empty or non-digit input. Leading zeros are ignored, and a
/// string made only of zeros reads as "không".
pub fn to_words(digits: &str) -> String {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }

    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        return DIGITS[0].to_string();
    }

    if stripped.len() > MAX_GRAMMATICAL_DIGITS {
        return spell_digits(stripped);
    }

    let values: Vec<u8> = stripped.bytes().map(|b| b - b'0').collect();
    let mut result = arbitrary(&values)
        .replace("không nghìn ", "")
        .replace("không triệu ", "");

    if result.chars().count() < SHORT_RESULT_CHARS {
        result = result.replace("tỷ,", "tỷ");
    }

    result
}

/// Spell every ASCII digit of `text` as its own word, skipping anything else.
pub fn spell_digits(text: &str) -> String {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| DIGITS[(b - b'0') as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Word for a single digit character.
pub fn digit_word(c: char) -> Option<&'static str> {
    c.to_digit(10).map(|d| DIGITS[d as usize])
}

/// Read an integer part and a fraction part joined by "phẩy".
///
/// Each leading zero of the fraction is spoken on its own before the rest
/// is read as one number, so `(0, 05)` reads "không phẩy không năm".
pub fn read_decimal(int_part: &str, frac_part: &str) -> String {
    let int_words = if int_part.is_empty() {
        DIGITS[0].to_string()
    } else {
        to_words(int_part)
    };

    if frac_part.is_empty() {
        return int_words;
    }

    let significant = frac_part.trim_start_matches('0');
    let zeros = frac_part.len() - significant.len();

    let mut words = vec![int_words, POINT.to_string()];
    words.extend(std::iter::repeat_n(DIGITS[0].to_string(), zeros));
    if !significant.is_empty() {
        words.push(to_words(significant));
    }
    words.join(" ")
}

/// Read a numeric literal that may carry one ',' or '.' decimal separator.
///
/// Characters other than digits are ignored within each part.
pub fn read_number(literal: &str) -> String {
    let digits_of = |s: &str| s.chars().filter(char::is_ascii_digit).collect::<String>();

    match literal.find([',', '.']) {
        Some(idx) => read_decimal(&digits_of(&literal[..idx]), &digits_of(&literal[idx + 1..])),
        None => to_words(&digits_of(literal)),
    }
}

fn below_hundred(d: &[u8]) -> String {
    match d {
        [] => String::new(),
        [unit] => DIGITS[*unit as usize].to_string(),
        [0, unit] => DIGITS[*unit as usize].to_string(),
        [tens, unit] => {
            let mut result = if *tens == 1 {
                TEN.to_string()
            } else {
                format!("{} {}", DIGITS[*tens as usize], TENS)
            };

            let unit_word = match (*tens, *unit) {
                (_, 0) => return result,
                (t, 1) if t != 1 => ONE_AFTER_TENS,
                (t, 4) if t != 1 => FOUR_AFTER_TENS,
                (_, 5) => FIVE_AFTER_TENS,
                (_, u) => DIGITS[u as usize],
            };
            result.push(' ');
            result.push_str(unit_word);
            result
        }
        _ => below_billion(d),
    }
}

fn below_thousand(d: &[u8]) -> String {
    let [hundreds, tens, unit] = match d {
        [_, _, _] => [d[0], d[1], d[2]],
        _ => return below_hundred(d),
    };

    let head = format!("{} {}", DIGITS[hundreds as usize], HUNDRED);
    match (tens, unit) {
        (0, 0) if hundreds == 0 => String::new(),
        (0, 0) => head,
        (0, u) => format!("{head} {ZERO_TENS} {}", DIGITS[u as usize]),
        _ => format!("{head} {}", below_hundred(&d[1..])),
    }
}

/// Up to nine digits, grouped by thousands.
fn below_billion(d: &[u8]) -> String {
    if d.len() < 4 {
        return below_thousand(d);
    }

    let split = match d.len() % 3 {
        0 => 3,
        n => n,
    };
    let left = below_billion(&d[..split]);
    let right = below_billion(&d[split..]);

    if left.is_empty() && right.is_empty() {
        return String::new();
    }

    let scale = if (d.len() - split) / 3 == 1 {
        THOUSAND
    } else {
        MILLION
    };

    match (left.is_empty(), right.is_empty()) {
        (true, _) => format!("{} {scale} {right}", DIGITS[0]),
        (_, true) => format!("{left} {scale}"),
        _ => format!("{left} {scale} {right}"),
    }
}

/// Any length, grouped by nine-digit billion blocks.
fn arbitrary(d: &[u8]) -> String {
    if d.len() < 10 {
        return below_billion(d);
    }

    let split = match d.len() % 9 {
        0 => 9,
        n => n,
    };
    let left = below_billion(&d[..split]);
    let right = arbitrary(&d[split..]);

    if left.is_empty() {
        return right;
    }

    let scale = vec![BILLION; (d.len() - split) / 9].join(" ");
    if right.is_empty() {
        format!("{left} {scale}")
    } else {
        format!("{left} {scale}, {right}")
    }
}

/// Convert a positive integer to a Roman numeral. Zero gives "".
pub fn to_roman(mut number: u32) -> String {
    let mut result = String::new();
    for (value, symbol) in ROMAN_TABLE {
        while number >= value {
            result.push_str(symbol);
            number -= value;
        }
    }
    result
}

/// Decode an upper-case Roman numeral.
///
/// The value is accepted only when re-encoding it reproduces `roman`
/// exactly, which rejects look-alikes such as "IIII" or "VX".
pub fn from_roman(roman: &str) -> Option<u32> {
    let values = roman
        .chars()
        .map(|c| match c {
            'I' => Some(1),
            'V' => Some(5),
            'X' => Some(10),
            'L' => Some(50),
            'C' => Some(100),
            'D' => Some(500),
            'M' => Some(1000),
            _ => None,
        })
        .collect::<Option<Vec<u32>>>()?;

    let (&last, rest) = values.split_last()?;
    let mut total = last;
    let mut next = last;
    for &value in rest.iter().rev() {
        if value < next {
            total = total.checked_sub(value)?;
        } else {
            total += value;
        }
        next = value;
    }

    (to_roman(total) == roman).then_some(total)
}

/// Read a Roman numeral as Vietnamese words, if it is canonical.
pub fn roman_to_words(roman: &str) -> Option<String> {
    from_roman(roman).map(|value| to_words(&value.to_string()))
}
