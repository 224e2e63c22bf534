//! Golden tests for text normalization.
//!
//! These tests verify that the normalizer produces expected output for a corpus
//! of representative inputs. The corpus also pins the order in which the rule
//! categories run: a reordering that changes any of these outputs is a
//! behaviour change.

use text_normalizer::Normalizer;
use vinorm_core::{NormalizeOptions, TextNormalizer};

/// Test case structure for golden tests.
struct GoldenTestCase {
    input: &'static str,
    expected: &'static str,
    description: &'static str,
}

const GOLDEN_TESTS: &[GoldenTestCase] = &[
    // Measurements
    GoldenTestCase {
        input: "2km",
        expected: "hai kí lô mét.",
        description: "Measurement without space",
    },
    GoldenTestCase {
        input: "Khối lượng 2.5kg",
        expected: "Khối lượng hai phẩy năm kí lô gam.",
        description: "Decimal measurement",
    },
    GoldenTestCase {
        input: "60 km/h",
        expected: "sáu mươi kí lô mét trên giờ.",
        description: "Compound unit",
    },
    GoldenTestCase {
        input: "3cm-5cm",
        expected: "ba xen ti mét đến năm xen ti mét.",
        description: "Unit range with repeated unit",
    },
    GoldenTestCase {
        input: "Covid19",
        expected: "Covid mười chín.",
        description: "Unknown unit is not a measurement",
    },
    // Numbers
    GoldenTestCase {
        input: "123-456",
        expected: "một trăm hai mươi ba bốn trăm năm mươi sáu.",
        description: "Hyphen between numbers is not a minus sign",
    },
    GoldenTestCase {
        input: "15%",
        expected: "mười lăm phần trăm.",
        description: "Percentage",
    },
    GoldenTestCase {
        input: "tăng 10-20%",
        expected: "tăng mười đến hai mươi phần trăm.",
        description: "Percentage range",
    },
    GoldenTestCase {
        input: "IIII",
        expected: "ai ai ai ai.",
        description: "Non-canonical Roman numeral is spelled",
    },
    // Currency
    GoldenTestCase {
        input: "Giá 3.990.500đ.",
        expected: "Giá ba triệu chín trăm chín mươi nghìn năm trăm đồng.",
        description: "Thousand-grouped currency",
    },
    GoldenTestCase {
        input: "giá 100$",
        expected: "giá một trăm đô la.",
        description: "Trailing currency symbol",
    },
    // Dates and times
    GoldenTestCase {
        input: "25/12/2020",
        expected: "hai mươi lăm tháng mười hai năm hai nghìn không trăm hai mươi.",
        description: "Full date",
    },
    GoldenTestCase {
        input: "từ 3/1/2021 - 2/2/2023",
        expected: "từ ba tháng một năm hai nghìn không trăm hai mươi mốt đến \
                   hai tháng hai năm hai nghìn không trăm hai mươi ba.",
        description: "Full date range has one connector",
    },
    GoldenTestCase {
        input: "ngày 8/3",
        expected: "ngày tám tháng ba.",
        description: "Day and month",
    },
    GoldenTestCase {
        input: "tháng 12/2020",
        expected: "tháng mười hai năm hai nghìn không trăm hai mươi.",
        description: "Month and year",
    },
    GoldenTestCase {
        input: "năm 2019-2020",
        expected: "năm hai nghìn không trăm mười chín đến hai nghìn không trăm hai mươi.",
        description: "Year range",
    },
    GoldenTestCase {
        input: "Thế kỷ XXI",
        expected: "Thế kỷ hai mươi mốt.",
        description: "Roman century",
    },
    GoldenTestCase {
        input: "lúc 14:30",
        expected: "lúc mười bốn giờ ba mươi.",
        description: "Clock time",
    },
    GoldenTestCase {
        input: "5:00 PM",
        expected: "năm giờ bi em.",
        description: "Clock time with meridiem",
    },
    // Special cases
    GoldenTestCase {
        input: "Đội U23 thắng 2-1",
        expected: "Đội u hai mươi ba thắng hai , một.",
        description: "Football age group and score",
    },
    GoldenTestCase {
        input: "email: abc@gmail.com",
        expected: "email ây bi si a còng giy meo chấm com.",
        description: "Email with the gmail idiom",
    },
    GoldenTestCase {
        input: "Liên hệ 0912345678",
        expected: "Liên hệ không chín một hai ba bốn năm sáu bảy tám.",
        description: "Phone number",
    },
    GoldenTestCase {
        input: "Hotline 1900.1234",
        expected: "Hotline một chín không không một hai ba bốn.",
        description: "Hotline number",
    },
    GoldenTestCase {
        input: "website www.abc.vn",
        expected: "website vê kép vê kép vê kép chấm a bê xê chấm vê nờ.",
        description: "Website",
    },
    // Addresses and codes
    GoldenTestCase {
        input: "q.1",
        expected: "quận một.",
        description: "District abbreviation",
    },
    GoldenTestCase {
        input: "TP.HCM",
        expected: "thành phố hồ chí minh.",
        description: "City abbreviation and acronym",
    },
    GoldenTestCase {
        input: "số 12A/3",
        expected: "số mười hai a xuyệt ba.",
        description: "House number with a slash",
    },
    GoldenTestCase {
        input: "phòng 3A/2",
        expected: "phòng ba a hai.",
        description: "Room number, slash is silent",
    },
    GoldenTestCase {
        input: "số 05/12",
        expected: "số không năm xuyệt mười hai.",
        description: "Leading zero of a house number is spoken alone",
    },
    GoldenTestCase {
        input: "đường 3/2",
        expected: "đường ba , hai.",
        description: "Street name is not a house number",
    },
    GoldenTestCase {
        input: "ABC12345",
        expected: "ây bi si một hai ba bốn năm.",
        description: "Letters followed by a long digit run",
    },
    // Tokens
    GoldenTestCase {
        input: "UBND ko đồng ý",
        expected: "ủy ban nhân dân không đồng ý.",
        description: "Acronym and teencode",
    },
];

#[test]
fn test_golden_corpus() {
    let normalizer = Normalizer::new();
    let options = NormalizeOptions::default();

    for (i, test) in GOLDEN_TESTS.iter().enumerate() {
        let result = normalizer.normalize(test.input, &options);

        assert_eq!(
            result.text,
            test.expected,
            "\nGolden Test #{} FAILED: {}\nInput:    '{}'\nExpected: '{}'\nGot:      '{}'",
            i + 1,
            test.description,
            test.input,
            test.expected,
            result.text
        );
    }

    println!("All {} golden tests passed!", GOLDEN_TESTS.len());
}

/// Edge cases and regression tests.
#[test]
fn test_edge_cases() {
    let normalizer = Normalizer::new();
    let options = NormalizeOptions::default();

    // Empty and blank input
    assert_eq!(normalizer.normalize_str("", &options), "");
    assert_eq!(normalizer.normalize_str("   ", &options), "");

    // Plain Vietnamese passes through
    assert_eq!(normalizer.normalize_str("Xin chào", &options), "Xin chào.");

    // No placeholder survives, masked or not
    for input in ["gọi 0912345678 hoặc abc@gmail.com", "số 5 đường 3/2"] {
        let text = normalizer.normalize_str(input, &options);
        assert!(!text.contains("zzmask"), "{input} -> {text}");
    }

    // Very large numbers
    let text = normalizer.normalize_str("1000000000", &options);
    assert!(text.contains("tỷ"), "{text}");

    // Beyond the numeral grammar, digits are spelled
    let text = normalizer.normalize_str("1234567890123456", &options);
    assert!(text.starts_with("một hai ba bốn"), "{text}");
}

#[test]
fn test_option_switches() {
    let normalizer = Normalizer::new();

    let lower = NormalizeOptions::new().with_lowercase_output(true);
    assert_eq!(normalizer.normalize_str("Năm 2016", &lower), "năm hai nghìn không trăm mười sáu.");

    let passthrough = NormalizeOptions::new().with_unknown_passthrough(true);
    assert_eq!(normalizer.normalize_str("XYZ", &passthrough), "XYZ.");

    let rule_only = NormalizeOptions::new().with_rule_only(true);
    assert_eq!(normalizer.normalize_str("2km ko", &rule_only), "hai kí lô mét ko");
}

#[test]
fn test_concurrent_callers_share_tables() {
    let normalizer = Normalizer::new();
    let options = NormalizeOptions::default();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(normalizer.normalize_str("2km", &options), "hai kí lô mét.");
            });
        }
    });
}
