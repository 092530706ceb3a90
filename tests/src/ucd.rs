use std::collections::HashSet;

use pretty_assertions::assert_eq;
use unicode_algorithms::{is_nfc, is_nfd, is_nfkc, is_nfkd, Normalizer};

use crate::data::{normalization_tests, NormalizationTest};

lazy_static::lazy_static! {
    static ref NORMALIZATION_TESTS: Vec<NormalizationTest> =
        normalization_tests("./../test_data/normalization_tests.txt");
}

macro_rules! test {
    ($left: expr, $right: expr, $normalizer: expr, $test: expr, $str: expr) => {
        assert_eq!(
            $left,
            $normalizer.normalize(&$right),
            $str,
            $test.part,
            $test.line,
            $test.description
        );
    };
}

/// тесты NFC нормализации
#[test]
fn ucd_test_nfc()
{
    // c2 ==  toNFC(c1) ==  toNFC(c2) ==  toNFC(c3)
    // c4 ==  toNFC(c4) ==  toNFC(c5)

    let normalizer = Normalizer::nfc();

    for t in NORMALIZATION_TESTS.iter() {
        test!(t.c2, t.c1, normalizer, t, "{} {} {}: c2 == toNFC(c1)");
        test!(t.c2, t.c2, normalizer, t, "{} {} {}: c2 == toNFC(c2)");
        test!(t.c2, t.c3, normalizer, t, "{} {} {}: c2 == toNFC(c3)");
        test!(t.c4, t.c4, normalizer, t, "{} {} {}: c4 == toNFC(c4)");
        test!(t.c4, t.c5, normalizer, t, "{} {} {}: c4 == toNFC(c5)");

        assert!(is_nfc(&t.c2), "{} {}: isNFC(c2)", t.part, t.line);
        assert!(is_nfc(&t.c4), "{} {}: isNFC(c4)", t.part, t.line);
        assert_eq!(is_nfc(&t.c1), t.c1 == t.c2, "{} {}: isNFC(c1)", t.part, t.line);
    }
}

/// тесты NFD нормализации
#[test]
fn ucd_test_nfd()
{
    // c3 ==  toNFD(c1) ==  toNFD(c2) ==  toNFD(c3)
    // c5 ==  toNFD(c4) ==  toNFD(c5)

    let normalizer = Normalizer::nfd();

    for t in NORMALIZATION_TESTS.iter() {
        test!(t.c3, t.c1, normalizer, t, "{} {} {}: c3 == toNFD(c1)");
        test!(t.c3, t.c2, normalizer, t, "{} {} {}: c3 == toNFD(c2)");
        test!(t.c3, t.c3, normalizer, t, "{} {} {}: c3 == toNFD(c3)");
        test!(t.c5, t.c4, normalizer, t, "{} {} {}: c5 == toNFD(c4)");
        test!(t.c5, t.c5, normalizer, t, "{} {} {}: c5 == toNFD(c5)");

        assert!(is_nfd(&t.c3), "{} {}: isNFD(c3)", t.part, t.line);
        assert_eq!(is_nfd(&t.c1), t.c1 == t.c3, "{} {}: isNFD(c1)", t.part, t.line);
    }
}

/// тесты NFKC нормализации
#[test]
fn ucd_test_nfkc()
{
    // c4 == toNFKC(c1) == toNFKC(c2) == toNFKC(c3) == toNFKC(c4) == toNFKC(c5)

    let normalizer = Normalizer::nfkc();

    for t in NORMALIZATION_TESTS.iter() {
        test!(t.c4, t.c1, normalizer, t, "{} {} {}: c4 == toNFKC(c1)");
        test!(t.c4, t.c2, normalizer, t, "{} {} {}: c4 == toNFKC(c2)");
        test!(t.c4, t.c3, normalizer, t, "{} {} {}: c4 == toNFKC(c3)");
        test!(t.c4, t.c4, normalizer, t, "{} {} {}: c4 == toNFKC(c4)");
        test!(t.c4, t.c5, normalizer, t, "{} {} {}: c4 == toNFKC(c5)");

        assert!(is_nfkc(&t.c4), "{} {}: isNFKC(c4)", t.part, t.line);
        assert_eq!(is_nfkc(&t.c1), t.c1 == t.c4, "{} {}: isNFKC(c1)", t.part, t.line);
    }
}

/// тесты NFKD нормализации
#[test]
fn ucd_test_nfkd()
{
    // c5 == toNFKD(c1) == toNFKD(c2) == toNFKD(c3) == toNFKD(c4) == toNFKD(c5)

    let normalizer = Normalizer::nfkd();

    for t in NORMALIZATION_TESTS.iter() {
        test!(t.c5, t.c1, normalizer, t, "{} {} {}: c5 == toNFKD(c1)");
        test!(t.c5, t.c2, normalizer, t, "{} {} {}: c5 == toNFKD(c2)");
        test!(t.c5, t.c3, normalizer, t, "{} {} {}: c5 == toNFKD(c3)");
        test!(t.c5, t.c4, normalizer, t, "{} {} {}: c5 == toNFKD(c4)");
        test!(t.c5, t.c5, normalizer, t, "{} {} {}: c5 == toNFKD(c5)");

        assert!(is_nfkd(&t.c5), "{} {}: isNFKD(c5)", t.part, t.line);
        assert_eq!(is_nfkd(&t.c1), t.c1 == t.c5, "{} {}: isNFKD(c1)", t.part, t.line);
    }
}

/// кодпоинты, не перечисленные в Part1, не меняются ни одной формой нормализации
#[test]
fn ucd_test_invariants()
{
    let listed: HashSet<&str> = NORMALIZATION_TESTS
        .iter()
        .filter(|t| t.part.starts_with("Part1"))
        .map(|t| t.c1.as_str())
        .collect();

    let normalizers = [
        Normalizer::nfc(),
        Normalizer::nfd(),
        Normalizer::nfkc(),
        Normalizer::nfkd(),
    ];

    let mut buffer = [0; 4];

    for c in (0 ..= 0x10FFFF).filter_map(char::from_u32) {
        let c = c.encode_utf8(&mut buffer);

        if listed.contains(&*c) {
            continue;
        }

        for normalizer in normalizers.iter() {
            assert_eq!(normalizer.normalize(c), c.to_owned(), "{:?} {:?}", normalizer.form(), c);
        }
    }
}
