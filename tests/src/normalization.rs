use pretty_assertions::assert_eq;
use unicode_algorithms::normalization::StreamSafe;
use unicode_algorithms::properties;
use unicode_algorithms::{is_nfc, is_nfd, is_nfkc, is_nfkd, nfc, nfd, nfkc, nfkd, unaccent};
use unicode_algorithms::{Error, IsNormalized, Normalizer, Policy};

/// наибольшее количество нестартеров подряд
fn longest_nonstarter_run(text: &str) -> usize
{
    let mut longest = 0;
    let mut current = 0;

    for c in text.chars() {
        match properties::ccc(c).is_starter() {
            true => current = 0,
            false => {
                current += 1;
                longest = longest.max(current);
            }
        }
    }

    longest
}

/// повторная нормализация ничего не меняет, результат проходит проверку
#[test]
fn idempotence()
{
    macro_rules! test {
        ($(($normalize: ident, $check: ident)),+) => {
            $(
                for data in crate::data::files() {
                    let normalized = $normalize(&data.1);

                    assert_eq!($normalize(&normalized), normalized, "{} - {}", stringify!($normalize), data.0);
                    assert!($check(&normalized), "{} - {}", stringify!($check), data.0);
                }
            )+
        };
    }

    test!((nfc, is_nfc), (nfd, is_nfd), (nfkc, is_nfkc), (nfkd, is_nfkd));
}

/// NFD(NFC(s)) == NFD(s), NFKD(NFKC(s)) == NFKD(s)
#[test]
fn decomposition_of_composition()
{
    for data in crate::data::files() {
        assert_eq!(nfd(&nfc(&data.1)), nfd(&data.1), "{}", data.0);
        assert_eq!(nfkd(&nfkc(&data.1)), nfkd(&data.1), "{}", data.0);
        assert_eq!(nfc(&nfd(&data.1)), nfc(&data.1), "{}", data.0);
    }
}

#[test]
fn empty_input()
{
    for normalizer in [Normalizer::nfc(), Normalizer::nfd(), Normalizer::nfkc(), Normalizer::nfkd()] {
        assert_eq!(normalizer.normalize(""), "");
        assert!(normalizer.is_normalized(""));
        assert_eq!(normalizer.quick_check("".chars()), IsNormalized::Yes);
    }

    assert_eq!(unaccent(""), "");
}

#[test]
fn composed_and_decomposed()
{
    assert_eq!(nfc("e\u{301}"), "\u{E9}");
    assert_eq!(nfd("\u{E9}"), "e\u{301}");

    assert_eq!(nfd("\u{AC00}"), "\u{1100}\u{1161}");
    assert_eq!(nfc("\u{1100}\u{1161}"), "\u{AC00}");
    assert_eq!(nfc("\u{1100}\u{1161}\u{11A8}"), "\u{AC01}");
}

/// после 30 нестартеров подряд вставляется U+034F
#[test]
fn stream_safety()
{
    let text = format!("A{}", "\u{301}".repeat(35));

    let composed = nfc(&text);
    let mut expected = format!("\u{C1}{}", "\u{301}".repeat(29));
    expected.push('\u{34F}');
    expected.push_str(&"\u{301}".repeat(5));

    assert_eq!(composed, expected);
    assert_eq!(composed.chars().count(), 36);

    let decomposed = nfd(&text);
    assert_eq!(decomposed.chars().count(), 37);
    assert_eq!(decomposed.chars().position(|c| c == '\u{34F}'), Some(31));

    // быстрая проверка исходного текста не зависит от вставки U+034F
    assert_eq!(Normalizer::nfc().quick_check(text.chars()), IsNormalized::NoOrMaybe);
    assert!(!is_nfc(&text));
    assert!(is_nfc(&composed));

    let long = format!("x{}", "\u{323}\u{301}".repeat(500));

    for normalizer in [Normalizer::nfc(), Normalizer::nfd(), Normalizer::nfkc(), Normalizer::nfkd()] {
        let normalized = normalizer.normalize(&long);

        assert!(longest_nonstarter_run(&normalized) <= 30);
        assert_eq!(normalizer.normalize(&normalized), normalized);
    }
}

/// отдельный процесс потокобезопасного текста не нормализует
#[test]
fn stream_safe_iterator()
{
    let text = format!("\u{E9}{}", "\u{301}".repeat(40));
    let safe: String = StreamSafe::new(text.chars()).collect();

    assert!(safe.starts_with('\u{E9}'));
    assert_eq!(safe.matches('\u{34F}').count(), 1);
    assert!(longest_nonstarter_run(&safe) <= 30);

    let plain = "Ελληνικά και русский";
    assert_eq!(StreamSafe::new(plain.chars()).collect::<String>(), plain);
}

/// метки с одинаковым CCC сохраняют порядок, с разным - сортируются
#[test]
fn canonical_ordering()
{
    assert_eq!(nfd("a\u{301}\u{323}"), "a\u{323}\u{301}");
    assert_eq!(nfd("a\u{301}\u{300}"), "a\u{301}\u{300}");
    assert_eq!(nfc("a\u{301}\u{323}"), "\u{1EA1}\u{301}");
}

#[test]
fn unaccented()
{
    assert_eq!(unaccent("Crème Brûlée"), "Creme Brulee");
    assert_eq!(unaccent("Tiếng Việt"), "Tieng Viet");
    assert_eq!(unaccent("Ångström"), "Angstrom");
    assert_eq!(unaccent("\u{FB01}"), "\u{FB01}");
    assert_eq!(unaccent("한국어"), "한국어");
}

#[test]
fn code_units()
{
    let nfc = Normalizer::nfc();

    let normalized: String = nfc
        .normalize_units(b"e\xCC\x81t\xC3\xA9", Policy::Strict)
        .unwrap();
    assert_eq!(normalized, "\u{E9}t\u{E9}");

    let replaced: Vec<u8> = nfc
        .normalize_units(b"a\xFFb", Policy::Replace)
        .unwrap();
    assert_eq!(replaced, "a\u{FFFD}b".as_bytes());

    assert_eq!(
        nfc.normalize_units::<u8, String>(b"a\xFFb", Policy::Strict),
        Err(Error::Utf8 { offset: 1 })
    );

    assert_eq!(nfc.quick_check_units(b"abc".as_slice()), IsNormalized::Yes);
    assert_eq!(nfc.quick_check_units(b"e\xCC\x81".as_slice()), IsNormalized::NoOrMaybe);
    assert_eq!(nfc.quick_check_units(&[0x61u16, 0xD800]), IsNormalized::IllFormed);
}
