use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};
use pretty_assertions::assert_eq;
use unicode_algorithms::Normalizer;

/// сравниваем с результатами нормализации ICU
#[test]
fn icu()
{
    let icu_nfd = DecomposingNormalizer::new_nfd();
    let icu_nfkd = DecomposingNormalizer::new_nfkd();
    let icu_nfc = ComposingNormalizer::new_nfc();
    let icu_nfkc = ComposingNormalizer::new_nfkc();

    macro_rules! test {
        ($(($normalizer: expr, $icu: expr, $t: expr)),+) => {
            $(
                let normalizer = $normalizer;

                for data in crate::data::files() {
                    let expected = $icu.normalize(data.1.as_str());

                    assert_eq!(normalizer.normalize(data.1.as_str()), expected, "{} - {}", $t, data.0);
                    assert_eq!(
                        normalizer.normalize_chars(data.1.chars()).collect::<String>(),
                        expected,
                        "{} (итератор) - {}",
                        $t,
                        data.0
                    );
                    assert!(normalizer.is_normalized(&expected), "{} - {}", $t, data.0);
                    assert_eq!(
                        normalizer.is_normalized(data.1.as_str()),
                        $icu.is_normalized(data.1.as_str()),
                        "{} (проверка) - {}",
                        $t,
                        data.0
                    );
                }
            )+
        };
    }

    test!(
        (Normalizer::nfd(), icu_nfd, "nfd"),
        (Normalizer::nfkd(), icu_nfkd, "nfkd"),
        (Normalizer::nfc(), icu_nfc, "nfc"),
        (Normalizer::nfkc(), icu_nfkc, "nfkc")
    );
}

/// ICU и UTF-16
#[test]
fn icu_utf16()
{
    let icu_nfc = ComposingNormalizer::new_nfc();
    let nfc = Normalizer::nfc();

    for data in crate::data::files() {
        let units: Vec<u16> = data.1.encode_utf16().collect();
        let expected: Vec<u16> = icu_nfc.normalize(data.1.as_str()).encode_utf16().collect();

        let normalized: Vec<u16> = nfc
            .normalize_units(&units, unicode_algorithms::Policy::Strict)
            .unwrap();

        assert_eq!(normalized, expected, "{}", data.0);
    }
}
