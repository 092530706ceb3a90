use std::cmp::Ordering;

use pretty_assertions::assert_eq;
use unicode_algorithms::casing::{self, Locale};
use unicode_algorithms::collation::{collate, collate_caseless, sort_key, sort_key_caseless};
use unicode_algorithms::nfd;
use unicode_algorithms::segmentation::words;

/// сравнение по ключам - полный порядок на словах из текстов
#[test]
fn total_order()
{
    for data in crate::data::files() {
        let mut list: Vec<&str> = words(&data.1).collect();
        list.sort_by(|a, b| collate(a, b));

        for pair in list.windows(2) {
            assert_ne!(collate(pair[0], pair[1]), Ordering::Greater, "{}", data.0);
            assert_eq!(collate(pair[1], pair[0]), collate(pair[0], pair[1]).reverse(), "{}", data.0);
        }
    }
}

/// начало последнего уровня ключа
fn fallback_start(key: &[u32]) -> usize
{
    key.iter()
        .enumerate()
        .filter(|(_, &weight)| weight == 0)
        .nth(2)
        .map(|(index, _)| index)
        .unwrap()
}

/// канонически эквивалентные строки различаются только последним уровнем
#[test]
fn canonical_equivalence()
{
    for data in crate::data::files() {
        for word in words(&data.1) {
            let key = sort_key(word);
            let decomposed = sort_key(&nfd(word));

            assert_eq!(key.iter().filter(|&&weight| weight == 0).count(), 3);
            assert_eq!(
                &key[.. fallback_start(&key)],
                &decomposed[.. fallback_start(&decomposed)],
                "{} - {}",
                data.0,
                word
            );
        }
    }
}

/// без учёта регистра строки в разных регистрах равны
#[test]
fn caseless_keys()
{
    for data in crate::data::files() {
        if data.0 == "turkish" {
            continue;
        }

        for word in words(&data.1) {
            let upper = casing::to_uppercase(word, Locale::Und);

            assert_eq!(sort_key_caseless(word), sort_key_caseless(&upper), "{} - {}", data.0, word);
            assert_eq!(collate_caseless(word, &upper), Ordering::Equal);
        }
    }
}
