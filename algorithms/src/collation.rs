//! упрощённые ключи сортировки (экспериментально, не соответствует UCA / DUCET).
//!
//! текст раскладывается канонически (NFD), затем ключ собирается из уровней, разделённых нулём:
//!  - первичный: класс символа и простая свёртка регистра базового кодпоинта;
//!  - вторичный: диакритика, относящаяся к базовому кодпоинту;
//!  - третичный: регистр базового кодпоинта;
//!  - последний уровень: кодпоинты исходного текста.
//!
//! значения уровней смещены на 1, чтобы не совпадать с разделителем

use core::cmp::Ordering;

use crate::casing::{caseless, simple_casefold};
use crate::normalization::Normalizer;
use crate::properties::{self, GeneralCategory};

/// разделитель уровней
const LEVEL_SEPARATOR: u32 = 0;
/// начало группы вторичного уровня (для каждого базового кодпоинта)
const SECONDARY_BASE: u32 = 1;
/// третичный уровень: строчные буквы и кодпоинты без регистра
const TERTIARY_LOWER: u32 = 1;
/// третичный уровень: заглавные буквы
const TERTIARY_UPPER: u32 = 2;

/// класс символа первичного уровня: пробелы и управляющие < пунктуация < символы < цифры < буквы и прочее
#[inline]
fn primary_class(category: GeneralCategory) -> u32
{
    match category {
        _ if category.is_separator() => 1,
        GeneralCategory::Control | GeneralCategory::Format => 1,
        _ if category.is_punctuation() => 2,
        _ if category.is_symbol() => 3,
        _ if category.is_numeric() => 4,
        _ => 5,
    }
}

/// вес первичного уровня
#[inline]
fn primary_weight(c: char) -> u32
{
    let class = primary_class(properties::general_category(c));

    ((class << 21) | simple_casefold(c) as u32) + 1
}

/// вес третичного уровня
#[inline]
fn tertiary_weight(c: char) -> u32
{
    match properties::general_category(c) {
        GeneralCategory::UppercaseLetter | GeneralCategory::TitlecaseLetter => TERTIARY_UPPER,
        _ => TERTIARY_LOWER,
    }
}

/// сборка ключа из канонически разложенной последовательности и последовательности последнего уровня
fn build_key(decomposed: &[char], fallback: impl Iterator<Item = char>) -> Vec<u32>
{
    let mut primary = Vec::with_capacity(decomposed.len());
    let mut secondary = Vec::with_capacity(decomposed.len());
    let mut tertiary = Vec::with_capacity(decomposed.len());

    for &c in decomposed {
        // диакритика в начале текста считается базовым кодпоинтом
        let is_mark = properties::general_category(c).is_combining_mark();

        if is_mark && !primary.is_empty() {
            secondary.push(c as u32);
            continue;
        }

        primary.push(primary_weight(c));
        secondary.push(SECONDARY_BASE);
        tertiary.push(tertiary_weight(c));
    }

    let mut key = primary;

    key.push(LEVEL_SEPARATOR);
    key.extend(secondary);
    key.push(LEVEL_SEPARATOR);
    key.extend(tertiary);
    key.push(LEVEL_SEPARATOR);
    key.extend(fallback.map(|c| c as u32 + 1));

    key
}

/// ключ сортировки с учётом регистра
pub fn sort_key(text: &str) -> Vec<u32>
{
    let decomposed: Vec<char> = Normalizer::nfd().normalize_chars(text.chars()).collect();

    build_key(&decomposed, text.chars())
}

/// ключ сортировки без учёта регистра: NFD(свёртка(NFD(текст)))
pub fn sort_key_caseless(text: &str) -> Vec<u32>
{
    let nfd = Normalizer::nfd();
    let folded: Vec<char> = nfd
        .normalize_chars(caseless::fold(nfd.normalize_chars(text.chars())))
        .collect();

    build_key(&folded, folded.iter().copied())
}

/// сравнение строк по ключам сортировки
pub fn collate(a: &str, b: &str) -> Ordering
{
    sort_key(a).cmp(&sort_key(b))
}

/// сравнение строк по ключам сортировки без учёта регистра
pub fn collate_caseless(a: &str, b: &str) -> Ordering
{
    sort_key_caseless(a).cmp(&sort_key_caseless(b))
}
