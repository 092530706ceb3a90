//! сравнение и поиск без учёта регистра (полная свёртка регистра, без локали).
//! свёртка выполняется лениво, по одному кодпоинту

use core::cmp::Ordering;
use core::iter::FusedIterator;
use core::ops::Range;

use crate::normalization::Normalizer;

use super::mapping::{casefold, CaseMapping};

/// ленивая полная свёртка регистра
#[derive(Debug, Clone)]
pub struct Folded<I: Iterator<Item = char>>
{
    source: I,
    current: CaseMapping,
}

impl<I: Iterator<Item = char>> Iterator for Folded<I>
{
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char>
    {
        loop {
            if let Some(c) = self.current.next() {
                return Some(c);
            }

            self.current = casefold(self.source.next()?);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let (lower, upper) = self.source.size_hint();
        let current = self.current.len();

        (
            lower + current,
            upper.and_then(|upper| upper.checked_mul(3)).map(|upper| upper + current),
        )
    }
}

impl<I: Iterator<Item = char> + FusedIterator> FusedIterator for Folded<I> {}

/// свёртка регистра последовательности кодпоинтов
pub fn fold<I: IntoIterator<Item = char>>(input: I) -> Folded<I::IntoIter>
{
    Folded {
        source: input.into_iter(),
        current: CaseMapping::empty(),
    }
}

/// порядок строк после свёртки регистра (по кодпоинтам)
pub fn compare(a: &str, b: &str) -> Ordering
{
    fold(a.chars()).cmp(fold(b.chars()))
}

/// строки равны без учёта регистра
pub fn eq(a: &str, b: &str) -> bool
{
    fold(a.chars()).eq(fold(b.chars()))
}

/// строки равны без учёта регистра и с точностью до канонической эквивалентности:
/// NFD(свёртка(NFD(x)))
pub fn canonical_eq(a: &str, b: &str) -> bool
{
    let nfd = Normalizer::nfd();

    let a = nfd.normalize_chars(fold(nfd.normalize_chars(a.chars())));
    let b = nfd.normalize_chars(fold(nfd.normalize_chars(b.chars())));

    a.eq(b)
}

/// первое вхождение needle в haystack без учёта регистра. диапазон - в байтах haystack,
/// совпадение начинается и заканчивается на границах кодпоинтов
pub fn find(haystack: &str, needle: &str) -> Option<Range<usize>>
{
    if needle.is_empty() {
        return Some(0 .. 0);
    }

    haystack
        .char_indices()
        .find_map(|(start, _)| match_at(&haystack[start ..], needle).map(|len| start .. start + len))
}

/// длина совпадения с needle в начале haystack
fn match_at(haystack: &str, needle: &str) -> Option<usize>
{
    let mut expected = fold(needle.chars()).peekable();

    for (offset, c) in haystack.char_indices() {
        for folded in casefold(c) {
            match expected.next() {
                Some(e) if e == folded => (),
                _ => return None,
            }
        }

        if expected.peek().is_none() {
            return Some(offset + c.len_utf8());
        }
    }

    None
}
