use core::fmt;
use core::iter::FusedIterator;

use crate::data;
use crate::data::CaseData;

/// результат преобразования регистра одного кодпоинта: от 0 до 3 кодпоинтов
#[derive(Debug, Clone)]
pub struct CaseMapping
{
    chars: [char; 3],
    len: u8,
    position: u8,
}

impl CaseMapping
{
    #[inline(always)]
    pub(crate) fn empty() -> Self
    {
        Self {
            chars: ['\0'; 3],
            len: 0,
            position: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn single(c: char) -> Self
    {
        Self {
            chars: [c, '\0', '\0'],
            len: 1,
            position: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn pair(first: char, second: char) -> Self
    {
        Self {
            chars: [first, second, '\0'],
            len: 2,
            position: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn triple(first: char, second: char, third: char) -> Self
    {
        Self {
            chars: [first, second, third],
            len: 3,
            position: 0,
        }
    }

    /// последовательность из таблицы полных отображений
    #[inline]
    fn from_codes(codes: &[u32]) -> Self
    {
        let mut mapping = Self::empty();

        for c in codes.iter().filter_map(|&code| char::from_u32(code)).take(3) {
            mapping.chars[mapping.len as usize] = c;
            mapping.len += 1;
        }

        mapping
    }

    /// ещё не выданные кодпоинты
    #[inline]
    pub fn as_slice(&self) -> &[char]
    {
        &self.chars[self.position as usize .. self.len as usize]
    }
}

impl Iterator for CaseMapping
{
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char>
    {
        match self.position < self.len {
            true => {
                self.position += 1;
                Some(self.chars[self.position as usize - 1])
            }
            false => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let remaining = (self.len - self.position) as usize;

        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CaseMapping {}

impl FusedIterator for CaseMapping {}

impl fmt::Display for CaseMapping
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        self.as_slice()
            .iter()
            .try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

/// простое отображение по таблице
#[inline(always)]
fn simple(table: CaseData<'static>, c: char) -> char
{
    char::from_u32(table.simple(c as u32)).unwrap_or(c)
}

/// полное отображение по таблице
#[inline(always)]
fn full(table: CaseData<'static>, c: char) -> CaseMapping
{
    match table.special(c as u32) {
        Some(codes) => CaseMapping::from_codes(codes),
        None => CaseMapping::single(simple(table, c)),
    }
}

/// простое (один к одному) отображение в нижний регистр
#[inline]
pub fn simple_lowercase(c: char) -> char
{
    simple(data::lowercase(), c)
}

/// простое отображение в верхний регистр
#[inline]
pub fn simple_uppercase(c: char) -> char
{
    simple(data::uppercase(), c)
}

/// простое отображение в заглавный регистр
#[inline]
pub fn simple_titlecase(c: char) -> char
{
    simple(data::titlecase(), c)
}

/// простая свёртка регистра (статусы C и S таблицы CaseFolding)
#[inline]
pub fn simple_casefold(c: char) -> char
{
    simple(data::casefold(), c)
}

/// полное отображение в нижний регистр без учёта контекста и локали
#[inline]
pub fn lowercase(c: char) -> CaseMapping
{
    full(data::lowercase(), c)
}

/// полное отображение в верхний регистр без учёта контекста и локали
#[inline]
pub fn uppercase(c: char) -> CaseMapping
{
    full(data::uppercase(), c)
}

/// полное отображение в заглавный регистр без учёта контекста и локали
#[inline]
pub fn titlecase(c: char) -> CaseMapping
{
    full(data::titlecase(), c)
}

/// полная свёртка регистра (статусы C и F таблицы CaseFolding)
#[inline]
pub fn casefold(c: char) -> CaseMapping
{
    full(data::casefold(), c)
}
