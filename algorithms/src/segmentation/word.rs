use core::iter::FusedIterator;

use crate::data;
use crate::properties::{self, WordBreak, WORD_EXT_PICT, WORD_HIRAGANA, WORD_IDEOGRAPHIC};
use crate::table::TableData;

/// конечный автомат границ слов (UAX #29).
///
/// правилам WB6, WB7b, WB12 нужен следующий значимый кодпоинт (без Extend, Format, ZWJ) -
/// он запрашивается у вызывающей стороны только в этих случаях
#[derive(Debug, Clone)]
pub struct WordBreaker
{
    table: TableData<'static, u8>,
    /// класс предыдущего кодпоинта, None - начало текста
    last: Option<WordBreak>,
    /// предыдущий значимый класс (с учётом WB4)
    previous: Option<WordBreak>,
    /// значимый класс перед previous
    before_previous: Option<WordBreak>,
    /// количество региональных индикаторов подряд
    regional: usize,
}

impl Default for WordBreaker
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl WordBreaker
{
    pub fn new() -> Self
    {
        Self {
            table: data::word(),
            last: None,
            previous: None,
            before_previous: None,
            regional: 0,
        }
    }

    /// сбросить состояние (начало нового текста)
    pub fn reset(&mut self)
    {
        self.last = None;
        self.previous = None;
        self.before_previous = None;
        self.regional = 0;
    }

    /// класс кодпоинта по правилам разбиения на слова
    #[inline]
    pub fn class(&self, c: char) -> WordBreak
    {
        WordBreak::from_baked(self.table.get(c as u32))
    }

    /// следующий кодпоинт; true - перед ним граница слов. lookahead - следующий за ним
    /// кодпоинт, не являющийся Extend, Format или ZWJ
    pub fn advance<F>(&mut self, c: char, lookahead: F) -> bool
    where
        F: Fn() -> Option<char>,
    {
        use WordBreak::*;

        let value = self.table.get(c as u32);
        let current = WordBreak::from_baked(value);
        let pictographic = value & WORD_EXT_PICT != 0;

        let mut ignored = false;

        let boundary = match self.last {
            // WB1
            None => true,
            // WB3
            Some(CR) if current == LF => false,
            // WB3a, WB3b
            Some(Newline | CR | LF) => true,
            _ if current.is_newline() => true,
            // WB3c
            Some(ZWJ) if pictographic => false,
            // WB3d
            Some(WSegSpace) if current == WSegSpace => false,
            // WB4
            _ if current.is_ignorable() => {
                ignored = true;
                false
            }
            _ => self.is_boundary(current, lookahead),
        };

        if !ignored {
            self.before_previous = self.previous;
            self.previous = Some(current);
            self.regional = match current {
                RegionalIndicator => self.regional + 1,
                _ => 0,
            };
        }

        self.last = Some(current);

        boundary
    }

    fn is_boundary<F>(&self, current: WordBreak, lookahead: F) -> bool
    where
        F: Fn() -> Option<char>,
    {
        use WordBreak::*;

        let previous = match self.previous {
            Some(previous) => previous,
            None => return true,
        };

        let before_previous = self.before_previous;
        let next = || lookahead().map(|c| self.class(c));

        match (previous, current) {
            // WB5
            (ALetter | HebrewLetter, ALetter | HebrewLetter) => false,
            // WB6
            (ALetter | HebrewLetter, _) if current.is_mid_letter() && next().is_some_and(|n| n.is_ah_letter()) => {
                false
            }
            // WB7
            (_, ALetter | HebrewLetter)
                if previous.is_mid_letter() && before_previous.is_some_and(|b| b.is_ah_letter()) =>
            {
                false
            }
            // WB7a
            (HebrewLetter, SingleQuote) => false,
            // WB7b
            (HebrewLetter, DoubleQuote) if next() == Some(HebrewLetter) => false,
            // WB7c
            (DoubleQuote, HebrewLetter) if before_previous == Some(HebrewLetter) => false,
            // WB8, WB9, WB10
            (Numeric, Numeric) => false,
            (ALetter | HebrewLetter, Numeric) => false,
            (Numeric, ALetter | HebrewLetter) => false,
            // WB11
            (_, Numeric) if previous.is_mid_num() && before_previous == Some(Numeric) => false,
            // WB12
            (Numeric, _) if current.is_mid_num() && next() == Some(Numeric) => false,
            // WB13
            (Katakana, Katakana) => false,
            // WB13a, WB13b
            (ALetter | HebrewLetter | Numeric | Katakana | ExtendNumLet, ExtendNumLet) => false,
            (ExtendNumLet, ALetter | HebrewLetter | Numeric | Katakana) => false,
            // WB15, WB16
            (RegionalIndicator, RegionalIndicator) => self.regional % 2 == 0,
            // WB999
            _ => true,
        }
    }
}

/// вид отрезка текста между границами слов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordKind
{
    /// слово из букв (в т.ч. с цифрами)
    Letter,
    /// число
    Number,
    /// хирагана, катакана
    Kana,
    /// иероглиф
    Ideographic,
    /// эмодзи, флаг
    Emoji,
    /// знаки препинания
    Punctuation,
    /// пробелы и переводы строк
    Space,
    Other,
}

impl WordKind
{
    /// отрезок является словом
    #[inline]
    pub fn is_word(&self) -> bool
    {
        matches!(self, Self::Letter | Self::Number | Self::Kana | Self::Ideographic)
    }

    /// вид отрезка по его кодпоинтам
    pub fn of(segment: &str) -> Self
    {
        let table = data::word();

        let mut number = false;
        let mut kana = false;
        let mut ideographic = false;

        for c in segment.chars() {
            let value = table.get(c as u32);

            if value & WORD_IDEOGRAPHIC != 0 {
                ideographic = true;
                continue;
            }

            if value & WORD_HIRAGANA != 0 {
                kana = true;
                continue;
            }

            match WordBreak::from_baked(value) {
                WordBreak::ALetter | WordBreak::HebrewLetter => return Self::Letter,
                WordBreak::Numeric => number = true,
                WordBreak::Katakana => kana = true,
                // тайский, лаосский и т.п. - буквы без собственного класса
                WordBreak::Other if properties::general_category(c).is_letter() => return Self::Letter,
                _ => (),
            }
        }

        if number {
            return Self::Number;
        }

        if kana {
            return Self::Kana;
        }

        if ideographic {
            return Self::Ideographic;
        }

        let first = match segment.chars().next() {
            Some(first) => first,
            None => return Self::Other,
        };

        let value = table.get(first as u32);
        let category = properties::general_category(first);

        match WordBreak::from_baked(value) {
            _ if value & WORD_EXT_PICT != 0 => Self::Emoji,
            WordBreak::RegionalIndicator => Self::Emoji,
            WordBreak::WSegSpace | WordBreak::CR | WordBreak::LF | WordBreak::Newline => Self::Space,
            _ if category.is_separator() || first.is_whitespace() => Self::Space,
            _ if category.is_punctuation() => Self::Punctuation,
            _ => Self::Other,
        }
    }
}

/// отрезки текста между границами слов
#[derive(Debug, Clone)]
pub struct WordBoundIndices<'a>
{
    text: &'a str,
    position: usize,
    breaker: WordBreaker,
    /// первый кодпоинт следующего отрезка уже передан автомату
    pending: Option<char>,
}

impl<'a> WordBoundIndices<'a>
{
    /// ещё не разобранная часть строки
    pub fn as_str(&self) -> &'a str
    {
        &self.text[self.position ..]
    }
}

/// первый кодпоинт строки, не являющийся Extend, Format или ZWJ
fn lookahead(table: TableData<'static, u8>, rest: &str) -> Option<char>
{
    rest.chars()
        .find(|&c| !WordBreak::from_baked(table.get(c as u32)).is_ignorable())
}

impl<'a> Iterator for WordBoundIndices<'a>
{
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item>
    {
        let start = self.position;
        let rest = &self.text[start ..];

        let mut chars = rest.char_indices();

        let first = match self.pending.take() {
            Some(first) => {
                chars.next();
                first
            }
            None => {
                // начало текста - граница по WB1, следующий кодпоинт не нужен
                let (_, first) = chars.next()?;
                self.breaker.advance(first, || None);
                first
            }
        };

        let mut end = first.len_utf8();

        for (offset, c) in chars {
            let after = &rest[offset + c.len_utf8() ..];
            let table = self.breaker.table;

            if self.breaker.advance(c, || lookahead(table, after)) {
                self.pending = Some(c);
                end = offset;
                break;
            }

            end = offset + c.len_utf8();
        }

        self.position = start + end;

        Some((start, &rest[.. end]))
    }
}

impl<'a> FusedIterator for WordBoundIndices<'a> {}

/// все отрезки между границами слов
#[derive(Debug, Clone)]
pub struct WordBounds<'a>
{
    inner: WordBoundIndices<'a>,
}

impl<'a> Iterator for WordBounds<'a>
{
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str>
    {
        self.inner.next().map(|(_, segment)| segment)
    }
}

impl<'a> FusedIterator for WordBounds<'a> {}

/// только слова: отрезки из букв, цифр, каны, иероглифов
#[derive(Debug, Clone)]
pub struct Words<'a>
{
    inner: WordBoundIndices<'a>,
}

impl<'a> Iterator for Words<'a>
{
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str>
    {
        self.inner
            .by_ref()
            .map(|(_, segment)| segment)
            .find(|segment| WordKind::of(segment).is_word())
    }
}

impl<'a> FusedIterator for Words<'a> {}

/// отрезки между границами слов со смещениями
pub fn word_bound_indices(text: &str) -> WordBoundIndices
{
    WordBoundIndices {
        text,
        position: 0,
        breaker: WordBreaker::new(),
        pending: None,
    }
}

/// отрезки между границами слов
pub fn word_bounds(text: &str) -> WordBounds
{
    WordBounds {
        inner: word_bound_indices(text),
    }
}

/// слова строки
pub fn words(text: &str) -> Words
{
    Words {
        inner: word_bound_indices(text),
    }
}
