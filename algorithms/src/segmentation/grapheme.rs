use core::iter::FusedIterator;

use crate::data;
use crate::properties::{GraphemeBreak, IndicConjunctBreak, GRAPHEME_EXT_PICT};
use crate::table::TableData;

/// состояние правила GB11: ExtPict Extend* ZWJ × ExtPict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emoji
{
    None,
    /// ExtPict Extend*
    Pictographic,
    /// ExtPict Extend* ZWJ
    Joined,
}

/// состояние правила GB9c: Consonant [Extend Linker]* Linker [Extend Linker]* × Consonant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conjunct
{
    None,
    /// согласная, за которой пока не было связки
    Consonant,
    /// согласная и связка
    Linked,
}

/// конечный автомат границ расширенных графем (UAX #29).
/// получает кодпоинты по одному и сообщает, начинается-ли с очередного кодпоинта новая графема
#[derive(Debug, Clone)]
pub struct GraphemeBreaker
{
    table: TableData<'static, u8>,
    /// класс предыдущего кодпоинта, None - начало текста
    previous: Option<GraphemeBreak>,
    emoji: Emoji,
    conjunct: Conjunct,
    /// количество региональных индикаторов подряд
    regional: usize,
}

impl Default for GraphemeBreaker
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl GraphemeBreaker
{
    pub fn new() -> Self
    {
        Self {
            table: data::grapheme(),
            previous: None,
            emoji: Emoji::None,
            conjunct: Conjunct::None,
            regional: 0,
        }
    }

    /// сбросить состояние (начало нового текста)
    pub fn reset(&mut self)
    {
        self.previous = None;
        self.emoji = Emoji::None;
        self.conjunct = Conjunct::None;
        self.regional = 0;
    }

    /// следующий кодпоинт; true - перед ним граница графем
    pub fn advance(&mut self, c: char) -> bool
    {
        let value = self.table.get(c as u32);
        let current = GraphemeBreak::from_baked(value);
        let pictographic = value & GRAPHEME_EXT_PICT != 0;
        let conjunct = IndicConjunctBreak::from_baked(value);

        let boundary = self.is_boundary(current, pictographic, conjunct);

        self.emoji = match (pictographic, current, self.emoji) {
            (true, _, _) => Emoji::Pictographic,
            (_, GraphemeBreak::Extend, Emoji::Pictographic) => Emoji::Pictographic,
            (_, GraphemeBreak::ZWJ, Emoji::Pictographic) => Emoji::Joined,
            _ => Emoji::None,
        };

        self.conjunct = match (conjunct, self.conjunct) {
            (IndicConjunctBreak::Consonant, _) => Conjunct::Consonant,
            (IndicConjunctBreak::Linker, Conjunct::Consonant | Conjunct::Linked) => Conjunct::Linked,
            (IndicConjunctBreak::Extend, state) => state,
            _ => Conjunct::None,
        };

        self.regional = match current {
            GraphemeBreak::RegionalIndicator => self.regional + 1,
            _ => 0,
        };

        self.previous = Some(current);

        boundary
    }

    fn is_boundary(&self, current: GraphemeBreak, pictographic: bool, conjunct: IndicConjunctBreak) -> bool
    {
        use GraphemeBreak::*;

        let previous = match self.previous {
            Some(previous) => previous,
            // GB1
            None => return true,
        };

        match (previous, current) {
            // GB3
            (CR, LF) => false,
            // GB4, GB5
            (CR | LF | Control, _) => true,
            (_, CR | LF | Control) => true,
            // GB6 - GB8
            (L, L | V | LV | LVT) => false,
            (LV | V, V | T) => false,
            (LVT | T, T) => false,
            // GB9, GB9a
            (_, Extend | ZWJ | SpacingMark) => false,
            // GB9b
            (Prepend, _) => false,
            // GB9c
            _ if conjunct == IndicConjunctBreak::Consonant && self.conjunct == Conjunct::Linked => false,
            // GB11
            _ if pictographic && self.emoji == Emoji::Joined => false,
            // GB12, GB13
            (RegionalIndicator, RegionalIndicator) => self.regional % 2 == 0,
            // GB999
            _ => true,
        }
    }
}

/// расширенные графемы строки
#[derive(Debug, Clone)]
pub struct Graphemes<'a>
{
    inner: GraphemeIndices<'a>,
}

impl<'a> Graphemes<'a>
{
    /// ещё не разобранная часть строки
    pub fn as_str(&self) -> &'a str
    {
        self.inner.as_str()
    }
}

impl<'a> Iterator for Graphemes<'a>
{
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str>
    {
        self.inner.next().map(|(_, grapheme)| grapheme)
    }
}

impl<'a> FusedIterator for Graphemes<'a> {}

/// расширенные графемы строки и их смещения
#[derive(Debug, Clone)]
pub struct GraphemeIndices<'a>
{
    text: &'a str,
    /// начало ещё не разобранной части
    position: usize,
    breaker: GraphemeBreaker,
    /// первый кодпоинт следующей графемы уже передан автомату
    pending: Option<char>,
}

impl<'a> GraphemeIndices<'a>
{
    /// ещё не разобранная часть строки
    pub fn as_str(&self) -> &'a str
    {
        &self.text[self.position ..]
    }
}

impl<'a> Iterator for GraphemeIndices<'a>
{
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item>
    {
        let start = self.position;
        let rest = &self.text[start ..];

        let mut chars = rest.char_indices();

        // первый кодпоинт графемы: либо уже прочитан на предыдущем шаге, либо начало текста
        let first = match self.pending.take() {
            Some(first) => {
                chars.next();
                first
            }
            None => {
                let (_, first) = chars.next()?;
                self.breaker.advance(first);
                first
            }
        };

        let mut end = first.len_utf8();

        for (offset, c) in chars {
            if self.breaker.advance(c) {
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

impl<'a> FusedIterator for GraphemeIndices<'a> {}

/// разбиение строки на расширенные графемы
pub fn graphemes(text: &str) -> Graphemes
{
    Graphemes {
        inner: grapheme_indices(text),
    }
}

/// разбиение строки на расширенные графемы со смещениями
pub fn grapheme_indices(text: &str) -> GraphemeIndices
{
    GraphemeIndices {
        text,
        position: 0,
        breaker: GraphemeBreaker::new(),
        pending: None,
    }
}
