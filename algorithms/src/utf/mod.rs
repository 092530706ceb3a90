use core::iter::FusedIterator;

use crate::Error;

pub use sink::{Counter, Discard, Matcher, Sink};

mod sink;
pub mod utf16;
pub mod utf32;
pub mod utf8;

/// U+FFFD REPLACEMENT CHARACTER
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// обработка некорректных последовательностей кодовых единиц
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy
{
    /// замена на U+FFFD
    #[default]
    Replace,
    /// ошибка с указанием смещения
    Strict,
}

/// кодовая единица UTF-8 (u8), UTF-16 (u16) или UTF-32 (u32)
pub trait CodeUnit: Copy + 'static
{
    /// декодировать первый кодпоинт: (кодпоинт или None, количество прочитанных единиц)
    fn decode_next(units: &[Self]) -> (Option<char>, usize);

    /// декодировать последний кодпоинт
    fn decode_back(units: &[Self]) -> (Option<char>, usize);

    /// записать кодпоинт
    fn encode(c: char, output: &mut Vec<Self>);

    /// ошибка для некорректной последовательности по указанному смещению
    fn error(offset: usize) -> Error;
}

macro_rules! code_unit {
    ($unit: ty, $module: ident, $error: ident) => {
        impl CodeUnit for $unit
        {
            #[inline(always)]
            fn decode_next(units: &[Self]) -> (Option<char>, usize)
            {
                $module::decode_next(units)
            }

            #[inline(always)]
            fn decode_back(units: &[Self]) -> (Option<char>, usize)
            {
                $module::decode_back(units)
            }

            #[inline(always)]
            fn encode(c: char, output: &mut Vec<Self>)
            {
                $module::encode(c, output)
            }

            #[inline(always)]
            fn error(offset: usize) -> Error
            {
                Error::$error { offset }
            }
        }
    };
}

code_unit!(u8, utf8, Utf8);
code_unit!(u16, utf16, Utf16);
code_unit!(u32, utf32, Utf32);

/// декодер, заменяющий некорректные последовательности на U+FFFD
#[derive(Debug, Clone)]
pub struct Chars<'a, U: CodeUnit>
{
    /// ещё не прочитанные кодовые единицы
    remaining: &'a [U],
    /// смещение начала remaining в исходных данных
    offset: usize,
    /// количество замен
    replaced: usize,
}

impl<'a, U: CodeUnit> Chars<'a, U>
{
    pub fn new(units: &'a [U]) -> Self
    {
        Self {
            remaining: units,
            offset: 0,
            replaced: 0,
        }
    }

    /// ещё не прочитанные кодовые единицы
    pub fn as_slice(&self) -> &'a [U]
    {
        self.remaining
    }

    /// смещение следующей кодовой единицы
    pub fn offset(&self) -> usize
    {
        self.offset
    }

    /// количество некорректных последовательностей, заменённых на U+FFFD
    pub fn replacements(&self) -> usize
    {
        self.replaced
    }

    #[inline(always)]
    fn replace(&mut self, decoded: Option<char>) -> char
    {
        match decoded {
            Some(c) => c,
            None => {
                self.replaced += 1;
                REPLACEMENT_CHARACTER
            }
        }
    }
}

impl<'a, U: CodeUnit> Iterator for Chars<'a, U>
{
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char>
    {
        if self.remaining.is_empty() {
            return None;
        }

        let (decoded, width) = U::decode_next(self.remaining);

        self.remaining = &self.remaining[width ..];
        self.offset += width;

        Some(self.replace(decoded))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let len = self.remaining.len();

        ((len + 3) / 4, Some(len))
    }
}

impl<'a, U: CodeUnit> DoubleEndedIterator for Chars<'a, U>
{
    #[inline]
    fn next_back(&mut self) -> Option<char>
    {
        if self.remaining.is_empty() {
            return None;
        }

        let (decoded, width) = U::decode_back(self.remaining);

        self.remaining = &self.remaining[.. self.remaining.len() - width];

        Some(self.replace(decoded))
    }
}

impl<'a, U: CodeUnit> FusedIterator for Chars<'a, U> {}

/// декодер, сообщающий о некорректных последовательностях. после ошибки декодирование
/// продолжается со следующей кодовой единицы
#[derive(Debug, Clone)]
pub struct Decoder<'a, U: CodeUnit>
{
    remaining: &'a [U],
    /// смещение начала remaining в исходных данных
    offset: usize,
}

impl<'a, U: CodeUnit> Decoder<'a, U>
{
    pub fn new(units: &'a [U]) -> Self
    {
        Self {
            remaining: units,
            offset: 0,
        }
    }

    /// ещё не прочитанные кодовые единицы
    pub fn as_slice(&self) -> &'a [U]
    {
        self.remaining
    }
}

impl<'a, U: CodeUnit> Iterator for Decoder<'a, U>
{
    type Item = Result<char, Error>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        if self.remaining.is_empty() {
            return None;
        }

        let (decoded, width) = U::decode_next(self.remaining);
        let offset = self.offset;

        self.remaining = &self.remaining[width ..];
        self.offset += width;

        Some(decoded.ok_or_else(|| U::error(offset)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let len = self.remaining.len();

        ((len + 3) / 4, Some(len))
    }
}

impl<'a, U: CodeUnit> DoubleEndedIterator for Decoder<'a, U>
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item>
    {
        if self.remaining.is_empty() {
            return None;
        }

        let (decoded, width) = U::decode_back(self.remaining);
        let end = self.remaining.len() - width;

        self.remaining = &self.remaining[.. end];

        Some(decoded.ok_or_else(|| U::error(self.offset + end)))
    }
}

impl<'a, U: CodeUnit> FusedIterator for Decoder<'a, U> {}

/// результат перекодирования
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcoded<S>
{
    pub output: S,
    /// количество замен на U+FFFD
    pub replaced: usize,
}

impl<S> Transcoded<S>
{
    /// входные данные были корректны
    pub fn is_lossless(&self) -> bool
    {
        self.replaced == 0
    }
}

/// перекодирование в приёмник нужного типа
pub fn transcode<U: CodeUnit, S: Sink + Default>(
    input: &[U],
    policy: Policy,
) -> Result<Transcoded<S>, Error>
{
    let mut output = S::default();
    let replaced = transcode_to(input, policy, &mut output)?;

    Ok(Transcoded { output, replaced })
}

/// перекодирование с записью в приёмник, результат - количество замен.
/// в строгом режиме приёмник может получить часть данных до первой ошибки
pub fn transcode_to<U: CodeUnit, S: Sink + ?Sized>(
    input: &[U],
    policy: Policy,
    sink: &mut S,
) -> Result<usize, Error>
{
    match policy {
        Policy::Replace => {
            let mut chars = Chars::new(input);

            for c in chars.by_ref() {
                sink.write(c);
            }

            Ok(chars.replacements())
        }
        Policy::Strict => {
            for c in Decoder::new(input) {
                match c {
                    Ok(c) => sink.write(c),
                    Err(error) => {
                        log::debug!("перекодирование прервано: {}", error);
                        return Err(error);
                    }
                }
            }

            Ok(0)
        }
    }
}

/// проверка корректности: первая некорректная последовательность
pub fn validate<U: CodeUnit>(input: &[U]) -> Result<(), Error>
{
    match Decoder::new(input).find_map(Result::err) {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// проверка UTF-8
pub fn validate_utf8(input: &[u8]) -> Result<(), Error>
{
    validate(input)
}

/// проверка UTF-16
pub fn validate_utf16(input: &[u16]) -> Result<(), Error>
{
    validate(input)
}

/// проверка UTF-32
pub fn validate_utf32(input: &[u32]) -> Result<(), Error>
{
    validate(input)
}

/// перекодирование с заменой некорректных последовательностей
fn convert<U: CodeUnit, S: Sink + Default>(input: &[U]) -> S
{
    let mut output = S::default();

    Chars::new(input).for_each(|c| output.write(c));

    output
}

pub fn utf8_to_utf16(input: &[u8]) -> Vec<u16>
{
    convert(input)
}

pub fn utf8_to_utf32(input: &[u8]) -> Vec<u32>
{
    convert(input)
}

pub fn utf16_to_utf8(input: &[u16]) -> Vec<u8>
{
    convert(input)
}

pub fn utf16_to_utf32(input: &[u16]) -> Vec<u32>
{
    convert(input)
}

pub fn utf32_to_utf8(input: &[u32]) -> Vec<u8>
{
    convert(input)
}

pub fn utf32_to_utf16(input: &[u32]) -> Vec<u16>
{
    convert(input)
}

/// строка из UTF-16 с заменой некорректных последовательностей
pub fn utf16_to_string(input: &[u16]) -> String
{
    convert(input)
}
