use crate::data;
use crate::data::DecompositionData;
use crate::properties::{self, QC_NFC, QC_NFD, QC_NFKC, QC_NFKD};
use crate::table::TableData;
use crate::utf::{self, CodeUnit, Matcher, Policy, Sink};
use crate::Error;

pub use iter::Normalization;
pub use quick_check::IsNormalized;
pub use stream_safe::StreamSafe;

pub(crate) mod composition;
pub(crate) mod hangul;
mod iter;
mod ordering;
mod quick_check;
mod stream_safe;

/// кодпоинты до U+00A0 не меняются ни в одной из форм
const FAST_BOUNDARY: u32 = 0xA0;

/// форма нормализации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form
{
    /// каноническая композиция
    Nfc,
    /// каноническая декомпозиция
    Nfd,
    /// совместимая композиция
    Nfkc,
    /// совместимая декомпозиция
    Nfkd,
    /// удаление диакритики: каноническая декомпозиция, удаление Mn, каноническая композиция
    Unaccent,
}

impl Form
{
    /// флаги таблицы свойств: кодпоинт не проходит быструю проверку для этой формы
    #[inline(always)]
    pub(crate) fn quick_check_mask(&self) -> u16
    {
        match self {
            Self::Nfc => QC_NFC,
            Self::Nfd => QC_NFD,
            Self::Nfkc => QC_NFKC,
            Self::Nfkd => QC_NFKD,
            Self::Unaccent => QC_NFD | QC_NFC,
        }
    }

    /// флаги таблицы свойств: стартер не может быть границей сегмента (может скомбинироваться с предыдущим)
    #[inline(always)]
    pub(crate) fn boundary_mask(&self) -> u16
    {
        match self {
            Self::Nfc | Self::Unaccent => QC_NFC,
            Self::Nfkc => QC_NFKC,
            Self::Nfd | Self::Nfkd => 0,
        }
    }

    /// форма с композицией
    #[inline]
    pub fn is_composing(&self) -> bool
    {
        matches!(self, Self::Nfc | Self::Nfkc | Self::Unaccent)
    }

    /// форма с совместимой декомпозицией
    #[inline]
    pub fn is_compatibility(&self) -> bool
    {
        matches!(self, Self::Nfkc | Self::Nfkd)
    }
}

/// нормализатор: таблицы, необходимые для выбранной формы
#[derive(Clone, Copy)]
pub struct Normalizer
{
    /// CCC и флаги быстрых проверок
    properties: TableData<'static, u16>,
    /// декомпозиции для выбранной формы
    decompositions: DecompositionData<'static>,
    /// канонические декомпозиции
    canonical: DecompositionData<'static>,
    form: Form,
    /// вставлять U+034F после 30 нестартеров подряд
    stream_safe: bool,
}

impl core::fmt::Debug for Normalizer
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        f.debug_struct("Normalizer")
            .field("form", &self.form)
            .field("stream_safe", &self.stream_safe)
            .finish()
    }
}

impl Normalizer
{
    pub fn new(form: Form) -> Self
    {
        Self {
            properties: data::normalization(),
            decompositions: match form.is_compatibility() {
                true => data::nfkd(),
                false => data::nfd(),
            },
            canonical: data::nfd(),
            form,
            stream_safe: true,
        }
    }

    /// нормализатор NFC
    pub fn nfc() -> Self
    {
        Self::new(Form::Nfc)
    }

    /// нормализатор NFD
    pub fn nfd() -> Self
    {
        Self::new(Form::Nfd)
    }

    /// нормализатор NFKC
    pub fn nfkc() -> Self
    {
        Self::new(Form::Nfkc)
    }

    /// нормализатор NFKD
    pub fn nfkd() -> Self
    {
        Self::new(Form::Nfkd)
    }

    /// удаление диакритики
    pub fn unaccent() -> Self
    {
        Self::new(Form::Unaccent)
    }

    #[inline]
    pub fn form(&self) -> Form
    {
        self.form
    }

    /// точная нормализация без вставки U+034F - для сравнения с исходным текстом
    pub(crate) fn without_stream_safety(mut self) -> Self
    {
        self.stream_safe = false;
        self
    }

    /// нормализация строки
    pub fn normalize(&self, input: &str) -> String
    {
        let mut result = String::with_capacity(input.len());
        self.normalize_to(input, &mut result);

        result
    }

    /// нормализация строки с записью результата в приёмник.
    /// уже нормализованное начало строки копируется без изменений
    pub fn normalize_to<S: Sink + ?Sized>(&self, input: &str, sink: &mut S)
    {
        let prefix = self.normalized_prefix(input);

        sink.write_str(&input[.. prefix]);

        if prefix < input.len() {
            self.normalize_chars(input[prefix ..].chars())
                .for_each(|c| sink.write(c));
        }
    }

    /// ленивая нормализация последовательности кодпоинтов
    pub fn normalize_chars<I: Iterator<Item = char>>(&self, input: I) -> Normalization<I>
    {
        Normalization::new(*self, input)
    }

    /// нормализация последовательности кодовых единиц UTF-8 / UTF-16 / UTF-32.
    /// в строгом режиме некорректные данные - ошибка, иначе - замена на U+FFFD
    pub fn normalize_units<U: CodeUnit, S: Sink + Default>(
        &self,
        input: &[U],
        policy: Policy,
    ) -> Result<S, Error>
    {
        if policy == Policy::Strict {
            utf::validate(input)?;
        }

        let mut sink = S::default();

        self.normalize_chars(utf::Chars::new(input))
            .for_each(|c| sink.write(c));

        Ok(sink)
    }

    /// точная проверка: строка совпадает со своей нормализованной формой
    pub fn is_normalized(&self, input: &str) -> bool
    {
        if self.quick_check(input.chars()) == IsNormalized::Yes {
            return true;
        }

        let mut normalized = self.without_stream_safety().normalize_chars(input.chars());
        let mut matcher = Matcher::new(input.chars());

        while matcher.is_matching() {
            match normalized.next() {
                Some(c) => matcher.write(c),
                None => break,
            }
        }

        matcher.finish()
    }

    /// кодпоинт можно вывести без изменений, если следующий кодпоинт не скомбинируется с ним
    #[inline(always)]
    pub(crate) fn is_inert(&self, code: u32) -> bool
    {
        if code < FAST_BOUNDARY {
            return true;
        }

        if self.properties.get(code) & (self.form.quick_check_mask() | 0xFF) != 0 {
            return false;
        }

        self.form != Form::Unaccent || !properties::is_nonspacing_mark(code)
    }

    /// длина уже нормализованного начала строки (в байтах). последний кодпоинт такого отрезка
    /// не входит в него: он может скомбинироваться со следующим
    fn normalized_prefix(&self, input: &str) -> usize
    {
        let mut last_start = 0;

        for (offset, c) in input.char_indices() {
            if !self.is_inert(c as u32) {
                return last_start;
            }

            last_start = offset;
        }

        input.len()
    }
}

/// NFC
pub fn nfc(input: &str) -> String
{
    Normalizer::nfc().normalize(input)
}

/// NFD
pub fn nfd(input: &str) -> String
{
    Normalizer::nfd().normalize(input)
}

/// NFKC
pub fn nfkc(input: &str) -> String
{
    Normalizer::nfkc().normalize(input)
}

/// NFKD
pub fn nfkd(input: &str) -> String
{
    Normalizer::nfkd().normalize(input)
}

/// удаление диакритики
pub fn unaccent(input: &str) -> String
{
    Normalizer::unaccent().normalize(input)
}

/// строка в форме NFC
pub fn is_nfc(input: &str) -> bool
{
    Normalizer::nfc().is_normalized(input)
}

/// строка в форме NFD
pub fn is_nfd(input: &str) -> bool
{
    Normalizer::nfd().is_normalized(input)
}

/// строка в форме NFKC
pub fn is_nfkc(input: &str) -> bool
{
    Normalizer::nfkc().is_normalized(input)
}

/// строка в форме NFKD
pub fn is_nfkd(input: &str) -> bool
{
    Normalizer::nfkd().is_normalized(input)
}
