//! преобразование регистра: полные отображения с учётом контекста и правила локалей
//! lt, tr, az, el, nl

use core::str::FromStr;

use crate::utf::Sink;
use crate::Error;

pub use mapping::{
    casefold, lowercase, simple_casefold, simple_lowercase, simple_titlecase, simple_uppercase, titlecase,
    uppercase, CaseMapping,
};

pub mod caseless;
mod context;
mod greek;
mod mapping;
mod title;

/// локаль, определяющая особые правила преобразования регистра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale
{
    /// правила по умолчанию
    #[default]
    Und,
    /// литовский: сохранение точки над i с диакритикой
    Lt,
    /// турецкий: i с точкой и ı без точки
    Tr,
    /// азербайджанский: как турецкий
    Az,
    /// греческий: верхний регистр без ударений
    El,
    /// нидерландский: диграф IJ
    Nl,
}

impl Locale
{
    #[inline(always)]
    fn is_turkic(&self) -> bool
    {
        matches!(self, Self::Tr | Self::Az)
    }
}

impl FromStr for Locale
{
    type Err = Error;

    /// тег языка, регистр не важен, регион игнорируется: "tr", "TR-tr", "nl_BE"
    fn from_str(tag: &str) -> Result<Self, Error>
    {
        let language = match tag.split(['-', '_']).next() {
            Some(language) => language.to_ascii_lowercase(),
            None => return Err(Error::UnknownLocale(tag.to_owned())),
        };

        match language.as_str() {
            "und" | "root" => Ok(Self::Und),
            "lt" => Ok(Self::Lt),
            "tr" => Ok(Self::Tr),
            "az" => Ok(Self::Az),
            "el" => Ok(Self::El),
            "nl" => Ok(Self::Nl),
            _ => Err(Error::UnknownLocale(tag.to_owned())),
        }
    }
}

/// нижний регистр кодпоинта в контексте строки
fn lower_char(text: &str, offset: usize, end: usize, c: char, locale: Locale) -> CaseMapping
{
    match c {
        'Σ' => CaseMapping::single(match context::is_final_sigma(text, offset, end) {
            true => 'ς',
            false => 'σ',
        }),
        '\u{130}' if locale.is_turkic() => CaseMapping::single('i'),
        '\u{307}' if locale.is_turkic() && context::is_after_i(text, offset) => CaseMapping::empty(),
        'I' if locale.is_turkic() && !context::is_before_dot(text, end) => CaseMapping::single('ı'),
        'I' | 'J' | '\u{12E}' if locale == Locale::Lt && context::is_more_above(text, end) => {
            CaseMapping::pair(mapping::simple_lowercase(c), '\u{307}')
        }
        '\u{CC}' if locale == Locale::Lt => CaseMapping::triple('i', '\u{307}', '\u{300}'),
        '\u{CD}' if locale == Locale::Lt => CaseMapping::triple('i', '\u{307}', '\u{301}'),
        '\u{128}' if locale == Locale::Lt => CaseMapping::triple('i', '\u{307}', '\u{303}'),
        _ => mapping::lowercase(c),
    }
}

/// верхний регистр кодпоинта в контексте строки
fn upper_char(text: &str, offset: usize, c: char, locale: Locale) -> CaseMapping
{
    match c {
        'i' if locale.is_turkic() => CaseMapping::single('\u{130}'),
        '\u{307}' if locale == Locale::Lt && context::is_after_soft_dotted(text, offset) => CaseMapping::empty(),
        _ => mapping::uppercase(c),
    }
}

/// заглавный регистр кодпоинта в контексте строки
fn title_char(text: &str, offset: usize, c: char, locale: Locale) -> CaseMapping
{
    match c {
        'i' if locale.is_turkic() => CaseMapping::single('\u{130}'),
        '\u{307}' if locale == Locale::Lt && context::is_after_soft_dotted(text, offset) => CaseMapping::empty(),
        _ => mapping::titlecase(c),
    }
}

/// свёртка регистра кодпоинта (для tr / az - с отображениями статуса T)
fn fold_char(c: char, locale: Locale) -> CaseMapping
{
    match c {
        'I' if locale.is_turkic() => CaseMapping::single('ı'),
        '\u{130}' if locale.is_turkic() => CaseMapping::single('i'),
        _ => mapping::casefold(c),
    }
}

/// нижний регистр с записью в приёмник
pub fn lowercase_to<S: Sink + ?Sized>(text: &str, locale: Locale, sink: &mut S)
{
    for (offset, c) in text.char_indices() {
        lower_char(text, offset, offset + c.len_utf8(), c, locale).for_each(|c| sink.write(c));
    }
}

/// верхний регистр с записью в приёмник
pub fn uppercase_to<S: Sink + ?Sized>(text: &str, locale: Locale, sink: &mut S)
{
    if locale == Locale::El {
        greek::uppercase_to(text, sink);
        return;
    }

    for (offset, c) in text.char_indices() {
        upper_char(text, offset, c, locale).for_each(|c| sink.write(c));
    }
}

/// заглавный регистр (по границам слов) с записью в приёмник
pub fn titlecase_to<S: Sink + ?Sized>(text: &str, locale: Locale, sink: &mut S)
{
    title::titlecase_to(text, locale, sink);
}

/// свёртка регистра с записью в приёмник
pub fn casefold_to<S: Sink + ?Sized>(text: &str, locale: Locale, sink: &mut S)
{
    for c in text.chars() {
        fold_char(c, locale).for_each(|c| sink.write(c));
    }
}

/// нижний регистр
pub fn to_lowercase(text: &str, locale: Locale) -> String
{
    let mut result = String::with_capacity(text.len());
    lowercase_to(text, locale, &mut result);

    result
}

/// верхний регистр
pub fn to_uppercase(text: &str, locale: Locale) -> String
{
    let mut result = String::with_capacity(text.len());
    uppercase_to(text, locale, &mut result);

    result
}

/// заглавный регистр: первая буква каждого слова - заглавная, остальные - строчные
pub fn to_titlecase(text: &str, locale: Locale) -> String
{
    let mut result = String::with_capacity(text.len());
    titlecase_to(text, locale, &mut result);

    result
}

/// свёртка регистра
pub fn to_casefold(text: &str, locale: Locale) -> String
{
    let mut result = String::with_capacity(text.len());
    casefold_to(text, locale, &mut result);

    result
}
