use crate::data;
use crate::normalization::composition;
use crate::normalization::hangul;
use crate::normalization::Form;

pub use canonical_combining_class::CanonicalCombiningClass;
pub use general_category::GeneralCategory;
pub use grapheme_break::{GraphemeBreak, IndicConjunctBreak};
pub use word_break::WordBreak;

pub(crate) use grapheme_break::GRAPHEME_EXT_PICT;
pub(crate) use word_break::{WORD_EXT_PICT, WORD_HIRAGANA, WORD_IDEOGRAPHIC};

mod canonical_combining_class;
mod general_category;
mod grapheme_break;
mod word_break;

// значение таблицы свойств нормализации (u16): младший байт - CCC, биты 8 .. 11 - кодпоинт
// НЕ проходит быструю проверку (Quick_Check = No / Maybe) для соответствующей формы.
// флаги инвертированы, чтобы значение по умолчанию (стартер, который не меняется) было нулевым

/// NFD_Quick_Check != Yes
pub(crate) const QC_NFD: u16 = 1 << 8;
/// NFC_Quick_Check != Yes
pub(crate) const QC_NFC: u16 = 1 << 9;
/// NFKD_Quick_Check != Yes
pub(crate) const QC_NFKD: u16 = 1 << 10;
/// NFKC_Quick_Check != Yes
pub(crate) const QC_NFKC: u16 = 1 << 11;

/// свойства регистра
const CASED: u8 = 1;
const CASE_IGNORABLE: u8 = 1 << 1;
const SOFT_DOTTED: u8 = 1 << 2;

/// класс канонического комбинирования
#[inline]
pub fn ccc(c: char) -> CanonicalCombiningClass
{
    CanonicalCombiningClass::from(data::normalization().get(c as u32) as u8)
}

/// быстрая проверка (Quick_Check = Yes): кодпоинт остаётся на месте при нормализации в заданную форму
#[inline]
pub fn quick_check(c: char, form: Form) -> bool
{
    let value = data::normalization().get(c as u32);

    match form {
        Form::Unaccent => value & form.quick_check_mask() == 0 && !is_nonspacing_mark(c as u32),
        _ => value & form.quick_check_mask() == 0,
    }
}

/// полная декомпозиция кодпоинта: каноническая или совместимая
pub fn decomposition(c: char, compatibility: bool) -> Decomposition
{
    let code = c as u32;

    if hangul::is_syllable(code) {
        let (l, v, t) = hangul::decompose(code);

        return match t {
            Some(t) => Decomposition::inline([l, v, t], 3),
            None => Decomposition::inline([l, v, 0], 2),
        };
    }

    let expansion = match compatibility {
        true => data::nfkd().get(code),
        false => data::nfd().get(code),
    };

    match expansion.is_empty() {
        true => Decomposition::inline([code, 0, 0], 1),
        false => Decomposition {
            expansion: expansion.iter(),
            inline: [0; 3],
            position: 0,
            len: 0,
        },
    }
}

/// каноническая композиция пары, в т.ч. слогов хангыль
#[inline]
pub fn compose(first: char, second: char) -> Option<char>
{
    composition::compose(first as u32, second as u32).and_then(char::from_u32)
}

/// количество нестартеров в начале NFKD-декомпозиции
#[inline]
pub fn leading_nonstarters(c: char) -> u8
{
    data::stream_safe().get(c as u32) & 0x0F
}

/// количество нестартеров в конце NFKD-декомпозиции
#[inline]
pub fn trailing_nonstarters(c: char) -> u8
{
    data::stream_safe().get(c as u32) >> 4
}

/// основная категория
#[inline]
pub fn general_category(c: char) -> GeneralCategory
{
    GeneralCategory::from(data::general_category().get(c as u32))
}

/// Mn - такие кодпоинты удаляются при удалении диакритики
#[inline(always)]
pub(crate) fn is_nonspacing_mark(code: u32) -> bool
{
    data::general_category().get(code) == GeneralCategory::NonspacingMark as u8
}

/// Cased
#[inline]
pub fn is_cased(c: char) -> bool
{
    data::case_properties().get(c as u32) & CASED != 0
}

/// Case_Ignorable
#[inline]
pub fn is_case_ignorable(c: char) -> bool
{
    data::case_properties().get(c as u32) & CASE_IGNORABLE != 0
}

/// Soft_Dotted - буквы с точкой, которая пропадает при добавлении диакритики сверху (i, j, ...)
#[inline]
pub fn is_soft_dotted(c: char) -> bool
{
    data::case_properties().get(c as u32) & SOFT_DOTTED != 0
}

/// Grapheme_Cluster_Break
#[inline]
pub fn grapheme_break(c: char) -> GraphemeBreak
{
    GraphemeBreak::from_baked(data::grapheme().get(c as u32))
}

/// Indic_Conjunct_Break
#[inline]
pub fn indic_conjunct_break(c: char) -> IndicConjunctBreak
{
    IndicConjunctBreak::from_baked(data::grapheme().get(c as u32))
}

/// Extended_Pictographic
#[inline]
pub fn is_extended_pictographic(c: char) -> bool
{
    data::grapheme().get(c as u32) & GRAPHEME_EXT_PICT != 0
}

/// Word_Break
#[inline]
pub fn word_break(c: char) -> WordBreak
{
    WordBreak::from_baked(data::word().get(c as u32))
}

/// Ideographic
#[inline]
pub fn is_ideographic(c: char) -> bool
{
    data::word().get(c as u32) & WORD_IDEOGRAPHIC != 0
}

/// итератор по декомпозиции кодпоинта
#[derive(Debug, Clone)]
pub struct Decomposition
{
    /// последовательность из таблицы (код << 8 | CCC)
    expansion: core::slice::Iter<'static, u32>,
    /// кодпоинт без декомпозиции или чамо хангыль
    inline: [u32; 3],
    position: u8,
    len: u8,
}

impl Decomposition
{
    fn inline(codes: [u32; 3], len: u8) -> Self
    {
        Self {
            expansion: [].iter(),
            inline: codes,
            position: 0,
            len,
        }
    }
}

impl Iterator for Decomposition
{
    type Item = char;

    fn next(&mut self) -> Option<char>
    {
        let code = match self.expansion.next() {
            Some(&baked) => baked >> 8,
            None => {
                if self.position == self.len {
                    return None;
                }

                self.position += 1;
                self.inline[self.position as usize - 1]
            }
        };

        char::from_u32(code)
    }
}
