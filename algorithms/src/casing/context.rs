// условия контекстно-зависимых отображений (Unicode, глава 3.13, таблица 3-17).
// offset - смещение кодпоинта в строке, end - смещение следующего за ним кодпоинта

use crate::properties;

/// CCC 230 (Above)
const CCC_ABOVE: u8 = 230;
/// COMBINING DOT ABOVE
const DOT_ABOVE: char = '\u{307}';

/// кодпоинт прерывает поиск: стартер или диакритика сверху
#[inline(always)]
fn is_barrier(ccc: u8) -> bool
{
    ccc == 0 || ccc == CCC_ABOVE
}

/// Final_Sigma: перед кодпоинтом - буква с регистром (возможно, через Case_Ignorable),
/// после него такой буквы нет
pub fn is_final_sigma(text: &str, offset: usize, end: usize) -> bool
{
    let before = text[.. offset]
        .chars()
        .rev()
        .find(|&c| !properties::is_case_ignorable(c));

    if !before.is_some_and(properties::is_cased) {
        return false;
    }

    let after = text[end ..]
        .chars()
        .find(|&c| !properties::is_case_ignorable(c));

    !after.is_some_and(properties::is_cased)
}

/// After_Soft_Dotted: перед кодпоинтом - Soft_Dotted без промежуточных CCC 0 и 230
pub fn is_after_soft_dotted(text: &str, offset: usize) -> bool
{
    for c in text[.. offset].chars().rev() {
        if properties::is_soft_dotted(c) {
            return true;
        }

        if is_barrier(properties::ccc(c).into()) {
            return false;
        }
    }

    false
}

/// More_Above: после кодпоинта - CCC 230 без промежуточных CCC 0
pub fn is_more_above(text: &str, end: usize) -> bool
{
    for c in text[end ..].chars() {
        let ccc: u8 = properties::ccc(c).into();

        if ccc == CCC_ABOVE {
            return true;
        }

        if ccc == 0 {
            return false;
        }
    }

    false
}

/// Before_Dot: после кодпоинта - U+0307 без промежуточных CCC 0 и 230
pub fn is_before_dot(text: &str, end: usize) -> bool
{
    for c in text[end ..].chars() {
        if c == DOT_ABOVE {
            return true;
        }

        if is_barrier(properties::ccc(c).into()) {
            return false;
        }
    }

    false
}

/// After_I: перед кодпоинтом - заглавная I без промежуточных CCC 0 и 230
pub fn is_after_i(text: &str, offset: usize) -> bool
{
    for c in text[.. offset].chars().rev() {
        if c == 'I' {
            return true;
        }

        if is_barrier(properties::ccc(c).into()) {
            return false;
        }
    }

    false
}
