use crate::properties;
use crate::utf::{CodeUnit, Decoder};

use super::{Form, Normalizer};

/// результат быстрой проверки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsNormalized
{
    /// текст нормализован
    Yes,
    /// текст не нормализован или результат можно узнать только нормализацией
    NoOrMaybe,
    /// некорректная последовательность кодовых единиц
    IllFormed,
}

impl Normalizer
{
    /// быстрая проверка (UAX #15, Quick_Check): без нормализации, только по свойствам кодпоинтов
    pub fn quick_check<I: IntoIterator<Item = char>>(&self, input: I) -> IsNormalized
    {
        let mut last_ccc = 0;

        for c in input {
            if !self.passes_quick_check(c as u32, &mut last_ccc) {
                return IsNormalized::NoOrMaybe;
            }
        }

        IsNormalized::Yes
    }

    /// быстрая проверка последовательности кодовых единиц, результат - первое найденное нарушение
    pub fn quick_check_units<U: CodeUnit>(&self, input: &[U]) -> IsNormalized
    {
        let mut last_ccc = 0;

        for c in Decoder::new(input) {
            match c {
                Ok(c) => {
                    if !self.passes_quick_check(c as u32, &mut last_ccc) {
                        return IsNormalized::NoOrMaybe;
                    }
                }
                Err(_) => return IsNormalized::IllFormed,
            }
        }

        IsNormalized::Yes
    }

    #[inline(always)]
    fn passes_quick_check(&self, code: u32, last_ccc: &mut u8) -> bool
    {
        let value = self.properties.get(code);
        let ccc = value as u8;

        if *last_ccc > ccc && ccc != 0 {
            return false;
        }

        if value & self.form.quick_check_mask() != 0 {
            return false;
        }

        if self.form == Form::Unaccent && properties::is_nonspacing_mark(code) {
            return false;
        }

        *last_ccc = ccc;

        true
    }
}
