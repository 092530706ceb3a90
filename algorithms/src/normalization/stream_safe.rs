use crate::data;
use crate::table::TableData;

use super::iter::{CGJ, MAX_NONSTARTERS};

/// формат потокобезопасного текста (UAX #15, раздел 13): после 30 нестартеров подряд
/// (с учётом совместимых декомпозиций) вставляется U+034F COMBINING GRAPHEME JOINER.
/// результат годится как вход для любой формы нормализации без дополнительных вставок
pub struct StreamSafe<I: Iterator<Item = char>>
{
    source: I,
    /// количество начальных / конечных нестартеров в NFKD-декомпозиции
    counts: TableData<'static, u8>,
    /// количество нестартеров подряд
    nonstarters: usize,
    /// кодпоинт, перед которым вставлен U+034F
    pending: Option<char>,
}

impl<I: Iterator<Item = char>> StreamSafe<I>
{
    pub fn new(source: I) -> Self
    {
        Self {
            source,
            counts: data::stream_safe(),
            nonstarters: 0,
            pending: None,
        }
    }

    /// учитываем нестартеры кодпоинта
    #[inline(always)]
    fn count(&mut self, c: char, leading: usize, trailing: usize)
    {
        let len = data::nfkd().get(c as u32).len().max(1);

        match leading == len {
            true => self.nonstarters += leading,
            false => self.nonstarters = trailing,
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for StreamSafe<I>
{
    type Item = char;

    fn next(&mut self) -> Option<char>
    {
        if let Some(c) = self.pending.take() {
            return Some(c);
        }

        let c = self.source.next()?;

        let counts = self.counts.get(c as u32);
        let leading = (counts & 0x0F) as usize;
        let trailing = (counts >> 4) as usize;

        if leading == 0 {
            self.nonstarters = trailing;
            return Some(c);
        }

        if self.nonstarters + leading > MAX_NONSTARTERS {
            self.nonstarters = 0;
            self.count(c, leading, trailing);
            self.pending = Some(c);

            // CGJ - скалярное значение
            return char::from_u32(CGJ);
        }

        self.count(c, leading, trailing);

        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let (lower, upper) = self.source.size_hint();
        let pending = self.pending.is_some() as usize;

        (
            lower + pending,
            upper.and_then(|upper| upper.checked_mul(2)).map(|upper| upper + pending),
        )
    }
}
