#[cfg(feature = "casing")]
use crate::data::CaseData;
use crate::data::DecompositionData;

// все таблицы свойств - двухуровневые: кодпоинт делится на номер блока (старшие биты) и
// смещение в блоке (7 младших бит). одинаковые блоки хранятся один раз, индекс обрезан после
// последнего блока с ненулевыми значениями - дальше везде значение по умолчанию (0)

/// количество бит смещения внутри блока
const BLOCK_BITS: u32 = 7;
/// маска смещения внутри блока (блок - 128 кодпоинтов)
const BLOCK_MASK: u32 = (1 << BLOCK_BITS) - 1;

/// двухуровневая таблица: индекс блоков и данные блоков
#[derive(Debug, Clone, Copy)]
pub struct TableData<'a, T>
{
    /// индекс блока
    pub index: &'a [u16],
    /// данные блоков
    pub data: &'a [T],
}

impl<'a, T: Copy + Default> TableData<'a, T>
{
    /// значение для кодпоинта
    #[inline(always)]
    pub fn get(&self, code: u32) -> T
    {
        lookup(self.index, self.data, code)
    }
}

/// поиск значения в двухуровневой таблице
#[inline(always)]
pub fn lookup<T: Copy + Default>(index: &[u16], data: &[T], code: u32) -> T
{
    match index.get((code >> BLOCK_BITS) as usize) {
        Some(&block) => data[((block as usize) << BLOCK_BITS) | (code & BLOCK_MASK) as usize],
        None => T::default(),
    }
}

impl<'a> DecompositionData<'a>
{
    /// декомпозиция кодпоинта - последовательность упакованных значений (код << 8 | CCC),
    /// пустой слайс - кодпоинт не декомпозируется
    #[inline(always)]
    pub fn get(&self, code: u32) -> &'a [u32]
    {
        let offset = lookup(self.index, self.data, code) as usize;

        if offset == 0 {
            return &[];
        }

        let len = self.expansions[offset] as usize;

        &self.expansions[offset + 1 ..= offset + len]
    }
}

#[cfg(feature = "casing")]
/// в значении таблицы регистра: младшие 21 бит - простое отображение
const CASE_SIMPLE_MASK: u32 = 0x1F_FFFF;
#[cfg(feature = "casing")]
/// номер строки таблицы полных отображений - в старших битах
const CASE_SPECIAL_SHIFT: u32 = 21;

#[cfg(feature = "casing")]
impl<'a> CaseData<'a>
{
    /// простое (один к одному) отображение
    #[inline(always)]
    pub fn simple(&self, code: u32) -> u32
    {
        match lookup(self.index, self.data, code) & CASE_SIMPLE_MASK {
            0 => code,
            mapped => mapped,
        }
    }

    /// полное отображение, если оно отличается от простого (2 или 3 кодпоинта)
    #[inline(always)]
    pub fn special(&self, code: u32) -> Option<&'a [u32]>
    {
        let row = (lookup(self.index, self.data, code) >> CASE_SPECIAL_SHIFT) as usize;

        match row {
            0 => None,
            _ => {
                let entry = &self.special[row];
                Some(&entry[1 ..= entry[0] as usize])
            }
        }
    }
}
