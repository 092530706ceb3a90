use crate::table::TableData;

// таблицы сгенерированы из UCD 16.0 и лежат в data/ в виде литералов Rust

/// декомпозиции NFD / NFKD
#[derive(Clone, Copy)]
pub struct DecompositionData<'a>
{
    /// индекс блока
    pub index: &'a [u16],
    /// смещения последовательностей в expansions, 0 - декомпозиции нет
    pub data: &'a [u16],
    /// длина последовательности, затем её элементы (код << 8 | CCC)
    pub expansions: &'a [u32],
}

/// пары кодпоинтов, комбинируемых в один
#[derive(Clone, Copy)]
pub struct CompositionData<'a>
{
    /// первый кодпоинт пары -> номер строки + 1
    pub first: TableData<'a, u16>,
    /// второй кодпоинт пары -> номер столбца + 1
    pub second: TableData<'a, u8>,
    /// количество строк
    pub rows: usize,
    /// количество столбцов
    pub columns: usize,
    /// тройки (строка, столбец, результат)
    pub pairs: &'a [u32],
}

/// отображения регистра
#[derive(Clone, Copy)]
pub struct CaseData<'a>
{
    /// индекс блока
    pub index: &'a [u16],
    /// простое отображение (0 - кодпоинт отображается сам в себя) | номер строки special << 21
    pub data: &'a [u32],
    /// полные отображения: [количество, кодпоинт, кодпоинт, кодпоинт]
    pub special: &'a [[u32; 4]],
}

/// CCC и флаги быстрых проверок
pub fn normalization<'a>() -> TableData<'a, u16>
{
    include!("./../../data/normalization.txt")
}

/// каноническая декомпозиция
pub fn nfd<'a>() -> DecompositionData<'a>
{
    include!("./../../data/nfd.txt")
}

/// совместимая декомпозиция
pub fn nfkd<'a>() -> DecompositionData<'a>
{
    include!("./../../data/nfkd.txt")
}

/// канонические композиции
pub fn compositions<'a>() -> CompositionData<'a>
{
    include!("./../../data/compositions.txt")
}

/// количество начальных / конечных нестартеров в NFKD-декомпозиции
pub fn stream_safe<'a>() -> TableData<'a, u8>
{
    include!("./../../data/stream_safe.txt")
}

/// основная категория
pub fn general_category<'a>() -> TableData<'a, u8>
{
    include!("./../../data/general_category.txt")
}

/// Cased, Case_Ignorable, Soft_Dotted
pub fn case_properties<'a>() -> TableData<'a, u8>
{
    include!("./../../data/case_properties.txt")
}

#[cfg(feature = "casing")]
pub fn lowercase<'a>() -> CaseData<'a>
{
    include!("./../../data/lowercase.txt")
}

#[cfg(feature = "casing")]
pub fn uppercase<'a>() -> CaseData<'a>
{
    include!("./../../data/uppercase.txt")
}

#[cfg(feature = "casing")]
pub fn titlecase<'a>() -> CaseData<'a>
{
    include!("./../../data/titlecase.txt")
}

#[cfg(feature = "casing")]
pub fn casefold<'a>() -> CaseData<'a>
{
    include!("./../../data/casefold.txt")
}

/// Grapheme_Cluster_Break, Extended_Pictographic, Indic_Conjunct_Break
pub fn grapheme<'a>() -> TableData<'a, u8>
{
    include!("./../../data/grapheme.txt")
}

/// Word_Break, Extended_Pictographic, Ideographic, Hiragana
pub fn word<'a>() -> TableData<'a, u8>
{
    include!("./../../data/word.txt")
}
