/// свойство Grapheme_Cluster_Break (UAX #29)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphemeBreak
{
    Other,
    CR,
    LF,
    Control,
    Extend,
    ZWJ,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    /// ведущая согласная чамо
    L,
    /// гласная чамо
    V,
    /// завершающая согласная чамо
    T,
    /// слог хангыль без завершающей согласной
    LV,
    /// слог хангыль с завершающей согласной
    LVT,
}

/// свойство Indic_Conjunct_Break, нужное для правила GB9c
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicConjunctBreak
{
    None,
    Consonant,
    Linker,
    Extend,
}

/// в значении таблицы: младшие 4 бита - Grapheme_Cluster_Break
const GCB_MASK: u8 = 0x0F;
/// Extended_Pictographic
pub(crate) const GRAPHEME_EXT_PICT: u8 = 0x10;
/// Indic_Conjunct_Break - биты 5, 6
const INCB_SHIFT: u32 = 5;

impl GraphemeBreak
{
    #[inline(always)]
    pub(crate) fn from_baked(value: u8) -> Self
    {
        match value & GCB_MASK {
            1 => Self::CR,
            2 => Self::LF,
            3 => Self::Control,
            4 => Self::Extend,
            5 => Self::ZWJ,
            6 => Self::RegionalIndicator,
            7 => Self::Prepend,
            8 => Self::SpacingMark,
            9 => Self::L,
            10 => Self::V,
            11 => Self::T,
            12 => Self::LV,
            13 => Self::LVT,
            _ => Self::Other,
        }
    }
}

impl IndicConjunctBreak
{
    #[inline(always)]
    pub(crate) fn from_baked(value: u8) -> Self
    {
        match (value >> INCB_SHIFT) & 0b11 {
            1 => Self::Consonant,
            2 => Self::Linker,
            3 => Self::Extend,
            _ => Self::None,
        }
    }
}
