/// свойство Word_Break (UAX #29)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordBreak
{
    Other,
    CR,
    LF,
    Newline,
    Extend,
    ZWJ,
    RegionalIndicator,
    Format,
    Katakana,
    HebrewLetter,
    ALetter,
    SingleQuote,
    DoubleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    WSegSpace,
}

/// в значении таблицы: младшие 5 бит - Word_Break
const WB_MASK: u8 = 0x1F;
/// Extended_Pictographic
pub(crate) const WORD_EXT_PICT: u8 = 0x20;
/// Ideographic
pub(crate) const WORD_IDEOGRAPHIC: u8 = 0x40;
/// письменность - хирагана
pub(crate) const WORD_HIRAGANA: u8 = 0x80;

impl WordBreak
{
    #[inline(always)]
    pub(crate) fn from_baked(value: u8) -> Self
    {
        match value & WB_MASK {
            1 => Self::CR,
            2 => Self::LF,
            3 => Self::Newline,
            4 => Self::Extend,
            5 => Self::ZWJ,
            6 => Self::RegionalIndicator,
            7 => Self::Format,
            8 => Self::Katakana,
            9 => Self::HebrewLetter,
            10 => Self::ALetter,
            11 => Self::SingleQuote,
            12 => Self::DoubleQuote,
            13 => Self::MidNumLet,
            14 => Self::MidLetter,
            15 => Self::MidNum,
            16 => Self::Numeric,
            17 => Self::ExtendNumLet,
            18 => Self::WSegSpace,
            _ => Self::Other,
        }
    }

    /// AHLetter - буквы, включая иврит
    #[inline(always)]
    pub fn is_ah_letter(&self) -> bool
    {
        matches!(self, Self::ALetter | Self::HebrewLetter)
    }

    /// (MidLetter | MidNumLetQ) - может связывать буквы внутри слова
    #[inline(always)]
    pub fn is_mid_letter(&self) -> bool
    {
        matches!(self, Self::MidLetter | Self::MidNumLet | Self::SingleQuote)
    }

    /// (MidNum | MidNumLetQ) - может связывать цифры внутри числа
    #[inline(always)]
    pub fn is_mid_num(&self) -> bool
    {
        matches!(self, Self::MidNum | Self::MidNumLet | Self::SingleQuote)
    }

    /// Extend | Format | ZWJ - игнорируются правилом WB4
    #[inline(always)]
    pub fn is_ignorable(&self) -> bool
    {
        matches!(self, Self::Extend | Self::Format | Self::ZWJ)
    }

    /// Newline | CR | LF
    #[inline(always)]
    pub fn is_newline(&self) -> bool
    {
        matches!(self, Self::Newline | Self::CR | Self::LF)
    }
}
