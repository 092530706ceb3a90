use thiserror::Error;

/// ошибки разбора входных данных
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error
{
    /// некорректная последовательность UTF-8, смещение - в байтах
    #[error("некорректная последовательность UTF-8, смещение {offset}")]
    Utf8 { offset: usize },
    /// некорректная последовательность UTF-16 (в т.ч. непарный суррогат), смещение - в 16-битных единицах
    #[error("некорректная последовательность UTF-16, смещение {offset}")]
    Utf16 { offset: usize },
    /// значение UTF-32 вне диапазона скалярных значений, смещение - в 32-битных единицах
    #[error("некорректное значение UTF-32, смещение {offset}")]
    Utf32 { offset: usize },
    /// тег локали, для которого нет правил преобразования регистра
    #[error("неизвестная локаль: {0}")]
    UnknownLocale(String),
}

impl Error
{
    /// смещение первой некорректной кодовой единицы
    pub fn offset(&self) -> Option<usize>
    {
        match self {
            Self::Utf8 { offset } | Self::Utf16 { offset } | Self::Utf32 { offset } => Some(*offset),
            Self::UnknownLocale(_) => None,
        }
    }
}
