/// значение CCC, которым помечается кодпоинт, поглощённый композицией.
/// реальные значения CCC лежат в диапазоне 0 ..= 254
pub const CCC_COMPOSED: u8 = 0xFF;

/// кодпоинт в буфере нормализации в виде u32: код в старших битах, CCC - в младшем байте
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Codepoint(u32);

impl From<Codepoint> for char
{
    #[inline(always)]
    fn from(value: Codepoint) -> Self
    {
        value.char()
    }
}

impl core::fmt::Debug for Codepoint
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "{{ code: U+{:04X}, ccc: {} }}",
            self.0 >> 8,
            self.0 as u8
        )
    }
}

impl Codepoint
{
    #[inline(always)]
    pub fn code(&self) -> u32
    {
        self.0 >> 8
    }

    #[inline(always)]
    pub fn ccc(&self) -> u8
    {
        self.0 as u8
    }

    #[inline(always)]
    pub fn char(&self) -> char
    {
        // в буфер попадают только скалярные значения: из декодера или из таблиц
        unsafe { char::from_u32_unchecked(self.0 >> 8) }
    }

    #[inline(always)]
    pub fn is_starter(&self) -> bool
    {
        self.0 as u8 == 0
    }

    #[inline(always)]
    pub fn is_nonstarter(&self) -> bool
    {
        self.0 as u8 != 0
    }

    /// кодпоинт поглощён композицией и не попадёт в результат
    #[inline(always)]
    pub fn is_composed(&self) -> bool
    {
        self.0 as u8 == CCC_COMPOSED
    }

    #[inline(always)]
    pub fn set_composed(&mut self)
    {
        self.0 |= CCC_COMPOSED as u32;
    }

    /// значение из таблицы декомпозиций уже упаковано в нужном формате
    #[inline(always)]
    pub fn from_baked(value: u32) -> Self
    {
        Self(value)
    }

    #[inline(always)]
    pub fn from_code_and_ccc(code: u32, ccc: u8) -> Self
    {
        Self(code << 8 | (ccc as u32))
    }

    #[inline(always)]
    pub fn from_code(code: u32) -> Self
    {
        Self(code << 8)
    }
}
