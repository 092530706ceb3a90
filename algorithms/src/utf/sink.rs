/// приёмник скалярных значений: результат декодирования, нормализации, преобразования регистра
pub trait Sink
{
    fn write(&mut self, c: char);

    /// запись корректной строки целиком
    #[inline]
    fn write_str(&mut self, s: &str)
    {
        s.chars().for_each(|c| self.write(c));
    }
}

impl Sink for String
{
    #[inline(always)]
    fn write(&mut self, c: char)
    {
        self.push(c);
    }

    #[inline(always)]
    fn write_str(&mut self, s: &str)
    {
        self.push_str(s);
    }
}

impl Sink for Vec<u8>
{
    #[inline(always)]
    fn write(&mut self, c: char)
    {
        super::utf8::encode(c, self);
    }

    #[inline(always)]
    fn write_str(&mut self, s: &str)
    {
        self.extend_from_slice(s.as_bytes());
    }
}

impl Sink for Vec<u16>
{
    #[inline(always)]
    fn write(&mut self, c: char)
    {
        super::utf16::encode(c, self);
    }
}

impl Sink for Vec<u32>
{
    #[inline(always)]
    fn write(&mut self, c: char)
    {
        super::utf32::encode(c, self);
    }
}

impl Sink for Vec<char>
{
    #[inline(always)]
    fn write(&mut self, c: char)
    {
        self.push(c);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S
{
    #[inline(always)]
    fn write(&mut self, c: char)
    {
        (**self).write(c);
    }

    #[inline(always)]
    fn write_str(&mut self, s: &str)
    {
        (**self).write_str(s);
    }
}

/// подсчёт размера результата без его записи
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter
{
    /// количество кодпоинтов
    pub chars: usize,
    /// длина в UTF-8
    pub utf8: usize,
    /// длина в UTF-16
    pub utf16: usize,
}

impl Sink for Counter
{
    #[inline(always)]
    fn write(&mut self, c: char)
    {
        self.chars += 1;
        self.utf8 += c.len_utf8();
        self.utf16 += c.len_utf16();
    }
}

/// приёмник, отбрасывающий результат
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Discard;

impl Sink for Discard
{
    #[inline(always)]
    fn write(&mut self, _: char) {}

    #[inline(always)]
    fn write_str(&mut self, _: &str) {}
}

/// сравнение результата с ожидаемой последовательностью без его записи
#[derive(Debug, Clone)]
pub struct Matcher<I: Iterator<Item = char>>
{
    expected: I,
    matching: bool,
}

impl<I: Iterator<Item = char>> Matcher<I>
{
    pub fn new(expected: I) -> Self
    {
        Self {
            expected,
            matching: true,
        }
    }

    /// всё записанное до сих пор совпадает с началом ожидаемой последовательности
    #[inline]
    pub fn is_matching(&self) -> bool
    {
        self.matching
    }

    /// записанное совпадает с ожидаемой последовательностью целиком
    pub fn finish(mut self) -> bool
    {
        self.matching && self.expected.next().is_none()
    }
}

impl<I: Iterator<Item = char>> Sink for Matcher<I>
{
    #[inline]
    fn write(&mut self, c: char)
    {
        if self.matching {
            self.matching = self.expected.next() == Some(c);
        }
    }
}
