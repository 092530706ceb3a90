/// декодировать первый кодпоинт: значения вне диапазона и суррогаты некорректны
#[inline]
pub fn decode_next(units: &[u32]) -> (Option<char>, usize)
{
    match units.first() {
        Some(&unit) => (char::from_u32(unit), 1),
        None => (None, 0),
    }
}

/// декодировать последний кодпоинт
#[inline]
pub fn decode_back(units: &[u32]) -> (Option<char>, usize)
{
    match units.last() {
        Some(&unit) => (char::from_u32(unit), 1),
        None => (None, 0),
    }
}

/// записать кодпоинт
#[inline]
pub fn encode(c: char, output: &mut Vec<u32>)
{
    output.push(c as u32);
}
