/// начало диапазона суррогатов
const SURROGATE_FIRST: u16 = 0xD800;
/// начало диапазона младших суррогатов
const LOW_SURROGATE_FIRST: u16 = 0xDC00;
/// конец диапазона суррогатов
const SURROGATE_LAST: u16 = 0xDFFF;

#[inline(always)]
fn is_surrogate(unit: u16) -> bool
{
    (SURROGATE_FIRST ..= SURROGATE_LAST).contains(&unit)
}

#[inline(always)]
fn is_high_surrogate(unit: u16) -> bool
{
    (SURROGATE_FIRST .. LOW_SURROGATE_FIRST).contains(&unit)
}

#[inline(always)]
fn is_low_surrogate(unit: u16) -> bool
{
    (LOW_SURROGATE_FIRST ..= SURROGATE_LAST).contains(&unit)
}

/// кодпоинт из суррогатной пары
#[inline(always)]
fn from_pair(high: u16, low: u16) -> Option<char>
{
    let code = 0x10000 + (((high - SURROGATE_FIRST) as u32) << 10) + (low - LOW_SURROGATE_FIRST) as u32;

    char::from_u32(code)
}

/// декодировать первый кодпоинт: (кодпоинт или None для непарного суррогата, количество прочитанных единиц)
#[inline]
pub fn decode_next(units: &[u16]) -> (Option<char>, usize)
{
    let first = match units.first() {
        Some(&first) => first,
        None => return (None, 0),
    };

    if !is_surrogate(first) {
        return (char::from_u32(first as u32), 1);
    }

    match units.get(1) {
        Some(&second) if is_high_surrogate(first) && is_low_surrogate(second) => {
            (from_pair(first, second), 2)
        }
        _ => (None, 1),
    }
}

/// декодировать последний кодпоинт
#[inline]
pub fn decode_back(units: &[u16]) -> (Option<char>, usize)
{
    let last = match units.last() {
        Some(&last) => last,
        None => return (None, 0),
    };

    if !is_surrogate(last) {
        return (char::from_u32(last as u32), 1);
    }

    match units.len() {
        len if len > 1 && is_low_surrogate(last) && is_high_surrogate(units[len - 2]) => {
            (from_pair(units[len - 2], last), 2)
        }
        _ => (None, 1),
    }
}

/// записать кодпоинт
#[inline]
pub fn encode(c: char, output: &mut Vec<u16>)
{
    let mut buffer = [0; 2];
    output.extend_from_slice(c.encode_utf16(&mut buffer));
}
