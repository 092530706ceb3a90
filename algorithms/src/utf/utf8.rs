// декодирование следует практике WHATWG / Unicode (U+FFFD substitution of maximal subparts):
// некорректная последовательность заменяется одним U+FFFD на каждую максимальную часть,
// которая могла бы быть началом корректной последовательности

/// получаем количество байт в последовательности UTF-8 по первому байту, 0 - байт не может начинать последовательность
#[inline(always)]
pub fn sequence_width(first: u8) -> usize
{
    match first {
        0 ..= 0x7F => 1,
        0xC2 ..= 0xDF => 2,
        0xE0 ..= 0xEF => 3,
        0xF0 ..= 0xF4 => 4,
        _ => 0,
    }
}

/// 2, 3, 4 байты последовательности имеют вид 0b10xx_xxxx
#[inline(always)]
fn is_continuation(byte: u8) -> bool
{
    byte & 0xC0 == 0x80
}

/// маска, исключающая 2 старших бита в 2, 3, 4 байтах последовательности UTF-8
const CONT_MASK: u8 = 0x3F;

/// убираем 2 старших бита у следующего байта последовательности и комбинируем с предыдущим значением
#[inline(always)]
fn acc_cont_byte(code: u32, byte: u8) -> u32
{
    (code << 6) | (byte & CONT_MASK) as u32
}

/// декодировать первый кодпоинт: (кодпоинт или None для некорректной последовательности, количество прочитанных байт)
#[inline]
pub fn decode_next(bytes: &[u8]) -> (Option<char>, usize)
{
    let first = match bytes.first() {
        Some(&first) => first,
        None => return (None, 0),
    };

    if first < 0x80 {
        return (Some(first as char), 1);
    }

    if sequence_width(first) == 0 || bytes.len() == 1 {
        return (None, 1);
    }

    // допустимый диапазон второго байта зависит от первого: так отсекаются слишком длинные
    // представления, суррогаты и значения больше U+10FFFF
    let second = bytes[1];
    let (lower, upper) = match first {
        0xE0 => (0xA0, 0xBF),
        0xED => (0x80, 0x9F),
        0xF0 => (0x90, 0xBF),
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    };

    if !(lower ..= upper).contains(&second) {
        return (None, 1);
    }

    if first < 0xE0 {
        let code = acc_cont_byte((first & 0x1F) as u32, second);
        return (char::from_u32(code), 2);
    }

    let third = match bytes.get(2) {
        Some(&third) if is_continuation(third) => third,
        _ => return (None, 2),
    };

    if first < 0xF0 {
        let code = acc_cont_byte(acc_cont_byte((first & 0x0F) as u32, second), third);
        return (char::from_u32(code), 3);
    }

    let fourth = match bytes.get(3) {
        Some(&fourth) if is_continuation(fourth) => fourth,
        _ => return (None, 3),
    };

    let code = acc_cont_byte(
        acc_cont_byte(acc_cont_byte((first & 0x07) as u32, second), third),
        fourth,
    );

    (char::from_u32(code), 4)
}

/// декодировать последний кодпоинт: (кодпоинт или None, количество прочитанных с конца байт)
#[inline]
pub fn decode_back(bytes: &[u8]) -> (Option<char>, usize)
{
    if bytes.is_empty() {
        return (None, 0);
    }

    // ищем начало последовательности не дальше 4 байт от конца; если декодирование с этого места
    // покрывает весь хвост - это и есть последний кодпоинт, иначе последний байт некорректен
    for width in 1 ..= bytes.len().min(4) {
        let start = bytes.len() - width;

        if !is_continuation(bytes[start]) {
            let (decoded, read) = decode_next(&bytes[start ..]);

            if read == width {
                return (decoded, width);
            }

            break;
        }
    }

    (None, 1)
}

/// записать кодпоинт
#[inline]
pub fn encode(c: char, output: &mut Vec<u8>)
{
    let mut buffer = [0; 4];
    output.extend_from_slice(c.encode_utf8(&mut buffer).as_bytes());
}
