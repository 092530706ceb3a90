use pretty_assertions::assert_eq;
use unicode_algorithms::utf::{self, Chars, Counter, Decoder, Transcoded};
use unicode_algorithms::{Error, Policy};

/// перекодирование во все стороны совпадает со стандартной библиотекой
#[test]
fn round_trips()
{
    for data in crate::data::files() {
        let utf8 = data.1.as_bytes();
        let utf16: Vec<u16> = data.1.encode_utf16().collect();
        let utf32: Vec<u32> = data.1.chars().map(|c| c as u32).collect();

        assert_eq!(utf::utf8_to_utf16(utf8), utf16, "{}", data.0);
        assert_eq!(utf::utf8_to_utf32(utf8), utf32, "{}", data.0);
        assert_eq!(utf::utf16_to_utf8(&utf16), utf8, "{}", data.0);
        assert_eq!(utf::utf16_to_utf32(&utf16), utf32, "{}", data.0);
        assert_eq!(utf::utf32_to_utf8(&utf32), utf8, "{}", data.0);
        assert_eq!(utf::utf32_to_utf16(&utf32), utf16, "{}", data.0);
        assert_eq!(utf::utf16_to_string(&utf16), data.1, "{}", data.0);

        assert_eq!(utf::validate_utf8(utf8), Ok(()));
        assert_eq!(utf::validate_utf16(&utf16), Ok(()));
        assert_eq!(utf::validate_utf32(&utf32), Ok(()));
    }
}

/// обратный порядок декодирования
#[test]
fn reversed()
{
    for data in crate::data::files() {
        let expected: Vec<char> = data.1.chars().rev().collect();
        let utf16: Vec<u16> = data.1.encode_utf16().collect();

        assert_eq!(Chars::new(data.1.as_bytes()).rev().collect::<Vec<char>>(), expected, "{}", data.0);
        assert_eq!(Chars::new(utf16.as_slice()).rev().collect::<Vec<char>>(), expected, "{}", data.0);
    }

    let ill_formed = b"a\xFFb\xC3";

    let forward: Vec<char> = Chars::new(ill_formed.as_slice()).collect();
    let mut backward: Vec<char> = Chars::new(ill_formed.as_slice()).rev().collect();
    backward.reverse();

    assert_eq!(forward, vec!['a', '\u{FFFD}', 'b', '\u{FFFD}']);
    assert_eq!(backward, forward);

    // оборванная многобайтовая последовательность в конце - одна замена в обоих направлениях
    let truncated = b"\xE2\x82\xACx\xF0\x9F\x98";

    let forward: Vec<char> = Chars::new(truncated.as_slice()).collect();
    let mut backward: Vec<char> = Chars::new(truncated.as_slice()).rev().collect();
    backward.reverse();

    assert_eq!(forward, vec!['€', 'x', '\u{FFFD}']);
    assert_eq!(backward, forward);
}

#[test]
fn tri_state()
{
    let valid: Transcoded<String> = utf::transcode(b"abc".as_slice(), Policy::Replace).unwrap();
    assert!(valid.is_lossless());
    assert_eq!(valid.output, "abc");

    let replaced: Transcoded<Vec<u16>> = utf::transcode(b"a\xC0\xAFb".as_slice(), Policy::Replace).unwrap();
    assert_eq!(replaced.replaced, 2);
    assert_eq!(replaced.output, vec![0x61, 0xFFFD, 0xFFFD, 0x62]);

    assert_eq!(
        utf::transcode::<u8, String>(b"ab\xC0\xAF".as_slice(), Policy::Strict),
        Err(Error::Utf8 { offset: 2 })
    );
    assert_eq!(
        utf::transcode::<u16, String>(&[0x61, 0xDC00, 0x62], Policy::Strict),
        Err(Error::Utf16 { offset: 1 })
    );
    assert_eq!(
        utf::transcode::<u32, Vec<u8>>(&[0x61, 0x110000], Policy::Strict),
        Err(Error::Utf32 { offset: 1 })
    );
    assert_eq!(Error::Utf32 { offset: 1 }.offset(), Some(1));

    let empty: Transcoded<Vec<u32>> = utf::transcode::<u16, _>(&[], Policy::Strict).unwrap();
    assert!(empty.output.is_empty());
}

/// строгий декодер сообщает смещения всех ошибок
#[test]
fn decoder_offsets()
{
    let errors: Vec<Error> = Decoder::new(b"\xFFab\xE0\x80c".as_slice())
        .filter_map(Result::err)
        .collect();

    assert_eq!(
        errors,
        vec![Error::Utf8 { offset: 0 }, Error::Utf8 { offset: 3 }, Error::Utf8 { offset: 4 }]
    );
}

/// подсчёт размера без записи
#[test]
fn counter()
{
    for data in crate::data::files() {
        let mut counter = Counter::default();
        let replaced = utf::transcode_to(data.1.as_bytes(), Policy::Strict, &mut counter).unwrap();

        assert_eq!(replaced, 0);
        assert_eq!(counter.chars, data.1.chars().count(), "{}", data.0);
        assert_eq!(counter.utf8, data.1.len(), "{}", data.0);
        assert_eq!(counter.utf16, data.1.encode_utf16().count(), "{}", data.0);
    }
}
