// верхний регистр для греческого языка (el): ударения и придыхания не пишутся, диалитика
// сохраняется и добавляется к ι / υ после гласной, потерявшей ударение (иначе пара читалась бы
// как дифтонг), ипогеграммени становится заглавной йотой

use crate::properties;
use crate::utf::Sink;

use super::mapping;

const DIALYTIKA: char = '\u{308}';
const DIALYTIKA_TONOS: char = '\u{344}';
const YPOGEGRAMMENI: char = '\u{345}';
const CAPITAL_IOTA: char = '\u{399}';
const CAPITAL_UPSILON: char = '\u{3A5}';
const CAPITAL_ETA: char = '\u{397}';
const CAPITAL_ETA_TONOS: char = '\u{389}';

/// диакритика, которая пропадает в верхнем регистре
#[inline]
fn is_accent(c: char) -> bool
{
    matches!(
        c,
        '\u{300}' | '\u{301}' | '\u{302}' | '\u{303}' | '\u{311}' | '\u{313}' | '\u{314}' | '\u{342}' | '\u{343}'
    )
}

#[inline]
fn is_greek_letter(c: char) -> bool
{
    matches!(c as u32, 0x370 ..= 0x3FF | 0x1F00 ..= 0x1FFF) && properties::general_category(c).is_letter()
}

/// гласная в верхнем регистре
#[inline]
fn is_vowel(c: char) -> bool
{
    matches!(c, 'Α' | 'Ε' | 'Η' | 'Ι' | 'Ο' | 'Υ' | 'Ω')
}

/// первая гласная образует с второй (Ι или Υ) дифтонг
#[inline]
fn is_diphthong(first: char, second: char) -> bool
{
    match second {
        CAPITAL_IOTA => matches!(first, 'Α' | 'Ε' | 'Ο' | 'Υ'),
        CAPITAL_UPSILON => matches!(first, 'Α' | 'Ε' | 'Η' | 'Ο'),
        _ => false,
    }
}

/// предыдущая греческая буква
#[derive(Debug, Clone, Copy)]
struct Previous
{
    /// буква в верхнем регистре
    letter: char,
    /// у гласной было удалено ударение
    accented: bool,
}

/// отдельно стоящая буква (союз ή)
fn is_standalone(text: &str, offset: usize, end: usize) -> bool
{
    let before = text[.. offset].chars().next_back();
    let after = text[end ..]
        .chars()
        .find(|&c| properties::ccc(c).is_starter());

    !before.is_some_and(|c| properties::general_category(c).is_letter())
        && !after.is_some_and(|c| properties::general_category(c).is_letter())
}

/// верхний регистр греческого текста
pub fn uppercase_to<S: Sink + ?Sized>(text: &str, sink: &mut S)
{
    let mut previous: Option<Previous> = None;

    for (offset, c) in text.char_indices() {
        // диакритика, записанная отдельным кодпоинтом после греческой буквы
        if let Some(last) = previous.as_mut() {
            if properties::ccc(c).is_nonstarter() {
                match c {
                    _ if is_accent(c) => last.accented = true,
                    DIALYTIKA_TONOS => {
                        last.accented = true;
                        sink.write(DIALYTIKA);
                    }
                    YPOGEGRAMMENI => sink.write(CAPITAL_IOTA),
                    _ => sink.write(c),
                }

                continue;
            }
        }

        if !is_greek_letter(c) {
            previous = None;
            mapping::uppercase(c).for_each(|c| sink.write(c));
            continue;
        }

        let mut decomposition = properties::decomposition(c, false);
        let base = decomposition.next().unwrap_or(c);

        let mut accented = false;
        let mut dialytika = false;
        let mut ypogegrammeni = false;

        for mark in decomposition {
            match mark {
                DIALYTIKA => dialytika = true,
                YPOGEGRAMMENI => ypogegrammeni = true,
                _ if is_accent(mark) => accented = true,
                _ => (),
            }
        }

        let letter = mapping::simple_uppercase(base);

        if letter == CAPITAL_ETA && accented && !dialytika && is_standalone(text, offset, offset + c.len_utf8()) {
            sink.write(CAPITAL_ETA_TONOS);
            previous = None;
            continue;
        }

        if !accented && !dialytika {
            if let Some(last) = previous {
                dialytika = last.accented && is_diphthong(last.letter, letter);
            }
        }

        match dialytika {
            true => match properties::compose(letter, DIALYTIKA) {
                Some(composed) => sink.write(composed),
                None => {
                    sink.write(letter);
                    sink.write(DIALYTIKA);
                }
            },
            false => sink.write(letter),
        }

        if ypogegrammeni {
            sink.write(CAPITAL_IOTA);
        }

        previous = Some(Previous {
            letter,
            accented: accented && is_vowel(letter),
        });
    }
}
