use crate::properties::{self, GeneralCategory};
use crate::segmentation::word_bound_indices;
use crate::utf::Sink;

use super::{lower_char, title_char, Locale};

/// с этого кодпоинта начинается слово для заглавного регистра: буквы, цифры, символы
#[inline]
fn is_title_start(c: char) -> bool
{
    let category = properties::general_category(c);

    properties::is_cased(c)
        || category.is_letter()
        || category.is_numeric()
        || category.is_symbol()
        || category == GeneralCategory::PrivateUse
}

/// заглавный регистр: первый значимый кодпоинт каждого слова - в заглавный, остальные - в нижний
pub fn titlecase_to<S: Sink + ?Sized>(text: &str, locale: Locale, sink: &mut S)
{
    for (start, segment) in word_bound_indices(text) {
        let mut titled = false;
        let mut chars = segment.char_indices().peekable();

        while let Some((relative, c)) = chars.next() {
            let offset = start + relative;
            let end = offset + c.len_utf8();

            if titled || !is_title_start(c) {
                lower_char(text, offset, end, c, locale).for_each(|c| sink.write(c));
                continue;
            }

            titled = true;

            // нидерландский: диграф IJ в начале слова пишется заглавными
            if locale == Locale::Nl && matches!(c, 'i' | 'I') {
                if let Some(&(_, 'j' | 'J')) = chars.peek() {
                    chars.next();
                    sink.write('I');
                    sink.write('J');
                    continue;
                }
            }

            title_char(text, offset, c, locale).for_each(|c| sink.write(c));
        }
    }
}
