use crate::codepoint::Codepoint;

/// канонический порядок: нестартеры между стартерами сортируются по CCC с сохранением
/// исходного порядка при равных CCC. стартеры не перемещаются
#[inline]
pub fn canonical_order(buffer: &mut [Codepoint])
{
    let mut start = 0;

    while start < buffer.len() {
        if buffer[start].is_starter() {
            start += 1;
            continue;
        }

        let end = match buffer[start ..].iter().position(|c| c.is_starter()) {
            Some(length) => start + length,
            None => buffer.len(),
        };

        let run = &mut buffer[start .. end];

        // обычно последовательность короткая и уже отсортирована
        if !run.windows(2).all(|pair| pair[0].ccc() <= pair[1].ccc()) {
            run.sort_by_key(|c| c.ccc());
        }

        start = end;
    }
}
