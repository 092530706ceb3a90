use core::iter::Fuse;

use crate::codepoint::Codepoint;
use crate::properties;

use super::{composition, hangul, ordering, Form, Normalizer};

/// максимальная длина декомпозиции (совместимая декомпозиция U+FDFA)
pub(crate) const MAX_DECOMPOSITION: usize = 18;
/// в потокобезопасном тексте не бывает больше 30 нестартеров подряд
pub(crate) const MAX_NONSTARTERS: usize = 30;
/// количество стартеров в буфере, после которого он сбрасывается до последней границы
const MAX_STARTERS: usize = 4;
/// ёмкость буфера: стартеры с декомпозициями, нестартеры, U+034F и декомпозиция очередного кодпоинта
pub(crate) const BUFFER_CAPACITY: usize =
    MAX_STARTERS * MAX_DECOMPOSITION + MAX_NONSTARTERS + 1 + MAX_DECOMPOSITION;
/// COMBINING GRAPHEME JOINER
pub(crate) const CGJ: u32 = 0x34F;

/// ленивая нормализация: кодпоинты читаются из источника по мере необходимости.
///
/// в буфере накапливаются декомпозиции прочитанных кодпоинтов. граница - стартер, который не
/// комбинируется с предыдущими кодпоинтами: всё, что перед ней, можно отсортировать,
/// скомбинировать и выдать. кодпоинты, не меняющиеся при нормализации и не влияющие на соседей,
/// проходят буфер без декомпозиции
pub struct Normalization<I: Iterator<Item = char>>
{
    normalizer: Normalizer,
    source: Fuse<I>,
    /// декомпозиции, ожидающие сортировки и композиции
    buffer: Vec<Codepoint>,
    /// единственный кодпоинт буфера прочитан быстрым путём и ещё не декомпозирован
    raw: bool,
    /// индекс последней границы в буфере, 0 - границы нет
    boundary: usize,
    /// количество стартеров в буфере
    starters: usize,
    /// количество нестартеров подряд в конце буфера
    nonstarters: usize,
    /// готовый результат
    output: Vec<Codepoint>,
    /// позиция выдачи в output
    position: usize,
}

impl<I: Iterator<Item = char>> Normalization<I>
{
    pub(crate) fn new(normalizer: Normalizer, source: I) -> Self
    {
        Self {
            normalizer,
            source: source.fuse(),
            buffer: Vec::with_capacity(BUFFER_CAPACITY),
            raw: false,
            boundary: 0,
            starters: 0,
            nonstarters: 0,
            output: Vec::with_capacity(BUFFER_CAPACITY),
            position: 0,
        }
    }

    /// читаем источник, пока не появится результат. false - источник и буфер исчерпаны
    fn fill(&mut self) -> bool
    {
        loop {
            let c = match self.source.next() {
                Some(c) => c,
                None => {
                    if !self.buffer.is_empty() {
                        self.flush(self.buffer.len());
                        self.raw = false;
                    }

                    return !self.output.is_empty();
                }
            };

            let code = c as u32;

            // быстрый путь: кодпоинт не меняется и не комбинируется с предыдущим.
            // предыдущий кодпоинт (если он был единственным в буфере) готов
            if self.buffer.len() <= 1 && self.normalizer.is_inert(code) {
                if let Some(previous) = self.buffer.pop() {
                    self.output.push(previous);
                }

                self.buffer.push(Codepoint::from_code(code));
                self.raw = true;
                self.starters = 1;
                self.nonstarters = 0;
                self.boundary = 0;

                match self.output.is_empty() {
                    true => continue,
                    false => return true,
                }
            }

            self.push_decomposed(code);

            if !self.output.is_empty() {
                return true;
            }
        }
    }

    /// медленный путь: декомпозиция кодпоинта в буфер
    fn push_decomposed(&mut self, code: u32)
    {
        if self.normalizer.stream_safe && self.buffer.len() + MAX_DECOMPOSITION + 1 > BUFFER_CAPACITY {
            self.flush_overflow();
        }

        // кодпоинт быстрого пути может оказаться частью пары, которая будет переупорядочена
        if self.raw {
            self.raw = false;

            if let Some(previous) = self.buffer.pop() {
                self.starters = 0;
                self.boundary = 0;
                self.decompose(previous.code());
            }
        }

        self.decompose(code);

        if self.starters > MAX_STARTERS && self.boundary > 0 {
            self.flush(self.boundary);
        }
    }

    /// полная декомпозиция кодпоинта для формы нормализатора
    fn decompose(&mut self, code: u32)
    {
        if hangul::is_syllable(code) {
            self.append_hangul(code);
            return;
        }

        let expansion = self.normalizer.decompositions.get(code);

        match expansion.is_empty() {
            true => {
                let ccc = self.normalizer.properties.get(code) as u8;
                self.append(Codepoint::from_code_and_ccc(code, ccc));
            }
            false => {
                for &baked in expansion {
                    self.append(Codepoint::from_baked(baked));
                }
            }
        }
    }

    /// каноническая декомпозиция стартера, возвращаемого в буфер после принудительного сброса
    fn decompose_canonical(&mut self, code: u32)
    {
        if hangul::is_syllable(code) {
            self.append_hangul(code);
            return;
        }

        let expansion = self.normalizer.canonical.get(code);

        match expansion.is_empty() {
            true => self.append(Codepoint::from_code(code)),
            false => {
                for &baked in expansion {
                    self.append(Codepoint::from_baked(baked));
                }
            }
        }
    }

    #[inline(always)]
    fn append_hangul(&mut self, code: u32)
    {
        let (l, v, t) = hangul::decompose(code);

        self.append(Codepoint::from_code(l));
        self.append(Codepoint::from_code(v));

        if let Some(t) = t {
            self.append(Codepoint::from_code(t));
        }
    }

    /// добавить элемент декомпозиции в буфер
    #[inline(always)]
    fn append(&mut self, codepoint: Codepoint)
    {
        if self.normalizer.form == Form::Unaccent && properties::is_nonspacing_mark(codepoint.code()) {
            return;
        }

        match codepoint.is_nonstarter() {
            true => {
                if self.normalizer.stream_safe && self.nonstarters == MAX_NONSTARTERS {
                    log::debug!(
                        "{} нестартеров подряд, вставляем U+034F (позиция в буфере {})",
                        MAX_NONSTARTERS,
                        self.buffer.len()
                    );

                    self.append_starter(Codepoint::from_code(CGJ));
                }

                self.nonstarters += 1;
                self.buffer.push(codepoint);
            }
            false => self.append_starter(codepoint),
        }

        debug_assert!(!self.normalizer.stream_safe || self.buffer.len() <= BUFFER_CAPACITY);
    }

    #[inline(always)]
    fn append_starter(&mut self, codepoint: Codepoint)
    {
        self.nonstarters = 0;

        if self.normalizer.properties.get(codepoint.code()) & self.normalizer.form.boundary_mask() == 0 {
            self.boundary = self.buffer.len();
        }

        self.starters += 1;
        self.buffer.push(codepoint);
    }

    /// сортировка, композиция и выдача начала буфера до указанной позиции
    fn flush(&mut self, limit: usize)
    {
        let segment = &mut self.buffer[.. limit];

        ordering::canonical_order(segment);

        if self.normalizer.form.is_composing() {
            composition::compose_buffer(segment);
        }

        self.output
            .extend(segment.iter().filter(|c| !c.is_composed()));

        self.buffer.drain(.. limit);
        self.boundary = 0;
        self.starters = self.buffer.iter().filter(|c| c.is_starter()).count();
    }

    /// буфер заполнен: сбрасываем его до последней границы, а если её нет - до последнего стартера.
    /// последний стартер и следующие за ним нестартеры остаются в буфере
    #[inline(never)]
    fn flush_overflow(&mut self)
    {
        log::warn!(
            "буфер нормализации заполнен ({} кодпоинтов), принудительный сброс",
            self.buffer.len()
        );

        if self.boundary > 0 {
            self.flush(self.boundary);
            return;
        }

        log::debug!("в заполненном буфере нормализации нет границы сегмента");

        ordering::canonical_order(&mut self.buffer);

        if self.normalizer.form.is_composing() {
            composition::compose_buffer(&mut self.buffer);
        }

        let split = match self.buffer.iter().rposition(|c| c.is_starter()) {
            Some(split) if split > 0 => split,
            _ => self.buffer.len(),
        };

        self.output
            .extend(self.buffer[.. split].iter().filter(|c| !c.is_composed()));

        let tail: Vec<Codepoint> = self.buffer[split ..]
            .iter()
            .filter(|c| !c.is_composed())
            .copied()
            .collect();

        self.buffer.clear();
        self.boundary = 0;
        self.starters = 0;
        self.nonstarters = 0;

        // стартер мог быть скомбинирован - возвращаем в буфер его каноническую декомпозицию
        if let Some((starter, nonstarters)) = tail.split_first() {
            self.decompose_canonical(starter.code());

            for &codepoint in nonstarters {
                self.append(codepoint);
            }
        }

        self.boundary = 0;
    }
}

impl<I: Iterator<Item = char>> Iterator for Normalization<I>
{
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char>
    {
        loop {
            if let Some(&codepoint) = self.output.get(self.position) {
                self.position += 1;
                return Some(codepoint.char());
            }

            self.output.clear();
            self.position = 0;

            if !self.fill() {
                return None;
            }
        }
    }

    // unaccent может удалить весь текст
    fn size_hint(&self) -> (usize, Option<usize>)
    {
        (self.output.len() - self.position, None)
    }
}

impl<I: Iterator<Item = char>> core::iter::FusedIterator for Normalization<I> {}
