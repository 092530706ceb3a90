use crate::codepoint::Codepoint;
use crate::data;
use crate::data::CompositionData;
use crate::table::TableData;

use super::hangul;

lazy_static! {
    /// таблица композиций, развёрнутая в матрицу
    static ref COMPOSITIONS: Compositions = Compositions::from_baked(data::compositions());
}

/// матрица композиций: строка - первый кодпоинт пары, столбец - второй
struct Compositions
{
    /// первый кодпоинт пары -> номер строки + 1
    first: TableData<'static, u16>,
    /// второй кодпоинт пары -> номер столбца + 1
    second: TableData<'static, u8>,
    /// количество столбцов
    columns: usize,
    /// результаты композиции, 0 - пара не комбинируется
    matrix: Vec<u32>,
}

impl Compositions
{
    fn from_baked(source: CompositionData<'static>) -> Self
    {
        let mut matrix = vec![0; source.rows * source.columns];

        for pair in source.pairs.chunks_exact(3) {
            matrix[pair[0] as usize * source.columns + pair[1] as usize] = pair[2];
        }

        Self {
            first: source.first,
            second: source.second,
            columns: source.columns,
            matrix,
        }
    }

    #[inline(always)]
    fn get(&self, first: u32, second: u32) -> Option<u32>
    {
        let row = self.first.get(first) as usize;

        if row == 0 {
            return None;
        }

        let column = self.second.get(second) as usize;

        if column == 0 {
            return None;
        }

        match self.matrix[(row - 1) * self.columns + column - 1] {
            0 => None,
            composite => Some(composite),
        }
    }
}

/// каноническая композиция пары (исключения из композиции не комбинируются)
#[inline]
pub fn compose(first: u32, second: u32) -> Option<u32>
{
    match hangul::compose(first, second) {
        Some(composite) => Some(composite),
        None => COMPOSITIONS.get(first, second),
    }
}

/// композиция буфера, прошедшего каноническую сортировку. скомбинированный стартер записывается
/// на место исходного, поглощённые кодпоинты помечаются CCC = 255 и пропускаются при выводе
#[inline]
pub fn compose_buffer(buffer: &mut [Codepoint])
{
    let mut starter: Option<usize> = None;
    let mut last_ccc = 0;

    for i in 0 .. buffer.len() {
        let ccc = buffer[i].ccc();

        // кодпоинт не заблокирован: между ним и стартером нет кодпоинтов с CCC >= его CCC
        if let Some(index) = starter {
            if last_ccc < ccc || last_ccc == 0 {
                if let Some(composite) = compose(buffer[index].code(), buffer[i].code()) {
                    buffer[index] = Codepoint::from_code(composite);
                    buffer[i].set_composed();

                    continue;
                }
            }
        }

        match ccc {
            0 => {
                starter = Some(i);
                last_ccc = 0;
            }
            _ => last_ccc = ccc,
        }
    }
}
