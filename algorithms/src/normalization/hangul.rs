// слоги хангыль декомпозируются и комбинируются алгоритмически, в таблицы они не попадают.
// в блоке чамо (U+1100..U+11FF) могут быть скомбинированы кодпоинты:
//  - U+1100..=U+1112 (L, ведущие согласные)
//  - U+1161..=U+1175 (V, гласные)
//  - U+11A8..=U+11C2 (T, завершающие согласные)

/// начало блока ведущих согласных чамо
const HANGUL_L_BASE: u32 = 0x1100;
/// количество ведущих согласных
const HANGUL_L_COUNT: u32 = 19;
/// начало блока гласных чамо
const HANGUL_V_BASE: u32 = 0x1161;
/// количество гласных
const HANGUL_V_COUNT: u32 = 21;
/// начало блока завершающих согласных
const HANGUL_T_BASE: u32 = 0x11A8;
/// количество завершающих согласных
const HANGUL_T_COUNT: u32 = 27;
/// количество кодпоинтов на блок LV
const HANGUL_T_BLOCK_SIZE: u32 = HANGUL_T_COUNT + 1;
/// начало блока слогов хангыль
const HANGUL_S_BASE: u32 = 0xAC00;
/// количество слогов хангыль в Unicode
const HANGUL_S_COUNT: u32 = 11172;
/// количество гласных * количество завершающих согласных
const HANGUL_N_COUNT: u32 = 588;

/// слог хангыль
#[inline(always)]
pub fn is_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// декомпозиция слога: ведущая согласная, гласная и, если есть, завершающая согласная
#[inline(always)]
pub fn decompose(code: u32) -> (u32, u32, Option<u32>)
{
    let lvt = code - HANGUL_S_BASE;

    let l = HANGUL_L_BASE + lvt / HANGUL_N_COUNT;
    let v = HANGUL_V_BASE + (lvt % HANGUL_N_COUNT) / HANGUL_T_BLOCK_SIZE;

    match lvt % HANGUL_T_BLOCK_SIZE {
        0 => (l, v, None),
        t => (l, v, Some(HANGUL_T_BASE + t - 1)),
    }
}

/// композиция L + V -> LV или LV + T -> LVT
#[inline(always)]
pub fn compose(first: u32, second: u32) -> Option<u32>
{
    let l = first.wrapping_sub(HANGUL_L_BASE);

    if l < HANGUL_L_COUNT {
        let v = second.wrapping_sub(HANGUL_V_BASE);

        return match v < HANGUL_V_COUNT {
            true => Some(HANGUL_S_BASE + l * HANGUL_N_COUNT + v * HANGUL_T_BLOCK_SIZE),
            false => None,
        };
    }

    let lv = first.wrapping_sub(HANGUL_S_BASE);

    if lv < HANGUL_S_COUNT && lv % HANGUL_T_BLOCK_SIZE == 0 {
        let t = second.wrapping_sub(HANGUL_T_BASE);

        if t < HANGUL_T_COUNT {
            return Some(first + t + 1);
        }
    }

    None
}
