use crate::collation_element::CollationElement;

// вычисляемые веса для кодпоинтов, отсутствующих в таблице:
// пара элементов [.AAAA.0020.0002][.BBBB.0000.0000] (TR #10, раздел 10);
// таблица весов может использовать их как запасной вариант

const IMPLICIT_SECONDARY: u16 = 0x20;
const IMPLICIT_TERTIARY: u8 = 0x02;

/// рассчитать вычисляемые веса - пара элементов сопоставления
///
/// первичный вес второго элемента всегда больше 0x7FFF, т.е. в ключе
/// он записывается тремя байтами
#[inline(never)]
pub fn implicit_elements(code: u32) -> [CollationElement; 2]
{
    let (base, tail) = if is_han_core(code) {
        (0xFB40 + (code >> 15), code & 0x7FFF)
    } else if is_han_other(code) {
        (0xFB80 + (code >> 15), code & 0x7FFF)
    } else if is_tangut(code) {
        (0xFB00, code - 0x17000)
    } else if is_nushu(code) {
        (0xFB01, code - 0x1B170)
    } else if is_khitan(code) {
        (0xFB02, code - 0x18B00)
    } else {
        // любой другой кодпоинт
        (0xFBC0 + (code >> 15), code & 0x7FFF)
    };

    [
        CollationElement::new(base, IMPLICIT_SECONDARY, IMPLICIT_TERTIARY, 0),
        CollationElement::new(tail | 0x8000, 0, 0, 0),
    ]
}

/// основные иероглифы унификации Хань
///
/// TR10: Unified_Ideograph=True AND ((Block=CJK_Unified_Ideograph) OR
/// (Block=CJK_Compatibility_Ideographs))
pub fn is_han_core(code: u32) -> bool
{
    (0x4E00 ..= 0x9FFF).contains(&code)
}

/// иероглифы унификации Хань, прочие блоки
///
/// TR10: Unified_Ideograph=True AND NOT ((Block=CJK_Unified_Ideograph) OR
/// (Block=CJK_Compatibility_Ideographs))
pub fn is_han_other(code: u32) -> bool
{
    [
        (0x3400 ..= 0x4DBF),
        (0x20000 ..= 0x2A6DF),
        (0x2A700 ..= 0x2B739),
        (0x2B740 ..= 0x2B81D),
        (0x2B820 ..= 0x2CEA1),
        (0x2CEB0 ..= 0x2EBE0),
        (0x2EBF0 ..= 0x2EE5D),
        (0x30000 ..= 0x3134A),
        (0x31350 ..= 0x323AF),
    ]
    .iter()
    .any(|range| range.contains(&code))
}

/// тангутское письмо
///
/// TR10: Assigned code points in Block=Tangut OR Block=Tangut_Components
/// OR Block=Tangut_Supplement
pub fn is_tangut(code: u32) -> bool
{
    [
        (0x17000 ..= 0x187F7),
        (0x18800 ..= 0x18AFF),
        (0x18D00 ..= 0x18D08),
    ]
    .iter()
    .any(|range| range.contains(&code))
}

/// нюй-шу
///
/// TR10: Assigned code points in Block=Nushu
pub fn is_nushu(code: u32) -> bool
{
    (0x1B170 ..= 0x1B2FB).contains(&code)
}

/// киданьская письменность
///
/// TR10: Assigned code points in Block=Khitan_Small_Script
pub fn is_khitan(code: u32) -> bool
{
    (0x18B00 ..= 0x18CD5).contains(&code)
}
