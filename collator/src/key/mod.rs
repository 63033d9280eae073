use smallvec::SmallVec;

use crate::collation_element::{CollationElement, MAX_QUATERNARY};
use crate::options::{AlternateHandling, CollatorOptions, Strength};

pub(crate) type KeyBuf = SmallVec<[u8; 4096]>;

/// буфер ключей сопоставления; переиспользуется между вызовами key -
/// reset откатывает курсор записи, не освобождая память
#[derive(Default)]
pub struct Buffer
{
    pub(crate) key: KeyBuf,
}

impl Buffer
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// сбросить буфер; срезы, возвращённые предыдущими вызовами key,
    /// становятся недействительными
    pub fn reset(&mut self)
    {
        self.key.clear();
    }
}

/// записать первичный вес: два байта до 0x7FFF включительно, иначе три
/// со взведённым старшим битом первого байта (веса ограничены 23 битами)
#[inline(always)]
fn append_primary(key: &mut KeyBuf, p: u32)
{
    if p <= 0x7FFF {
        key.push((p >> 8) as u8);
        key.push(p as u8);
    } else {
        key.push((p >> 16) as u8 | 0x80);
        key.push((p >> 8) as u8);
        key.push(p as u8);
    }
}

/// записать ключ по обработанному окну элементов
///
/// секции первичных, вторичных и третичных весов разделяются парой
/// нулевых байт; секцию четвёртого уровня предваряет один нулевой байт,
/// а MAX_QUATERNARY кодируется единственным байтом 0xFF - первый байт
/// записи первичного веса всегда меньше 0xFF, так что побайтовое
/// сравнение остаётся корректным
pub(crate) fn key_from_elems(
    options: &CollatorOptions,
    key: &mut KeyBuf,
    ws: &[CollationElement],
)
{
    for v in ws {
        let w = v.primary();

        if w > 0 {
            append_primary(key, w);
        }
    }

    if Strength::Secondary <= options.strength {
        key.push(0);
        key.push(0);

        match options.backwards {
            false => {
                for v in ws {
                    let w = v.secondary();

                    if w > 0 {
                        key.push((w >> 8) as u8);
                        key.push(w as u8);
                    }
                }
            }
            true => {
                for v in ws.iter().rev() {
                    let w = v.secondary();

                    if w > 0 {
                        key.push((w >> 8) as u8);
                        key.push(w as u8);
                    }
                }
            }
        }
    } else if options.case_level {
        // пустая вторичная секция, чтобы уровень регистра занял своё место
        key.push(0);
        key.push(0);
    }

    if Strength::Tertiary <= options.strength || options.case_level {
        key.push(0);
        key.push(0);

        let fold = options.tertiary_fold();

        for v in ws {
            let w = fold.apply(v.tertiary());

            if w > 0 {
                key.push(w);
            }
        }
    }

    // секция четвёртого уровня существует только при сдвинутых
    // переменных весах - на любом уровне сравнения
    if options.alternate.is_shifted() {
        match options.alternate {
            AlternateHandling::ShiftTrimmed => {
                let mut last_non_max = key.len();

                key.push(0);

                for v in ws {
                    let w = v.quaternary();

                    if w == MAX_QUATERNARY {
                        key.push(0xFF);
                    } else if w > 0 {
                        append_primary(key, w);
                        last_non_max = key.len();
                    }
                }

                key.truncate(last_non_max);
            }
            _ => {
                key.push(0);

                for v in ws {
                    let w = v.quaternary();

                    if w == MAX_QUATERNARY {
                        key.push(0xFF);
                    } else if w > 0 {
                        append_primary(key, w);
                    }
                }
            }
        }
    }
}
