use crate::collation_element::CollationElement;
use crate::options::AlternateHandling;

/// обработка переменных весов; выполняется один раз над окном элементов -
/// перед записью ключа, а при сравнении - для всех политик, кроме
/// NonIgnorable
///
/// повторное применение не меняет результат: сдвинутый элемент имеет
/// нулевой первичный вес и не считается переменным
pub fn process_weights(
    alternate: AlternateHandling,
    top: u32,
    elems: &mut [CollationElement],
)
{
    let mut ignore = false;

    match alternate {
        AlternateHandling::Shifted | AlternateHandling::ShiftTrimmed => {
            for ce in elems.iter_mut() {
                let primary = ce.primary();

                if primary <= top && primary != 0 {
                    // переменный вес уходит на четвёртый уровень
                    *ce = CollationElement::quaternary_only(primary);
                    ignore = true;
                } else if primary == 0 {
                    if ignore {
                        *ce = CollationElement::IGNORE;
                    }
                } else {
                    ignore = false;
                }
            }
        }
        AlternateHandling::Blanked => {
            for ce in elems.iter_mut() {
                let primary = ce.primary();

                if primary <= top && (ignore || primary != 0) {
                    *ce = CollationElement::IGNORE;
                    ignore = true;
                } else {
                    ignore = false;
                }
            }
        }
        AlternateHandling::NonIgnorable => {}
    }
}
