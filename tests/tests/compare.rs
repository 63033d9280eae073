use core::cmp::Ordering;

use collate_tests::{samples, LatinTable};
use unicode_collate::options::{AlternateHandling, Options, Strength};
use unicode_collate::Collator;

fn collator() -> Collator<LatinTable>
{
    Collator::new(LatinTable)
}

#[test]
fn simple_order()
{
    let mut collator = collator();

    assert_eq!(collator.compare_str("abc", "abd"), Ordering::Less);
    assert_eq!(collator.compare_str("abd", "abc"), Ordering::Greater);
    assert_eq!(collator.compare_str("a", "b"), Ordering::Less);
    assert_eq!(collator.compare_str("a", "ab"), Ordering::Less);
    assert_eq!(collator.compare_str("abc", "abc"), Ordering::Equal);
    assert_eq!(collator.compare(b"abc", b"abd"), Ordering::Less);
}

#[test]
fn accents_by_strength()
{
    let mut collator = collator();

    collator.set_strength(Strength::Primary);
    assert_eq!(collator.compare_str("café", "cafe"), Ordering::Equal);

    collator.set_strength(Strength::Tertiary);
    assert_eq!(collator.compare_str("café", "cafe"), Ordering::Greater);
}

#[test]
fn case_by_strength()
{
    let mut collator = collator();

    collator.set_strength(Strength::Secondary);
    assert_eq!(collator.compare_str("CAFE", "cafe"), Ordering::Equal);

    collator.set_strength(Strength::Tertiary);
    // строчные формы по умолчанию идут раньше заглавных
    assert_eq!(collator.compare_str("cafe", "CAFE"), Ordering::Less);
}

#[test]
fn french_secondary_direction()
{
    let mut collator = collator();

    // прямой вторичный уровень: акцент на третьей позиции решает
    assert_eq!(collator.compare_str("côte", "coté"), Ordering::Greater);

    // французский порядок: вторичный уровень с конца строки
    collator.set_backwards(true);
    assert_eq!(collator.compare_str("côte", "coté"), Ordering::Less);

    // пары без акцентов направление не меняет
    assert_eq!(collator.compare_str("cote", "côte"), Ordering::Less);
}

#[test]
fn variable_weighting()
{
    let mut collator = collator();

    collator.set_strength(Strength::Primary);

    // NonIgnorable: пробел сравнивается как обычный вес
    assert_eq!(collator.compare_str("de luge", "deluge"), Ordering::Less);

    // Shifted: пробел уходит на четвёртый уровень, но решает и при
    // первичной силе сравнения
    collator.set_alternate(AlternateHandling::Shifted);
    assert_eq!(collator.compare_str("de luge", "deluge"), Ordering::Less);
    assert_eq!(collator.compare_str("de luge", "de-luge"), Ordering::Less);

    // Blanked: переменные веса вычёркиваются совсем
    collator.set_alternate(AlternateHandling::Blanked);
    assert_eq!(collator.compare_str("de luge", "deluge"), Ordering::Equal);
    assert_eq!(collator.compare_str("de luge", "de-luge"), Ordering::Equal);
}

#[test]
fn identity_tiebreak()
{
    let mut collator = collator();

    // канонически эквивалентные формы равны на третичном уровне
    assert_eq!(collator.compare_str("e\u{0301}", "é"), Ordering::Equal);

    // на уровне Identity ничья разрешается побайтово: декомпозированная
    // форма (65 CC 81) предшествует NFC (C3 A9)
    collator.set_strength(Strength::Identity);
    assert_eq!(collator.compare_str("e\u{0301}", "é"), Ordering::Less);
    assert_eq!(collator.compare_str("é", "é"), Ordering::Equal);
}

#[test]
fn normalization_equivalence()
{
    let mut collator = collator();

    // не каноничный порядок знаков (CCC 230 перед CCC 202)
    // переупорядочивается на лету
    assert_eq!(
        collator.compare_str("e\u{0301}\u{0327}", "e\u{0327}\u{0301}"),
        Ordering::Equal
    );

    // прекомпозированная буква + знак снизу
    assert_eq!(
        collator.compare_str("é\u{0327}", "e\u{0327}\u{0301}"),
        Ordering::Equal
    );
}

#[test]
fn contraction_longest_match()
{
    let mut collator = collator();

    // "ch" - одиночный элемент между "c" и "d"
    assert_eq!(collator.compare_str("cz", "ch"), Ordering::Less);
    assert_eq!(collator.compare_str("ch", "d"), Ordering::Less);
    assert_eq!(collator.compare_str("c", "ch"), Ordering::Less);
    assert_eq!(collator.compare_str("ch", "ch"), Ordering::Equal);
}

#[test]
fn implicit_weights_order()
{
    let mut collator = collator();

    // вычисляемые веса: порядок кодпоинтов внутри блока Хань,
    // иероглифы после латиницы
    assert_eq!(collator.compare_str("一", "中"), Ordering::Less);
    assert_eq!(collator.compare_str("z", "中"), Ordering::Less);
}

#[test]
fn set_options_mapping()
{
    let mut collator = collator();

    collator.set_options(Options::IGNORE_CASE);
    assert_eq!(collator.compare_str("a", "A"), Ordering::Equal);

    collator.set_options(Options::LOOSE);
    assert_eq!(collator.compare_str("café", "CAFE"), Ordering::Equal);

    // очередной вызов замещает предыдущие флаги
    collator.set_options(Options::NONE);
    assert_eq!(collator.compare_str("a", "A"), Ordering::Less);

    collator.set_options(Options::UPPER_FIRST);
    assert_eq!(collator.compare_str("a", "A"), Ordering::Greater);

    collator.set_options(Options::LOWER_FIRST);
    assert_eq!(collator.compare_str("a", "A"), Ordering::Less);

    // FORCE упорядочивает эквивалентные, но не равные строки, не
    // поднимая уровень сравнения
    collator.set_options(Options::FORCE);
    assert_eq!(collator.compare_str("e\u{0301}", "é"), Ordering::Less);
    assert_eq!(collator.compare_str("é", "é"), Ordering::Equal);
}

#[test]
fn numeric_flag_is_accepted()
{
    let mut collator = collator();

    collator.set_numeric(true);

    // числовое сравнение - точка расширения: флаг не должен ломать
    // порядок по умолчанию
    assert_eq!(collator.compare_str("10", "2"), Ordering::Less);
    assert_eq!(collator.compare_str("2", "2"), Ordering::Equal);

    collator.set_options(Options::NUMERIC);
    assert_eq!(collator.compare_str("10", "2"), Ordering::Less);
}

#[test]
fn reflexivity_and_antisymmetry()
{
    let configs = [
        (Strength::Primary, AlternateHandling::NonIgnorable, false),
        (Strength::Secondary, AlternateHandling::NonIgnorable, true),
        (Strength::Tertiary, AlternateHandling::NonIgnorable, false),
        (Strength::Tertiary, AlternateHandling::Shifted, false),
        (Strength::Quaternary, AlternateHandling::ShiftTrimmed, false),
        (Strength::Quaternary, AlternateHandling::Blanked, false),
        (Strength::Identity, AlternateHandling::Shifted, true),
    ];

    for (strength, alternate, backwards) in configs {
        let mut collator = collator();

        collator.set_strength(strength);
        collator.set_alternate(alternate);
        collator.set_backwards(backwards);

        for x in samples() {
            assert_eq!(
                collator.compare_str(x, x),
                Ordering::Equal,
                "{:?} {:?}",
                x,
                strength
            );

            for y in samples() {
                let xy = collator.compare_str(x, y);
                let yx = collator.compare_str(y, x);

                assert_eq!(xy, yx.reverse(), "{:?} / {:?} {:?}", x, y, strength);
            }
        }
    }
}

#[test]
fn transitivity_at_identity()
{
    let mut collator = collator();

    collator.set_strength(Strength::Identity);

    let samples = samples();

    for x in samples.iter() {
        for y in samples.iter() {
            for z in samples.iter() {
                if collator.compare_str(x, y) != Ordering::Greater
                    && collator.compare_str(y, z) != Ordering::Greater
                {
                    assert_ne!(
                        collator.compare_str(x, z),
                        Ordering::Greater,
                        "{:?} <= {:?} <= {:?}",
                        x,
                        y,
                        z
                    );
                }
            }
        }
    }
}

#[test]
fn primary_decision_is_stable_across_strength()
{
    let mut primary = collator();
    let mut tertiary = collator();

    primary.set_strength(Strength::Primary);

    for x in samples() {
        for y in samples() {
            let decision = primary.compare_str(x, y);

            if decision != Ordering::Equal {
                // ненулевое первичное решение не меняется при
                // повышении уровня сравнения
                assert_eq!(tertiary.compare_str(x, y), decision, "{:?} / {:?}", x, y);
            }
        }
    }
}

#[test]
fn long_combining_sequences_are_defined()
{
    let mut collator = collator();

    let long: String = core::iter::once('a')
        .chain(core::iter::repeat('\u{0301}').take(40))
        .collect();

    assert_eq!(collator.compare_str(&long, &long), Ordering::Equal);
    assert_eq!(collator.compare_str("a", &long), Ordering::Less);
}

#[test]
fn sorting_helpers()
{
    let mut collator = collator();

    let mut items = vec!["deluge", "côte", "abc", "de luge", "cafe", "café", "cote"];

    collator.sort_str(&mut items);

    assert_eq!(
        items,
        vec!["abc", "cafe", "café", "cote", "côte", "de luge", "deluge"]
    );

    let mut raw: Vec<&[u8]> = vec![b"b", b"a", b"ch", b"c"];

    collator.sort(&mut raw);

    assert_eq!(raw, vec![b"a".as_slice(), b"b", b"c", b"ch"]);
}

#[test]
fn bytes_and_str_agree()
{
    let mut collator = collator();

    for x in samples() {
        for y in samples() {
            assert_eq!(
                collator.compare(x.as_bytes(), y.as_bytes()),
                collator.compare_str(x, y),
                "{:?} / {:?}",
                x,
                y
            );
        }
    }
}

#[test]
fn ill_formed_input_makes_progress()
{
    let mut collator = collator();

    // некорректный UTF-8 получает элементы подстановки
    assert_eq!(collator.compare(b"\xFF\xFE", b"\xFF\xFE"), Ordering::Equal);
    assert_eq!(collator.compare(b"a\xC3", b"a\xC3"), Ordering::Equal);
    assert_ne!(collator.compare(b"\xFF", b"a"), Ordering::Equal);
}
