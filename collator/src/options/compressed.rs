use super::{AlternateHandling, CollatorOptions, Strength};

/// числовое значение конфигурации - для сохранения, битовых операций
///
/// запись: биты 0 .. 3 - strength, 3 .. 5 - alternate, 5 - backwards,
/// 6 - case level, 7 - numeric, 8 - upper first, 9 - force,
/// 10 .. 18 - третичная маска
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct CollatorOptionsValue(u32);

impl From<CollatorOptionsValue> for u32
{
    fn from(value: CollatorOptionsValue) -> Self
    {
        value.0
    }
}

impl From<CollatorOptions> for CollatorOptionsValue
{
    fn from(options: CollatorOptions) -> Self
    {
        Self(
            options.strength as u32
                | ((options.alternate as u32) << 3)
                | ((options.backwards as u32) << 5)
                | ((options.case_level as u32) << 6)
                | ((options.numeric as u32) << 7)
                | ((options.upper_first as u32) << 8)
                | ((options.force as u32) << 9)
                | ((options.tertiary_mask as u32) << 10),
        )
    }
}

impl From<CollatorOptionsValue> for CollatorOptions
{
    fn from(value: CollatorOptionsValue) -> Self
    {
        let value = value.0;

        Self {
            strength: Strength::from_bits(value as u8),
            alternate: AlternateHandling::from_bits((value >> 3) as u8),
            backwards: value & (1 << 5) != 0,
            case_level: value & (1 << 6) != 0,
            numeric: value & (1 << 7) != 0,
            upper_first: value & (1 << 8) != 0,
            force: value & (1 << 9) != 0,
            tertiary_mask: (value >> 10) as u8,
        }
    }
}
