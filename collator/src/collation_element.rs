use core::fmt::Debug;

/// максимальный первичный вес - 23 бита
pub const MAX_PRIMARY: u32 = 0x7F_FFFF;

/// максимальное значение четвёртого уровня; больше любого первичного веса,
/// при записи ключа кодируется одним байтом 0xFF
pub const MAX_QUATERNARY: u32 = 0x00FF_FFFF;

/// старшие 2 бита третичного веса - регистр (конвенция таблицы весов)
pub const CASE_MASK: u8 = 0xC0;

const PRIMARY_MASK: u64 = 0x7F_FFFF;
const SECONDARY_SHIFT: u32 = 23;
const SECONDARY_MASK: u64 = 0xFFFF;
const TERTIARY_SHIFT: u32 = 39;
const TERTIARY_MASK: u64 = 0xFF;
const CCC_SHIFT: u32 = 47;
const CCC_MASK: u64 = 0xFF;
const QUATERNARY_FLAG: u64 = 1 << 55;

/// элемент сопоставления - веса L1, L2, L3 и CCC исходного кодпоинта, упакованные в u64
///
/// запись весов:
///   биты 0 .. 23  - первичный вес (до 23 бит)
///   биты 23 .. 39 - вторичный вес
///   биты 39 .. 47 - третичный вес
///   биты 47 .. 55 - класс канонического комбинирования
///   бит 55        - флаг "переменный вес, сдвинутый на четвёртый уровень"
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CollationElement(u64);

impl CollationElement
{
    /// элемент, игнорируемый на всех уровнях
    pub const IGNORE: Self = Self(0);

    /// собрать элемент из весов и CCC
    #[inline(always)]
    pub fn new(primary: u32, secondary: u16, tertiary: u8, ccc: u8) -> Self
    {
        debug_assert!(primary <= MAX_PRIMARY);

        Self(
            primary as u64
                | ((secondary as u64) << SECONDARY_SHIFT)
                | ((tertiary as u64) << TERTIARY_SHIFT)
                | ((ccc as u64) << CCC_SHIFT),
        )
    }

    /// элемент, видимый только на четвёртом уровне - бывший переменный вес
    /// (первичный вес становится весом четвёртого уровня)
    #[inline(always)]
    pub fn quaternary_only(primary: u32) -> Self
    {
        debug_assert!(primary <= MAX_PRIMARY);

        Self(primary as u64 | QUATERNARY_FLAG)
    }

    /// первичный вес
    #[inline(always)]
    pub fn primary(&self) -> u32
    {
        match self.is_quaternary_only() {
            true => 0,
            false => (self.0 & PRIMARY_MASK) as u32,
        }
    }

    /// вторичный вес
    #[inline(always)]
    pub fn secondary(&self) -> u32
    {
        match self.is_quaternary_only() {
            true => 0,
            false => ((self.0 >> SECONDARY_SHIFT) & SECONDARY_MASK) as u32,
        }
    }

    /// третичный вес
    #[inline(always)]
    pub fn tertiary(&self) -> u8
    {
        match self.is_quaternary_only() {
            true => 0,
            false => ((self.0 >> TERTIARY_SHIFT) & TERTIARY_MASK) as u8,
        }
    }

    /// вес четвёртого уровня:
    ///  - сохранённый первичный вес, если элемент - сдвинутый переменный,
    ///  - 0, если элемент игнорируется на всех уровнях,
    ///  - MAX_QUATERNARY в остальных случаях
    #[inline(always)]
    pub fn quaternary(&self) -> u32
    {
        if self.is_quaternary_only() {
            return (self.0 & PRIMARY_MASK) as u32;
        }

        match self.0 == 0 {
            true => 0,
            false => MAX_QUATERNARY,
        }
    }

    /// CCC кодпоинта, породившего элемент
    #[inline(always)]
    pub fn ccc(&self) -> u8
    {
        ((self.0 >> CCC_SHIFT) & CCC_MASK) as u8
    }

    /// стартер?
    #[inline(always)]
    pub fn is_starter(&self) -> bool
    {
        self.ccc() == 0
    }

    /// элемент сдвинут на четвёртый уровень?
    #[inline(always)]
    pub fn is_quaternary_only(&self) -> bool
    {
        self.0 & QUATERNARY_FLAG != 0
    }

    /// в виде, близком к тому, в котором веса представлены в allkeys
    pub fn format(&self) -> String
    {
        match self.is_quaternary_only() {
            true => format!("[*{:06X}]", self.quaternary()),
            false => format!(
                "[.{:06X}.{:04X}.{:02X}]",
                self.primary(),
                self.secondary(),
                self.tertiary()
            ),
        }
    }
}

impl Debug for CollationElement
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.write_str(self.format().as_str())
    }
}
