use core::ops::BitOr;

use crate::collation_element::CASE_MASK;

mod compressed;

pub use compressed::CollatorOptionsValue;

/// максимальный уровень весов, участвующий в сравнении
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Strength
{
    Primary = 0b_000,
    Secondary = 0b_001,
    Tertiary = 0b_010,
    Quaternary = 0b_011,
    Identity = 0b_111,
}

impl Strength
{
    pub(crate) fn from_bits(value: u8) -> Self
    {
        match value & 0b_111 {
            0b_000 => Strength::Primary,
            0b_001 => Strength::Secondary,
            0b_010 => Strength::Tertiary,
            0b_011 => Strength::Quaternary,
            _ => Strength::Identity,
        }
    }
}

/// обработка переменных весов (кодпоинт с первичным весом, не превышающим
/// variable top - пробелы, пунктуация и т.п.)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum AlternateHandling
{
    /// переменные веса не обрабатываются особо
    NonIgnorable = 0b_00,
    /// переменные веса и следующие за ними первично-игнорируемые
    /// элементы игнорируются на всех уровнях
    Blanked = 0b_01,
    /// переменные веса игнорируются на уровнях 1-3 и переносятся
    /// на четвёртый уровень
    Shifted = 0b_10,
    /// вариант Shifted, обрезающий хвостовые максимальные веса
    /// четвёртого уровня в ключе (эмуляция POSIX)
    ShiftTrimmed = 0b_11,
}

impl AlternateHandling
{
    /// переменные веса переносятся на четвёртый уровень?
    #[inline(always)]
    pub fn is_shifted(self) -> bool
    {
        matches!(self, AlternateHandling::Shifted | AlternateHandling::ShiftTrimmed)
    }

    pub(crate) fn from_bits(value: u8) -> Self
    {
        match value & 0b_11 {
            0b_00 => AlternateHandling::NonIgnorable,
            0b_01 => AlternateHandling::Blanked,
            0b_10 => AlternateHandling::Shifted,
            _ => AlternateHandling::ShiftTrimmed,
        }
    }
}

/// конфигурация коллатора
///
/// tertiary_mask / upper_first / force - низкоуровневое состояние,
/// выставляемое отображением флагов set_options
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CollatorOptions
{
    pub strength: Strength,
    pub alternate: AlternateHandling,
    /// обход вторичного уровня с конца (французские акценты)
    pub backwards: bool,
    /// отдельный уровень регистра перед третичным
    pub case_level: bool,
    /// сортировка последовательностей цифр по числовому значению.
    /// TODO: числовое сравнение; флаг принимается, но пока не влияет
    /// на порядок
    pub numeric: bool,
    /// маска, применяемая к третичным весам (свёртка ширины)
    pub tertiary_mask: u8,
    /// инверсия полярности бит регистра в третичном весе
    pub upper_first: bool,
    /// побайтовое разрешение ничьей без повышения уровня сравнения
    pub force: bool,
}

impl Default for CollatorOptions
{
    fn default() -> Self
    {
        Self {
            strength: Strength::Tertiary,
            alternate: AlternateHandling::NonIgnorable,
            backwards: false,
            case_level: false,
            numeric: false,
            tertiary_mask: 0xFF,
            upper_first: false,
            force: false,
        }
    }
}

impl CollatorOptions
{
    /// свёртка третичных весов для текущей конфигурации
    #[inline(always)]
    pub fn tertiary_fold(&self) -> TertiaryFold
    {
        TertiaryFold {
            mask: self.tertiary_mask,
            upper_first: self.upper_first,
        }
    }

    /// применить флаги set_options к конфигурации, выставленной сеттерами
    pub fn with_flags(mut self, flags: Options) -> Self
    {
        if flags.contains(Options::NUMERIC) {
            self.numeric = true;
        }

        if flags.contains(Options::IGNORE_DIACRITICS) {
            self.strength = Strength::Primary;
        }

        if flags.contains(Options::IGNORE_CASE) {
            self.strength = self.strength.min(Strength::Secondary);
        }

        if flags.contains(Options::IGNORE_WIDTH) {
            self.tertiary_mask &= CASE_MASK;
        }

        if flags.contains(Options::UPPER_FIRST) {
            self.upper_first = true;
        }

        if flags.contains(Options::LOWER_FIRST) {
            self.upper_first = false;
        }

        if flags.contains(Options::FORCE) {
            self.force = true;
        }

        self
    }
}

/// преобразование третичного веса: инверсия бит регистра (upper first)
/// и маскирование вариантов формы (ignore width)
#[derive(Debug, Copy, Clone)]
pub struct TertiaryFold
{
    mask: u8,
    upper_first: bool,
}

impl Default for TertiaryFold
{
    fn default() -> Self
    {
        Self {
            mask: 0xFF,
            upper_first: false,
        }
    }
}

impl TertiaryFold
{
    #[inline(always)]
    pub fn apply(self, tertiary: u8) -> u8
    {
        if tertiary == 0 {
            return 0;
        }

        let tertiary = match self.upper_first {
            true => tertiary ^ CASE_MASK,
            false => tertiary,
        };

        tertiary & self.mask
    }
}

/// высокоуровневые флаги set_options; набор флагов отображается на
/// низкоуровневую конфигурацию при каждой операции, очередной вызов
/// set_options замещает предыдущий
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Options(u16);

impl Options
{
    pub const NONE: Options = Options(0);
    /// сортировать числа по значению ("2" < "12")
    pub const NUMERIC: Options = Options(1 << 0);
    /// не учитывать регистр
    pub const IGNORE_CASE: Options = Options(1 << 1);
    /// не учитывать диакритику ("o" == "ö")
    pub const IGNORE_DIACRITICS: Options = Options(1 << 2);
    /// не учитывать полную/обычную ширину
    pub const IGNORE_WIDTH: Options = Options(1 << 3);
    /// верхний регистр перед нижним
    pub const UPPER_FIRST: Options = Options(1 << 4);
    /// нижний регистр перед верхним
    pub const LOWER_FIRST: Options = Options(1 << 5);
    /// упорядочить эквивалентные, но не равные строки
    pub const FORCE: Options = Options(1 << 6);
    /// нестрогое сравнение
    pub const LOOSE: Options =
        Options(Self::IGNORE_DIACRITICS.0 | Self::IGNORE_WIDTH.0 | Self::IGNORE_CASE.0);

    #[inline(always)]
    pub fn contains(self, other: Options) -> bool
    {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Options
{
    type Output = Options;

    fn bitor(self, rhs: Options) -> Options
    {
        Options(self.0 | rhs.0)
    }
}
