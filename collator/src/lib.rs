use core::cmp::Ordering;

use iter::{Input, Iter};
use key::{key_from_elems, Buffer};
use options::{AlternateHandling, CollatorOptions, Options, Strength};
use weigher::{ElemBuf, Weigher};
use weights::process_weights;

pub mod collation_element;
pub mod implicit;
pub mod key;
pub mod options;
pub mod weigher;
pub mod weights;

mod iter;

/// коллатор: сравнение строк и построение ключей сопоставления по
/// заданной таблице весов
///
/// таблица неизменяема и может быть разделена между потоками (в том
/// числе по ссылке - `Collator<&W>`); сам коллатор владеет изменяемыми
/// буферами элементов и используется из одного потока
pub struct Collator<W: Weigher>
{
    options: CollatorOptions,
    /// флаги set_options; применяются к конфигурации при каждой операции
    flags: Options,
    /// наибольший переменный первичный вес, закэширован из таблицы
    variable_top: u32,
    weigher: W,
    /// по буферу на каждую сторону сравнения; переживают вызовы
    scratch: [ElemBuf; 2],
}

impl<W: Weigher> Collator<W>
{
    /// коллатор с конфигурацией по умолчанию: третичный уровень,
    /// переменные веса не обрабатываются особо
    pub fn new(weigher: W) -> Self
    {
        let variable_top = weigher.top();

        Self {
            options: CollatorOptions::default(),
            flags: Options::NONE,
            variable_top,
            weigher,
            scratch: [ElemBuf::new(), ElemBuf::new()],
        }
    }

    pub fn options(&self) -> &CollatorOptions
    {
        &self.options
    }

    pub fn set_strength(&mut self, strength: Strength)
    {
        self.options.strength = strength;
    }

    pub fn set_alternate(&mut self, alternate: AlternateHandling)
    {
        self.options.alternate = alternate;
    }

    pub fn set_backwards(&mut self, backwards: bool)
    {
        self.options.backwards = backwards;
    }

    pub fn set_case_level(&mut self, case_level: bool)
    {
        self.options.case_level = case_level;
    }

    pub fn set_numeric(&mut self, numeric: bool)
    {
        self.options.numeric = numeric;
    }

    /// высокоуровневые флаги; замещают флаги предыдущего вызова и
    /// отображаются на конфигурацию поверх значений, выставленных
    /// сеттерами
    pub fn set_options(&mut self, flags: Options)
    {
        self.flags = flags;
    }

    /// действующая конфигурация операции
    #[inline(always)]
    fn effective(&self) -> CollatorOptions
    {
        self.options.with_flags(self.flags)
    }

    /// сравнить две байтовые последовательности
    pub fn compare(&mut self, a: &[u8], b: &[u8]) -> Ordering
    {
        let options = self.effective();
        let top = self.variable_top;
        let [buf_a, buf_b] = &mut self.scratch;

        let mut ia = Iter::new(&self.weigher, Input::Bytes(a), buf_a);
        let mut ib = Iter::new(&self.weigher, Input::Bytes(b), buf_b);

        let result = compare_iters(&options, top, &mut ia, &mut ib);

        match result == Ordering::Equal && options.needs_tiebreak() {
            true => a.cmp(b),
            false => result,
        }
    }

    /// сравнить две строки
    pub fn compare_str(&mut self, a: &str, b: &str) -> Ordering
    {
        let options = self.effective();
        let top = self.variable_top;
        let [buf_a, buf_b] = &mut self.scratch;

        let mut ia = Iter::new(&self.weigher, Input::Str(a), buf_a);
        let mut ib = Iter::new(&self.weigher, Input::Str(b), buf_b);

        let result = compare_iters(&options, top, &mut ia, &mut ib);

        match result == Ordering::Equal && options.needs_tiebreak() {
            true => a.cmp(b),
            false => result,
        }
    }

    /// дописать в буфер ключ сопоставления байтовой последовательности;
    /// возвращённый срез действителен до следующего reset
    pub fn key<'b>(&mut self, buf: &'b mut Buffer, input: &[u8]) -> &'b [u8]
    {
        self.append_key(buf, Input::Bytes(input))
    }

    /// дописать в буфер ключ сопоставления строки
    pub fn key_str<'b>(&mut self, buf: &'b mut Buffer, input: &str) -> &'b [u8]
    {
        self.append_key(buf, Input::Str(input))
    }

    fn append_key<'b>(&mut self, buf: &'b mut Buffer, input: Input<'_>) -> &'b [u8]
    {
        let options = self.effective();
        let top = self.variable_top;
        let start = buf.key.len();

        let mut iter = Iter::new(&self.weigher, input, &mut self.scratch[0]);

        iter.load_all();

        process_weights(options.alternate, top, iter.elems_mut());
        key_from_elems(&options, &mut buf.key, iter.elems());

        &buf.key[start ..]
    }

    /// отсортировать байтовые последовательности
    pub fn sort(&mut self, items: &mut [&[u8]])
    {
        items.sort_by(|a, b| self.compare(a, b));
    }

    /// отсортировать строки
    pub fn sort_str(&mut self, items: &mut [&str])
    {
        items.sort_by(|a, b| self.compare_str(a, b));
    }
}

impl CollatorOptions
{
    /// равенство весов разрешается побайтовым сравнением исходных строк
    #[inline(always)]
    fn needs_tiebreak(&self) -> bool
    {
        self.strength == Strength::Identity || self.force
    }
}

/// пройти оба потока по уровням и вернуть вердикт
fn compare_iters<'i, W: Weigher>(
    options: &CollatorOptions,
    top: u32,
    a: &mut Iter<'i, W>,
    b: &mut Iter<'i, W>,
) -> Ordering
{
    if options.alternate != AlternateHandling::NonIgnorable {
        // переменные веса обрабатываются над целиком материализованным
        // окном - так сравнение согласуется с ключом и для Blanked
        a.load_all();
        b.load_all();

        process_weights(options.alternate, top, a.elems_mut());
        process_weights(options.alternate, top, b.elems_mut());
    }

    let result = compare_level(a, b, |i| i.next_primary());

    if result != Ordering::Equal {
        return result;
    }

    if Strength::Secondary <= options.strength {
        let result = match options.backwards {
            false => compare_level(a, b, |i| i.next_secondary()),
            true => compare_level(a, b, |i| i.prev_secondary()),
        };

        if result != Ordering::Equal {
            return result;
        }
    }

    if Strength::Tertiary <= options.strength || options.case_level {
        let fold = options.tertiary_fold();
        let result = compare_level(a, b, |i| i.next_tertiary(fold));

        if result != Ordering::Equal {
            return result;
        }
    }

    // четвёртый уровень активен и на низких уровнях сравнения, если
    // переменные веса сдвинуты - иначе они бы не участвовали вовсе
    if Strength::Quaternary <= options.strength || options.alternate.is_shifted() {
        let result = compare_level(a, b, |i| i.next_quaternary());

        if result != Ordering::Equal {
            return result;
        }
    }

    Ordering::Equal
}

/// синхронный проход обоих потоков на одном уровне: первое расхождение
/// решает, одновременное исчерпание - равенство на уровне
fn compare_level<'i, W, F>(a: &mut Iter<'i, W>, b: &mut Iter<'i, W>, mut level: F) -> Ordering
where
    W: Weigher,
    F: FnMut(&mut Iter<'i, W>) -> u32,
{
    a.pce = 0;
    b.pce = 0;

    loop {
        let va = level(a);
        let vb = level(b);

        if va != vb {
            return va.cmp(&vb);
        }

        if va == 0 {
            return Ordering::Equal;
        }
    }
}
