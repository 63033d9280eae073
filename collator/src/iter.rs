use crate::collation_element::CollationElement;
use crate::options::TertiaryFold;
use crate::weigher::{ElemBuf, Weigher};

/// максимум накопленных после стартера элементов, в пределах которого
/// выполняется каноническое переупорядочивание; следующий элемент сверх
/// окна считается новым стартером
pub const MAX_COMBINING: usize = 30;

/// остаток входа - байты или строка
pub(crate) enum Input<'a>
{
    Bytes(&'a [u8]),
    Str(&'a str),
}

impl<'a> Input<'a>
{
    #[inline(always)]
    fn is_empty(&self) -> bool
    {
        match self {
            Input::Bytes(b) => b.is_empty(),
            Input::Str(s) => s.is_empty(),
        }
    }

    /// отбросить n потреблённых байт
    #[inline(always)]
    fn advance(&mut self, n: usize)
    {
        match self {
            Input::Bytes(b) => *b = &b[n ..],
            Input::Str(s) => *s = &s[n ..],
        }
    }
}

/// поток элементов сопоставления: таблица весов + остаток входа + буфер
/// элементов и курсоры по нему
///
/// буфер принадлежит коллатору и переживает вызов; курсоры обнуляются
/// при создании, т.е. на входе всегда |buf| = nce = pce = 0
pub(crate) struct Iter<'a, W>
{
    weigher: &'a W,
    input: Input<'a>,
    buf: &'a mut ElemBuf,

    /// курсор потребления весов на текущем уровне
    pub pce: usize,
    /// число элементов, выпущенных как канонически упорядоченные
    nce: usize,

    prev_ccc: u8,
    /// индекс последнего стартера в буфере
    p_starter: usize,
}

impl<'a, W: Weigher> Iter<'a, W>
{
    pub fn new(weigher: &'a W, input: Input<'a>, buf: &'a mut ElemBuf) -> Self
    {
        buf.clear();

        Self {
            weigher,
            input,
            buf,
            pce: 0,
            nce: 0,
            prev_ccc: 0,
            p_starter: 0,
        }
    }

    #[inline(always)]
    fn done(&self) -> bool
    {
        self.input.is_empty()
    }

    /// один вызов таблицы весов; возвращает число потреблённых байт
    #[inline(always)]
    fn append_next(&mut self) -> usize
    {
        match &self.input {
            Input::Bytes(b) => self.weigher.append_next(self.buf, b),
            Input::Str(s) => self.weigher.append_next_str(self.buf, s),
        }
    }

    /// дополнить буфер так, чтобы в нём появился хотя бы один новый
    /// канонически упорядоченный элемент; false - вход исчерпан
    ///
    /// CCC элементов используются и для выявления ненормализованного
    /// входа - в этом случае буфер переупорядочивается на месте
    pub fn next(&mut self) -> bool
    {
        while !self.done() {
            let p0 = self.buf.len();
            let consumed = self.append_next();

            debug_assert!(consumed > 0 && self.buf.len() > p0);

            self.input.advance(consumed);

            let last = self.buf.len() - 1;
            let ccc = self.buf[last].ccc();

            if ccc == 0 {
                // блок закончился стартером - выпускаем всё
                self.nce = self.buf.len();
                self.p_starter = last;
                self.prev_ccc = 0;

                return true;
            } else if p0 < last && self.buf[p0].ccc() == 0 {
                // блок начался со стартеров - выпускаем их, хвост из
                // нестартеров остаётся до следующего вызова
                let mut p = p0 + 1;

                while p < last && self.buf[p].ccc() == 0 {
                    p += 1;
                }

                self.nce = p;
                self.p_starter = p - 1;
                self.prev_ccc = ccc;

                return true;
            } else if ccc < self.prev_ccc {
                // вход не был канонически упорядочен
                self.do_norm(p0, ccc);
            } else {
                self.prev_ccc = ccc;
            }
        }

        // вход исчерпан - выпускаем остаток
        if self.buf.len() != self.nce {
            self.nce = self.buf.len();

            return true;
        }

        false
    }

    /// переставить блок, начавшийся в p0, на его каноническое место
    ///
    /// блоки либо начинаются и заканчиваются одинаковым CCC, либо
    /// начинаются с CCC = 0 (контракт таблицы весов), поэтому блоку
    /// достаточно одной точки вставки
    fn do_norm(&mut self, p0: usize, ccc: u8)
    {
        if p0 - self.p_starter > MAX_COMBINING {
            // окно переупорядочивания исчерпано - считаем последний
            // элемент новым стартером
            self.prev_ccc = self.buf[self.buf.len() - 1].ccc();
            self.p_starter = self.buf.len() - 1;

            return;
        }

        let n = self.buf.len();
        let mut p = p0 - 1;

        while p > self.p_starter && ccc < self.buf[p - 1].ccc() {
            p -= 1;
        }

        self.buf[p .. n].rotate_left(p0 - p);
    }

    /// выкачать весь вход в буфер
    pub fn load_all(&mut self)
    {
        while self.next() {}
    }

    /// выпущенное окно элементов
    #[inline(always)]
    pub fn elems(&self) -> &[CollationElement]
    {
        &self.buf[.. self.nce]
    }

    /// всё окно, для обработки переменных весов на месте
    #[inline(always)]
    pub fn elems_mut(&mut self) -> &mut [CollationElement]
    {
        let nce = self.nce;

        &mut self.buf[.. nce]
    }

    /// следующий ненулевой первичный вес; единственный обходчик,
    /// дополняющий буфер по мере необходимости
    pub fn next_primary(&mut self) -> u32
    {
        loop {
            while self.pce < self.nce {
                let v = self.buf[self.pce].primary();
                self.pce += 1;

                if v != 0 {
                    return v;
                }
            }

            if !self.next() {
                return 0;
            }
        }
    }

    /// следующий ненулевой вторичный вес в пределах выпущенного окна
    pub fn next_secondary(&mut self) -> u32
    {
        while self.pce < self.nce {
            let v = self.buf[self.pce].secondary();
            self.pce += 1;

            if v != 0 {
                return v;
            }
        }

        0
    }

    /// следующий ненулевой вторичный вес при обходе окна с конца
    /// (французский вторичный уровень)
    pub fn prev_secondary(&mut self) -> u32
    {
        while self.pce < self.nce {
            let v = self.buf[self.nce - self.pce - 1].secondary();
            self.pce += 1;

            if v != 0 {
                return v;
            }
        }

        0
    }

    /// следующий ненулевой третичный вес с учётом свёртки регистра/ширины
    pub fn next_tertiary(&mut self, fold: TertiaryFold) -> u32
    {
        while self.pce < self.nce {
            let v = fold.apply(self.buf[self.pce].tertiary());
            self.pce += 1;

            if v != 0 {
                return v as u32;
            }
        }

        0
    }

    /// следующий ненулевой вес четвёртого уровня
    pub fn next_quaternary(&mut self) -> u32
    {
        while self.pce < self.nce {
            let v = self.buf[self.pce].quaternary();
            self.pce += 1;

            if v != 0 {
                return v;
            }
        }

        0
    }
}
