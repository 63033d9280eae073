use smallvec::SmallVec;

use crate::collation_element::CollationElement;

/// буфер элементов сопоставления: 512 элементов inline, затем - куча
pub type ElemBuf = SmallVec<[CollationElement; 512]>;

/// таблица весов. неизменяема на протяжении жизни коллатора, может
/// использоваться несколькими коллаторами из разных потоков
///
/// контракт append_next / append_next_str:
///  - на непустом входе добавляется хотя бы один элемент и потребляется
///    хотя бы один байт (некорректный UTF-8 даёт элемент подстановки);
///  - выбор самого длинного сокращения - забота таблицы;
///  - блок элементов одного вызова либо начинается и заканчивается CCC=0,
///    либо начинается с CCC=0 и не содержит CCC=0 внутри
pub trait Weigher
{
    /// наибольший первичный вес, считающийся переменным
    fn top(&self) -> u32;

    /// добавить в буфер элементы для начала input, вернуть число потреблённых байт
    fn append_next(&self, buf: &mut ElemBuf, input: &[u8]) -> usize;

    /// то же самое по строке; по умолчанию - через байтовое представление
    fn append_next_str(&self, buf: &mut ElemBuf, input: &str) -> usize
    {
        self.append_next(buf, input.as_bytes())
    }
}

impl<W: Weigher + ?Sized> Weigher for &W
{
    fn top(&self) -> u32
    {
        (**self).top()
    }

    fn append_next(&self, buf: &mut ElemBuf, input: &[u8]) -> usize
    {
        (**self).append_next(buf, input)
    }

    fn append_next_str(&self, buf: &mut ElemBuf, input: &str) -> usize
    {
        (**self).append_next_str(buf, input)
    }
}
