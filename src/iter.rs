use core::iter::FusedIterator;
use core::slice;
use std::collections::vec_deque;

use crate::{ChunkCapacity, ChunkyList, Usize};

/// An iterator over the elements of a ChunkyList.
///
/// Holds the position in the block directory and the offset inside the
/// current block. The list stays borrowed while the iterator is alive, so it
/// cannot be mutated halfway through a pass.
///
/// This struct is created by ChunkyList::iter().
pub struct Iter<'a, T, const N: usize>
where
    Usize<N>: ChunkCapacity,
{
    chunks: vec_deque::Iter<'a, crate::block::Block<T, N>>,
    current: slice::Iter<'a, T>,
    len: usize,
}

impl<'a, T, const N: usize> Iter<'a, T, N>
where
    Usize<N>: ChunkCapacity,
{
    pub(crate) fn from_list(list: &'a ChunkyList<T, N>) -> Self {
        Self {
            chunks: list.chunks.iter(),
            current: Default::default(),
            len: list.chunks.iter().map(|chunk| chunk.len()).sum(),
        }
    }
}

impl<T, const N: usize> Clone for Iter<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn clone(&self) -> Self {
        Self {
            chunks: self.chunks.clone(),
            current: self.current.clone(),
            len: self.len,
        }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                self.len -= 1;
                return Some(value);
            }

            self.current = self.chunks.next()?.as_slice().iter();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn count(self) -> usize {
        self.len
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> where Usize<N>: ChunkCapacity {}

impl<T, const N: usize> core::fmt::Debug for Iter<'_, T, N>
where
    T: core::fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.current.as_slice())
            .field(&self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ChunkyList, List};

    #[test]
    fn iter_on_empty_list_yields_nothing() {
        let sut: ChunkyList<i64, 4> = ChunkyList::new();
        let mut iter = sut.iter();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_moves_to_next_block_after_last_element() {
        let mut sut: ChunkyList<i64, 3> = ChunkyList::from([1, 2, 3, 4, 5, 6, 7]);
        sut.remove(1).unwrap();
        assert_eq!(format!("{sut:?}"), "[[1, 3], [4, 5, 6], [7]]");

        let iter = sut.iter();
        assert_eq!(iter.size_hint(), (6, Some(6)));
        assert_eq!(iter.clone().count(), 6);
        assert_eq!(iter.copied().collect::<Vec<_>>(), [1, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn iter_is_fused() {
        let sut: ChunkyList<i64, 1> = ChunkyList::from([1]);
        let mut iter = sut.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(format!("{iter:?}"), "Iter([], 0)");
    }
}
