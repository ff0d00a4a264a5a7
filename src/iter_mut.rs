use core::iter::FusedIterator;
use core::slice;
use std::collections::vec_deque;

use crate::block::Block;
use crate::{ChunkCapacity, ChunkyList, Usize};

/// A mutable iterator over the elements of a ChunkyList.
///
/// This struct is created by ChunkyList::iter_mut().
pub struct IterMut<'a, T, const N: usize>
where
    Usize<N>: ChunkCapacity,
{
    chunks: vec_deque::IterMut<'a, Block<T, N>>,
    current: slice::IterMut<'a, T>,
    len: usize,
}

impl<'a, T, const N: usize> IterMut<'a, T, N>
where
    Usize<N>: ChunkCapacity,
{
    pub(crate) fn from_list(list: &'a mut ChunkyList<T, N>) -> Self {
        let len = list.chunks.iter().map(Block::len).sum();
        Self {
            chunks: list.chunks.iter_mut(),
            current: Default::default(),
            len,
        }
    }
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                self.len -= 1;
                return Some(value);
            }

            self.current = self.chunks.next()?.as_mut_slice().iter_mut();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T, const N: usize> ExactSizeIterator for IterMut<'_, T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, const N: usize> FusedIterator for IterMut<'_, T, N> where Usize<N>: ChunkCapacity {}
