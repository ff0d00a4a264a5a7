use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::List;

/// An owning iterator over the elements of any list.
///
/// Drains the list from the front, so blocks and nodes are released as soon
/// as their last element has been yielded.
///
/// This struct is created by the `into_iter()` method of every list.
pub struct IntoIter<T, L> {
    list: L,
    marker: PhantomData<T>,
}

impl<T, L> IntoIter<T, L>
where
    L: List<T>,
{
    pub(crate) fn from_list(list: L) -> Self {
        Self {
            list,
            marker: PhantomData,
        }
    }
}

impl<T, L> Iterator for IntoIter<T, L>
where
    L: List<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T, L> ExactSizeIterator for IntoIter<T, L> where L: List<T> {}

impl<T, L> FusedIterator for IntoIter<T, L> where L: List<T> {}

impl<T, L> Clone for IntoIter<T, L>
where
    L: Clone,
{
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            marker: PhantomData,
        }
    }
}

impl<T, L> core::fmt::Debug for IntoIter<T, L>
where
    L: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}
