use core::mem::{self, MaybeUninit};
use core::{fmt, ptr, slice};

use crate::ListError;

/// An array-backed sequence holding at most `N` elements.
///
/// Every operation is `O(N)` at worst. Blocks never grow: asking a full block
/// to take one more element panics, the owning list splits blocks instead.
pub struct Block<T, const N: usize> {
    len: usize,
    data: [MaybeUninit<T>; N],
}

impl<T, const N: usize> Block<T, N> {
    pub const fn new() -> Self {
        Self {
            len: 0,
            data: [const { MaybeUninit::uninit() }; N],
        }
    }

    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.shift_in(0, value);
    }

    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.shift_in(self.len(), value);
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len() {
            return Err(ListError::BadIndex(index));
        }

        self.shift_in(index, value);
        Ok(())
    }

    fn shift_in(&mut self, index: usize, value: T) {
        assert!(index <= self.len());

        if self.is_full() {
            panic!("Block is full: cannot insert more elements");
        }

        unsafe {
            let data_ptr = self.data.as_mut_ptr();

            // Shift elements starting from the index to the right
            ptr::copy(
                data_ptr.add(index),
                data_ptr.add(index + 1),
                self.len() - index,
            );

            data_ptr.add(index).write(MaybeUninit::new(value));
        }

        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Result<T, ListError> {
        self.remove(0)
    }

    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        self.remove(self.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        if index >= self.len() {
            return Err(ListError::BadIndex(index));
        }

        let value = unsafe { self.data[index].assume_init_read() };

        unsafe {
            // Shift elements from `index + 1` to fill the gap
            let data_ptr = self.data.as_mut_ptr();
            ptr::copy(
                data_ptr.add(index + 1),
                data_ptr.add(index),
                self.len() - index - 1,
            );
        }

        self.len -= 1;
        Ok(value)
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        self.as_slice().get(index).ok_or(ListError::BadIndex(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ListError::BadIndex(index))
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    pub fn front(&self) -> Result<&T, ListError> {
        self.get(0)
    }

    pub fn back(&self) -> Result<&T, ListError> {
        self.get(self.len().saturating_sub(1))
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

impl<T, const N: usize> Default for Block<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for Block<T, N> {
    fn clone(&self) -> Self {
        let mut block = Self::new();
        for value in self.as_slice() {
            block.push_back(value.clone());
        }
        block
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Block<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, const N: usize> Drop for Block<T, N> {
    fn drop(&mut self) {
        for i in (0..self.len).rev() {
            unsafe { self.data[i].assume_init_drop() };
        }

        self.len = 0;
    }
}
