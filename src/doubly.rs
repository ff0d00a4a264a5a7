use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use crate::into_iter::IntoIter;
use crate::{List, ListError};

struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
    prev: Option<NonNull<Node<T>>>,
}

/// A chain of nodes linked in both directions, with head and tail references.
///
/// Nodes are owned by the list through the forward links; `prev` links and
/// the tail reference never own. Operations at either end are `O(1)`,
/// indexed operations walk from whichever end is closer.
///
/// # Example
/// ```rust
/// use chunky_list::{DoublyLinkedList, List};
///
/// let mut list: DoublyLinkedList<_> = [1, 3].into_iter().collect();
/// list.insert(1, 2)?;
///
/// assert_eq!(list.back(), Ok(&3));
/// assert_eq!(list.remove(1), Ok(2));
/// assert_eq!(format!("{list:?}"), "[1, 3]");
/// # Ok::<(), chunky_list::ListError>(())
/// ```
pub struct DoublyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for DoublyLinkedList<T> {}

unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T> DoublyLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn node_at(&self, index: usize) -> Result<NonNull<Node<T>>, ListError> {
        if self.len == 0 {
            return Err(ListError::EmptyList);
        }

        if index >= self.len {
            return Err(ListError::BadIndex(index));
        }

        let mut node;
        if index <= self.len / 2 {
            node = self.head;
            for _ in 0..index {
                node = node.and_then(|node| unsafe { node.as_ref().next });
            }
        } else {
            node = self.tail;
            for _ in index + 1..self.len {
                node = node.and_then(|node| unsafe { node.as_ref().prev });
            }
        }

        node.ok_or(ListError::BadIndex(index))
    }

    /// Links a new node holding `value` right before `at`.
    fn link_before(&mut self, at: NonNull<Node<T>>, value: T) {
        let prev = unsafe { at.as_ref().prev };
        let node = NonNull::from(Box::leak(Box::new(Node {
            value,
            next: Some(at),
            prev,
        })));

        unsafe {
            (*at.as_ptr()).prev = Some(node);
            match prev {
                Some(prev) => (*prev.as_ptr()).next = Some(node),
                None => self.head = Some(node),
            }
        }

        self.len += 1;
    }

    /// Unlinks `node` from the chain and hands back its value.
    fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        let node = unsafe { Box::from_raw(node.as_ptr()) };

        match node.prev {
            Some(prev) => unsafe { (*prev.as_ptr()).next = node.next },
            None => self.head = node.next,
        }

        match node.next {
            Some(next) => unsafe { (*next.as_ptr()).prev = node.prev },
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node.value
    }
}

impl<T> List<T> for DoublyLinkedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn push_front(&mut self, value: T) {
        match self.head {
            Some(head) => self.link_before(head, value),
            None => {
                let node = NonNull::from(Box::leak(Box::new(Node {
                    value,
                    next: None,
                    prev: None,
                })));
                self.head = Some(node);
                self.tail = Some(node);
                self.len = 1;
            }
        }
    }

    fn push_back(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            value,
            next: None,
            prev: self.tail,
        })));

        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::BadIndex(index));
        }

        if index == self.len {
            self.push_back(value);
            return Ok(());
        }

        let at = self.node_at(index)?;
        self.link_before(at, value);
        Ok(())
    }

    fn pop_front(&mut self) -> Result<T, ListError> {
        let head = self.head.ok_or(ListError::EmptyList)?;
        Ok(self.unlink(head))
    }

    fn pop_back(&mut self) -> Result<T, ListError> {
        let tail = self.tail.ok_or(ListError::EmptyList)?;
        Ok(self.unlink(tail))
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let node = self.node_at(index)?;
        Ok(self.unlink(node))
    }

    fn front(&self) -> Result<&T, ListError> {
        self.head
            .map(|node| unsafe { &node.as_ref().value })
            .ok_or(ListError::EmptyList)
    }

    fn back(&self) -> Result<&T, ListError> {
        self.tail
            .map(|node| unsafe { &node.as_ref().value })
            .ok_or(ListError::EmptyList)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        self.node_at(index)
            .map(|node| unsafe { &node.as_ref().value })
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let mut node = self.node_at(index)?;
        let slot = unsafe { &mut node.as_mut().value };
        Ok(mem::replace(slot, value))
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            len: self.len,
            marker: PhantomData,
        }
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        while let Some(node) = self.head {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            self.head = node.next;
        }

        self.tail = None;
        self.len = 0;
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T, Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the elements of a DoublyLinkedList.
///
/// This struct is created by DoublyLinkedList::iter().
pub struct Iter<'a, T> {
    head: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = unsafe { self.head?.as_ref() };
        self.head = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
