use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use crate::into_iter::IntoIter;
use crate::{List, ListError};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A chain of boxed nodes reachable from the head only.
///
/// Front operations are `O(1)`. Everything addressed from the back walks the
/// whole chain, since there is no tail reference.
///
/// # Example
/// ```rust
/// use chunky_list::{List, SinglyLinkedList};
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back(2);
/// list.push_front(1);
///
/// assert_eq!(list.pop_back(), Ok(2));
/// assert_eq!(list.pop_back(), Ok(1));
/// assert!(list.is_empty());
/// ```
pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Walks to the link that owns the node at `index`.
    ///
    /// `index == len` yields the trailing empty link.
    fn link_mut(&mut self, index: usize) -> Result<&mut Option<Box<Node<T>>>, ListError> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = match link {
                Some(node) => &mut node.next,
                None => return Err(ListError::BadIndex(index)),
            };
        }
        Ok(link)
    }

    fn node(&self, index: usize) -> Result<&Node<T>, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        if index >= self.len {
            return Err(ListError::BadIndex(index));
        }

        let mut node = self.head.as_deref();
        for _ in 0..index {
            node = node.and_then(|node| node.next.as_deref());
        }
        node.ok_or(ListError::BadIndex(index))
    }
}

impl<T> List<T> for SinglyLinkedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    fn push_back(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }

        *link = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::BadIndex(index));
        }

        let link = self.link_mut(index)?;
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    fn pop_front(&mut self) -> Result<T, ListError> {
        let node = self.head.take().ok_or(ListError::EmptyList)?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    fn pop_back(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        self.remove(self.len - 1)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        if index >= self.len {
            return Err(ListError::BadIndex(index));
        }

        let link = self.link_mut(index)?;
        let node = link.take().ok_or(ListError::BadIndex(index))?;
        *link = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    fn front(&self) -> Result<&T, ListError> {
        self.head
            .as_deref()
            .map(|node| &node.value)
            .ok_or(ListError::EmptyList)
    }

    fn back(&self) -> Result<&T, ListError> {
        self.iter().last().ok_or(ListError::EmptyList)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        self.node(index).map(|node| &node.value)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        if index >= self.len {
            return Err(ListError::BadIndex(index));
        }

        let node = self
            .link_mut(index)?
            .as_deref_mut()
            .ok_or(ListError::BadIndex(index))?;
        Ok(mem::replace(&mut node.value, value))
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            len: self.len,
        }
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink one node at a time so long chains do not recurse.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }

        for value in iter {
            let node = link.insert(Box::new(Node { value, next: None }));
            link = &mut node.next;
            self.len += 1;
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T, Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the elements of a SinglyLinkedList.
///
/// This struct is created by SinglyLinkedList::iter().
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    len: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
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
