use std::cmp::Ordering;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use crate::block::Block;
use crate::into_iter::IntoIter;
use crate::{ChunkCapacity, Iter, IterMut, List, ListError, Usize};

/// A list stored as an ordered directory of fixed-capacity blocks.
///
/// # Features
/// - **Chunked Storage**: Each block holds up to `N` elements inline, so a
///   block is one allocation slot in the directory instead of `N` nodes.
/// - **Local Mutations**: Every operation touches at most two blocks. An
///   insertion into a full block splits it, a removal that empties a block
///   drops it.
///
/// # Type Parameters
/// - `T`: The type of elements stored in the list.
/// - `N`: The maximum number of elements that each block can hold.
///
/// # Example
/// ```rust
/// use chunky_list::{ChunkyList, List};
///
/// let mut list: ChunkyList<i64, 2> = ChunkyList::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_back(3);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.chunk_count(), 2);
/// assert_eq!(list.get(2), Ok(&3));
/// assert_eq!(format!("{list:?}"), "[[1, 2], [3]]");
/// ```
pub struct ChunkyList<T, const N: usize>
where
    Usize<N>: ChunkCapacity,
{
    pub(crate) chunks: VecDeque<Block<T, N>>,
}

impl<T, const N: usize, const M: usize> From<[T; M]> for ChunkyList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> FromIterator<T> for ChunkyList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T, const N: usize> Extend<T> for ChunkyList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

impl<'a, T, const N: usize> Extend<&'a T> for ChunkyList<T, N>
where
    T: Clone + 'a,
    Usize<N>: ChunkCapacity,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const N: usize> Default for ChunkyList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> ChunkyList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    /// The capacity of every block of this list.
    pub const CHUNK_SIZE: usize = N;

    /// Creates a new, empty `ChunkyList` with no elements and no allocated blocks.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::{ChunkyList, List};
    ///
    /// let list: ChunkyList<i64, 6> = ChunkyList::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.chunk_count(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            chunks: VecDeque::new(),
        }
    }

    /// Returns the number of blocks currently in the directory.
    ///
    /// Blocks are never empty, so this is `0` exactly when the list is empty.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::{ChunkyList, List};
    ///
    /// let mut list: ChunkyList<i64, 2> = ChunkyList::from([1, 2, 3, 4]);
    /// assert_eq!(list.chunk_count(), 2);
    ///
    /// list.pop_back()?;
    /// list.pop_back()?;
    /// assert_eq!(list.chunk_count(), 1);
    /// # Ok::<(), chunky_list::ListError>(())
    /// ```
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Removes all elements and releases every block.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    /// Provides a mutable iterator over list's elements.
    ///
    /// # Examples
    /// ```
    /// use chunky_list::{ChunkyList, List};
    ///
    /// let mut list: ChunkyList<_, 2> = ChunkyList::from([0, 1, 2]);
    /// list.iter_mut().for_each(|value| *value *= 10);
    ///
    /// assert_eq!(list, [0, 10, 20]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        IterMut::from_list(self)
    }

    /// Finds the block holding global `index` and the offset inside it.
    fn search_target(&self, index: usize) -> Option<SearchTarget> {
        let mut start = 0;
        self.chunks
            .iter()
            .position(|chunk| {
                let end = start + chunk.len();
                if (start..end).contains(&index) {
                    return true;
                }

                start = end;
                false
            })
            .map(|chunk_index| SearchTarget {
                chunk_index,
                target_index: index - start,
            })
    }

    /// Like `search_target`, but also admits the end of a block.
    ///
    /// The end of a full block is the start of the next one, so a block is
    /// only chosen when the local offset is below `N`.
    fn search_insert_target(&self, index: usize) -> Option<SearchTarget> {
        let mut start = 0;
        self.chunks
            .iter()
            .position(|chunk| {
                let end = start + chunk.len();
                if (start..=end).contains(&index) && index - start < N {
                    return true;
                }

                start = end;
                false
            })
            .map(|chunk_index| SearchTarget {
                chunk_index,
                target_index: index - start,
            })
    }

    /// Removes the block at `chunk_index` if its last element is gone.
    fn prune(&mut self, chunk_index: usize) {
        if self.chunks[chunk_index].is_empty() {
            log::trace!("pruning empty block {chunk_index} of {}", self.chunks.len());
            self.chunks.remove(chunk_index);
        }
    }
}

#[derive(Debug, Default)]
struct SearchTarget {
    chunk_index: usize,
    target_index: usize,
}

impl<T, const N: usize> List<T> for ChunkyList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Iter<'a>
        = Iter<'a, T, N>
    where
        Self: 'a,
        T: 'a;

    /// Adds an element to the front. A new block is allocated when the front
    /// block is full.
    fn push_front(&mut self, value: T) {
        match self.chunks.front_mut() {
            Some(chunk) if !chunk.is_full() => chunk.push_front(value),
            _ => {
                log::trace!("allocating front block, {} blocks so far", self.chunks.len());
                let mut chunk = Block::new();
                chunk.push_front(value);
                self.chunks.push_front(chunk);
            }
        }
    }

    /// Adds an element to the back. A new block is allocated when the back
    /// block is full.
    fn push_back(&mut self, value: T) {
        match self.chunks.back_mut() {
            Some(chunk) if !chunk.is_full() => chunk.push_back(value),
            _ => {
                log::trace!("allocating back block, {} blocks so far", self.chunks.len());
                let mut chunk = Block::new();
                chunk.push_back(value);
                self.chunks.push_back(chunk);
            }
        }
    }

    /// Inserts an element at `index`, shifting subsequent elements to the right.
    ///
    /// A full target block is split: its back element moves into a new block
    /// placed right after it, which makes room for `value`.
    ///
    /// # Examples
    /// ```
    /// use chunky_list::{ChunkyList, List};
    ///
    /// let mut list: ChunkyList<i64, 2> = ChunkyList::from([1, 2, 3, 4]);
    /// list.insert(1, 9)?;
    ///
    /// assert_eq!(list, [1, 9, 2, 3, 4]);
    /// assert_eq!(format!("{list:?}"), "[[1, 9], [2], [3, 4]]");
    /// # Ok::<(), chunky_list::ListError>(())
    /// ```
    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let Some(SearchTarget {
            chunk_index,
            target_index,
        }) = self.search_insert_target(index)
        else {
            // Nothing admits the index: only appending past a full back block is valid.
            if index == self.len() {
                self.push_back(value);
                return Ok(());
            }

            return Err(ListError::BadIndex(index));
        };

        let chunk = &mut self.chunks[chunk_index];
        if !chunk.is_full() {
            return chunk.insert(target_index, value);
        }

        log::trace!("splitting full block {chunk_index} to insert at offset {target_index}");
        let mut spill = Block::new();
        spill.push_back(chunk.pop_back()?);
        chunk.insert(target_index, value)?;
        self.chunks.insert(chunk_index + 1, spill);

        Ok(())
    }

    fn pop_front(&mut self) -> Result<T, ListError> {
        let chunk = self.chunks.front_mut().ok_or(ListError::EmptyList)?;

        let value = chunk.pop_front()?;
        self.prune(0);
        Ok(value)
    }

    fn pop_back(&mut self) -> Result<T, ListError> {
        let chunk = self.chunks.back_mut().ok_or(ListError::EmptyList)?;

        let value = chunk.pop_back()?;
        self.prune(self.chunks.len() - 1);
        Ok(value)
    }

    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// # Examples
    /// ```
    /// use chunky_list::{ChunkyList, List, ListError};
    ///
    /// let mut list: ChunkyList<i64, 2> = ChunkyList::from([10, 20, 30]);
    ///
    /// assert_eq!(list.remove(2), Ok(30));
    /// assert_eq!(list.chunk_count(), 1);
    /// assert_eq!(list.remove(5), Err(ListError::BadIndex(5)));
    /// ```
    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self
            .search_target(index)
            .ok_or(ListError::BadIndex(index))?;

        let value = self.chunks[chunk_index].remove(target_index)?;
        self.prune(chunk_index);
        Ok(value)
    }

    fn front(&self) -> Result<&T, ListError> {
        self.chunks
            .front()
            .ok_or(ListError::EmptyList)
            .and_then(Block::front)
    }

    fn back(&self) -> Result<&T, ListError> {
        self.chunks
            .back()
            .ok_or(ListError::EmptyList)
            .and_then(Block::back)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self
            .search_target(index)
            .ok_or(ListError::BadIndex(index))?;

        self.chunks[chunk_index].get(target_index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self
            .search_target(index)
            .ok_or(ListError::BadIndex(index))?;

        self.chunks[chunk_index].set(target_index, value)
    }

    /// Sums the lengths of all blocks.
    fn len(&self) -> usize {
        self.chunks.iter().map(Block::len).sum()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    #[inline]
    fn iter(&self) -> Iter<'_, T, N> {
        Iter::from_list(self)
    }
}

impl<T: Clone, const N: usize> Clone for ChunkyList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    fn clone(&self) -> Self {
        Self {
            chunks: self.chunks.clone(),
        }
    }
}

impl<T, const N: usize, const M: usize> PartialEq<[T; M]> for ChunkyList<T, N>
where
    T: PartialEq,
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, const N: usize> PartialEq<&[T]> for ChunkyList<T, N>
where
    T: PartialEq,
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, const N: usize> PartialEq<[T]> for ChunkyList<T, N>
where
    T: PartialEq,
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, const N: usize> PartialEq for ChunkyList<T, N>
where
    T: PartialEq,
    Usize<N>: ChunkCapacity,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, const N: usize> Eq for ChunkyList<T, N>
where
    T: Eq,
    Usize<N>: ChunkCapacity,
{
}

impl<T, const N: usize> PartialOrd for ChunkyList<T, N>
where
    T: PartialOrd,
    Usize<N>: ChunkCapacity,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T, const N: usize> Ord for ChunkyList<T, N>
where
    T: Ord,
    Usize<N>: ChunkCapacity,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T, const N: usize> Hash for ChunkyList<T, N>
where
    T: Hash,
    Usize<N>: ChunkCapacity,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T, const N: usize> std::fmt::Debug for ChunkyList<T, N>
where
    T: std::fmt::Debug,
    Usize<N>: ChunkCapacity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.chunks.iter()).finish()
    }
}

impl<T, const N: usize> IntoIterator for ChunkyList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = T;
    type IntoIter = IntoIter<T, Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a ChunkyList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut ChunkyList<T, N>
where
    Usize<N>: ChunkCapacity,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_list(self)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::collections::VecDeque;
    use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};

    use quickcheck_macros::quickcheck;

    use crate::{ChunkCapacity, ChunkyList, List, ListError, Usize};

    fn enable_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn chunk_lens<T, const N: usize>(list: &ChunkyList<T, N>) -> Vec<usize>
    where
        Usize<N>: ChunkCapacity,
    {
        list.chunks.iter().map(|chunk| chunk.len()).collect()
    }

    fn assert_chunks_within_capacity<T, const N: usize>(list: &ChunkyList<T, N>)
    where
        Usize<N>: ChunkCapacity,
    {
        for len in chunk_lens(list) {
            assert!((1..=N).contains(&len), "block of {len} elements in {N}-capacity list");
        }
    }

    #[test]
    fn test_new_creates_empty_list() {
        let sut: ChunkyList<i64, 2> = ChunkyList::new();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.chunk_count(), 0);
        assert_eq!(ChunkyList::<i64, 2>::CHUNK_SIZE, 2);
    }

    #[test]
    fn test_default_creates_empty_list() {
        let sut: ChunkyList<i64, 2> = ChunkyList::default();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn test_push_back_fills_blocks_in_order() {
        let mut sut: ChunkyList<i64, 2> = ChunkyList::new();
        sut.push_back(1);
        sut.push_back(2);
        sut.push_back(3);

        assert_eq!(format!("{sut:?}"), "[[1, 2], [3]]");
        assert_eq!(sut.len(), 3);
        assert_eq!(sut.get(2), Ok(&3));
    }

    #[test]
    fn test_push_front_allocates_front_block_when_full() {
        let mut sut: ChunkyList<i64, 2> = ChunkyList::new();
        sut.push_front(3);
        sut.push_front(2);
        sut.push_front(1);

        assert_eq!(format!("{sut:?}"), "[[1], [2, 3]]");
        assert_eq!(sut, [1, 2, 3]);
        assert_eq!(sut.front(), Ok(&1));
        assert_eq!(sut.back(), Ok(&3));
    }

    #[test]
    fn test_insert_splits_full_block() {
        enable_logging();

        let mut sut: ChunkyList<i64, 2> = ChunkyList::new();
        sut.extend([1, 2, 3, 4]);
        assert_eq!(chunk_lens(&sut), [2, 2]);

        sut.insert(1, 9).unwrap();
        assert_eq!(format!("{sut:?}"), "[[1, 9], [2], [3, 4]]");
        assert_eq!(sut, [1, 9, 2, 3, 4]);
        assert_eq!(sut.len(), 5);
    }

    #[test]
    fn test_insert_at_end_of_full_block_goes_to_next_block() {
        let mut sut: ChunkyList<i64, 2> = ChunkyList::new();
        sut.extend([1, 2, 3]);
        assert_eq!(format!("{sut:?}"), "[[1, 2], [3]]");

        // Offset 2 of the first block is the start of the second one.
        sut.insert(2, 9).unwrap();
        assert_eq!(format!("{sut:?}"), "[[1, 2], [9, 3]]");
        assert_eq!(sut.chunk_count(), 2);

        // Same boundary, but the next block is full too: it gets split.
        sut.insert(2, 8).unwrap();
        assert_eq!(format!("{sut:?}"), "[[1, 2], [8, 9], [3]]");
    }

    #[test]
    fn test_insert_at_end_of_partial_block_stays_in_block() {
        let mut sut: ChunkyList<i64, 3> = ChunkyList::new();
        sut.extend([1, 2, 3, 4]);
        sut.remove(1).unwrap();
        assert_eq!(format!("{sut:?}"), "[[1, 3], [4]]");

        sut.insert(2, 9).unwrap();
        assert_eq!(format!("{sut:?}"), "[[1, 3, 9], [4]]");
    }

    #[test]
    fn test_insert_past_full_back_block_appends_block() {
        let mut sut: ChunkyList<i64, 2> = ChunkyList::new();
        sut.insert(0, 1).unwrap();
        sut.insert(1, 2).unwrap();
        assert_eq!(sut.chunk_count(), 1);

        sut.insert(2, 3).unwrap();
        assert_eq!(format!("{sut:?}"), "[[1, 2], [3]]");
        assert_eq!(sut.insert(4, 5), Err(ListError::BadIndex(4)));
        assert_eq!(sut, [1, 2, 3]);
    }

    #[test]
    fn test_insert_into_full_block_at_every_index() {
        for i in 0..=4 {
            let mut sut: ChunkyList<_, 4> = ChunkyList::new();
            sut.extend(0..4);
            assert_eq!(sut.chunk_count(), 1);

            sut.insert(i, 42).unwrap();
            assert_eq!(sut.len(), 5);
            assert_eq!(sut.chunk_count(), 2);
            assert_chunks_within_capacity(&sut);

            let mut expected = vec![0, 1, 2, 3];
            expected.insert(i, 42);

            assert_eq!(sut, expected.as_slice(), "{sut:?} {expected:?}");
        }
    }

    #[test]
    fn test_remove_prunes_emptied_block() {
        enable_logging();

        let mut sut: ChunkyList<char, 2> = ChunkyList::new();
        sut.extend(['x', 'a', 'b']);
        sut.pop_front().unwrap();
        sut.push_back('y');
        assert_eq!(format!("{sut:?}"), "[['a'], ['b', 'y']]");

        assert_eq!(sut.remove(2), Ok('y'));
        assert_eq!(format!("{sut:?}"), "[['a'], ['b']]");

        assert_eq!(sut.remove(1), Ok('b'));
        assert_eq!(sut.chunk_count(), 1);

        assert_eq!(sut.remove(0), Ok('a'));
        assert_eq!(sut.chunk_count(), 0);
        assert!(sut.is_empty());
        assert_eq!(sut.remove(0), Err(ListError::EmptyList));
    }

    #[test]
    fn test_remove_element_in_middle_chunk() {
        let mut sut: ChunkyList<i64, 3> = ChunkyList::new();
        sut.extend(0..9);
        assert_eq!(chunk_lens(&sut), [3, 3, 3]);

        assert_eq!(sut.remove(5), Ok(5));
        assert_eq!(sut, [0, 1, 2, 3, 4, 6, 7, 8]);

        assert_eq!(sut.remove(4), Ok(4));
        assert_eq!(sut, [0, 1, 2, 3, 6, 7, 8]);

        assert_eq!(sut.remove(3), Ok(3));
        assert_eq!(sut, [0, 1, 2, 6, 7, 8]);
        assert_eq!(chunk_lens(&sut), [3, 3]);
    }

    #[test]
    fn test_pop_front_and_pop_back_prune_end_blocks() {
        let mut sut: ChunkyList<i64, 2> = ChunkyList::from([10, 20, 30, 40, 50]);
        assert_eq!(sut.chunk_count(), 3);

        assert_eq!(sut.pop_back(), Ok(50));
        assert_eq!(sut.chunk_count(), 2);

        assert_eq!(sut.pop_front(), Ok(10));
        assert_eq!(sut.chunk_count(), 2);
        assert_eq!(sut.pop_front(), Ok(20));
        assert_eq!(sut.chunk_count(), 1);

        assert_eq!(sut.pop_back(), Ok(40));
        assert_eq!(sut.pop_back(), Ok(30));
        assert_eq!(sut.pop_back(), Err(ListError::EmptyList));
        assert_eq!(sut.pop_front(), Err(ListError::EmptyList));
    }

    #[test]
    fn test_get_and_set_across_blocks() {
        let mut sut: ChunkyList<i64, 3> = ChunkyList::new();
        assert_eq!(sut.get(0), Err(ListError::EmptyList));
        assert_eq!(sut.get(5), Err(ListError::EmptyList));

        sut.extend([10, 20, 30, 40, 50, 60]);
        for (index, value) in [10, 20, 30, 40, 50, 60].iter().enumerate() {
            assert_eq!(sut.get(index), Ok(value));
        }
        assert_eq!(sut.get(6), Err(ListError::BadIndex(6)));

        assert_eq!(sut.set(4, 55), Ok(50));
        assert_eq!(sut.get(4), Ok(&55));
        assert_eq!(sut.set(6, 70), Err(ListError::BadIndex(6)));
        assert_eq!(sut, [10, 20, 30, 40, 55, 60]);
    }

    #[test]
    fn test_clear_resets_the_list() {
        let mut sut: ChunkyList<i32, 2> = ChunkyList::from([10, 20, 30]);
        sut.clear();

        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.front(), Err(ListError::EmptyList));
        assert_eq!(sut.back(), Err(ListError::EmptyList));

        sut.push_back(40);
        assert_eq!(sut.front(), Ok(&40));
        assert_eq!(sut.back(), Ok(&40));
    }

    #[test]
    fn test_iter_walks_blocks_in_order() {
        let sut: ChunkyList<i32, 2> = ChunkyList::from([0, 1, 2, 3, 4]);

        let mut iter = sut.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), Some(&4));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        let collected: Vec<_> = (&sut).into_iter().copied().collect();
        assert_eq!(collected, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_into_iter_yields_owned_values() {
        let sut: ChunkyList<String, 2> =
            ["a", "b", "c"].into_iter().map(String::from).collect();

        let mut iter = sut.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.next().as_deref(), Some("b"));
        assert_eq!(iter.next().as_deref(), Some("c"));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_mut_updates_every_element() {
        let mut sut: ChunkyList<i32, 2> = ChunkyList::from([1, 2, 3]);
        for value in &mut sut {
            *value += 1;
        }
        assert_eq!(sut, [2, 3, 4]);
        assert_eq!(sut.iter_mut().len(), 3);
    }

    #[test]
    fn test_extend_with_refs_works_correctly() {
        let mut sut: ChunkyList<i32, 2> = ChunkyList::new();
        sut.extend([0, 1, 2, 3, 4].iter());
        assert_eq!(sut, [0, 1, 2, 3, 4]);
        assert_eq!(chunk_lens(&sut), [2, 2, 1]);
    }

    #[test]
    fn test_clone_works_correctly() {
        let mut other: ChunkyList<i32, 2> = ChunkyList::from([0, 1, 2, 3, 4]);

        let sut = other.clone();
        assert_eq!(sut, [0, 1, 2, 3, 4]);
        assert_eq!(format!("{sut:?}"), format!("{other:?}"));

        other.clear();
        let sut = other.clone();
        assert!(sut.is_empty());
        assert_eq!(sut.front(), Err(ListError::EmptyList));
    }

    #[test]
    fn test_eq_ignores_block_layout() {
        let l = ChunkyList::<usize, 2>::from([0, 1, 2, 3, 4]);
        let mut r = ChunkyList::<usize, 2>::from([0, 2, 3, 4]);
        assert_ne!(l, r);

        r.insert(1, 1).unwrap();
        assert_ne!(format!("{l:?}"), format!("{r:?}"));
        assert_eq!(l, r);
    }

    #[test]
    fn test_cmp_works_correctly() {
        let a = ChunkyList::<usize, 2>::from([0, 1, 2]);
        let b = ChunkyList::<usize, 2>::from([4, 5, 6]);
        assert_eq!(a.cmp(&a), Ordering::Equal);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.partial_cmp(&a), Some(Ordering::Greater));
    }

    #[test]
    fn test_hash_works_correctly() {
        let bh = BuildHasherDefault::<DefaultHasher>::default();
        let a = ChunkyList::<usize, 2>::from([0, 1, 2]);
        let b = ChunkyList::<usize, 2>::from([4, 5, 6]);
        assert_ne!(bh.hash_one(&a), bh.hash_one(&b));
        assert_eq!(bh.hash_one(&a), bh.hash_one(&(a.clone())));
    }

    #[quickcheck]
    fn test_chunky_list_behavioural(seed: VecDeque<i32>) {
        fn _test<const N: usize>(mut expected: VecDeque<i32>)
        where
            Usize<N>: ChunkCapacity,
        {
            let mut actual = ChunkyList::<_, N>::from_iter(expected.iter().copied());

            for _ in 0..32 {
                let len = expected.len();

                assert_eq!(expected.is_empty(), actual.is_empty());
                assert_eq!(expected.len(), actual.len());
                assert_eq!(expected.len(), actual.iter().count());
                assert_chunks_within_capacity(&actual);

                if len == 0 {
                    assert_eq!(actual.front(), Err(ListError::EmptyList));
                    assert_eq!(actual.back(), Err(ListError::EmptyList));
                } else {
                    assert_eq!(expected.front(), actual.front().ok());
                    assert_eq!(expected.back(), actual.back().ok());
                    assert_eq!(expected.get(len / 2), actual.get(len / 2).ok());
                    assert_eq!(actual.get(len), Err(ListError::BadIndex(len)));
                }

                assert_eq!(actual, expected.make_contiguous() as &[_]);

                let choice = rand::random_range(0..=5);
                match choice {
                    0 => {
                        let value = rand::random();
                        expected.push_front(value);
                        actual.push_front(value);
                    }
                    1 => {
                        let index = rand::random_range(0..=len);
                        let value = rand::random();
                        expected.insert(index, value);
                        actual.insert(index, value).unwrap();
                    }
                    2 => {
                        let value = rand::random();
                        expected.push_back(value);
                        actual.push_back(value);
                    }
                    3 => assert_eq!(expected.pop_front(), actual.pop_front().ok()),
                    4 => {
                        let index = rand::random_range(0..=len);
                        assert_eq!(expected.remove(index), actual.remove(index).ok())
                    }
                    5 => assert_eq!(expected.pop_back(), actual.pop_back().ok()),
                    _ => unreachable!(),
                }
            }

            expected.clear();
            actual.clear();

            assert_eq!(expected.is_empty(), actual.is_empty());
            assert_eq!(expected.len(), actual.len());
        }

        _test::<1>(seed.clone());
        _test::<2>(seed.clone());
        _test::<3>(seed.clone());
        _test::<4>(seed.clone());
        _test::<5>(seed.clone());
        _test::<8>(seed.clone());
        _test::<16>(seed.clone());
        _test::<32>(seed.clone());
        _test::<64>(seed.clone());
        _test::<128>(seed.clone());
        _test::<256>(seed.clone());
        _test::<512>(seed.clone());
    }
}
