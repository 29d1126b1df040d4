/*!
`toy_list` cursor and iterator types
*/

use std::{iter::FusedIterator, marker::PhantomData};

use crate::{error::ListError, DynList};

/// [`DynList::cursor`] → version-stamped, fail-fast traversal handle.
///
/// The cursor does not borrow the list; every method takes the list it was
/// created from. The captured copy of the list's mutation counter stands in
/// for a back reference: once the list is mutated through any path,
/// [`Cursor::advance`] and [`Cursor::reset`] report
/// [`ListError::ConcurrentModification`] instead of walking storage that may
/// have been reallocated.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    pos: Pos,
    version: u32,
    /// Item type parameter
    _t: PhantomData<fn() -> T>,
}

/// Cursor position: before the first element, on a live element, or past the
/// last one. `At` doubles as the "has a current element" marker, so `Before`
/// and `End` stay distinct from any real element, including a stored default
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pos {
    Before,
    At(usize),
    End,
}

impl<T> Cursor<T> {
    pub(crate) fn new(list: &DynList<T>) -> Self {
        Self {
            pos: Pos::Before,
            version: list.version(),
            _t: PhantomData,
        }
    }

    /// Steps onto the next element and returns `true`, or parks past the
    /// end and returns `false` when the list is exhausted.
    pub fn advance(&mut self, list: &DynList<T>) -> Result<bool, ListError> {
        self.guard(list)?;
        let next = match self.pos {
            Pos::Before => 0,
            Pos::At(i) => i + 1,
            Pos::End => list.len(),
        };
        if next < list.len() {
            self.pos = Pos::At(next);
            Ok(true)
        } else {
            self.pos = Pos::End;
            Ok(false)
        }
    }

    /// Borrows the element the last successful [`Cursor::advance`] stopped
    /// on. Fails until `advance` has returned `true` and again after it
    /// returns `false`.
    pub fn current<'a>(&self, list: &'a DynList<T>) -> Result<&'a T, ListError> {
        match self.pos {
            Pos::At(i) => list.get_by_slot(i).ok_or(ListError::NoCurrentElement),
            Pos::Before | Pos::End => Err(ListError::NoCurrentElement),
        }
    }

    /// Rewinds to before the first element. The list version is NOT
    /// re-captured, so a cursor invalidated by a mutation stays invalid.
    pub fn reset(&mut self, list: &DynList<T>) -> Result<(), ListError> {
        self.guard(list)?;
        self.pos = Pos::Before;
        Ok(())
    }

    fn guard(&self, list: &DynList<T>) -> Result<(), ListError> {
        if self.version != list.version() {
            return Err(ListError::ConcurrentModification);
        }
        Ok(())
    }
}

/// [`DynList::items`] → `&T`
pub struct Items<'a, T> {
    pub(crate) slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Items<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slots.next()?;
        Some(slot.as_ref().expect("bug: dead slot below len"))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T> FusedIterator for Items<'a, T> {}
impl<'a, T> ExactSizeIterator for Items<'a, T> {}
