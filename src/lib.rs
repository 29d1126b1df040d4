//! Growable list [`DynList`] with a version-stamped, fail-fast
//! [`Cursor`](crate::iter::Cursor).
//!
//! It's basically a [`Vec`], but with an explicit growth policy and a cursor
//! that detects mutation mid-traversal instead of walking storage that may
//! have been reallocated.
//!
//! # Similar crates
//! * [smallvec](https://docs.rs/smallvec/latest)
//! * [thin-vec](https://docs.rs/thin-vec/latest)
//! * [tinyvec](https://docs.rs/tinyvec/latest)

pub mod error;
pub mod iter;


use std::{
    fmt::{self, Debug},
    hash::Hash,
    iter::FromIterator,
    ops,
};

use derivative::Derivative;

use crate::{
    error::ListError,
    iter::{Cursor, Items},
};

/// Capacity given to a list that grows out of the empty state.
pub const DEFAULT_CAPACITY: usize = 4;

/// Ceiling applied to doubled capacities. A single explicit request above the
/// ceiling is still honored exactly.
pub const MAX_GROWTH_CAPACITY: usize = 0x7FEF_FFFF;

/// Growable array of `T` backed by an exact-size buffer and stamped with a
/// mutation counter.
///
/// Slots `[0, len)` hold live values and the rest of the buffer is
/// unoccupied. The buffer is never grown in place: any capacity change
/// allocates a replacement of the exact target size and moves the live
/// values over. An empty list shares the zero-length buffer and does not
/// allocate.
#[derive(Derivative)]
#[derivative(
    Debug(bound = "T: Debug"),
    Clone(bound = "T: Clone"),
    PartialEq(bound = "T: PartialEq"),
    Eq(bound = "T: Eq"),
    Hash(bound = "T: Hash")
)]
pub struct DynList<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    /// Bumped on every value mutation. Capacity changes alone don't count,
    /// so outstanding cursors survive an explicit realloc.
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    version: u32,
}

impl<T> Default for DynList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynList<T> {
    /// Creates an empty list without allocating.
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
            len: 0,
            version: 0,
        }
    }

    /// Creates an empty list backed by exactly `cap` slots. Zero behaves
    /// like [`DynList::new`].
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            slots: Self::alloc_slots(cap),
            len: 0,
            version: 0,
        }
    }

    fn alloc_slots(cap: usize) -> Box<[Option<T>]> {
        (0..cap).map(|_| None).collect()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn version(&self) -> u32 {
        self.version
    }

    /// Internal use only. No liveness guarantee for the slot.
    pub(crate) fn get_by_slot(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot)?.as_ref()
    }
}

/// # ----- Mutations -----
impl<T> DynList<T> {
    /// Appends `value`, growing the buffer if it is full, and returns the
    /// position the value was stored at.
    pub fn push(&mut self, value: T) -> usize {
        if self.len == self.slots.len() {
            self.ensure_capacity(self.len + 1);
        }
        let index = self.len;
        self.slots[index] = Some(value);
        self.version = self.version.wrapping_add(1);
        self.len += 1;
        index
    }

    /// Overwrites the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.slots[index] = Some(value);
        self.version = self.version.wrapping_add(1);
        Ok(())
    }

    /// Replaces the backing buffer with one of exactly `new_cap` slots,
    /// refusing to truncate live elements. Requesting the current capacity
    /// is a no-op.
    ///
    /// Requesting zero (only reachable while the list is empty) falls back
    /// to a fresh [`DEFAULT_CAPACITY`]-slot buffer, not a zero-slot one.
    pub fn set_capacity(&mut self, new_cap: usize) -> Result<(), ListError> {
        if new_cap < self.len {
            return Err(ListError::CapacityBelowLength {
                requested: new_cap,
                len: self.len,
            });
        }
        if new_cap == self.slots.len() {
            return Ok(());
        }
        if new_cap > 0 {
            self.realloc(new_cap);
        } else {
            // len is zero here, nothing to move
            self.slots = Self::alloc_slots(DEFAULT_CAPACITY);
        }
        Ok(())
    }

    /// Doubling growth: an empty buffer jumps to [`DEFAULT_CAPACITY`], a
    /// doubled capacity is clamped to [`MAX_GROWTH_CAPACITY`], and a `min`
    /// beyond both is honored exactly.
    fn ensure_capacity(&mut self, min: usize) {
        if self.slots.len() >= min {
            return;
        }
        let mut cap = if self.slots.len() == 0 {
            DEFAULT_CAPACITY
        } else {
            self.slots.len() * 2
        };
        if cap > MAX_GROWTH_CAPACITY {
            cap = MAX_GROWTH_CAPACITY;
        }
        if cap < min {
            cap = min;
        }
        self.realloc(cap);
    }

    /// NOTE: Caller makes sure `new_cap >= self.len`.
    fn realloc(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len, "bug: realloc below len");
        let mut new_slots = Self::alloc_slots(new_cap);
        for (dst, src) in new_slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *dst = src.take();
        }
        self.slots = new_slots;
    }
}

/// # ----- Accessors -----
impl<T> DynList<T> {
    /// Borrows the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.slots[index].as_ref().expect("bug: dead slot below len"))
    }

    /// Clones the live elements into `dst[offset..offset + len]`. The list
    /// is left untouched and outstanding cursors stay valid.
    ///
    /// # Panics
    /// Panics if `dst` past `offset` is shorter than [`DynList::len`]; room
    /// in the destination is the caller's responsibility.
    pub fn copy_to(&self, dst: &mut [T], offset: usize)
    where
        T: Clone,
    {
        let dst = &mut dst[offset..offset + self.len];
        for (dst, src) in dst.iter_mut().zip(self.items()) {
            *dst = src.clone();
        }
    }
}

/// # ----- Iterators -----
impl<T> DynList<T> {
    /// Fail-fast traversal handle positioned before the first element, with
    /// the current list version captured.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self)
    }

    /// `&T`
    pub fn items(&self) -> Items<T> {
        Items {
            slots: self.slots[..self.len].iter(),
        }
    }
}

impl<T> ops::Index<usize> for DynList<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).unwrap()
    }
}

impl<'a, T> IntoIterator for &'a DynList<T> {
    type IntoIter = Items<'a, T>;
    type Item = <Self::IntoIter as Iterator>::Item;
    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}

impl<T> FromIterator<T> for DynList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        for value in iter {
            list.push(value);
        }
        list
    }
}

impl<T: fmt::Display> fmt::Display for DynList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        write!(f, "]")
    }
}

/// Creates a [`DynList`] with given values. [`DynList<T>`] type might have
/// to be annotated.
///
/// # Example
/// ```
/// use toy_list::{list, DynList};
/// let data: DynList<usize> = list![0, 1, 2, 3, 4];
/// ```
#[macro_export]
macro_rules! list {
    ($($value:expr),*) => {{
        let mut list = $crate::DynList::new();
        $(
            list.push($value);
        )*
        list
    }}
}
