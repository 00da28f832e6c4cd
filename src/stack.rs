use std::{
    fmt::{self, Debug, Display},
    iter::{Copied, FusedIterator, Rev},
    slice,
};

use thiserror::Error;

use crate::debug::DebugElements;

/// Returned by the `*_or_sentinel` methods when the stack is empty.
///
/// Note that this is indistinguishable from a stored `-1`. Prefer `pop` and
/// `peek`, which return `None` instead.
pub const EMPTY_SENTINEL: i32 = -1;

/// A last-in-first-out stack of integers with a fixed capacity.
///
/// Pushing onto a full stack is a silent no-op. Use `try_push` if you'd
/// rather find out.
#[derive(Clone)]
pub struct BoundedStack {
    /// Exactly `capacity` slots. Only `slots[..len]` hold live values.
    slots: Box<[i32]>,
    len: usize,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("stack overflow: can't push {value}, capacity is {capacity}")]
    Overflow { value: i32, capacity: usize },
    #[error("can't allocate a stack with capacity {capacity}")]
    Alloc { capacity: usize },
}

impl BoundedStack {
    /// Panics if the backing storage can't be allocated. See `try_new`.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Like `new`, but fails instead of panicking when `capacity` is too big
    /// to allocate.
    pub fn try_new(capacity: usize) -> Result<Self, StackError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| StackError::Alloc { capacity })?;
        slots.resize(capacity, 0);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Index of the most recently pushed element, if any.
    pub fn top(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Does nothing if the stack is full.
    pub fn push(&mut self, value: i32) {
        self.try_push(value).ok();
    }

    pub fn try_push(&mut self, value: i32) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Overflow {
                value,
                capacity: self.capacity(),
            });
        }
        self.slots[self.len] = value;
        self.len += 1;
        debug_assert!(self.len <= self.capacity());
        Ok(())
    }

    pub fn pop(&mut self) -> Option<i32> {
        let top = self.top()?;
        self.len = top;
        Some(self.slots[top])
    }

    pub fn peek(&self) -> Option<i32> {
        self.top().map(|i| self.slots[i])
    }

    /// Like `pop`, but returns `EMPTY_SENTINEL` on underflow.
    pub fn pop_or_sentinel(&mut self) -> i32 {
        self.pop().unwrap_or(EMPTY_SENTINEL)
    }

    /// Like `peek`, but returns `EMPTY_SENTINEL` on underflow.
    pub fn peek_or_sentinel(&self) -> i32 {
        self.peek().unwrap_or(EMPTY_SENTINEL)
    }

    /// The live elements, from the top of the stack down to the bottom.
    pub fn dump(&self) -> Dump<'_> {
        Dump {
            inner: self.live().iter().rev().copied(),
        }
    }

    /// Human-readable listing of the stack, for printing.
    pub fn listing(&self) -> Listing<'_> {
        Listing(self)
    }

    fn live(&self) -> &[i32] {
        &self.slots[..self.len]
    }
}

impl Debug for BoundedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("capacity", &self.capacity())
            .field("elements", &DebugElements(self.live()))
            .finish()
    }
}

/// Iterator returned by `BoundedStack::dump`.
#[derive(Debug, Clone)]
pub struct Dump<'a> {
    inner: Copied<Rev<slice::Iter<'a, i32>>>,
}

impl Iterator for Dump<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Dump<'_> {
    fn next_back(&mut self) -> Option<i32> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Dump<'_> {}

impl FusedIterator for Dump<'_> {}

/// Helper for `BoundedStack::listing`.
pub struct Listing<'a>(&'a BoundedStack);

impl Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Stack is empty.");
        }
        writeln!(f, "Stack elements:")?;
        for value in self.0.dump() {
            writeln!(f, "{value}")?;
        }
        Ok(())
    }
}
