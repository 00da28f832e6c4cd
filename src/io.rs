use std::fmt::Debug;

use crate::stack::BoundedStack;

/// The output methods needed by a `Session`.
///
/// Each method reports the outcome of one command, after it has been
/// applied to the stack.
pub trait SessionIo: Debug {
    /// This method gets called after every command, with the stack's new state.
    ///
    /// You can use it for tracing, etc.
    fn update(&mut self, _stack: &BoundedStack) {}

    /// `value` was pushed, or silently dropped if the stack was full.
    fn pushed(&mut self, value: i32);

    /// Only called under `OverflowPolicy::Reject`.
    fn push_rejected(&mut self, value: i32, capacity: usize);

    /// `None` means the stack was empty.
    fn popped(&mut self, value: Option<i32>);

    /// `None` means the stack was empty.
    fn peeked(&mut self, value: Option<i32>);

    fn dumped(&mut self, stack: &BoundedStack);
}

/// What a `Session` does with a push onto a full stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Drop the value without a word.
    #[default]
    Ignore,
    /// Drop the value, and tell the io about it.
    Reject,
}
