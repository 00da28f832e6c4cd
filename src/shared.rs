use std::sync::Arc;

use parking_lot::Mutex;

use crate::stack::{BoundedStack, StackError};

/// A `BoundedStack` that can be shared between threads.
///
/// Cloning gives another handle to the same stack. Every method takes the
/// lock for its whole duration, so each call is atomic with respect to the
/// others.
#[derive(Debug, Clone)]
pub struct SharedStack {
    inner: Arc<Mutex<BoundedStack>>,
}

impl SharedStack {
    pub fn new(capacity: usize) -> Self {
        Self::from(BoundedStack::new(capacity))
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Does nothing if the stack is full.
    pub fn push(&self, value: i32) {
        self.inner.lock().push(value);
    }

    pub fn try_push(&self, value: i32) -> Result<(), StackError> {
        self.inner.lock().try_push(value)
    }

    pub fn pop(&self) -> Option<i32> {
        self.inner.lock().pop()
    }

    pub fn peek(&self) -> Option<i32> {
        self.inner.lock().peek()
    }

    /// Copy of the live elements, top to bottom.
    pub fn snapshot(&self) -> Vec<i32> {
        self.inner.lock().dump().collect()
    }
}

impl From<BoundedStack> for SharedStack {
    fn from(stack: BoundedStack) -> Self {
        Self {
            inner: Arc::new(Mutex::new(stack)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn handles_share_one_stack() {
        let a = SharedStack::new(2);
        let b = a.clone();
        a.push(1);
        b.push(2);
        a.push(3);

        assert_eq!(b.snapshot(), [2, 1]);
        assert_eq!(a.pop(), Some(2));
        assert_eq!(b.peek(), Some(1));
    }

    #[test]
    fn concurrent_pushes_never_exceed_capacity() {
        let stack = SharedStack::new(50);

        thread::scope(|s| {
            for t in 0..8 {
                let stack = stack.clone();
                s.spawn(move || {
                    for i in 0..20 {
                        stack.push(t * 100 + i);
                    }
                });
            }
        });

        assert_eq!(stack.len(), 50);
        assert!(stack.try_push(0).is_err());
    }

    #[test]
    fn concurrent_pops_see_each_value_once() {
        let stack = SharedStack::new(100);
        for i in 0..100 {
            stack.push(i);
        }

        let mut popped: Vec<i32> = thread::scope(|s| {
            let workers: Vec<_> = (0..4)
                .map(|_| {
                    let stack = stack.clone();
                    s.spawn(move || {
                        let mut mine = vec![];
                        while let Some(v) = stack.pop() {
                            mine.push(v);
                        }
                        mine
                    })
                })
                .collect();
            workers
                .into_iter()
                .flat_map(|w| w.join().unwrap())
                .collect()
        });

        popped.sort_unstable();
        assert_eq!(popped, (0..100).collect::<Vec<_>>());
        assert!(stack.is_empty());
    }
}
