//! Exclusive-ownership wrapper for `Value`'s heap-backed payloads.
//!
//! Replaces the source's boolean `temporary` flag (`spec.md` §9 REDESIGN
//! FLAGS): a `Heap<T>` is moved on assignment and deep-cloned only where an
//! operator genuinely needs to keep a copy of an operand around. There is no
//! shared ownership here and no manual release path — `Drop` does the rest.

use std::fmt;
use std::ops::{Deref, DerefMut};

pub struct Heap<T>(Box<T>);

impl<T> Heap<T> {
    pub fn new(value: T) -> Self {
        Heap(Box::new(value))
    }

    pub fn into_inner(self) -> T {
        *self.0
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Heap<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: Clone> Clone for Heap<T> {
    fn clone(&self) -> Self {
        Heap(Box::new((**self).clone()))
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
