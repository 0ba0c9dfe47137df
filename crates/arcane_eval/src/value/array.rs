//! Array handle with reference semantics.
//!
//! Every other heap-backed `Value` variant uses [`Heap`](crate::value::Heap)'s
//! exclusive ownership, but the host-function protocol needs arrays to
//! behave like the original source's array pointers: `array_set` mutates an
//! array in place, and that mutation must be visible through every other
//! binding that refers to the same array (`spec.md` §8, scenario 5). A
//! by-value host-call signature can't express that with an owned `Vec`, so
//! `ArrayHandle` is a small `Rc<RefCell<...>>` handle instead — the one
//! deliberate exception to "exclusive ownership of heap payloads" (see
//! `DESIGN.md`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::value::Value;

#[derive(Debug, Clone)]
pub struct ArrayHandle(Rc<RefCell<Vec<Value>>>);

impl ArrayHandle {
    #[must_use]
    pub fn new(items: Vec<Value>) -> Self {
        ArrayHandle(Rc::new(RefCell::new(items)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Returns `false` when `index` is out of bounds; the caller turns that
    /// into an `IndexError`.
    pub fn set(&self, index: usize, value: Value) -> bool {
        let mut items = self.0.borrow_mut();
        if index < items.len() {
            items[index] = value;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn stringify(&self) -> String {
        let rendered: Vec<String> = self.0.borrow().iter().map(Value::stringify).collect();
        format!("[{}]", rendered.join(", "))
    }

    #[must_use]
    pub fn structural_eq(&self, other: &ArrayHandle) -> bool {
        let a = self.0.borrow();
        let b = other.0.borrow();
        a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.structural_eq(y))
    }
}
