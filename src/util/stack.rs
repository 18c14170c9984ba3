#[cfg(test)]
use core::iter::Rev;
#[cfg(test)]
use core::slice::Iter;
use std::fmt;

/// LIFO storage used by the parsing machine for both its operator and
/// argument stacks.
#[derive(Debug)]
pub struct Stack<T> {
    storage: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { storage: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Stack { storage: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, item: T) {
        self.storage.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Pop the top two items if at least two items are present. The
    /// items are returned in push order, so the former top of the
    /// stack is the *second* item. When fewer than two items are
    /// present, the stack is left untouched.
    pub fn pop_pair(&mut self) -> Option<(T, T)> {
        if self.size() < 2 {
            return None;
        }
        let top = self.storage.pop()?;
        let below = self.storage.pop()?;
        Some((below, top))
    }

    pub fn peek(&self) -> Option<&T> {
        self.storage.last()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn size(&self) -> usize {
        self.storage.len()
    }

    #[cfg(test)]
    pub fn clear(&mut self) {
        self.storage.clear()
    }

    /// Consume the stack, returning its only item. `None` if the stack
    /// is empty or holds more than one item.
    pub fn into_single(mut self) -> Option<T> {
        if self.size() == 1 {
            self.storage.pop()
        } else {
            None
        }
    }

    /// Iterate from top to bottom.
    #[cfg(test)]
    pub fn iter(&self) -> Rev<Iter<'_, T>> {
        self.storage.iter().rev()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.storage.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
