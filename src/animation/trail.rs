use std::collections::VecDeque;

pub const DEFAULT_TRAIL_CAPACITY: usize = 60;

/// Bounded FIFO history; pushing past capacity evicts the oldest entry.
#[derive(Clone, Debug)]
pub struct Trail<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> Trail<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn pop_oldest(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Consecutive pairs, each with its gradient fraction `index / len`.
    pub fn segments(&self) -> impl Iterator<Item = (f64, &T, &T)> {
        let n = self.items.len() as f64;
        self.items
            .iter()
            .zip(self.items.iter().skip(1))
            .enumerate()
            .map(move |(i, (a, b))| (i as f64 / n, a, b))
    }
}

impl<T> Default for Trail<T> {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_CAPACITY)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/trail.rs"]
mod tests;
