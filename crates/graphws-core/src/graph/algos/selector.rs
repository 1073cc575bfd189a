//! Min-priority selection with decrease-key
//!
//! A binary heap paired with a position index, so that an item already in
//! the selector can have its priority changed in `O(log n)`.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct PrioritySelector<T, P> {
    heap: Vec<(T, P)>,
    positions: HashMap<T, usize>,
}

impl<T, P> Default for PrioritySelector<T, P> {
    fn default() -> Self {
        Self {
            heap: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T, P> PrioritySelector<T, P>
where
    T: Eq + Hash + Clone,
    P: Ord + Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    pub fn priority(&self, item: &T) -> Option<P> {
        self.positions.get(item).map(|&i| self.heap[i].1)
    }

    /// Insert `item`, or replace its priority if it is already present
    pub fn insert_or_update(&mut self, item: T, priority: P) {
        match self.positions.get(&item).copied() {
            Some(i) => {
                let old = std::mem::replace(&mut self.heap[i].1, priority);
                if priority < old {
                    self.sift_up(i);
                } else {
                    self.sift_down(i);
                }
            }
            None => {
                let i = self.heap.len();
                self.positions.insert(item.clone(), i);
                self.heap.push((item, priority));
                self.sift_up(i);
            }
        }
    }

    /// Remove and return the item with the smallest priority
    pub fn pop_min(&mut self) -> Option<(T, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (item, priority) = self.heap.pop()?;
        self.positions.remove(&item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((item, priority))
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].1 >= self.heap[parent].1 {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < len && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        if let Some(pos) = self.positions.get_mut(&self.heap[a].0) {
            *pos = a;
        }
        if let Some(pos) = self.positions.get_mut(&self.heap[b].0) {
            *pos = b;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(selector: &mut PrioritySelector<i64, i64>) -> Vec<(i64, i64)> {
        std::iter::from_fn(|| selector.pop_min()).collect()
    }

    #[test]
    fn test_pop_min_order() {
        let mut selector = PrioritySelector::new();
        for (item, priority) in [(1, 50), (2, 10), (3, 40), (4, 20), (5, 30)] {
            selector.insert_or_update(item, priority);
        }

        assert_eq!(selector.len(), 5);
        assert_eq!(
            drain(&mut selector),
            vec![(2, 10), (4, 20), (5, 30), (3, 40), (1, 50)]
        );
        assert!(selector.is_empty());
        assert_eq!(selector.pop_min(), None);
    }

    #[test]
    fn test_decrease_key() {
        let mut selector = PrioritySelector::new();
        selector.insert_or_update(1, 10);
        selector.insert_or_update(2, 20);
        selector.insert_or_update(3, 30);

        selector.insert_or_update(3, 5);
        assert_eq!(selector.len(), 3);
        assert_eq!(selector.priority(&3), Some(5));
        assert_eq!(selector.pop_min(), Some((3, 5)));
    }

    #[test]
    fn test_increase_key() {
        let mut selector = PrioritySelector::new();
        selector.insert_or_update(1, 1);
        selector.insert_or_update(2, 2);
        selector.insert_or_update(3, 3);

        selector.insert_or_update(1, 99);
        assert_eq!(drain(&mut selector), vec![(2, 2), (3, 3), (1, 99)]);
    }

    #[test]
    fn test_contains_tracks_membership() {
        let mut selector = PrioritySelector::new();
        selector.insert_or_update(7, 3);
        assert!(selector.contains(&7));
        assert!(!selector.contains(&8));

        selector.pop_min();
        assert!(!selector.contains(&7));
        assert_eq!(selector.priority(&7), None);
    }

    #[test]
    fn test_many_updates_keep_heap_valid() {
        let mut selector = PrioritySelector::new();
        for item in 0..64 {
            selector.insert_or_update(item, (item * 37) % 64);
        }
        for item in (0..64).step_by(3) {
            selector.insert_or_update(item, -item);
        }

        let popped = drain(&mut selector);
        assert_eq!(popped.len(), 64);
        assert!(popped.windows(2).all(|w| w[0].1 <= w[1].1));
    }
}
