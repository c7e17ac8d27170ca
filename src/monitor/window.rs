use std::collections::VecDeque;

/// Fixed-capacity FIFO buffer of the most recent items, oldest first.
///
/// Pushing beyond capacity evicts the oldest item; seeding replaces the
/// contents with the last `capacity` items of the supplied sequence while
/// preserving their order.
#[derive(Debug, Clone)]
pub struct SlidingWindow<T> {
    buf: VecDeque<T>,
    capacity: usize,
}

impl<T> SlidingWindow<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Appends `item`, returning the evicted oldest item when full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.buf.len() == self.capacity {
            self.buf.pop_front()
        } else {
            None
        };
        self.buf.push_back(item);
        evicted
    }

    /// Replaces the contents with the last `capacity` items of `items`,
    /// in the order they are supplied.
    pub fn seed<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.buf.clear();
        for item in items {
            self.push(item);
        }
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn latest(&self) -> Option<&T> {
        self.buf.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }
}

impl<T: Clone> SlidingWindow<T> {
    /// Owned copy of the contents, oldest first.
    pub fn snapshot(&self) -> Vec<T> {
        self.buf.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_below_capacity_evicts_nothing() {
        let mut window = SlidingWindow::new(3);
        assert_eq!(window.push(1), None);
        assert_eq!(window.push(2), None);
        assert_eq!(window.snapshot(), vec![1, 2]);
    }

    #[test]
    fn push_beyond_capacity_evicts_oldest_in_fifo_order() {
        let mut window = SlidingWindow::new(3);
        for i in 1..=3 {
            assert_eq!(window.push(i), None);
        }
        assert_eq!(window.push(4), Some(1));
        assert_eq!(window.push(5), Some(2));
        assert_eq!(window.snapshot(), vec![3, 4, 5]);
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn repeated_eviction_keeps_last_n_in_push_order() {
        let mut window = SlidingWindow::new(10);
        for i in 0..100 {
            window.push(i);
        }
        assert_eq!(window.snapshot(), (90..100).collect::<Vec<_>>());
    }

    #[test]
    fn seed_keeps_last_n_items() {
        let mut window = SlidingWindow::new(10);
        window.seed(1..=20);
        assert_eq!(window.snapshot(), (11..=20).collect::<Vec<_>>());
        assert_eq!(window.latest(), Some(&20));
    }

    #[test]
    fn seed_replaces_previous_contents() {
        let mut window = SlidingWindow::new(5);
        window.seed(1..=5);
        window.seed(30..=32);
        assert_eq!(window.snapshot(), vec![30, 31, 32]);
    }

    #[test]
    fn clear_empties_the_window() {
        let mut window = SlidingWindow::new(4);
        window.seed(1..=4);
        window.clear();
        assert!(window.is_empty());
        assert_eq!(window.latest(), None);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut window = SlidingWindow::new(0);
        assert_eq!(window.capacity(), 1);
        window.push(1);
        assert_eq!(window.push(2), Some(1));
        assert_eq!(window.snapshot(), vec![2]);
    }
}
