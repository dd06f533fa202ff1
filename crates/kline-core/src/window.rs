//! Circular buffer for streaming calculations.
//!
//! The [`RingBuffer`] keeps the trailing window of a streaming indicator. Its
//! iterator yields values oldest first, the same order a batch computation
//! walks a slice window, so both paths accumulate identical floating-point sums.

/// A fixed-capacity circular buffer.
///
/// When the buffer is full, pushing a new value evicts the oldest one.
///
/// # Example
///
/// ```rust
/// use kline_core::RingBuffer;
///
/// let mut buffer: RingBuffer<f64> = RingBuffer::new(3);
/// buffer.push(1.0);
/// buffer.push(2.0);
/// buffer.push(3.0);
/// assert_eq!(buffer.push(4.0), Some(1.0));
///
/// let window: Vec<f64> = buffer.iter().collect();
/// assert_eq!(window, vec![2.0, 3.0, 4.0]);
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer<T: Copy> {
    /// Storage; grows up to `capacity`, then is overwritten in place.
    buffer: Vec<T>,
    /// Next write position once full (also the oldest element).
    head: usize,
    capacity: usize,
}

impl<T: Copy> RingBuffer<T> {
    /// Create a new ring buffer with the specified capacity.
    ///
    /// A capacity of zero is bumped to one; indicator constructors validate
    /// their periods before a buffer is ever filled. Storage grows on `push`,
    /// so a window longer than the data never allocates its full capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Vec::new(),
            head: 0,
            capacity,
        }
    }

    /// Push a value, returning the evicted value if the buffer was full.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.buffer.len() < self.capacity {
            self.buffer.push(value);
            return None;
        }

        let old = core::mem::replace(&mut self.buffer[self.head], value);
        self.head = (self.head + 1) % self.capacity;
        Some(old)
    }

    /// Returns `true` if the buffer is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Returns the number of elements in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the capacity of the buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = T> + Clone + '_ {
        let (newer, older) = self.buffer.split_at(self.head);
        older.iter().chain(newer.iter()).copied()
    }

    /// Remove every value, keeping the capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.head = 0;
    }
}
