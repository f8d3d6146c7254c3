use std::time::Duration;

/// Time each testimonial stays on screen before the next one.
pub const ROTATE_EVERY: Duration = Duration::from_secs(15);

/// Index rotator over a list of `len` items.
///
/// `index` is always a valid index while `len > 0`. An empty carousel has no
/// current item and ignores every command.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the rotation timer should run at all.
    pub fn is_active(&self) -> bool {
        !self.is_empty()
    }

    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current() == Some(index)
    }

    /// Moves to the next item, wrapping after the last one.
    pub fn advance(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = if self.index + 1 >= self.len {
            0
        } else {
            self.index + 1
        };
    }

    /// Jumps to `index`. Out-of-range selections are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Replaces the item count, keeping the index valid.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_to_start() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.current(), Some(0));
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.current(), Some(2));
        carousel.advance();
        assert_eq!(carousel.current(), Some(0));
    }

    #[test]
    fn test_index_always_in_range() {
        for len in 1..6 {
            let mut carousel = Carousel::new(len);
            for _ in 0..(len * 4 + 1) {
                carousel.advance();
                let index = carousel.current().expect("non-empty carousel has an index");
                assert!(index < len);
            }
        }
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut carousel = Carousel::new(1);
        carousel.advance();
        assert_eq!(carousel.current(), Some(0));
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        assert!(!carousel.is_active());
        carousel.advance();
        assert_eq!(carousel.current(), None);
        assert!(!carousel.select(0));
        assert_eq!(carousel, Carousel::default());
    }

    #[test]
    fn test_select_takes_effect_immediately() {
        let mut carousel = Carousel::new(4);
        assert!(carousel.select(3));
        assert!(carousel.is_current(3));
        carousel.advance();
        assert_eq!(carousel.current(), Some(0));
        assert!(!carousel.select(4));
        assert_eq!(carousel.current(), Some(0));
    }

    #[test]
    fn test_resize_keeps_valid_index() {
        let mut carousel = Carousel::new(5);
        carousel.select(4);
        carousel.resize(2);
        assert_eq!(carousel.current(), Some(0));
        carousel.resize(0);
        assert_eq!(carousel.current(), None);
    }
}
