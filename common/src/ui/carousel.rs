use std::time::Duration;

/// Interval between automatic slide changes.
pub const AUTO_ADVANCE: Duration = Duration::from_secs(6);

/// Index arithmetic for a looping carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(self) -> usize {
        self.current
    }

    pub fn len(self) -> usize {
        self.len
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Jumps to slide `n`, wrapping in both directions. A carousel without
    /// slides stays at 0.
    pub fn show(&mut self, n: isize) -> usize {
        if let Ok(len) = isize::try_from(self.len) {
            if len > 0 {
                // rem_euclid of a positive modulus is non-negative and < len
                self.current = n.rem_euclid(len).unsigned_abs();
            }
        }
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.step(1)
    }

    pub fn prev(&mut self) -> usize {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> usize {
        let current = isize::try_from(self.current).unwrap_or(0);
        self.show(current + delta)
    }
}
