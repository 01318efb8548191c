/// Scroll offset past which the header switches to its compact style.
pub const HEADER_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    /// The header carries its `scrolled` style.
    pub header_scrolled: bool,
    /// The floating form is tucked away while the visitor scrolls down.
    pub floating_hidden: bool,
}

/// Remembers the previous scroll offset to tell scrolling up from down.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollTracker {
    last_y: f64,
    floating_hidden: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, y: f64) -> ScrollState {
        if y > self.last_y && y > HEADER_THRESHOLD {
            self.floating_hidden = true;
        } else if y < self.last_y || y <= HEADER_THRESHOLD {
            self.floating_hidden = false;
        }
        self.last_y = y;
        ScrollState {
            header_scrolled: y > HEADER_THRESHOLD,
            floating_hidden: self.floating_hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_style_follows_threshold() {
        let mut tracker = ScrollTracker::new();
        assert!(!tracker.update(100.0).header_scrolled);
        assert!(tracker.update(101.0).header_scrolled);
        assert!(!tracker.update(20.0).header_scrolled);
    }

    #[test]
    fn floating_form_hides_on_scroll_down_and_returns_on_scroll_up() {
        let mut tracker = ScrollTracker::new();
        assert!(!tracker.update(50.0).floating_hidden);
        assert!(tracker.update(400.0).floating_hidden);
        assert!(tracker.update(400.0).floating_hidden);
        assert!(!tracker.update(350.0).floating_hidden);
    }
}
