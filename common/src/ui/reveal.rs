use std::collections::HashSet;
use std::time::Duration;

/// Fraction of an element that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Delay added per position when several elements reveal in one batch.
pub const STAGGER: Duration = Duration::from_millis(100);

/// One intersection observation, keyed by an element index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    pub key: usize,
    pub intersecting: bool,
    pub ratio: f64,
}

/// Tracks which elements have faded in. Reveal is one-way: once an element
/// has been shown it is never hidden again and never reported twice.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self, key: usize) -> bool {
        self.revealed.contains(&key)
    }

    /// Processes one observer callback and returns the elements to reveal now,
    /// each with its stagger delay.
    pub fn observe(&mut self, batch: &[Sighting]) -> Vec<(usize, Duration)> {
        let mut reveal = Vec::new();
        for (position, sighting) in batch.iter().enumerate() {
            if !sighting.intersecting || sighting.ratio < REVEAL_THRESHOLD {
                continue;
            }
            if self.revealed.insert(sighting.key) {
                let position = u32::try_from(position).unwrap_or(u32::MAX);
                reveal.push((sighting.key, STAGGER * position));
            }
        }
        reveal
    }
}
