use std::time::Duration;

/// Particles drifting behind the hero section.
pub const PARTICLE_COUNT: usize = 30;

const MAX_DELAY_SECS: f64 = 15.0;
const MIN_DURATION_SECS: f64 = 10.0;
const DURATION_SPREAD_SECS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position as a percentage of the container width.
    pub left_pct: f64,
    pub delay: Duration,
    pub duration: Duration,
}

impl Particle {
    /// Inline style for the particle element.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left_pct,
            self.delay.as_secs_f64(),
            self.duration.as_secs_f64()
        )
    }
}

/// Lays out `count` particles. `random` yields values in `[0, 1)`; anything
/// outside is clamped.
pub fn scatter(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    let mut unit = move || {
        let r = random();
        if r.is_finite() { r.clamp(0.0, 1.0) } else { 0.0 }
    };
    (0..count)
        .map(|_| Particle {
            left_pct: unit() * 100.0,
            delay: Duration::from_secs_f64(unit() * MAX_DELAY_SECS),
            duration: Duration::from_secs_f64(MIN_DURATION_SECS + unit() * DURATION_SPREAD_SECS),
        })
        .collect()
}
