use instant::Instant;

/// Monotonic seconds since the render loop started.
#[derive(Debug, Clone, Copy)]
pub struct ElapsedClock {
    start: Instant,
}

impl Default for ElapsedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ElapsedClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}
