/// Source of uniform samples in `[0, 1)`.
///
/// Every random decision in the engine (kickoff velocities, possession
/// assignment, wander jitter) goes through this trait, so tests can pin the
/// sequence with [`SequenceRandom`].
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;

    /// Uniform sample in `[min, max)`.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let idx = (self.next_f32() * len as f32) as usize;
        idx.min(len.saturating_sub(1))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    #[inline]
    fn next_f32(&mut self) -> f32 {
        rand::random::<f32>()
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f32>) -> Self {
        SequenceRandom { values, cursor: 0 }
    }

    /// Always returns `value`.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.5;
        }

        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;

        value.clamp(0.0, 0.999_999)
    }
}
