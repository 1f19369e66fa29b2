//! Stepped noise generator with a cosine glide between random levels.

use super::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Tolerance applied to the segment boundary so that increments which should
/// sum to exactly `1.0` (e.g. three steps of `1/3`) still complete on time.
const PHASE_EPSILON: f64 = 1.0e-9;

/// A noise generator which picks a new random level every `step_time`
/// samples.
///
/// Each segment emits `floor((next - current) * cos(phase))`, where `phase`
/// runs from `0.0` towards `1.0` over the segment. When the segment completes,
/// `next` becomes `current`, a new `next` is drawn and `phase` restarts at zero
/// *before* the sample is emitted, so no sample ever uses a stale pair.
///
/// The generator owns its random source. Use
/// [`from_seed()`](Self::from_seed) for reproducible output.
#[derive(Debug, Clone)]
pub struct NoiseGenerator<R = SmallRng> {
    current: i16,
    next: i16,
    phase: f64,
    segments: u64,

    sample_rate: f64,
    rng: R,
}

impl NoiseGenerator<SmallRng> {
    /// A generator with a deterministic random source.
    pub fn from_seed(sample_rate: f64, seed: u64) -> Self {
        Self::new(sample_rate, SmallRng::seed_from_u64(seed))
    }

    /// A generator seeded from the operating system.
    pub fn from_entropy(sample_rate: f64) -> Self {
        Self::new(sample_rate, SmallRng::from_os_rng())
    }
}

impl<R: Rng> NoiseGenerator<R> {
    pub fn new(sample_rate: f64, rng: R) -> Self {
        debug_assert!(sample_rate > 0.0);

        Self {
            current: 0,
            next: 0,
            phase: 0.0,
            segments: 0,
            sample_rate,
            rng,
        }
    }

    /// Fills `out` with consecutive samples.
    ///
    /// `step_time` is read once for the whole buffer; it may differ between
    /// calls without any other bookkeeping.
    pub fn fill(&mut self, out: &mut [i16], step_time: f64) {
        let increment = self.phase_increment(step_time);

        for sample in out.iter_mut() {
            *sample = self.next_sample(increment);
        }
    }

    /// Advances the phase by `increment` and produces one sample.
    pub fn next_sample(&mut self, increment: f64) -> i16 {
        self.phase += increment;

        if self.phase >= 1.0 - PHASE_EPSILON {
            self.start_segment();
        }

        let delta = f64::from(self.next) - f64::from(self.current);
        floor_to_i16(delta * self.phase.cos())
    }

    /// The per-sample phase increment for `step_time`.
    ///
    /// Non-positive and NaN values are raised to
    /// [`MIN_GUARDED_STEP_TIME`]; an infinite step time freezes the phase.
    pub fn phase_increment(&self, step_time: f64) -> f64 {
        let step_time = step_time.max(MIN_GUARDED_STEP_TIME);
        let sample_dt = self.sample_rate.recip();
        let gen_step = (step_time * sample_dt).recip();

        gen_step * sample_dt
    }

    /// The level at the start of the current segment.
    pub const fn current(&self) -> i16 {
        self.current
    }

    /// The target level of the current segment.
    pub const fn next_level(&self) -> i16 {
        self.next
    }

    /// Progress through the current segment, in `[0, 1)`.
    pub const fn phase(&self) -> f64 {
        self.phase
    }

    /// The number of segments completed so far.
    pub const fn segments(&self) -> u64 {
        self.segments
    }

    fn start_segment(&mut self) {
        let magnitude: i16 = self.rng.random_range(0..NOISE_LEVEL_RANGE);
        let sign: i16 = if self.rng.random_bool(0.5) { 1 } else { -1 };

        self.current = self.next;
        self.next = magnitude * sign;
        self.phase = 0.0;
        self.segments += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f64 = DEFAULT_SAMPLE_RATE as f64;

    /// Indices of the samples at which a new segment started.
    fn reset_indices(gen: &mut NoiseGenerator, len: usize, step_time: f64) -> Vec<usize> {
        let increment = gen.phase_increment(step_time);
        let mut indices = Vec::new();

        for i in 0..len {
            let before = gen.segments();
            gen.next_sample(increment);
            if gen.segments() != before {
                indices.push(i);
            }
        }

        indices
    }

    #[test]
    fn samples_stay_in_range() {
        for step_time in [1.0, 1.5, 3.0, 17.3, 64.0, 200.0] {
            let mut gen = NoiseGenerator::from_seed(SR, 7);
            let mut buf = vec![0i16; 4096];
            gen.fill(&mut buf, step_time);

            // the level difference can never exceed two 10-bit magnitudes
            let limit = 2 * i32::from(NOISE_LEVEL_RANGE);
            assert!(buf.iter().all(|&s| i32::from(s).abs() <= limit));
        }
    }

    #[test]
    fn segment_length_follows_step_time() {
        for step_time in [1.0, 2.0, 2.5, 3.0, 10.0, 37.7, 200.0] {
            let mut gen = NoiseGenerator::from_seed(SR, 1);
            let indices = reset_indices(&mut gen, 2000, step_time);
            assert!(indices.len() >= 2, "step_time = {step_time}");

            for pair in indices.windows(2) {
                let len = (pair[1] - pair[0]) as f64;
                assert!(
                    (len - step_time.round()).abs() <= 1.0,
                    "step_time = {step_time}, segment = {len}"
                );
            }
        }
    }

    #[test]
    fn three_sample_segments() {
        let mut gen = NoiseGenerator::from_seed(SR, 3);
        let indices = reset_indices(&mut gen, 9, 3.0);
        assert_eq!(indices, vec![2, 5, 8]);

        let mut gen = NoiseGenerator::from_seed(SR, 3);
        assert_eq!(reset_indices(&mut gen, 8, 3.0).len(), 2);
    }

    #[test]
    fn reset_sample_uses_new_pair() {
        let mut gen = NoiseGenerator::from_seed(SR, 99);
        let increment = gen.phase_increment(4.0);

        for _ in 0..400 {
            let before = gen.segments();
            let sample = gen.next_sample(increment);

            if gen.segments() != before {
                assert_eq!(gen.phase(), 0.0);
                let expected = i32::from(gen.next_level()) - i32::from(gen.current());
                assert_eq!(i32::from(sample), expected);
            }
        }
    }

    #[test]
    fn pair_rotates_on_reset() {
        let mut gen = NoiseGenerator::from_seed(SR, 5);
        let increment = gen.phase_increment(1.0);

        let mut prev_next = gen.next_level();
        for _ in 0..64 {
            gen.next_sample(increment);
            assert_eq!(gen.current(), prev_next);
            assert!(gen.next_level().abs() < NOISE_LEVEL_RANGE);
            prev_next = gen.next_level();
        }
    }

    #[test]
    fn same_seed_same_output() {
        let trajectory = [3.0, 3.0, 150.0, 1.0, 42.0, 7.5];

        let render = |seed| {
            let mut gen = NoiseGenerator::from_seed(SR, seed);
            let mut out = Vec::new();
            for step_time in trajectory {
                let mut buf = [0i16; 128];
                gen.fill(&mut buf, step_time);
                out.extend_from_slice(&buf);
            }
            out
        };

        assert_eq!(render(1234), render(1234));
        assert_ne!(render(1234), render(4321));
    }

    #[test]
    fn degenerate_step_time_is_guarded() {
        let mut gen = NoiseGenerator::from_seed(SR, 11);

        for step_time in [0.0, -5.0, f64::NAN, f64::NEG_INFINITY] {
            let increment = gen.phase_increment(step_time);
            assert!(increment.is_finite() && increment > 0.0);

            let mut buf = [0i16; 32];
            gen.fill(&mut buf, step_time);
            assert!(gen.phase().is_finite());
            assert!((0.0..1.0).contains(&gen.phase()));
        }

        let increment = gen.phase_increment(f64::INFINITY);
        assert_eq!(increment, 0.0);
        let mut buf = [0i16; 32];
        gen.fill(&mut buf, f64::INFINITY);
        assert!(gen.phase().is_finite());
    }

    #[test]
    fn phase_stays_below_one() {
        let mut gen = NoiseGenerator::from_seed(SR, 8);
        let mut buf = [0i16; 1];

        for i in 0..10_000 {
            let step_time = 1.0 + (i % 200) as f64 * 0.37;
            gen.fill(&mut buf, step_time);
            assert!((0.0..1.0).contains(&gen.phase()));
        }
    }

    #[test]
    fn starts_silent() {
        let gen = NoiseGenerator::from_seed(SR, 0);
        assert_eq!((gen.current(), gen.next_level(), gen.phase()), (0, 0, 0.0));
        assert_eq!(gen.segments(), 0);
    }
}
