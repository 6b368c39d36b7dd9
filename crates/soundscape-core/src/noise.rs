//! Sample generators for the noise beds and transient bursts.
//!
//! Every function fills a fresh buffer from the supplied RNG. Content is
//! random; only the spectral shaping is fixed.

use crate::constants::{BROWN_LEAK, BROWN_MAKEUP_GAIN};
use rand::Rng;

#[inline]
fn white_sample<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(-1.0_f32..=1.0)
}

/// Number of samples covering `seconds` at `sample_rate`, at least one.
pub fn buffer_len(sample_rate: f32, seconds: f32) -> usize {
    ((sample_rate * seconds) as usize).max(1)
}

/// Independent uniform samples in [-1, 1].
pub fn white<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f32> {
    (0..len).map(|_| white_sample(rng)).collect()
}

/// Six leaky integrators with fixed decay/weight pairs approximating a
/// -3 dB/octave slope, plus a one-sample direct term.
#[derive(Clone, Debug, Default)]
pub struct PinkFilter {
    b: [f32; 7],
}

impl PinkFilter {
    const DECAY: [f32; 6] = [0.99886, 0.99332, 0.96900, 0.86650, 0.55000, -0.7616];
    const WEIGHT: [f32; 6] = [0.0555179, 0.0750759, 0.1538520, 0.3104856, 0.5329522, -0.0168980];
    const DIRECT: f32 = 0.5362;
    const DELAYED: f32 = 0.115926;
    const OUTPUT_SCALE: f32 = 0.11;

    pub fn process(&mut self, white: f32) -> f32 {
        for i in 0..6 {
            self.b[i] = Self::DECAY[i] * self.b[i] + white * Self::WEIGHT[i];
        }
        let sum: f32 = self.b.iter().sum::<f32>() + white * Self::DIRECT;
        self.b[6] = white * Self::DELAYED;
        sum * Self::OUTPUT_SCALE
    }
}

pub fn pink<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f32> {
    let mut filter = PinkFilter::default();
    (0..len).map(|_| filter.process(white_sample(rng))).collect()
}

/// Leaky random walk: `out = (prev + k*white) / (1 + k)`, then makeup gain.
pub fn brown<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f32> {
    let mut last = 0.0_f32;
    (0..len)
        .map(|_| {
            let w = white_sample(rng);
            last = (last + BROWN_LEAK * w) / (1.0 + BROWN_LEAK);
            last * BROWN_MAKEUP_GAIN
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Mean absolute first difference; a cheap proxy for high-frequency energy.
    fn roughness(buf: &[f32]) -> f32 {
        let sum: f32 = buf.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
        sum / (buf.len() - 1) as f32
    }

    #[test]
    fn buffer_len_never_zero() {
        assert_eq!(buffer_len(48_000.0, 2.0), 96_000);
        assert_eq!(buffer_len(48_000.0, 0.0), 1);
    }

    #[test]
    fn white_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let buf = white(&mut rng, 10_000);
        assert_eq!(buf.len(), 10_000);
        assert!(buf.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn colored_noise_is_smoother_than_white() {
        let mut rng = StdRng::seed_from_u64(11);
        let w = white(&mut rng, 20_000);
        let p = pink(&mut rng, 20_000);
        let b = brown(&mut rng, 20_000);
        assert!(roughness(&p) < roughness(&w));
        assert!(roughness(&b) < roughness(&p));
    }

    #[test]
    fn colored_noise_stays_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        for buf in [pink(&mut rng, 50_000), brown(&mut rng, 50_000)] {
            assert!(buf.iter().all(|s| s.is_finite() && s.abs() <= 1.5));
        }
    }
}
