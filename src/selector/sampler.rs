use crate::error::{WsError, WsResult};
use fastrand::Rng;

/// Picks one index out of a scored candidate list.
///
/// Temperature 0 is a deterministic argmax (first occurrence wins ties).
/// Any positive temperature draws from `softmax(score / T)` using the
/// caller's rng.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    temperature: f32,
}

impl Sampler {
    pub fn new(temperature: f32) -> WsResult<Self> {
        if !temperature.is_finite() || temperature < 0.0 {
            return Err(WsError::InvalidInput(format!(
                "temperature must be a finite value >= 0, got {}",
                temperature
            )));
        }
        Ok(Self { temperature })
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn is_deterministic(&self) -> bool {
        self.temperature == 0.0
    }

    /// `None` only for an empty slice.
    pub fn pick(&self, scores: &[f32], rng: &mut Rng) -> Option<usize> {
        if scores.is_empty() {
            return None;
        }
        if self.is_deterministic() {
            return Some(argmax(scores));
        }

        let probs = self.probabilities(scores);
        let target = rng.f64();
        let mut cumulative = 0.0;
        for (i, &p) in probs.iter().enumerate() {
            cumulative += p;
            if target < cumulative {
                return Some(i);
            }
        }
        // Rounding left the cumulative sum just under 1.0
        probs.iter().rposition(|&p| p > 0.0)
    }

    /// Selection probability of every candidate. At temperature 0 all mass
    /// sits on the argmax.
    pub fn probabilities(&self, scores: &[f32]) -> Vec<f64> {
        if scores.is_empty() {
            return Vec::new();
        }
        if self.is_deterministic() {
            let best = argmax(scores);
            return (0..scores.len())
                .map(|i| if i == best { 1.0 } else { 0.0 })
                .collect();
        }

        let t = self.temperature as f64;
        let scaled: Vec<f64> = scores.iter().map(|&s| s as f64 / t).collect();
        let max = scaled.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let weights: Vec<f64> = scaled.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = weights.iter().sum();
        weights.iter().map(|w| w / total).collect()
    }
}

fn argmax(scores: &[f32]) -> usize {
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_temperature() {
        assert!(Sampler::new(-0.1).is_err());
        assert!(Sampler::new(f32::NAN).is_err());
        assert!(Sampler::new(0.0).is_ok());
    }

    #[test]
    fn argmax_prefers_first_on_ties() {
        let sampler = Sampler::new(0.0).unwrap();
        let mut rng = Rng::with_seed(1);
        assert_eq!(sampler.pick(&[70.0, 90.0, 90.0, 10.0], &mut rng), Some(1));
    }

    #[test]
    fn empty_candidates_yield_none() {
        let sampler = Sampler::new(0.5).unwrap();
        let mut rng = Rng::with_seed(1);
        assert_eq!(sampler.pick(&[], &mut rng), None);
    }

    #[test]
    fn softmax_is_stable_for_large_scores() {
        let sampler = Sampler::new(0.01).unwrap();
        let probs = sampler.probabilities(&[100.0, 99.0]);
        assert!(probs.iter().all(|p| p.is_finite()));
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(probs[0] > 0.999);
    }

    #[test]
    fn high_temperature_flattens() {
        let sampler = Sampler::new(1_000.0).unwrap();
        let probs = sampler.probabilities(&[90.0, 60.0, 30.0]);
        assert!(probs.iter().all(|&p| (p - 1.0 / 3.0).abs() < 0.02));
    }
}
