use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::camera::Frame;
use crate::config::DetectionConfig;
use crate::error::MoodStyleError;
use crate::mood::Mood;

/// Result of classifying one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub mood: Mood,
    pub confidence: f32,
}

/// Turns a camera frame into a mood. Swap implementations without touching
/// the detector.
pub trait MoodClassifier: Send {
    fn classify(&mut self, frame: &Frame) -> Detection;
}

/// Stand-in classifier: ignores the frame and draws a random candidate with
/// a confidence uniformly distributed in `[min_confidence, max_confidence]`.
pub struct RandomClassifier {
    rng: StdRng,
    candidates: Vec<Mood>,
    min_confidence: f32,
    max_confidence: f32,
}

impl RandomClassifier {
    /// Fails when the candidate list is empty or the confidence range is
    /// not a valid sub-range of `[0, 1]`.
    pub fn new(config: &DetectionConfig) -> Result<Self, MoodStyleError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic classifier for tests and demos.
    pub fn seeded(config: &DetectionConfig, seed: u64) -> Result<Self, MoodStyleError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &DetectionConfig, rng: StdRng) -> Result<Self, MoodStyleError> {
        config
            .validate()
            .map_err(|e| MoodStyleError::Config(format!("{:#}", e)))?;
        Ok(Self {
            rng,
            candidates: config.candidates.clone(),
            min_confidence: config.min_confidence,
            max_confidence: config.max_confidence,
        })
    }

    pub fn candidates(&self) -> &[Mood] {
        &self.candidates
    }
}

impl MoodClassifier for RandomClassifier {
    fn classify(&mut self, _frame: &Frame) -> Detection {
        let index = self.rng.random_range(0..self.candidates.len());
        let mood = self.candidates[index].clone();
        let confidence = self
            .rng
            .random_range(self.min_confidence..=self.max_confidence);
        Detection { mood, confidence }
    }
}

/// Always reports the same mood. Handy where randomness gets in the way.
pub struct FixedClassifier(pub Detection);

impl MoodClassifier for FixedClassifier {
    fn classify(&mut self, _frame: &Frame) -> Detection {
        self.0.clone()
    }
}
