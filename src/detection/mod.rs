//! Camera-based mood detection.
//!
//! The camera and the classifier are both traits, so the random stand-in
//! classifier can be replaced by a real model without touching callers.

mod camera;
mod classifier;
mod detector;

pub use camera::{
    Camera, CameraError, CameraStream, Frame, MockCamera, MockStream, Resolution, TrackGuard,
};
pub use classifier::{Detection, FixedClassifier, MoodClassifier, RandomClassifier};
pub use detector::MoodDetector;
