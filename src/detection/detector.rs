use std::time::Duration;

use tracing::{info, warn};

use super::camera::{Camera, CameraError, Resolution, TrackGuard};
use super::classifier::{MoodClassifier, RandomClassifier};
use crate::config::DetectionConfig;
use crate::error::MoodStyleError;
use crate::mood::{MoodEntry, MoodStore};
use crate::notify::Notifier;

/// Runs detection passes: open the camera, wait, classify, record.
pub struct MoodDetector<C: MoodClassifier> {
    classifier: C,
    delay: Duration,
    resolution: Resolution,
}

impl MoodDetector<RandomClassifier> {
    /// Detector with the random stand-in classifier.
    pub fn from_config(config: &DetectionConfig) -> Result<Self, MoodStyleError> {
        Ok(Self::new(RandomClassifier::new(config)?, config))
    }
}

impl<C: MoodClassifier> MoodDetector<C> {
    pub fn new(classifier: C, config: &DetectionConfig) -> Self {
        Self {
            classifier,
            delay: Duration::from_millis(config.delay_ms),
            resolution: Resolution {
                width: config.width,
                height: config.height,
            },
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// One detection pass.
    ///
    /// If the camera cannot be opened the user gets an error toast and the
    /// store is left alone. Otherwise, after the configured delay, the
    /// classified mood is written through [`MoodStore::set_detected_mood`].
    /// Camera tracks are released on every exit path, including when the
    /// returned future is dropped mid-wait.
    pub async fn detect<K: Camera>(
        &mut self,
        camera: &K,
        store: &MoodStore,
        notifier: &dyn Notifier,
    ) -> Result<MoodEntry, MoodStyleError> {
        info!(
            "Requesting camera at {}x{}",
            self.resolution.width, self.resolution.height
        );

        let stream = match camera.open(self.resolution).await {
            Ok(stream) => stream,
            Err(e) => {
                warn!("Camera access failed: {}", e);
                notifier.error(permission_message(&e));
                return Err(e.into());
            }
        };
        let mut tracks = TrackGuard::new(stream);

        notifier.info("Analyzing your mood...".to_string());
        tokio::time::sleep(self.delay).await;

        let frame = tracks.capture();
        let detection = self.classifier.classify(&frame);
        tracks.stop();

        let entry = store.set_detected_mood(detection.mood, detection.confidence)?;
        notifier.success(format!(
            "Mood detected: {} ({:.0}% confidence)",
            entry.mood,
            entry.confidence * 100.0
        ));
        Ok(entry)
    }
}

fn permission_message(err: &CameraError) -> String {
    match err {
        CameraError::PermissionDenied => {
            "Camera access denied. Please allow camera access to detect your mood.".to_string()
        }
        CameraError::Unavailable(reason) => format!("Camera unavailable: {}", reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::camera::MockCamera;
    use crate::detection::classifier::{Detection, FixedClassifier};
    use crate::mood::{ConfidencePolicy, Mood, LIVE_DETECTION_CONTEXT};
    use crate::notify::{NotificationCenter, ToastKind};

    fn fixed(mood: Mood, confidence: f32) -> MoodDetector<FixedClassifier> {
        MoodDetector::new(
            FixedClassifier(Detection { mood, confidence }),
            &DetectionConfig::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_detect_records_entry_and_releases_tracks() {
        let camera = MockCamera::new();
        let store = MoodStore::default();
        let toasts = NotificationCenter::new();
        let mut detector = fixed(Mood::Elegant, 0.91);

        let entry = detector.detect(&camera, &store, &toasts).await.unwrap();

        assert_eq!(entry.mood, Mood::Elegant);
        assert_eq!(entry.context.as_deref(), Some(LIVE_DETECTION_CONTEXT));
        assert_eq!(store.detected_mood(), Some(Mood::Elegant));
        assert_eq!(store.mood_history().len(), 1);
        assert_eq!(camera.live_tracks(), 0);
        assert_eq!(
            camera.last_resolution(),
            Some(Resolution {
                width: 640,
                height: 480
            })
        );
        assert_eq!(toasts.latest().unwrap().kind, ToastKind::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_detect_waits_for_delay() {
        let camera = MockCamera::new();
        let store = MoodStore::default();
        let toasts = NotificationCenter::new();
        let mut detector = fixed(Mood::Calm, 0.8);

        let start = tokio::time::Instant::now();
        detector.detect(&camera, &store, &toasts).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_denied_camera_leaves_store_untouched() {
        let camera = MockCamera::refusing(CameraError::PermissionDenied);
        let store = MoodStore::default();
        let toasts = NotificationCenter::new();
        let mut detector = fixed(Mood::Happy, 0.9);

        let result = detector.detect(&camera, &store, &toasts).await;

        assert!(matches!(
            result,
            Err(MoodStyleError::Camera(CameraError::PermissionDenied))
        ));
        assert!(store.mood_history().is_empty());
        assert!(store.detected_mood().is_none());
        assert_eq!(store.snapshot().revision, 0);
        assert_eq!(toasts.count(ToastKind::Error), 1);
        assert!(toasts.latest().unwrap().message.contains("denied"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_pass_releases_tracks() {
        let camera = MockCamera::new();
        let store = MoodStore::default();
        let toasts = NotificationCenter::new();
        let mut detector = fixed(Mood::Happy, 0.9);

        let outcome = tokio::time::timeout(
            Duration::from_secs(1),
            detector.detect(&camera, &store, &toasts),
        )
        .await;

        assert!(outcome.is_err(), "pass should have been cut short");
        assert_eq!(camera.open_count(), 1);
        assert_eq!(camera.live_tracks(), 0);
        assert!(store.mood_history().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_confidence_still_releases_tracks() {
        let camera = MockCamera::new();
        let store = MoodStore::new(50, ConfidencePolicy::Reject);
        let toasts = NotificationCenter::new();
        let mut detector = fixed(Mood::Happy, 1.4);

        let result = detector.detect(&camera, &store, &toasts).await;

        assert!(matches!(result, Err(MoodStyleError::InvalidConfidence(_))));
        assert_eq!(camera.live_tracks(), 0);
        assert!(store.mood_history().is_empty());
    }
}
