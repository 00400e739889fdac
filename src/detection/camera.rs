//! Camera permission boundary.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("camera unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// One captured video frame, RGB8 row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub resolution: Resolution,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn blank(resolution: Resolution) -> Self {
        let len = resolution.width as usize * resolution.height as usize * 3;
        Self {
            resolution,
            pixels: vec![0; len],
        }
    }
}

/// An open video stream. Tracks stay live until [`CameraStream::stop`].
pub trait CameraStream: Send {
    fn capture(&mut self) -> Frame;

    /// Release every track. Must be idempotent.
    fn stop(&mut self);

    fn is_live(&self) -> bool;
}

/// Something that can be asked for a video stream.
pub trait Camera {
    type Stream: CameraStream;

    fn open(
        &self,
        resolution: Resolution,
    ) -> impl Future<Output = Result<Self::Stream, CameraError>> + Send;
}

/// Stops the wrapped stream when dropped, so tracks are released on every
/// exit path, cancellation included.
pub struct TrackGuard<S: CameraStream> {
    stream: S,
}

impl<S: CameraStream> TrackGuard<S> {
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    pub fn capture(&mut self) -> Frame {
        self.stream.capture()
    }

    pub fn stop(&mut self) {
        if self.stream.is_live() {
            debug!("Stopping camera tracks");
            self.stream.stop();
        }
    }
}

impl<S: CameraStream> Drop for TrackGuard<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[derive(Debug, Default)]
struct MockState {
    opened: AtomicUsize,
    live_tracks: AtomicUsize,
    last_resolution: Mutex<Option<Resolution>>,
}

/// In-process camera that hands out blank frames, or refuses access.
/// Clones share counters, so tests can watch track lifetimes.
#[derive(Debug, Clone, Default)]
pub struct MockCamera {
    state: Arc<MockState>,
    refusal: Option<CameraError>,
}

impl MockCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// A camera whose every `open` fails with `error`.
    pub fn refusing(error: CameraError) -> Self {
        Self {
            refusal: Some(error),
            ..Self::default()
        }
    }

    pub fn open_count(&self) -> usize {
        self.state.opened.load(Ordering::SeqCst)
    }

    pub fn live_tracks(&self) -> usize {
        self.state.live_tracks.load(Ordering::SeqCst)
    }

    pub fn last_resolution(&self) -> Option<Resolution> {
        *self
            .state
            .last_resolution
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Camera for MockCamera {
    type Stream = MockStream;

    fn open(
        &self,
        resolution: Resolution,
    ) -> impl Future<Output = Result<MockStream, CameraError>> + Send {
        let state = self.state.clone();
        let refusal = self.refusal.clone();
        async move {
            *state
                .last_resolution
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(resolution);
            if let Some(err) = refusal {
                return Err(err);
            }
            state.opened.fetch_add(1, Ordering::SeqCst);
            state.live_tracks.fetch_add(1, Ordering::SeqCst);
            Ok(MockStream {
                state,
                resolution,
                live: true,
            })
        }
    }
}

#[derive(Debug)]
pub struct MockStream {
    state: Arc<MockState>,
    resolution: Resolution,
    live: bool,
}

impl CameraStream for MockStream {
    fn capture(&mut self) -> Frame {
        Frame::blank(self.resolution)
    }

    fn stop(&mut self) {
        if self.live {
            self.live = false;
            self.state.live_tracks.fetch_sub(1, Ordering::SeqCst);
        }
    }

    fn is_live(&self) -> bool {
        self.live
    }
}
