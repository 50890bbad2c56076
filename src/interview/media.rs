//! Capture stream lifecycle.
//!
//! The camera/microphone stream is the one resource under explicit lifecycle
//! management: at most one stream is active at a time, acquired on entering
//! the lobby or the interview and released before the other is acquired or
//! when the session ends.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Which capture pipeline a session phase needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Camera-only preview shown in the lobby.
    CameraPreview,
    /// Full camera + microphone stream for the live interview.
    Interview,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaAccessError {
    #[error("camera permission was denied")]
    PermissionDenied,
    #[error("no capture device is available")]
    DeviceMissing,
    #[error("capture device failed: {0}")]
    Device(String),
}

/// Handle to an acquired capture stream.
///
/// `stop` is idempotent: only the first call releases the underlying track.
/// Clones share the same track, so a clone held by a caller observes the
/// release.
#[derive(Debug, Clone)]
pub struct MediaStream {
    kind: StreamKind,
    track_id: String,
    active: Arc<AtomicBool>,
}

impl MediaStream {
    pub fn new(kind: StreamKind, track_id: impl Into<String>) -> Self {
        Self {
            kind,
            track_id: track_id.into(),
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn kind(&self) -> StreamKind {
        self.kind
    }

    pub fn track_id(&self) -> &str {
        &self.track_id
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Release the track. Returns `true` only on the call that actually
    /// released it.
    pub fn stop(&self) -> bool {
        self.active.swap(false, Ordering::SeqCst)
    }
}

/// Boundary to the host's capture devices.
#[async_trait]
pub trait MediaGateway: Send + Sync {
    async fn acquire(&self, kind: StreamKind) -> Result<MediaStream, MediaAccessError>;
}

/// Gateway that hands out synthetic tracks. Used where no real capture
/// device exists (headless embedding, tests).
#[derive(Default)]
pub struct LoopbackGateway {
    counter: AtomicUsize,
}

impl LoopbackGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many streams have been handed out so far.
    pub fn issued(&self) -> usize {
        self.counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaGateway for LoopbackGateway {
    async fn acquire(&self, kind: StreamKind) -> Result<MediaStream, MediaAccessError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(MediaStream::new(kind, format!("track-{}", n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_is_idempotent() {
        let stream = MediaStream::new(StreamKind::CameraPreview, "t0");
        assert!(stream.is_active());
        assert!(stream.stop());
        assert!(!stream.stop());
        assert!(!stream.is_active());
    }

    #[test]
    fn test_clones_share_the_track() {
        let stream = MediaStream::new(StreamKind::Interview, "t1");
        let observer = stream.clone();
        stream.stop();
        assert!(!observer.is_active());
    }

    #[tokio::test]
    async fn test_loopback_gateway_counts_streams() {
        let gateway = LoopbackGateway::new();
        let first = gateway.acquire(StreamKind::CameraPreview).await.expect("acquire");
        let second = gateway.acquire(StreamKind::Interview).await.expect("acquire");
        assert_eq!(gateway.issued(), 2);
        assert_ne!(first.track_id(), second.track_id());
    }
}
