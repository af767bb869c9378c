//! Camera scan loop.
//!
//! Frames are pulled from a [`FrameSource`] and handed to a [`QrDecoder`] until
//! a code is decoded, the source runs dry, or the scan is stopped through its
//! `CancellationToken`. A frame without a code is retried immediately with no
//! backoff; the loop yields to the runtime between frames.
//!
//! Camera access and QR decoding are external capabilities; this module only
//! drives them.

use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::analysis::{analyze, Analysis};
use crate::classifier::Classifier;
use crate::error_handling::ScanError;

/// A single captured image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Raw pixel buffer as produced by the camera
    pub pixels: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

impl Frame {
    /// Wraps a pixel buffer with its dimensions.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }
}

/// Supplies camera frames.
pub trait FrameSource {
    /// Acquires the camera. Called once before the first frame.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::CameraUnavailable` when there is no camera or access
    /// is denied. The scan ends without retrying.
    fn open(&mut self) -> Result<(), ScanError>;

    /// The next frame, or `None` once the source is exhausted.
    fn next_frame(&mut self) -> Option<Frame>;

    /// Releases the camera. Called once when the scan ends.
    fn close(&mut self) {}
}

/// Turns a frame into the text of the QR code it shows, if any.
pub trait QrDecoder {
    /// Decoded text, or `None` when no code is visible in `frame`.
    fn decode(&self, frame: &Frame) -> Option<String>;
}

impl<F> QrDecoder for F
where
    F: Fn(&Frame) -> Option<String>,
{
    fn decode(&self, frame: &Frame) -> Option<String> {
        self(frame)
    }
}

/// Polls `source` until `decoder` finds a code.
///
/// Returns `Ok(Some(text))` for the first decoded frame and `Ok(None)` when
/// the scan is cancelled or the source has no more frames.
///
/// # Errors
///
/// Returns the source's `ScanError` if the camera cannot be opened.
pub async fn scan_until_decoded<S, D>(
    source: &mut S,
    decoder: &D,
    cancel: &CancellationToken,
) -> Result<Option<String>, ScanError>
where
    S: FrameSource + ?Sized,
    D: QrDecoder + ?Sized,
{
    if let Err(e) = source.open() {
        warn!("Unable to start scan: {}", e);
        return Err(e);
    }

    let mut frames = 0usize;
    let decoded = loop {
        if cancel.is_cancelled() {
            info!("Scan stopped after {} frame(s)", frames);
            break None;
        }

        let Some(frame) = source.next_frame() else {
            debug!("Frame source exhausted after {} frame(s)", frames);
            break None;
        };
        frames += 1;

        if let Some(text) = decoder.decode(&frame) {
            info!("Decoded QR code after {} frame(s)", frames);
            break Some(text);
        }

        tokio::task::yield_now().await;
    };

    source.close();
    Ok(decoded)
}

/// Scans for a code and analyzes it as soon as one is decoded.
///
/// Returns `Ok(None)` when the scan ends without a code.
///
/// # Errors
///
/// Returns `ScanError::CameraUnavailable` if the camera cannot be opened.
pub async fn scan_and_analyze<S, D>(
    classifier: &Classifier,
    source: &mut S,
    decoder: &D,
    cancel: &CancellationToken,
    delay: Duration,
) -> Result<Option<Analysis>, ScanError>
where
    S: FrameSource + ?Sized,
    D: QrDecoder + ?Sized,
{
    match scan_until_decoded(source, decoder, cancel).await? {
        Some(text) => Ok(Some(analyze(classifier, &text, delay).await)),
        None => Ok(None),
    }
}

/// A scan running as a background task.
pub struct ScanHandle {
    cancel: CancellationToken,
    task: JoinHandle<Result<Option<String>, ScanError>>,
}

impl ScanHandle {
    /// Signals the scan to stop at its next frame.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Whether the scan is still polling.
    pub fn is_scanning(&self) -> bool {
        !self.cancel.is_cancelled() && !self.task.is_finished()
    }

    /// Waits for the scan to end and returns its outcome.
    ///
    /// `Ok(None)` means the scan was stopped or the source ran dry.
    ///
    /// # Errors
    ///
    /// Returns the scan's own `ScanError`, or `ScanError::TaskAborted` if the
    /// task panicked or was aborted.
    pub async fn finish(self) -> Result<Option<String>, ScanError> {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Scan task ended abnormally: {}", e);
                Err(ScanError::TaskAborted(e.to_string()))
            }
        }
    }
}

/// Starts a scan on the Tokio runtime and returns a handle to stop it.
pub fn spawn_scan<S, D>(mut source: S, decoder: D) -> ScanHandle
where
    S: FrameSource + Send + 'static,
    D: QrDecoder + Send + Sync + 'static,
{
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let task = tokio::spawn(async move { scan_until_decoded(&mut source, &decoder, &token).await });
    ScanHandle { cancel, task }
}
