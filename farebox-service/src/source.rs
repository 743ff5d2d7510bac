use crate::service::{BookingService, ValidationReceipt};
use async_trait::async_trait;
use farebox_core::booking::ValidationMethod;
use farebox_core::{CoreError, CoreResult};
use tracing::debug;

/// A pull-based source of raw decoded text, one string per acquisition
/// frame. Implemented by the external image and camera decoders; `None`
/// means the source has nothing further to offer.
#[async_trait]
pub trait PayloadSource: Send {
    async fn next_text(&mut self) -> Option<String>;
}

/// How a scan over a [`PayloadSource`] ended.
#[derive(Debug)]
pub enum ScanOutcome {
    /// A frame decoded and validated; scanning stopped there.
    Validated(ValidationReceipt),
    /// The source ran out of frames before any payload validated.
    Exhausted,
    /// The frame budget ran out first (the external cancellation signal).
    BudgetSpent,
}

/// A fixed sequence of frames. Stands in for a real decoder in tests and
/// covers the single-image path, which yields exactly one frame.
pub struct StaticPayloadSource {
    frames: std::vec::IntoIter<String>,
}

impl StaticPayloadSource {
    pub fn new(frames: Vec<String>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }
}

#[async_trait]
impl PayloadSource for StaticPayloadSource {
    async fn next_text(&mut self) -> Option<String> {
        self.frames.next()
    }
}

impl BookingService {
    /// Drain `source` until a frame validates, the source ends, or
    /// `max_frames` have been consumed. Frames whose text does not decode
    /// are skipped; store failures abort the scan.
    pub async fn scan<S: PayloadSource>(
        &self,
        source: &mut S,
        method: ValidationMethod,
        max_frames: usize,
    ) -> CoreResult<ScanOutcome> {
        for _ in 0..max_frames {
            let Some(text) = source.next_text().await else {
                return Ok(ScanOutcome::Exhausted);
            };
            match self.validate(&text, method).await {
                Ok(receipt) => return Ok(ScanOutcome::Validated(receipt)),
                Err(CoreError::Format(reason)) => {
                    debug!(%reason, "skipping undecodable frame");
                }
                Err(other) => return Err(other),
            }
        }
        Ok(ScanOutcome::BudgetSpent)
    }
}
