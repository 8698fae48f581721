//! FIFO buffering of recognized gestures

use std::collections::VecDeque;

use thiserror::Error;

use super::sample::GestureSample;

/// Errors surfaced by the touch panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TouchError {
    /// A gesture was requested while none was pending
    #[error("gesture queue is empty")]
    EmptyQueue,
}

/// Ordered single-consumer buffer between recognition time and the next poll
///
/// Unbounded; mutated only by the recognizer (enqueue) and the consumer
/// (dequeue). Dequeue order equals enqueue order.
#[derive(Debug, Default)]
pub struct GestureQueue {
    samples: VecDeque<GestureSample>,
}

impl GestureQueue {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a recognized sample; never fails, no backpressure
    pub fn push(&mut self, sample: GestureSample) {
        self.samples.push_back(sample);
    }

    /// Pops the oldest sample
    ///
    /// Fails with [`TouchError::EmptyQueue`] when nothing is pending; never
    /// returns a stale or default sample.
    pub fn pop(&mut self) -> Result<GestureSample, TouchError> {
        self.samples.pop_front().ok_or(TouchError::EmptyQueue)
    }

    /// Number of pending samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if no samples are pending
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
