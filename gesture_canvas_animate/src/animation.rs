// Copyright 2026 the Gesture Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gesture_canvas_coordinate::Coordinate;

use crate::easing::ease_in_out;

/// Default animation duration in seconds.
pub const DEFAULT_DURATION: f64 = 0.33;

/// One sample of a running [`Animation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    /// The session is still running; display this coordinate.
    Active(Coordinate),
    /// The session just completed; this is exactly the target coordinate.
    Finished(Coordinate),
    /// The session was cancelled; the current transform stays where it is.
    Cancelled,
}

/// A cancellable interpolation session between two coordinates.
///
/// The start time is stamped lazily on the first [`advance`](Self::advance)
/// call, so sessions can be created anywhere without access to a clock. At
/// most one session should be live per canvas; creating a replacement is the
/// caller's supersession mechanism (cancel the old one first).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    start: Coordinate,
    target: Coordinate,
    duration: f64,
    start_time: Option<f64>,
    cancelled: bool,
}

impl Animation {
    /// Creates a session with the default duration.
    #[must_use]
    pub fn new(start: Coordinate, target: Coordinate) -> Self {
        Self::with_duration(start, target, DEFAULT_DURATION)
    }

    /// Creates a session with an explicit duration in seconds.
    ///
    /// A non-positive duration completes on the first `advance` call.
    #[must_use]
    pub fn with_duration(start: Coordinate, target: Coordinate, duration: f64) -> Self {
        Self {
            start,
            target,
            duration,
            start_time: None,
            cancelled: false,
        }
    }

    /// The coordinate this session is animating towards.
    #[must_use]
    pub fn target(&self) -> Coordinate {
        self.target
    }

    /// Requests cooperative cancellation.
    ///
    /// The flag is observed before the next sample; no further coordinates
    /// are produced and the target value is never forced.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Returns `true` once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Advances the session to `now` and samples it.
    ///
    /// The first call stamps the start time. Once the elapsed time reaches
    /// the duration, the sample is [`Sample::Finished`] carrying exactly the
    /// target; callers should drop the session at that point.
    pub fn advance(&mut self, now: f64) -> Sample {
        if self.cancelled {
            return Sample::Cancelled;
        }
        let start_time = *self.start_time.get_or_insert(now);
        let elapsed = now - start_time;
        if elapsed >= self.duration || self.duration <= 0.0 {
            return Sample::Finished(self.target);
        }
        let fraction = ease_in_out((elapsed / self.duration).max(0.0));
        Sample::Active(self.start.lerp(self.target, fraction))
    }
}
