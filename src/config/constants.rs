//! Configuration constants.
//!
//! This module defines the constants used throughout the crate: the selection
//! threshold, simulated backend latencies, and the fixed user-facing messages.

use std::time::Duration;

/// Minimum selection length in characters.
///
/// Selections whose trimmed length is less than or equal to this value are
/// ignored by the selection monitor. Only strictly longer selections trigger
/// feature detection.
pub const MIN_SELECTION_CHARS: usize = 10;

// Simulated backend latencies
/// Default latency of the fast explanation backend (1.5s)
pub const FAST_BACKEND_LATENCY: Duration = Duration::from_millis(1500);
/// Default latency of the detailed explanation backend (1.2s)
pub const DETAILED_BACKEND_LATENCY: Duration = Duration::from_millis(1200);

// User-facing messages
/// Shown in the feature list slot when a selection matches no catalog pattern
pub const NO_FEATURES_MESSAGE: &str = "No specific web features detected in this snippet.";
/// Shown in the analysis slot when analysis is requested without a selection
pub const EMPTY_SELECTION_MESSAGE: &str = "Please highlight some code first.";

/// Capacity of the session event channel.
///
/// Events come from a single interactive user, so a small buffer is enough.
pub const SESSION_EVENT_BUFFER: usize = 64;

/// Maximum number of selection characters echoed into debug logs
pub const MAX_SELECTION_LOG_CHARS: usize = 100;
