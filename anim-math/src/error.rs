use thiserror::Error;

/// Argument errors reported by the fallible helpers.
///
/// These are precondition failures: the caller passed values outside the documented domain.
/// Nothing is retried or repaired internally.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum MathError {
    /// A keyframe sequence must contain at least one keyframe.
    #[error("keyframe sequence must not be empty")]
    EmptyKeyframes,
    /// `enlarge` was called with `start > end`.
    #[error("start size ({start}) can't be larger than end size ({end})")]
    EnlargeOrder { start: f32, end: f32 },
    /// `reduce` was called with `end > start`.
    #[error("end size ({end}) can't be larger than start size ({start})")]
    ReduceOrder { start: f32, end: f32 },
}
