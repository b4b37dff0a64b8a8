use alloc::vec::Vec;

use crate::{MathError, normalize};

/// A sample of an animated value: `value` is reached when `t == breakpoint`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframe {
    pub value: f32,
    pub breakpoint: f32,
}

impl Keyframe {
    pub const fn new(value: f32, breakpoint: f32) -> Self {
        Self { value, breakpoint }
    }
}

impl From<(f32, f32)> for Keyframe {
    /// Converts a `(value, breakpoint)` pair.
    fn from((value, breakpoint): (f32, f32)) -> Self {
        Self { value, breakpoint }
    }
}

/// A non-empty, ordered sequence of keyframes.
///
/// Breakpoints are expected in ascending order. Segments whose breakpoints are not ascending never
/// contain `t` and are skipped by [`Keyframes::sample`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Keyframes {
    frames: Vec<Keyframe>,
}

impl Keyframes {
    /// Creates a keyframe sequence.
    ///
    /// Returns [`MathError::EmptyKeyframes`] if `frames` is empty.
    pub fn new(frames: Vec<Keyframe>) -> Result<Self, MathError> {
        if frames.is_empty() {
            mwarn!("Keyframes::new: empty keyframe sequence");
            return Err(MathError::EmptyKeyframes);
        }
        mtrace!(len = frames.len(), "Keyframes::new");
        Ok(Self { frames })
    }

    /// Creates a keyframe sequence from `(value, breakpoint)` pairs.
    pub fn from_pairs(pairs: &[(f32, f32)]) -> Result<Self, MathError> {
        Self::new(pairs.iter().copied().map(Keyframe::from).collect())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`: a keyframe sequence is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[Keyframe] {
        &self.frames
    }

    pub fn first(&self) -> Keyframe {
        self.frames[0]
    }

    pub fn last(&self) -> Keyframe {
        self.frames[self.frames.len() - 1]
    }

    /// Samples the piecewise-linear curve at `t`.
    ///
    /// - Before the first breakpoint: the first value.
    /// - Inside a segment `[a.breakpoint, b.breakpoint]`: linear blend of `a.value` and `b.value`.
    ///   When `t` sits exactly on a shared breakpoint, the earlier segment wins.
    /// - Past every segment: the last value.
    pub fn sample(&self, t: f32) -> f32 {
        let first = self.first();
        if t < first.breakpoint {
            return first.value;
        }
        for w in self.frames.windows(2) {
            let (a, b) = (w[0], w[1]);
            if a.breakpoint <= t && t <= b.breakpoint {
                let norm = normalize(t, a.breakpoint, b.breakpoint);
                return a.value + norm * (b.value - a.value);
            }
        }
        self.last().value
    }
}

impl TryFrom<Vec<Keyframe>> for Keyframes {
    type Error = MathError;

    fn try_from(frames: Vec<Keyframe>) -> Result<Self, Self::Error> {
        Self::new(frames)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Keyframes {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            frames: Vec<Keyframe>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.frames).map_err(serde::de::Error::custom)
    }
}

/// Samples `keyframes` at `t`. See [`Keyframes::sample`].
#[inline]
pub fn piecewise_interpolate(t: f32, keyframes: &Keyframes) -> f32 {
    keyframes.sample(t)
}
