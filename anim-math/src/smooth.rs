/// Single step of exponential smoothing: `a * new + (1 - a) * prev`.
///
/// `a` is the weight of the new sample. `a = 1` follows the input exactly, `a = 0` ignores it.
#[inline]
pub fn smooth(prev: f32, new: f32, a: f32) -> f32 {
    a * new + (1.0 - a) * prev
}

/// A running exponential smoothing series.
///
/// The first pushed sample seeds the series as-is; every following sample is blended into the
/// previous smoothed value with [`smooth`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Smoother {
    a: f32,
    value: Option<f32>,
}

impl Smoother {
    pub fn new(a: f32) -> Self {
        Self { a, value: None }
    }

    pub fn factor(&self) -> f32 {
        self.a
    }

    pub fn set_factor(&mut self, a: f32) {
        self.a = a;
    }

    /// The last smoothed value, or `None` before the first sample.
    pub fn value(&self) -> Option<f32> {
        self.value
    }

    /// Pushes a raw sample and returns the smoothed value.
    pub fn push(&mut self, sample: f32) -> f32 {
        let next = match self.value {
            Some(prev) => smooth(prev, sample, self.a),
            None => sample,
        };
        self.value = Some(next);
        next
    }

    pub fn reset(&mut self) {
        self.value = None;
    }
}
