/// Maps `val` from `[min, max]` onto `[0, 1]`.
///
/// Values below `min` map to `0` and values above `max` map to `1`. The range is not validated:
/// `min == max` divides by zero and yields `inf`/`NaN` for in-range values.
#[inline]
pub fn normalize(val: f32, min: f32, max: f32) -> f32 {
    if val < min {
        return 0.0;
    }
    if val > max {
        return 1.0;
    }
    (val - min) / (max - min)
}

/// Returns `true` if `value` lies in the closed range spanned by `a` and `b`, in either order.
#[inline]
pub fn is_between(value: f32, a: f32, b: f32) -> bool {
    let (lo, hi) = if a > b { (b, a) } else { (a, b) };
    lo <= value && value <= hi
}

/// Clamps `val` to `[min, max]`.
///
/// Works for any ordered scalar (`f32`, `i32`, ...). Unlike `Ord::clamp`/`f32::clamp` this never
/// panics: the lower bound is applied first and the upper bound last, so an inverted range
/// (`min > max`) returns `max`.
#[inline]
pub fn clamp<T: PartialOrd + Copy>(val: T, min: T, max: T) -> T {
    let at_least = if val < min { min } else { val };
    if at_least > max { max } else { at_least }
}
