use crate::MathError;

/// Grows a size from `start` towards `end` at time `t`.
///
/// Requires `start <= end`.
pub fn enlarge(start: f32, end: f32, t: f32) -> Result<f32, MathError> {
    if start > end {
        mwarn!(start, end, "enlarge: start is larger than end");
        return Err(MathError::EnlargeOrder { start, end });
    }
    Ok(start + (end - start) * t)
}

/// Shrinks a size from `start` towards `end` at time `t`.
///
/// Requires `start >= end`. At `t = 0` the result is `start`, at `t = 1` it is `end`.
pub fn reduce(start: f32, end: f32, t: f32) -> Result<f32, MathError> {
    if start < end {
        mwarn!(start, end, "reduce: end is larger than start");
        return Err(MathError::ReduceOrder { start, end });
    }
    Ok(end + (start - end) * (1.0 - t))
}
