/// A point in widget space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// Trig runs in f64; results are narrowed to f32 once.
fn sin_cos(angle_deg: f32) -> (f64, f64) {
    (angle_deg as f64).to_radians().sin_cos()
}

/// X coordinate of point P rotated around center C by `angle_deg` degrees.
pub fn rotate_x(p_x: f32, p_y: f32, c_x: f32, c_y: f32, angle_deg: f32) -> f32 {
    let (sin, cos) = sin_cos(angle_deg);
    let dx = (p_x - c_x) as f64;
    let dy = (p_y - c_y) as f64;
    (cos * dx - sin * dy + c_x as f64) as f32
}

/// Y coordinate of point P rotated around center C by `angle_deg` degrees.
pub fn rotate_y(p_x: f32, p_y: f32, c_x: f32, c_y: f32, angle_deg: f32) -> f32 {
    let (sin, cos) = sin_cos(angle_deg);
    let dx = (p_x - c_x) as f64;
    let dy = (p_y - c_y) as f64;
    (sin * dx + cos * dy + c_y as f64) as f32
}

/// Rotates `point` around `center` by `angle_deg` degrees.
pub fn rotate(point: Point, center: Point, angle_deg: f32) -> Point {
    Point {
        x: rotate_x(point.x, point.y, center.x, center.y, angle_deg),
        y: rotate_y(point.x, point.y, center.x, center.y, angle_deg),
    }
}
