use anim_math::{Keyframes, Point, Smoother, enlarge, reduce, rotate};

fn main() -> Result<(), anim_math::MathError> {
    // Example: a pulsing dot orbiting a center, the kind of curve a playback widget draws.
    //
    // Animation code would:
    // - compute a normalized time `t` per frame
    // - sample keyframes for alpha, enlarge/reduce for size, rotate for position
    // - smooth noisy inputs (e.g. a level meter) before drawing
    let alpha = Keyframes::from_pairs(&[(0.0, 0.0), (1.0, 0.2), (1.0, 0.8), (0.0, 1.0)])?;
    let center = Point::new(100.0, 100.0);
    let start = Point::new(140.0, 100.0);
    let mut level = Smoother::new(0.35);

    for frame in 0..=10u32 {
        let t = frame as f32 / 10.0;
        let radius = if t < 0.5 {
            enlarge(4.0, 12.0, t * 2.0)?
        } else {
            reduce(12.0, 4.0, (t - 0.5) * 2.0)?
        };
        let pos = rotate(start, center, 360.0 * t);
        let raw_level = if frame % 3 == 0 { 1.0 } else { 0.2 };

        println!(
            "t={t:.1} alpha={:.2} radius={radius:.1} pos=({:.1}, {:.1}) level={:.2}",
            alpha.sample(t),
            pos.x,
            pos.y,
            level.push(raw_level)
        );
    }
    Ok(())
}
