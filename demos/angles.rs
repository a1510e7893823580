use log::{info, warn};
use std::f64::consts::FRAC_PI_2;
use vector2d::core::{math::vec2, traits::FuzzyEq};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    unsigned_and_signed();
    projection();
}

fn unsigned_and_signed() {
    info!("Angles between vectors...");

    let x_axis = vec2(1.0, 0.0);
    let y_axis = vec2(0.0, 1.0);

    assert!(x_axis.angle(y_axis).fuzzy_eq(FRAC_PI_2));
    assert!(y_axis.angle(x_axis).fuzzy_eq(FRAC_PI_2));
    info!("angle(x, y) = angle(y, x) = {}", x_axis.angle(y_axis));

    assert!(x_axis.angle2(y_axis).fuzzy_eq(FRAC_PI_2));
    assert!(y_axis.angle2(x_axis).fuzzy_eq(-FRAC_PI_2));
    info!(
        "angle2(x, y) = {}, angle2(y, x) = {}",
        x_axis.angle2(y_axis),
        y_axis.angle2(x_axis)
    );

    let v = vec2(-2.0f64, 3.0);
    let self_angle = v.angle(v);
    if self_angle.is_nan() {
        warn!("angle({v:?}, {v:?}) is NaN: rounded cosine fell outside [-1, 1]");
    }
}

fn projection() {
    info!("Scalar projection...");

    let a = vec2(3.0, 4.0);
    let b = vec2(0.0, 2.0);
    let r = a.scalar_projection(b);
    // b's direction with length a . b
    assert!(r.fuzzy_eq(vec2(0.0, 8.0)));
    info!("{a:?}.scalar_projection({b:?}) = {r:?}");
}
