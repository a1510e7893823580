use log::info;
use vector2d::core::{math::vec2, traits::FuzzyEq};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    magnitudes();
    limits();
    distances();
}

fn magnitudes() {
    info!("Magnitude and normalization...");

    let v = vec2(3.0, 4.0);
    assert_eq!(v.sqr_mag(), 25.0);
    assert_eq!(v.magnitude(), 5.0);

    let unit = v.normalize();
    assert!(unit.magnitude().fuzzy_eq(1.0));
    info!("|{v:?}| = {}, normalized = {unit:?}", v.magnitude());

    let stretched = v.set_magnitude(12.5);
    assert!(stretched.magnitude().fuzzy_eq(12.5));
    info!("set_magnitude(12.5) = {stretched:?}");
}

fn limits() {
    info!("Limiting magnitude...");

    let long = vec2(6.0, 8.0);
    let limited = long.limit(5.0);
    assert!(limited.fuzzy_eq(vec2(3.0, 4.0)));
    info!("{long:?}.limit(5) = {limited:?}");

    let short = vec2(1.0, 1.0);
    assert_eq!(short.limit(5.0), short);
    info!("{short:?}.limit(5) unchanged");
}

fn distances() {
    info!("Distances...");

    let a = vec2(1.0, 1.0);
    let b = vec2(4.0, 5.0);
    assert_eq!(a.distance(b), 5.0);
    assert_eq!(a.sqr_dist(b), 25.0);
    info!("distance = {}, sqr_dist = {}", a.distance(b), a.sqr_dist(b));
}
