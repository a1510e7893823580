use log::info;
use vector2d::core::math::{Vector2, vec2};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    construction();
    arithmetic();
    degenerate_division();
}

fn construction() {
    info!("Constructing vectors...");

    let v = Vector2::new(3.0, 4.0);
    let missing_y = Vector2::new_or_zero(Some(3.0), None);
    assert_eq!(missing_y, vec2(3.0, 0.0));
    info!("new(3, 4) = {v:?}, new_or_zero(Some(3), None) = {missing_y:?}");

    let (x, y) = v.to_pair();
    assert_eq!((x, y), (3.0, 4.0));
    info!("to_pair() = ({x}, {y})");

    let from_array: Vector2 = [1.5, -2.0].into();
    info!("from [1.5, -2.0] = {from_array:?}");
}

fn arithmetic() {
    info!("Arithmetic leaves operands unchanged...");

    let a = vec2(1.0, 2.0);
    let b = vec2(0.5, -1.0);

    let sum = a.add(b);
    let diff = a.sub(b);
    let scaled = a.scale(3.0);
    assert_eq!(sum, a + b);
    assert_eq!(diff, a - b);
    assert_eq!(scaled, a.mul(3.0));
    assert!(a.div(4.0).fuzzy_eq(vec2(0.25, 0.5)));
    assert_eq!(a, vec2(1.0, 2.0));

    info!("a + b = {sum:?}, a - b = {diff:?}, a * 3 = {scaled:?}");
    info!("a . b = {}, det(a, b) = {}", a.dot(b), a.det(b));
}

fn degenerate_division() {
    info!("Division by zero is not guarded...");

    let v = vec2(1.0f64, 0.0).div(0.0);
    assert!(v.x.is_infinite());
    assert!(v.y.is_nan());
    info!("(1, 0) / 0 = {v:?}");
}
