use crate::core::traits::Real;
use std::ops;

/// Immutable 2D vector.
///
/// No method mutates the receiver: every operation returns a new value. Degenerate input (zero
/// divisor, normalizing a zero vector, `acos` outside `[-1, 1]`) is not checked and shows up as
/// infinite or NaN components, following IEEE-754 arithmetic.
///
/// # Examples
///
/// ```
/// # use vector2d::core::math::*;
/// let v = Vector2::new(6.0, 8.0);
/// assert_eq!(v.magnitude(), 10.0);
/// assert!(v.limit(5.0).fuzzy_eq(vec2(3.0, 4.0)));
/// // the receiver is left untouched
/// assert_eq!(v, vec2(6.0, 8.0));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a new vector where an absent component defaults to zero.
    ///
    /// Only `None` is replaced: a given NaN (or signed zero) is stored as is, unlike a falsy
    /// coercion that would also turn NaN into 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector2d::core::math::*;
    /// assert_eq!(Vector2::new_or_zero(Some(2.0), None), vec2(2.0, 0.0));
    /// assert_eq!(Vector2::<f64>::new_or_zero(None, None), Vector2::zero());
    /// ```
    pub fn new_or_zero(x: Option<T>, y: Option<T>) -> Self {
        Vector2::new(x.unwrap_or_else(T::zero), y.unwrap_or_else(T::zero))
    }

    /// Create a zero vector (x = 0, y = 0).
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Components as an `(x, y)` pair.
    #[inline]
    pub fn to_pair(&self) -> (T, T) {
        (self.x, self.y)
    }

    /// Component-wise sum.
    #[inline]
    pub fn add(&self, v: Self) -> Self {
        vec2(self.x + v.x, self.y + v.y)
    }

    /// Component-wise difference (`self - v`).
    #[inline]
    pub fn sub(&self, v: Self) -> Self {
        vec2(self.x - v.x, self.y - v.y)
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(self.x * scale_factor, self.y * scale_factor)
    }

    /// Same as [Vector2::scale].
    #[inline]
    pub fn mul(&self, scale_factor: T) -> Self {
        self.scale(scale_factor)
    }

    /// Scale by `1 / divisor`.
    ///
    /// A zero `divisor` yields infinite (or NaN for zero components) results.
    #[inline]
    pub fn div(&self, divisor: T) -> Self {
        self.scale(T::one() / divisor)
    }

    /// Squared magnitude (`x² + y²`), cheaper than [Vector2::magnitude] for comparisons.
    #[inline]
    pub fn sqr_mag(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(&self) -> T {
        self.sqr_mag().sqrt()
    }

    /// Vector with the same direction and magnitude 1.
    ///
    /// Normalizing the zero vector gives NaN components.
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.magnitude())
    }

    /// Vector with the same direction and magnitude `magnitude`.
    ///
    /// A negative `magnitude` flips the direction.
    pub fn set_magnitude(&self, magnitude: T) -> Self {
        self.normalize().scale(magnitude)
    }

    /// Clamp the magnitude to at most `max_magnitude`.
    ///
    /// The receiver is returned as is when its magnitude does not exceed `max_magnitude`
    /// (including equality), otherwise it is rescaled with [Vector2::set_magnitude].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector2d::core::math::*;
    /// assert!(vec2(6.0, 8.0).limit(5.0).fuzzy_eq(vec2(3.0, 4.0)));
    /// assert_eq!(vec2(3.0, 4.0).limit(5.0), vec2(3.0, 4.0));
    /// assert_eq!(vec2(1.0, 1.0).limit(5.0), vec2(1.0, 1.0));
    /// ```
    pub fn limit(&self, max_magnitude: T) -> Self {
        if self.sqr_mag() > max_magnitude * max_magnitude {
            return self.set_magnitude(max_magnitude);
        }

        *self
    }

    /// Euclidean distance between the two points.
    pub fn distance(&self, v: Self) -> T {
        v.sub(*self).magnitude()
    }

    /// Squared distance between the two points.
    pub fn sqr_dist(&self, v: Self) -> T {
        v.sub(*self).sqr_mag()
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, v: Self) -> T {
        self.x * v.x + self.y * v.y
    }

    /// Determinant (`self.x * v.y - self.y * v.x`), the signed area of the parallelogram spanned
    /// by the two vectors. Positive when `v` is counter clockwise from `self`.
    #[inline]
    pub fn det(&self, v: Self) -> T {
        self.x * v.y - self.y * v.x
    }

    /// Returns `v` rescaled to magnitude `self.dot(v)`.
    ///
    /// Note this is not the textbook projection of `self` onto `v` (which would divide the dot
    /// product by `v.magnitude()`); the two only agree when `v` has unit length. A negative dot
    /// product points the result opposite to `v`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector2d::core::math::*;
    /// # use vector2d::core::traits::*;
    /// let r = vec2(3.0, 4.0).scalar_projection(vec2(2.0, 0.0));
    /// // dot = 6, so the result is (2, 0) stretched to length 6
    /// assert!(r.fuzzy_eq(vec2(6.0, 0.0)));
    /// ```
    pub fn scalar_projection(&self, v: Self) -> Self {
        v.set_magnitude(self.dot(v))
    }

    /// Unsigned angle between the two vectors in radians, in `[0, PI]`.
    pub fn angle(&self, v: Self) -> T {
        (self.dot(v) / (self.magnitude() * v.magnitude())).acos()
    }

    /// Signed angle in radians to rotate `self` onto the direction of `v`, in `(-PI, PI]`.
    ///
    /// Counter clockwise is positive. Computed as `atan2(det, dot)`: the determinant is the
    /// ordinate. This intentionally swaps the `atan2(dot, det)` argument order of the reference
    /// formula, which would return 0 for perpendicular vectors and break antisymmetry.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector2d::core::math::*;
    /// # use vector2d::core::traits::*;
    /// use std::f64::consts::FRAC_PI_2;
    /// assert!(vec2(1.0, 0.0).angle2(vec2(0.0, 1.0)).fuzzy_eq(FRAC_PI_2));
    /// assert!(vec2(0.0, 1.0).angle2(vec2(1.0, 0.0)).fuzzy_eq(-FRAC_PI_2));
    /// ```
    pub fn angle2(&self, v: Self) -> T {
        self.det(v).atan2(self.dot(v))
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

impl<T: Real> From<(T, T)> for Vector2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Vector2::new(x, y)
    }
}

impl<T: Real> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl<T: Real> From<Vector2<T>> for (T, T) {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        v.to_pair()
    }
}

impl<T: Real> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $method:ident) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::$method(&self, rhs)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::$method(&self, *rhs)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vector2<T>> for &'a Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &'b Vector2<T>) -> Self::Output {
                Vector2::$method(self, *rhs)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::$method(self, rhs)
            }
        }
    };
}

ImplBinaryOp!(Add, add, add);
ImplBinaryOp!(Sub, sub, sub);

macro_rules! ImplScalarOp {
    ($op_trait:ident, $op_func:ident, $method:ident) => {
        impl<T: Real> ops::$op_trait<T> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: T) -> Self::Output {
                Vector2::$method(&self, rhs)
            }
        }

        impl<T: Real> ops::$op_trait<T> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: T) -> Self::Output {
                Vector2::$method(self, rhs)
            }
        }
    };
}

ImplScalarOp!(Mul, mul, scale);
ImplScalarOp!(Div, div, div);

macro_rules! ImplUnaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self) -> Self::Output {
                Vector2::new($op self.x, $op self.y)
            }
        }

        impl<T: Real> ops::$op_trait for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self) -> Self::Output {
                Vector2::new($op self.x, $op self.y)
            }
        }

    };
}

ImplUnaryOp!(Neg, neg, -);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::{FuzzyEq, Real};

    macro_rules! test_binary_op {
        ($v1:ident, $v2:ident, $op:tt, $expected:expr) => {
            assert!(($v1 $op $v2).fuzzy_eq($expected));
            assert!((&$v1 $op $v2).fuzzy_eq($expected));
            assert!(($v1 $op &$v2).fuzzy_eq($expected));
            assert!((&$v1 $op &$v2).fuzzy_eq($expected));
        };
    }

    #[test]
    fn ops() {
        let v1 = vec2(4.0, 5.0);
        let v2 = vec2(1.0, 2.0);
        test_binary_op!(v1, v2, +, vec2(5.0, 7.0));
        test_binary_op!(v1, v2, -, vec2(3.0, 3.0));
        assert!((v1 * 2.0).fuzzy_eq(vec2(8.0, 10.0)));
        assert!((&v1 * 2.0).fuzzy_eq(vec2(8.0, 10.0)));
        assert!((v1 / 2.0).fuzzy_eq(vec2(2.0, 2.5)));
        assert!((&v1 / 2.0).fuzzy_eq(vec2(2.0, 2.5)));
        assert!((-v1).fuzzy_eq(vec2(-4.0, -5.0)));
        assert!((-&v1).fuzzy_eq(vec2(-4.0, -5.0)));
    }

    #[test]
    fn operators_match_methods() {
        let v1 = vec2(-1.5, 3.25);
        let v2 = vec2(0.5, -7.0);
        assert_eq!(v1 + v2, v1.add(v2));
        assert_eq!(v1 - v2, v1.sub(v2));
        assert_eq!(v1 * 3.0, v1.scale(3.0));
        assert_eq!(v1 * 3.0, v1.mul(3.0));
        assert_eq!(v1 / 3.0, v1.div(3.0));
    }

    #[test]
    fn arithmetic_leaves_operands_unchanged() {
        let v1 = vec2(1.0, 2.0);
        let v2 = vec2(3.0, 4.0);
        let _ = v1.add(v2);
        let _ = v1.sub(v2);
        let _ = v1.scale(2.0);
        let _ = v1.normalize();
        let _ = v1.limit(0.5);
        assert_eq!(v1, vec2(1.0, 2.0));
        assert_eq!(v2, vec2(3.0, 4.0));
    }

    #[test]
    fn construction() {
        assert_eq!(Vector2::<f64>::default(), Vector2::zero());
        assert_eq!(Vector2::new_or_zero(None, Some(-3.0)), vec2(0.0, -3.0));
        assert_eq!(Vector2::from((1.0, 2.0)), vec2(1.0, 2.0));
        assert_eq!(Vector2::from([1.0, 2.0]), vec2(1.0, 2.0));

        let v = vec2(7.0, -2.0);
        let copy = v.clone();
        assert_eq!(copy, v);
        assert_eq!(v.to_pair(), (7.0, -2.0));
        assert_eq!(<(f64, f64)>::from(v), (7.0, -2.0));
        assert_eq!(<[f64; 2]>::from(v), [7.0, -2.0]);
    }

    #[test]
    fn new_or_zero_keeps_given_nan() {
        let v = Vector2::new_or_zero(Some(f64::NAN), None);
        assert!(v.x.is_nan());
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn limit_with_nan_bound_keeps_vector() {
        let v = vec2(3.0, 4.0);
        assert_eq!(v.limit(f64::NAN), v);
    }

    #[test]
    fn opposite_vectors_are_half_turn_apart() {
        let a = vec2(3.0f64, 4.0);
        assert!(a.angle(-a).fuzzy_eq(f64::pi()));
        assert!(a.angle2(-a).abs().fuzzy_eq(f64::pi()));
        assert!(vec2(1.0f32, 0.0).angle(vec2(-1.0, 0.0)).fuzzy_eq(f32::pi()));
    }

    #[test]
    fn f32_vectors() {
        let v = vec2(3.0f32, 4.0f32);
        assert!(v.magnitude().fuzzy_eq(5.0));
        assert!(v.normalize().fuzzy_eq(vec2(0.6, 0.8)));
        assert!(vec2(1.0f32, 0.0).angle(vec2(0.0, 1.0)).fuzzy_eq(f32::pi() / 2.0));
    }
}
