/// Assert two values are fuzzy equal, works for scalars and vectors.
///
/// The second form takes an explicit epsilon. The calling scope must have `fuzzy_eq` available
/// (import [FuzzyEq](crate::core::traits::FuzzyEq) when comparing scalars).
///
/// # Examples
///
/// ```
/// # use vector2d::assert_fuzzy_eq;
/// # use vector2d::core::math::*;
/// # use vector2d::core::traits::*;
/// assert_fuzzy_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
/// assert_fuzzy_eq!(vec2(0.1 + 0.2, 1.0), vec2(0.3, 1.0));
/// assert_fuzzy_eq!(vec2(1.0, 1.0).normalize().x, 0.7071, 1e-4);
/// ```
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}
