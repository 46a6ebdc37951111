//! Approximate equality of floating-point values.
//!
//! Barycentric weights and blended colors are computed in `f32`, and the
//! order of operations affects the last bits of the result. Comparing such
//! values with `==` is brittle; [`ApproxEq`] and [`assert_approx_eq`]
//! tolerate a small relative error instead.
//!
//! [`assert_approx_eq`]: crate::assert_approx_eq

/// The default relative tolerance, a few ULPs of `f32` near one.
pub const EPS: f32 = 1e-6;

/// Trait for testing approximate equality.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Returns whether `self` and `rhs` differ by at most `eps` relative
    /// to the larger of their magnitudes, or to one if both are smaller.
    fn approx_eq_eps(&self, rhs: &Rhs, eps: f32) -> bool;

    /// Returns whether `self` and `rhs` are approximately equal,
    /// with the default tolerance [`EPS`].
    fn approx_eq(&self, rhs: &Rhs) -> bool {
        self.approx_eq_eps(rhs, EPS)
    }
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, rhs: &Self, eps: f32) -> bool {
        // `f32::abs` is std-only
        let abs = |x: f32| if x < 0.0 { -x } else { x };
        let scale = abs(*self).max(abs(*rhs)).max(1.0);
        abs(self - rhs) <= eps * scale
    }
}

impl<T: ApproxEq> ApproxEq for [T] {
    fn approx_eq_eps(&self, rhs: &Self, eps: f32) -> bool {
        self.len() == rhs.len()
            && self.iter().zip(rhs).all(|(a, b)| a.approx_eq_eps(b, eps))
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq_eps(&self, rhs: &Self, eps: f32) -> bool {
        self[..].approx_eq_eps(&rhs[..], eps)
    }
}

/// Asserts that two values are approximately equal, as defined by
/// their [`ApproxEq`][crate::math::ApproxEq] impl.
///
/// An explicit tolerance can be given with `eps = <value>`.
///
/// # Panics
/// If the values are not approximately equal.
///
/// # Examples
/// ```
/// # use trifill_core::assert_approx_eq;
/// let w = [0.1f32, 0.7];
/// assert_approx_eq!(w[0] + w[1] + (1.0 - w[0] - w[1]), 1.0);
/// assert_approx_eq!(100.0, 100.5, eps = 0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_approx_eq!($a, $b, eps = $crate::math::approx::EPS)
    };
    ($a:expr, $b:expr, eps = $eps:expr $(,)?) => {{
        use $crate::math::approx::ApproxEq;
        let (a, b, eps) = (&$a, &$b, $eps);
        assert!(
            ApproxEq::approx_eq_eps(a, b, eps),
            "assertion failed: `{a:?} ≅ {b:?}` (eps {eps})"
        );
    }};
}
