use core::array;
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, Index, Mul};

use crate::math::approx::ApproxEq;

//
// Types
//

/// A generic color type.
///
/// # Type parameters
/// * `Repr`: the representation of the components of `Self`.
/// Color components are also called *channels*.
/// * `Space`: the color space that `Self` is an element of.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Color<Repr, Space = Rgb>(pub Repr, PhantomData<Space>);

/// The linear RGB color space. No gamma is applied anywhere.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rgb;

/// An RGB color with `u8` components. The framebuffer storage format.
pub type Color3<Space = Rgb> = Color<[u8; 3], Space>;

/// An RGB color with `f32` components, normally in the range [0, 1].
/// Used for vertex colors and interpolation.
pub type Color3f<Space = Rgb> = Color<[f32; 3], Space>;

/// Returns a new RGB color with `r`, `g`, and `b` components.
///
/// # Examples
/// ```
/// use trifill_core::math::{rgb, Color3, Color3f};
///
/// let packed: Color3 = rgb(0xFF, 0x80, 0x00);
/// let normal: Color3f = rgb(1.0, 0.5, 0.0);
/// assert_eq!(normal.to_color3(), packed);
/// ```
pub const fn rgb<Ch>(r: Ch, g: Ch, b: Ch) -> Color<[Ch; 3], Rgb> {
    Color([r, g, b], PhantomData)
}

//
// Inherent impls
//

impl Color3 {
    pub const BLACK: Self = rgb(0, 0, 0);
    pub const WHITE: Self = rgb(0xFF, 0xFF, 0xFF);

    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }

    /// Returns a `Color3f` with the components of `self` mapped
    /// to the range [0, 1] with `c as f32 / 255.0`.
    ///
    /// This is the exact inverse of [`Color3f::to_color3`] for every
    /// color that `to_color3` can return.
    #[inline]
    pub fn to_color3f(self) -> Color3f {
        self.0.map(|c| f32::from(c) / 255.0).into()
    }
}

impl Color3f {
    pub const BLACK: Self = rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = rgb(1.0, 1.0, 1.0);
    pub const RED: Self = rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = rgb(0.0, 0.0, 1.0);

    /// Returns a `Color3` with the components of `self` mapped to `u8`
    /// by scaling by 255, rounding to nearest, and clamping to [0, 255].
    ///
    /// Out-of-range components saturate instead of wrapping. In particular,
    /// slightly negative values caused by rounding errors map to zero, as
    /// does NaN.
    ///
    /// # Examples
    /// ```
    /// use trifill_core::math::rgb;
    ///
    /// assert_eq!(rgb(0.5, 1.5, -0.1).to_color3(), rgb(128, 255, 0));
    /// ```
    #[inline]
    pub fn to_color3(self) -> Color3 {
        self.0.map(to_u8).into()
    }

    /// Returns the weighted sum of three colors.
    ///
    /// If the weights are barycentric coordinates, that is, non-negative
    /// and summing to one, the result is the color interpolated at the
    /// corresponding point of a triangle whose vertex colors are `cols`.
    #[inline]
    pub fn blend([w0, w1, w2]: [f32; 3], [c0, c1, c2]: [Self; 3]) -> Self {
        c0 * w0 + c1 * w1 + c2 * w2
    }
}

impl<R, Sc> Color<R, Rgb>
where
    R: Index<usize, Output = Sc>,
    Sc: Copy,
{
    /// Returns the red component of `self`.
    pub fn r(&self) -> Sc {
        self.0[0]
    }
    /// Returns the green component of `self`.
    pub fn g(&self) -> Sc {
        self.0[1]
    }
    /// Returns the blue component of `self`.
    pub fn b(&self) -> Sc {
        self.0[2]
    }
}

#[inline]
fn to_u8(c: f32) -> u8 {
    // Adding one half and truncating rounds to nearest once clamped
    (c * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

//
// Foreign trait impls
//

impl<Sp> Add for Color<[f32; 3], Sp> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] + rhs.0[i]), PhantomData)
    }
}

impl<Sp> Mul<f32> for Color<[f32; 3], Sp> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self(self.0.map(|c| c * rhs), PhantomData)
    }
}

impl<Sp> ApproxEq for Color<[f32; 3], Sp> {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

impl<R: Debug, Space: Debug + Default> Debug for Color<R, Space> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Color<{:?}>{:?}", Space::default(), self.0)
    }
}

impl<R, Sp> From<R> for Color<R, Sp> {
    #[inline]
    fn from(els: R) -> Self {
        Self(els, PhantomData)
    }
}
