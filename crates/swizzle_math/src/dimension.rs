//! Fixed-dimension vectors with named components
//!
//! [`Vector2`], [`Vector3`] and [`Vector4`] wrap a [`Vector`] whose length is
//! checked at construction. Each exposes its letters as getter/setter pairs
//! and every ordering of distinct letters as a swizzle method:
//!
//! ```
//! use swizzle_math::Vector4;
//!
//! let mut c = Vector4::new(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(c.bgr().to_array(), [3.0, 2.0, 1.0]);
//!
//! c.set_gr(&swizzle_math::Vector2::new(5.0, 6.0));
//! assert_eq!(c.to_array(), [6.0, 5.0, 3.0, 4.0]);
//! ```
//!
//! All letters naming one slot alias the same buffer entry, so a write
//! through `z` is visible through `b`. Keys with repeated letters (`rrgb`)
//! go through [`Vector::get_by_key`].
//!
//! The wrappers deref to [`Vector`] for read-only core operations. Mutation
//! is forwarded explicitly so nothing can replace the inner buffer with one
//! of a different length.

use core::fmt;
use core::ops::{Add, AddAssign, Deref, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{Result, VectorError};
use crate::swizzle::Access;
use crate::vector::Vector;

macro_rules! fixed_vector {
    ($(#[$attr:meta])* $name:ident, $size:literal, ($($param:ident),+)) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "Vector", into = "Vector")
        )]
        #[repr(transparent)]
        pub struct $name(pub(crate) Vector);

        impl $name {
            pub const SIZE: usize = $size;

            #[inline]
            pub fn new($($param: f64),+) -> Self {
                Self(Vector::new([$($param),+]))
            }

            #[inline]
            pub fn from_array(components: [f64; $size]) -> Self {
                Self(Vector::new(components))
            }

            #[inline]
            pub fn splat(value: f64) -> Self {
                Self(Vector::splat($size, value))
            }

            #[inline]
            pub fn zero() -> Self {
                Self::splat(0.0)
            }

            #[inline]
            pub fn to_array(&self) -> [f64; $size] {
                let mut components = [0.0; $size];
                components.copy_from_slice(self.0.as_slice());
                components
            }

            #[inline]
            pub fn as_vector(&self) -> &Vector {
                &self.0
            }

            #[inline]
            pub fn into_vector(self) -> Vector {
                self.0
            }

            /// Overwrite the component at `index`
            #[inline]
            pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
                self.0.set(index, value)
            }

            /// Write through a component, index or swizzle key
            #[inline]
            pub fn set_by_key(&mut self, key: &str, value: impl Into<Access>) -> Result<()> {
                self.0.set_by_key(key, value)
            }

            #[inline]
            pub fn dot(&self, other: &Self) -> f64 {
                self.0.dot_unchecked(&other.0)
            }

            #[inline]
            pub fn plus(&self, other: &Self) -> Self {
                Self(self.0.zip_map(&other.0, |a, b| a + b))
            }

            #[inline]
            pub fn minus(&self, other: &Self) -> Self {
                self.plus(&other.times(-1.0))
            }

            #[inline]
            pub fn times(&self, scalar: f64) -> Self {
                Self(self.0.times(scalar))
            }

            /// Unit vector in the same direction, or the zero vector unchanged
            #[inline]
            pub fn normalize(&self) -> Self {
                Self(self.0.normalize())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl Deref for $name {
            type Target = Vector;

            #[inline]
            fn deref(&self) -> &Vector {
                &self.0
            }
        }

        impl TryFrom<Vector> for $name {
            type Error = VectorError;

            fn try_from(vector: Vector) -> Result<Self> {
                if vector.size() != $size {
                    return Err(VectorError::Arity {
                        expected: $size,
                        found: vector.size(),
                    });
                }
                Ok(Self(vector))
            }
        }

        impl From<$name> for Vector {
            #[inline]
            fn from(vector: $name) -> Vector {
                vector.0
            }
        }

        impl From<[f64; $size]> for $name {
            #[inline]
            fn from(components: [f64; $size]) -> Self {
                Self::from_array(components)
            }
        }

        impl From<$name> for Access {
            #[inline]
            fn from(vector: $name) -> Access {
                Access::Vector(vector.0)
            }
        }

        impl From<&$name> for Access {
            #[inline]
            fn from(vector: &$name) -> Access {
                Access::Vector(vector.0.clone())
            }
        }

        impl Index<usize> for $name {
            type Output = f64;

            #[inline]
            fn index(&self, index: usize) -> &f64 {
                &self.0[index]
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut f64 {
                &mut self.0[index]
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = f64;
            type IntoIter = core::iter::Copied<core::slice::Iter<'a, f64>>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline] fn add(self, rhs: Self) -> Self { self.plus(&rhs) }
        }
        impl Sub for $name {
            type Output = Self;
            #[inline] fn sub(self, rhs: Self) -> Self { self.minus(&rhs) }
        }
        impl Mul<f64> for $name {
            type Output = Self;
            #[inline] fn mul(self, rhs: f64) -> Self { self.times(rhs) }
        }
        impl Mul<$name> for f64 {
            type Output = $name;
            #[inline] fn mul(self, rhs: $name) -> $name { rhs.times(self) }
        }
        impl Neg for $name {
            type Output = Self;
            #[inline] fn neg(self) -> Self { self.times(-1.0) }
        }
        impl AddAssign for $name {
            #[inline] fn add_assign(&mut self, rhs: Self) { *self = self.plus(&rhs); }
        }
        impl SubAssign for $name {
            #[inline] fn sub_assign(&mut self, rhs: Self) { *self = self.minus(&rhs); }
        }
        impl MulAssign<f64> for $name {
            #[inline] fn mul_assign(&mut self, rhs: f64) { *self = self.times(rhs); }
        }
    };
}

macro_rules! components {
    ($name:ident { $($get:ident / $set:ident => $slot:literal),+ $(,)? }) => {
        impl $name {
            $(
                #[doc = concat!("Component `", stringify!($get), "` (slot ", stringify!($slot), ")")]
                #[inline]
                pub fn $get(&self) -> f64 {
                    self.0[$slot]
                }

                #[inline]
                pub fn $set(&mut self, value: f64) {
                    self.0[$slot] = value;
                }
            )+
        }
    };
}

macro_rules! swizzles {
    ($name:ident { $($get:ident / $set:ident => $out:ident [$($slot:literal),+]),+ $(,)? }) => {
        impl $name {
            $(
                #[doc = concat!("Fresh vector from the `", stringify!($get), "` swizzle")]
                #[inline]
                pub fn $get(&self) -> $out {
                    $out(self.0.gather(&[$($slot),+]))
                }

                #[doc = concat!("Scatter `value` through the `", stringify!($get), "` swizzle")]
                #[inline]
                pub fn $set(&mut self, value: &$out) {
                    self.0.scatter(&[$($slot),+], value.0.as_slice());
                }
            )+
        }
    };
}

fixed_vector!(
    /// 2D vector, letters `x y`
    Vector2, 2, (x, y)
);
fixed_vector!(
    /// 3D vector, letters `x y z` and `r g b`
    Vector3, 3, (x, y, z)
);
fixed_vector!(
    /// 4D vector, letters `x y z` and `r g b a`. There is no positional
    /// letter for the fourth slot.
    Vector4, 4, (x, y, z, a)
);

components!(Vector2 { x / set_x => 0, y / set_y => 1 });
components!(Vector3 {
    x / set_x => 0, y / set_y => 1, z / set_z => 2,
    r / set_r => 0, g / set_g => 1, b / set_b => 2,
});
components!(Vector4 {
    x / set_x => 0, y / set_y => 1, z / set_z => 2,
    r / set_r => 0, g / set_g => 1, b / set_b => 2, a / set_a => 3,
});

impl Vector2 {
    /// Counter-clockwise rotation by `angle` radians
    pub fn rotate(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let (x, y) = (self.x(), self.y());
        Self::new(x * cos - y * sin, x * sin + y * cos)
    }

    /// Scalar 2D cross product, `x * other.y - y * other.x`
    #[inline]
    pub fn cross(&self, other: &Self) -> f64 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Angle from the positive x-axis, in `(-pi, pi]`
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y().atan2(self.x())
    }

    /// Rotated a quarter turn counter-clockwise
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y(), self.x())
    }
}

swizzles!(Vector2 {
    xy / set_xy => Vector2 [0, 1],
    yx / set_yx => Vector2 [1, 0],
});

swizzles!(Vector3 {
    xy / set_xy => Vector2 [0, 1],
    xz / set_xz => Vector2 [0, 2],
    yx / set_yx => Vector2 [1, 0],
    yz / set_yz => Vector2 [1, 2],
    zx / set_zx => Vector2 [2, 0],
    zy / set_zy => Vector2 [2, 1],
    xyz / set_xyz => Vector3 [0, 1, 2],
    xzy / set_xzy => Vector3 [0, 2, 1],
    yxz / set_yxz => Vector3 [1, 0, 2],
    yzx / set_yzx => Vector3 [1, 2, 0],
    zxy / set_zxy => Vector3 [2, 0, 1],
    zyx / set_zyx => Vector3 [2, 1, 0],
    rg / set_rg => Vector2 [0, 1],
    rb / set_rb => Vector2 [0, 2],
    gr / set_gr => Vector2 [1, 0],
    gb / set_gb => Vector2 [1, 2],
    br / set_br => Vector2 [2, 0],
    bg / set_bg => Vector2 [2, 1],
    rgb / set_rgb => Vector3 [0, 1, 2],
    rbg / set_rbg => Vector3 [0, 2, 1],
    grb / set_grb => Vector3 [1, 0, 2],
    gbr / set_gbr => Vector3 [1, 2, 0],
    brg / set_brg => Vector3 [2, 0, 1],
    bgr / set_bgr => Vector3 [2, 1, 0],
});

swizzles!(Vector4 {
    xy / set_xy => Vector2 [0, 1],
    xz / set_xz => Vector2 [0, 2],
    yx / set_yx => Vector2 [1, 0],
    yz / set_yz => Vector2 [1, 2],
    zx / set_zx => Vector2 [2, 0],
    zy / set_zy => Vector2 [2, 1],
    xyz / set_xyz => Vector3 [0, 1, 2],
    xzy / set_xzy => Vector3 [0, 2, 1],
    yxz / set_yxz => Vector3 [1, 0, 2],
    yzx / set_yzx => Vector3 [1, 2, 0],
    zxy / set_zxy => Vector3 [2, 0, 1],
    zyx / set_zyx => Vector3 [2, 1, 0],
    rg / set_rg => Vector2 [0, 1],
    rb / set_rb => Vector2 [0, 2],
    ra / set_ra => Vector2 [0, 3],
    gr / set_gr => Vector2 [1, 0],
    gb / set_gb => Vector2 [1, 2],
    ga / set_ga => Vector2 [1, 3],
    br / set_br => Vector2 [2, 0],
    bg / set_bg => Vector2 [2, 1],
    ba / set_ba => Vector2 [2, 3],
    ar / set_ar => Vector2 [3, 0],
    ag / set_ag => Vector2 [3, 1],
    ab / set_ab => Vector2 [3, 2],
    rgb / set_rgb => Vector3 [0, 1, 2],
    rga / set_rga => Vector3 [0, 1, 3],
    rbg / set_rbg => Vector3 [0, 2, 1],
    rba / set_rba => Vector3 [0, 2, 3],
    rag / set_rag => Vector3 [0, 3, 1],
    rab / set_rab => Vector3 [0, 3, 2],
    grb / set_grb => Vector3 [1, 0, 2],
    gra / set_gra => Vector3 [1, 0, 3],
    gbr / set_gbr => Vector3 [1, 2, 0],
    gba / set_gba => Vector3 [1, 2, 3],
    gar / set_gar => Vector3 [1, 3, 0],
    gab / set_gab => Vector3 [1, 3, 2],
    brg / set_brg => Vector3 [2, 0, 1],
    bra / set_bra => Vector3 [2, 0, 3],
    bgr / set_bgr => Vector3 [2, 1, 0],
    bga / set_bga => Vector3 [2, 1, 3],
    bar / set_bar => Vector3 [2, 3, 0],
    bag / set_bag => Vector3 [2, 3, 1],
    arg / set_arg => Vector3 [3, 0, 1],
    arb / set_arb => Vector3 [3, 0, 2],
    agr / set_agr => Vector3 [3, 1, 0],
    agb / set_agb => Vector3 [3, 1, 2],
    abr / set_abr => Vector3 [3, 2, 0],
    abg / set_abg => Vector3 [3, 2, 1],
    rgba / set_rgba => Vector4 [0, 1, 2, 3],
    rgab / set_rgab => Vector4 [0, 1, 3, 2],
    rbga / set_rbga => Vector4 [0, 2, 1, 3],
    rbag / set_rbag => Vector4 [0, 2, 3, 1],
    ragb / set_ragb => Vector4 [0, 3, 1, 2],
    rabg / set_rabg => Vector4 [0, 3, 2, 1],
    grba / set_grba => Vector4 [1, 0, 2, 3],
    grab / set_grab => Vector4 [1, 0, 3, 2],
    gbra / set_gbra => Vector4 [1, 2, 0, 3],
    gbar / set_gbar => Vector4 [1, 2, 3, 0],
    garb / set_garb => Vector4 [1, 3, 0, 2],
    gabr / set_gabr => Vector4 [1, 3, 2, 0],
    brga / set_brga => Vector4 [2, 0, 1, 3],
    brag / set_brag => Vector4 [2, 0, 3, 1],
    bgra / set_bgra => Vector4 [2, 1, 0, 3],
    bgar / set_bgar => Vector4 [2, 1, 3, 0],
    barg / set_barg => Vector4 [2, 3, 0, 1],
    bagr / set_bagr => Vector4 [2, 3, 1, 0],
    argb / set_argb => Vector4 [3, 0, 1, 2],
    arbg / set_arbg => Vector4 [3, 0, 2, 1],
    agrb / set_agrb => Vector4 [3, 1, 0, 2],
    agbr / set_agbr => Vector4 [3, 1, 2, 0],
    abrg / set_abrg => Vector4 [3, 2, 0, 1],
    abgr / set_abgr => Vector4 [3, 2, 1, 0],
});
