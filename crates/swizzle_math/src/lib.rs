//! # swizzle_math - Vectors with GLSL-style swizzles
//!
//! Fixed-dimension real vectors with arithmetic, a few 2D geometric helpers
//! and component access by letter:
//!
//! - [`Vector`]: any length, owns its buffer, size fixed for life
//! - [`Vector2`], [`Vector3`], [`Vector4`]: exact lengths with named letters
//!   (`x y z`, `r g b a`) and generated swizzle methods
//! - [`Vector::get_by_key`] / [`Vector::set_by_key`]: string-keyed access for
//!   arbitrary swizzles such as `"rrgb"`, numeric indices and properties
//!
//! ```
//! use swizzle_math::prelude::*;
//!
//! let mut v = vector4(&[1.0, 2.0, 3.0, 4.0])?;
//! assert_eq!(v.bgr(), Vector3::new(3.0, 2.0, 1.0));
//!
//! let rrgb = v.get_by_key("rrgb")?;
//! assert_eq!(rrgb, Access::Vector(vector(&[1.0, 1.0, 2.0, 3.0])));
//!
//! v.set_by_key("gr", Vector2::new(5.0, 6.0))?;
//! assert_eq!(v.to_array(), [6.0, 5.0, 3.0, 4.0]);
//! # Ok::<(), VectorError>(())
//! ```

pub mod alphabet;
pub mod dimension;
pub mod error;
pub mod factory;
pub mod swizzle;
pub mod vector;

pub use alphabet::Alphabet;
pub use dimension::{Vector2, Vector3, Vector4};
pub use error::{Result, VectorError};
pub use factory::{vector, vector2, vector3, vector4, vector_specialized, Specialized};
pub use swizzle::{Access, AccessKey, Property};
pub use vector::{Dimension, Vector};

pub mod prelude {
    pub use crate::dimension::{Vector2, Vector3, Vector4};
    pub use crate::error::VectorError;
    pub use crate::factory::{vector, vector2, vector3, vector4, vector_specialized, Specialized};
    pub use crate::swizzle::Access;
    pub use crate::vector::{Dimension, Vector};
}
