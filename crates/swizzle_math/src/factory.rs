//! Vector construction
//!
//! [`vector`] accepts any number of components; the result's letters follow
//! from its length. [`vector2`], [`vector3`] and [`vector4`] insist on an
//! exact length so call sites can assert dimensionality at the boundary.

use crate::dimension::{Vector2, Vector3, Vector4};
use crate::error::{Result, VectorError};
use crate::vector::{Dimension, Vector};

/// A vector sorted into its specialization by length
#[derive(Clone, Debug, PartialEq)]
pub enum Specialized {
    Two(Vector2),
    Three(Vector3),
    Four(Vector4),
    Dynamic(Vector),
}

impl Specialized {
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.as_vector().dimension()
    }

    pub fn as_vector(&self) -> &Vector {
        match self {
            Specialized::Two(v) => v.as_vector(),
            Specialized::Three(v) => v.as_vector(),
            Specialized::Four(v) => v.as_vector(),
            Specialized::Dynamic(v) => v,
        }
    }

    pub fn into_vector(self) -> Vector {
        match self {
            Specialized::Two(v) => v.into(),
            Specialized::Three(v) => v.into(),
            Specialized::Four(v) => v.into(),
            Specialized::Dynamic(v) => v,
        }
    }
}

impl Vector {
    /// Sort into the 2/3/4 specialization matching this vector's length
    pub fn specialize(self) -> Specialized {
        match self.dimension() {
            Dimension::Two => Specialized::Two(Vector2(self)),
            Dimension::Three => Specialized::Three(Vector3(self)),
            Dimension::Four => Specialized::Four(Vector4(self)),
            Dimension::Dynamic(_) => Specialized::Dynamic(self),
        }
    }
}

/// Vector of any length
///
/// Keyed access already follows the length (a 3-component result answers to
/// `"z"` and `"rgb"`). The typed methods such as [`Vector2::rotate`] need the
/// specialized wrapper; use [`vector_specialized`] or [`Vector::specialize`].
#[inline]
pub fn vector(components: &[f64]) -> Vector {
    Vector::from_slice(components)
}

/// Vector of any length, sorted into its 2/3/4 specialization
///
/// ```
/// use swizzle_math::{vector_specialized, Specialized};
///
/// if let Specialized::Two(v) = vector_specialized(&[1.0, 1.0]) {
///     assert_eq!(v.angle(), core::f64::consts::FRAC_PI_4);
/// }
/// ```
#[inline]
pub fn vector_specialized(components: &[f64]) -> Specialized {
    vector(components).specialize()
}

fn exact<const N: usize>(components: &[f64]) -> Result<[f64; N]> {
    components.try_into().map_err(|_| VectorError::Arity {
        expected: N,
        found: components.len(),
    })
}

/// 2-vector; fails with [`VectorError::Arity`] unless given exactly 2 components
pub fn vector2(components: &[f64]) -> Result<Vector2> {
    exact::<2>(components).map(Vector2::from_array)
}

/// 3-vector; fails with [`VectorError::Arity`] unless given exactly 3 components
pub fn vector3(components: &[f64]) -> Result<Vector3> {
    exact::<3>(components).map(Vector3::from_array)
}

/// 4-vector; fails with [`VectorError::Arity`] unless given exactly 4 components
pub fn vector4(components: &[f64]) -> Result<Vector4> {
    exact::<4>(components).map(Vector4::from_array)
}

/// Build a [`Vector`] from a list of numeric expressions
///
/// ```
/// use swizzle_math::vector;
///
/// let v = vector![1, 2.5, 3];
/// assert_eq!(v.to_vec(), vec![1.0, 2.5, 3.0]);
/// ```
#[macro_export]
macro_rules! vector {
    ($($component:expr),* $(,)?) => {
        $crate::factory::vector(&[$(($component) as f64),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_factory_dispatch() {
        assert_eq!(vector(&[]).dimension(), Dimension::Dynamic(0));
        assert_eq!(vector(&[1.0]).dimension(), Dimension::Dynamic(1));
        assert!(matches!(vector(&[1.0, 2.0]).specialize(), Specialized::Two(_)));
        assert!(matches!(
            vector(&[1.0, 2.0, 3.0]).specialize(),
            Specialized::Three(_)
        ));
        assert!(matches!(
            vector(&[1.0, 2.0, 3.0, 4.0]).specialize(),
            Specialized::Four(_)
        ));
        assert!(matches!(
            vector(&[1.0; 5]).specialize(),
            Specialized::Dynamic(_)
        ));
    }

    #[test]
    fn test_exact_factories_check_arity() {
        assert_eq!(
            vector2(&[1.0, 2.0, 3.0]),
            Err(VectorError::Arity { expected: 2, found: 3 })
        );
        assert_eq!(
            vector3(&[1.0, 2.0]),
            Err(VectorError::Arity { expected: 3, found: 2 })
        );
        assert_eq!(
            vector4(&[]),
            Err(VectorError::Arity { expected: 4, found: 0 })
        );
        assert_eq!(vector4(&[1.0, 2.0, 3.0, 4.0]).map(|v| v.a()), Ok(4.0));
    }

    #[test]
    fn test_vector_specialized_reaches_typed_methods() {
        match vector_specialized(&[1.0, 0.0]) {
            Specialized::Two(v) => assert_eq!(v.cross(&Vector2::new(0.0, 1.0)), 1.0),
            other => panic!("expected a 2-vector, got {:?}", other),
        }
        assert!(matches!(
            vector_specialized(&[1.0, 2.0, 3.0, 4.0]),
            Specialized::Four(_)
        ));
        assert!(matches!(vector_specialized(&[1.0]), Specialized::Dynamic(_)));
    }

    #[test]
    fn test_specialize_round_trip() {
        let v = vector(&[1.0, 2.0, 3.0]);
        let s = v.clone().specialize();
        assert_eq!(s.dimension(), Dimension::Three);
        assert_eq!(s.as_vector(), &v);
        assert_eq!(s.into_vector(), v);
    }

    #[test]
    fn test_vector_macro() {
        assert_eq!(crate::vector![3, 4].norm(), 5.0);
        assert_eq!(crate::vector![].size(), 0);
    }
}
