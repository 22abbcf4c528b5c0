//! String-keyed component access
//!
//! Resolves an accessor name such as `"x"`, `"2"`, `"bgr"` or `"norm"` against
//! a vector's size and reads or writes through it. Lookup is tiered, first
//! match wins:
//!
//! 1. Read-only properties (`size`, `n2`, `norm`, `normalize`, and `angle` on
//!    2-vectors), then methods taking arguments (`dot`, `plus`, ..., and
//!    `rotate`/`cross` on 2-vectors), then single-letter component names
//!    valid for the size. Method keys resolve but fail with
//!    [`VectorError::MethodAccessor`] on read and write.
//! 2. All-digit keys index the buffer directly.
//! 3. Keys of two or more letters drawn from one alphabet valid for the size
//!    are swizzles: reads gather a fresh vector in key order, writes scatter
//!    left to right.
//! 4. Anything else is [`VectorError::UnknownAccessor`].
//!
//! A single letter is always a scalar component, never a length-1 swizzle.
//! Mixed-alphabet keys such as `"xr"` never resolve.
//!
//! Code that knows its dimension at compile time should prefer the generated
//! methods on [`Vector2`](crate::Vector2), [`Vector3`](crate::Vector3) and
//! [`Vector4`](crate::Vector4).

use crate::alphabet;
use crate::error::{Result, VectorError};
use crate::vector::Vector;

/// Zero-argument computed property reachable by key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Size,
    N2,
    Norm,
    Normalize,
    /// Only on 2-vectors
    Angle,
}

impl Property {
    /// Property named `key` on a vector of `size`
    pub fn parse(key: &str, size: usize) -> Option<Self> {
        match key {
            "size" => Some(Self::Size),
            "n2" => Some(Self::N2),
            "norm" => Some(Self::Norm),
            "normalize" => Some(Self::Normalize),
            "angle" if size == 2 => Some(Self::Angle),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::N2 => "n2",
            Self::Norm => "norm",
            Self::Normalize => "normalize",
            Self::Angle => "angle",
        }
    }

    fn read(self, vector: &Vector) -> Access {
        match self {
            Self::Size => Access::Scalar(vector.size() as f64),
            Self::N2 => Access::Scalar(vector.n2()),
            Self::Norm => Access::Scalar(vector.norm()),
            Self::Normalize => Access::Vector(vector.normalize()),
            Self::Angle => Access::Scalar(vector[1].atan2(vector[0])),
        }
    }
}

/// Methods that take arguments on every vector
const METHODS: [&str; 7] = ["dot", "plus", "minus", "times", "equals", "get", "set"];

/// Methods that take arguments on 2-vectors only
const METHODS_2D: [&str; 2] = ["rotate", "cross"];

/// Method named `key` on a vector of `size`
fn method(key: &str, size: usize) -> Option<&'static str> {
    let extra: &[&'static str] = if size == 2 { &METHODS_2D } else { &[] };
    METHODS.iter().chain(extra).copied().find(|&name| name == key)
}

/// A key resolved against a particular vector size
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessKey {
    Property(Property),
    /// Method that takes arguments; not readable or writable by key
    Method(&'static str),
    /// Raw buffer index from an all-digit key
    Index(usize),
    /// Slot named by a single letter
    Component(usize),
    /// Slots named by a multi-letter key, in key order
    Swizzle(Vec<usize>),
}

/// Value read from, or written through, a key
#[derive(Clone, Debug, PartialEq)]
pub enum Access {
    Scalar(f64),
    Vector(Vector),
}

impl Access {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Access::Scalar(value) => Some(*value),
            Access::Vector(_) => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Access::Scalar(_) => None,
            Access::Vector(vector) => Some(vector),
        }
    }

    pub fn into_vector(self) -> Option<Vector> {
        match self {
            Access::Scalar(_) => None,
            Access::Vector(vector) => Some(vector),
        }
    }
}

impl From<f64> for Access {
    fn from(value: f64) -> Self {
        Access::Scalar(value)
    }
}

impl From<Vector> for Access {
    fn from(vector: Vector) -> Self {
        Access::Vector(vector)
    }
}

impl From<&Vector> for Access {
    fn from(vector: &Vector) -> Self {
        Access::Vector(vector.clone())
    }
}

impl From<Vec<f64>> for Access {
    fn from(components: Vec<f64>) -> Self {
        Access::Vector(Vector::from(components))
    }
}

/// Resolve `key` for a vector of `size` components
pub fn resolve(key: &str, size: usize) -> Result<AccessKey> {
    if let Some(property) = Property::parse(key, size) {
        return Ok(AccessKey::Property(property));
    }

    if let Some(name) = method(key, size) {
        return Ok(AccessKey::Method(name));
    }

    let mut letters = key.chars();
    if let (Some(letter), None) = (letters.next(), letters.next()) {
        if let Some(slot) = alphabet::component_slot(letter, size) {
            return Ok(AccessKey::Component(slot));
        }
    }

    if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
        return match key.parse::<usize>() {
            Ok(index) if index < size => Ok(AccessKey::Index(index)),
            Ok(index) => Err(VectorError::IndexOutOfRange { index, size }),
            Err(_) => Err(VectorError::UnknownAccessor {
                key: key.to_owned(),
                size,
            }),
        };
    }

    if key.chars().count() >= 2 {
        if let Some(slots) = alphabet::uniform_slots(key, size) {
            return Ok(AccessKey::Swizzle(slots));
        }
    }

    log::debug!("Rejected accessor '{}' on vector of size {}", key, size);
    Err(VectorError::UnknownAccessor {
        key: key.to_owned(),
        size,
    })
}

impl Vector {
    /// Resolve `key` against this vector's size
    #[inline]
    pub fn resolve_key(&self, key: &str) -> Result<AccessKey> {
        resolve(key, self.size())
    }

    /// Read through `key`
    pub fn get_by_key(&self, key: &str) -> Result<Access> {
        let resolved = self.resolve_key(key)?;
        log::trace!("Reading '{}' as {:?}", key, resolved);
        match resolved {
            AccessKey::Property(property) => Ok(property.read(self)),
            AccessKey::Method(name) => Err(VectorError::MethodAccessor(name.to_owned())),
            AccessKey::Index(slot) | AccessKey::Component(slot) => {
                Ok(Access::Scalar(self[slot]))
            }
            AccessKey::Swizzle(slots) => Ok(Access::Vector(self.gather(&slots))),
        }
    }

    /// Write through `key`. Component and index keys take a scalar; swizzle
    /// keys take a vector with at least as many components as the key has
    /// letters. Nothing is written unless the whole write is valid.
    pub fn set_by_key(&mut self, key: &str, value: impl Into<Access>) -> Result<()> {
        let resolved = self.resolve_key(key)?;
        let value: Access = value.into();
        log::trace!("Writing '{}' as {:?}", key, resolved);
        match (resolved, value) {
            (AccessKey::Property(property), _) => {
                Err(VectorError::ReadOnlyAccessor(property.name().to_owned()))
            }
            (AccessKey::Method(name), _) => Err(VectorError::MethodAccessor(name.to_owned())),
            (AccessKey::Index(slot) | AccessKey::Component(slot), Access::Scalar(value)) => {
                self[slot] = value;
                Ok(())
            }
            (AccessKey::Index(_) | AccessKey::Component(_), Access::Vector(_)) => {
                Err(VectorError::AccessKind {
                    key: key.to_owned(),
                    expected: "scalar",
                })
            }
            (AccessKey::Swizzle(slots), Access::Vector(values)) => {
                if values.size() < slots.len() {
                    return Err(VectorError::InsufficientComponents {
                        key: key.to_owned(),
                        needed: slots.len(),
                        found: values.size(),
                    });
                }
                self.scatter(&slots, values.as_slice());
                Ok(())
            }
            (AccessKey::Swizzle(_), Access::Scalar(_)) => Err(VectorError::AccessKind {
                key: key.to_owned(),
                expected: "vector",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v4() -> Vector {
        Vector::from([1.0, 2.0, 3.0, 4.0])
    }

    #[test]
    fn test_single_letter_is_component() {
        assert_eq!(resolve("x", 3), Ok(AccessKey::Component(0)));
        assert_eq!(resolve("b", 3), Ok(AccessKey::Component(2)));
        assert_eq!(resolve("a", 4), Ok(AccessKey::Component(3)));
    }

    #[test]
    fn test_digits_are_indices() {
        assert_eq!(resolve("0", 2), Ok(AccessKey::Index(0)));
        assert_eq!(resolve("2", 7), Ok(AccessKey::Index(2)));
        assert_eq!(
            resolve("2", 2),
            Err(VectorError::IndexOutOfRange { index: 2, size: 2 })
        );
    }

    #[test]
    fn test_properties_shadow_everything() {
        assert_eq!(resolve("norm", 4), Ok(AccessKey::Property(Property::Norm)));
        assert_eq!(resolve("angle", 2), Ok(AccessKey::Property(Property::Angle)));
        assert!(matches!(
            resolve("angle", 3),
            Err(VectorError::UnknownAccessor { .. })
        ));
    }

    #[test]
    fn test_method_names_are_not_unknown() {
        assert_eq!(resolve("rotate", 2), Ok(AccessKey::Method("rotate")));
        assert_eq!(resolve("plus", 4), Ok(AccessKey::Method("plus")));
        assert_eq!(resolve("dot", 7), Ok(AccessKey::Method("dot")));
        assert!(matches!(
            resolve("cross", 3),
            Err(VectorError::UnknownAccessor { .. })
        ));
    }

    #[test]
    fn test_method_keys_cannot_be_read_or_written() {
        let mut v = Vector::from([1.0, 0.0]);
        assert_eq!(
            v.get_by_key("rotate"),
            Err(VectorError::MethodAccessor("rotate".to_owned()))
        );
        assert_eq!(
            v.set_by_key("times", 2.0),
            Err(VectorError::MethodAccessor("times".to_owned()))
        );
        assert_eq!(v.as_slice(), &[1.0, 0.0]);
    }

    #[test]
    fn test_overflowing_index_is_unknown() {
        let key = "99999999999999999999999";
        assert_eq!(
            resolve(key, 2),
            Err(VectorError::UnknownAccessor {
                key: key.to_owned(),
                size: 2
            })
        );
    }

    #[test]
    fn test_swizzle_keys() {
        assert_eq!(resolve("bgr", 4), Ok(AccessKey::Swizzle(vec![2, 1, 0])));
        assert_eq!(resolve("xx", 2), Ok(AccessKey::Swizzle(vec![0, 0])));
        assert_eq!(
            resolve("xxyyx", 2),
            Ok(AccessKey::Swizzle(vec![0, 0, 1, 1, 0]))
        );
    }

    #[test]
    fn test_unknown_keys() {
        for (key, size) in [("xr", 4), ("z", 2), ("rg", 2), ("", 3), ("w", 4), ("xy", 5), ("x", 1)] {
            assert_eq!(
                resolve(key, size),
                Err(VectorError::UnknownAccessor {
                    key: key.to_owned(),
                    size
                }),
                "key {:?} size {}",
                key,
                size
            );
        }
    }

    #[test]
    fn test_read_properties() {
        let v = Vector::from([3.0, 4.0]);
        assert_eq!(v.get_by_key("size"), Ok(Access::Scalar(2.0)));
        assert_eq!(v.get_by_key("n2"), Ok(Access::Scalar(25.0)));
        assert_eq!(v.get_by_key("norm"), Ok(Access::Scalar(5.0)));
        let unit = v.get_by_key("normalize").unwrap().into_vector().unwrap();
        approx::assert_relative_eq!(unit[0], 0.6);
        approx::assert_relative_eq!(unit[1], 0.8);
    }

    #[test]
    fn test_write_property_is_rejected() {
        let mut v = v4();
        assert_eq!(
            v.set_by_key("norm", 1.0),
            Err(VectorError::ReadOnlyAccessor("norm".to_owned()))
        );
    }

    #[test]
    fn test_swizzle_write_scatter() {
        let mut v = v4();
        v.set_by_key("gr", vec![5.0, 6.0]).unwrap();
        assert_eq!(v.as_slice(), &[6.0, 5.0, 3.0, 4.0]);
    }

    #[test]
    fn test_swizzle_write_accepts_longer_value() {
        let mut v = v4();
        v.set_by_key("ba", vec![9.0, 8.0, 7.0]).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 9.0, 8.0]);
    }

    #[test]
    fn test_repeated_letter_write_last_wins() {
        let mut v = Vector::from([1.0, 2.0]);
        v.set_by_key("xx", vec![5.0, 6.0]).unwrap();
        assert_eq!(v.as_slice(), &[6.0, 2.0]);
    }

    #[test]
    fn test_short_swizzle_write_leaves_vector_untouched() {
        let mut v = v4();
        assert_eq!(
            v.set_by_key("rgb", vec![9.0, 9.0]),
            Err(VectorError::InsufficientComponents {
                key: "rgb".to_owned(),
                needed: 3,
                found: 2
            })
        );
        assert_eq!(v, v4());
    }

    #[test]
    fn test_value_kind_mismatch() {
        let mut v = v4();
        assert!(matches!(
            v.set_by_key("rg", 1.0),
            Err(VectorError::AccessKind { expected: "vector", .. })
        ));
        assert!(matches!(
            v.set_by_key("r", vec![1.0]),
            Err(VectorError::AccessKind { expected: "scalar", .. })
        ));
        assert_eq!(v, v4());
    }

    #[test]
    fn test_unknown_write_fails_closed() {
        let mut v = v4();
        assert!(matches!(
            v.set_by_key("foo", 1.0),
            Err(VectorError::UnknownAccessor { .. })
        ));
        assert_eq!(v, v4());
    }
}
