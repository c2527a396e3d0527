//! Projection of a resolved [TypeDesc] onto platform tags.
//!
//! Both mappers are total over what a correct front end can produce.
//! Anything else means an earlier pass let an invalid type through, so they panic instead of returning an error.
use crate::{
    tags::{PrecisionTag, TypeTag},
    types::{Arity, BasicKind, Precision, TypeDesc},
};

use crate::types::Arity::{Matrix, Scalar, Vector};
use crate::types::BasicKind as K;

/// Every valid (basic kind, arity) pair and the tag it maps to.
const TYPE_TAG_TABLE: &[(BasicKind, Arity, TypeTag)] = &[
    (K::Float, Scalar, TypeTag::Float),
    (K::Float, Vector(2), TypeTag::FloatVec2),
    (K::Float, Vector(3), TypeTag::FloatVec3),
    (K::Float, Vector(4), TypeTag::FloatVec4),
    (K::Float, Matrix { cols: 2, rows: 2 }, TypeTag::FloatMat2),
    (K::Float, Matrix { cols: 2, rows: 3 }, TypeTag::FloatMat2x3),
    (K::Float, Matrix { cols: 2, rows: 4 }, TypeTag::FloatMat2x4),
    (K::Float, Matrix { cols: 3, rows: 2 }, TypeTag::FloatMat3x2),
    (K::Float, Matrix { cols: 3, rows: 3 }, TypeTag::FloatMat3),
    (K::Float, Matrix { cols: 3, rows: 4 }, TypeTag::FloatMat3x4),
    (K::Float, Matrix { cols: 4, rows: 2 }, TypeTag::FloatMat4x2),
    (K::Float, Matrix { cols: 4, rows: 3 }, TypeTag::FloatMat4x3),
    (K::Float, Matrix { cols: 4, rows: 4 }, TypeTag::FloatMat4),
    (K::Int, Scalar, TypeTag::Int),
    (K::Int, Vector(2), TypeTag::IntVec2),
    (K::Int, Vector(3), TypeTag::IntVec3),
    (K::Int, Vector(4), TypeTag::IntVec4),
    (K::UInt, Scalar, TypeTag::UnsignedInt),
    (K::UInt, Vector(2), TypeTag::UnsignedIntVec2),
    (K::UInt, Vector(3), TypeTag::UnsignedIntVec3),
    (K::UInt, Vector(4), TypeTag::UnsignedIntVec4),
    (K::Bool, Scalar, TypeTag::Bool),
    (K::Bool, Vector(2), TypeTag::BoolVec2),
    (K::Bool, Vector(3), TypeTag::BoolVec3),
    (K::Bool, Vector(4), TypeTag::BoolVec4),
    (K::Sampler2D, Scalar, TypeTag::Sampler2D),
    (K::Sampler3D, Scalar, TypeTag::Sampler3D),
    (K::SamplerCube, Scalar, TypeTag::SamplerCube),
    (K::SamplerExternalOes, Scalar, TypeTag::SamplerExternalOes),
    (K::Sampler2DRect, Scalar, TypeTag::Sampler2DRectArb),
    (K::Sampler2DArray, Scalar, TypeTag::Sampler2DArray),
    (K::ISampler2D, Scalar, TypeTag::IntSampler2D),
    (K::ISampler3D, Scalar, TypeTag::IntSampler3D),
    (K::ISamplerCube, Scalar, TypeTag::IntSamplerCube),
    (K::ISampler2DArray, Scalar, TypeTag::IntSampler2DArray),
    (K::USampler2D, Scalar, TypeTag::UnsignedIntSampler2D),
    (K::USampler3D, Scalar, TypeTag::UnsignedIntSampler3D),
    (K::USamplerCube, Scalar, TypeTag::UnsignedIntSamplerCube),
    (K::USampler2DArray, Scalar, TypeTag::UnsignedIntSampler2DArray),
    (K::Sampler2DShadow, Scalar, TypeTag::Sampler2DShadow),
    (K::SamplerCubeShadow, Scalar, TypeTag::SamplerCubeShadow),
    (K::Sampler2DArrayShadow, Scalar, TypeTag::Sampler2DArrayShadow),
];

/// Look up a (basic kind, arity) pair, returning None if the table has no row for it
pub fn lookup_type_tag(basic_kind: BasicKind, arity: Arity) -> Option<TypeTag> {
    TYPE_TAG_TABLE
        .iter()
        .find(|(k, a, _)| *k == basic_kind && *a == arity)
        .map(|(_, _, tag)| *tag)
}

/// Map a non-record type to its platform tag.
///
/// Panics on records and on any combination outside [TYPE_TAG_TABLE], e.g. an `int` matrix or a sampler vector.
pub fn variable_type(ty: &TypeDesc) -> TypeTag {
    if ty.is_struct() {
        unreachable!("variable_type called on a record type; records are reflected structurally");
    }
    match lookup_type_tag(ty.basic_kind, ty.arity) {
        Some(tag) => tag,
        None => panic!(
            "no type tag for basic kind {:?} with arity {:?}",
            ty.basic_kind, ty.arity
        ),
    }
}

/// Map a type to its precision tag.
///
/// Records, bools and samplers have no precision. Numeric types must already carry a concrete precision.
pub fn variable_precision(ty: &TypeDesc) -> PrecisionTag {
    if ty.is_struct() {
        return PrecisionTag::None;
    }
    let (high, medium, low) = match ty.basic_kind {
        BasicKind::Float => (
            PrecisionTag::HighFloat,
            PrecisionTag::MediumFloat,
            PrecisionTag::LowFloat,
        ),
        BasicKind::Int | BasicKind::UInt => (
            PrecisionTag::HighInt,
            PrecisionTag::MediumInt,
            PrecisionTag::LowInt,
        ),
        _ => return PrecisionTag::None,
    };
    match ty.precision {
        Precision::High => high,
        Precision::Medium => medium,
        Precision::Low => low,
        Precision::Undefined => panic!(
            "undefined precision on {:?} {:?}; default precision should have been resolved",
            ty.basic_kind, ty.arity
        ),
    }
}
