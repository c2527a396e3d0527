//! Platform tags understood by the GL runtime and the code generator.
//!
//! Discriminants are the GL enum values, so a tag can be written straight into an introspection table.
use std::{fmt::Display, str::FromStr};

use num_traits::FromPrimitive;
use phf::phf_map;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("Value 0x{1:04X} is not a valid {0}")]
    UnknownValue(&'static str, u32),
    #[error("Unknown type tag name '{0}'")]
    UnknownName(String),
}

/// Decode a raw GL enum into one of the tag enums
fn decode_gl<T: FromPrimitive>(value: u32) -> Result<T, TagError> {
    T::from_u32(value).ok_or(TagError::UnknownValue(std::any::type_name::<T>(), value))
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive)]
pub enum TypeTag {
    /// Sentinel for record types. Not a GL value.
    Struct = 0,

    Float = 0x1406,
    FloatVec2 = 0x8B50,
    FloatVec3 = 0x8B51,
    FloatVec4 = 0x8B52,
    FloatMat2 = 0x8B5A,
    FloatMat3 = 0x8B5B,
    FloatMat4 = 0x8B5C,
    FloatMat2x3 = 0x8B65,
    FloatMat2x4 = 0x8B66,
    FloatMat3x2 = 0x8B67,
    FloatMat3x4 = 0x8B68,
    FloatMat4x2 = 0x8B69,
    FloatMat4x3 = 0x8B6A,

    Int = 0x1404,
    IntVec2 = 0x8B53,
    IntVec3 = 0x8B54,
    IntVec4 = 0x8B55,

    UnsignedInt = 0x1405,
    UnsignedIntVec2 = 0x8DC6,
    UnsignedIntVec3 = 0x8DC7,
    UnsignedIntVec4 = 0x8DC8,

    Bool = 0x8B56,
    BoolVec2 = 0x8B57,
    BoolVec3 = 0x8B58,
    BoolVec4 = 0x8B59,

    Sampler2D = 0x8B5E,
    Sampler3D = 0x8B5F,
    SamplerCube = 0x8B60,
    SamplerExternalOes = 0x8D66,
    Sampler2DRectArb = 0x8B63,
    Sampler2DArray = 0x8DC1,
    IntSampler2D = 0x8DCA,
    IntSampler3D = 0x8DCB,
    IntSamplerCube = 0x8DCC,
    IntSampler2DArray = 0x8DCF,
    UnsignedIntSampler2D = 0x8DD2,
    UnsignedIntSampler3D = 0x8DD3,
    UnsignedIntSamplerCube = 0x8DD4,
    UnsignedIntSampler2DArray = 0x8DD7,
    Sampler2DShadow = 0x8B62,
    SamplerCubeShadow = 0x8DC5,
    Sampler2DArrayShadow = 0x8DC4,
}

const TYPE_TAG_NAMES: phf::Map<&'static str, TypeTag> = phf_map! {
    "STRUCT" => TypeTag::Struct,
    "FLOAT" => TypeTag::Float,
    "FLOAT_VEC2" => TypeTag::FloatVec2,
    "FLOAT_VEC3" => TypeTag::FloatVec3,
    "FLOAT_VEC4" => TypeTag::FloatVec4,
    "FLOAT_MAT2" => TypeTag::FloatMat2,
    "FLOAT_MAT3" => TypeTag::FloatMat3,
    "FLOAT_MAT4" => TypeTag::FloatMat4,
    "FLOAT_MAT2x3" => TypeTag::FloatMat2x3,
    "FLOAT_MAT2x4" => TypeTag::FloatMat2x4,
    "FLOAT_MAT3x2" => TypeTag::FloatMat3x2,
    "FLOAT_MAT3x4" => TypeTag::FloatMat3x4,
    "FLOAT_MAT4x2" => TypeTag::FloatMat4x2,
    "FLOAT_MAT4x3" => TypeTag::FloatMat4x3,
    "INT" => TypeTag::Int,
    "INT_VEC2" => TypeTag::IntVec2,
    "INT_VEC3" => TypeTag::IntVec3,
    "INT_VEC4" => TypeTag::IntVec4,
    "UNSIGNED_INT" => TypeTag::UnsignedInt,
    "UNSIGNED_INT_VEC2" => TypeTag::UnsignedIntVec2,
    "UNSIGNED_INT_VEC3" => TypeTag::UnsignedIntVec3,
    "UNSIGNED_INT_VEC4" => TypeTag::UnsignedIntVec4,
    "BOOL" => TypeTag::Bool,
    "BOOL_VEC2" => TypeTag::BoolVec2,
    "BOOL_VEC3" => TypeTag::BoolVec3,
    "BOOL_VEC4" => TypeTag::BoolVec4,
    "SAMPLER_2D" => TypeTag::Sampler2D,
    "SAMPLER_3D" => TypeTag::Sampler3D,
    "SAMPLER_CUBE" => TypeTag::SamplerCube,
    "SAMPLER_EXTERNAL_OES" => TypeTag::SamplerExternalOes,
    "SAMPLER_2D_RECT_ARB" => TypeTag::Sampler2DRectArb,
    "SAMPLER_2D_ARRAY" => TypeTag::Sampler2DArray,
    "INT_SAMPLER_2D" => TypeTag::IntSampler2D,
    "INT_SAMPLER_3D" => TypeTag::IntSampler3D,
    "INT_SAMPLER_CUBE" => TypeTag::IntSamplerCube,
    "INT_SAMPLER_2D_ARRAY" => TypeTag::IntSampler2DArray,
    "UNSIGNED_INT_SAMPLER_2D" => TypeTag::UnsignedIntSampler2D,
    "UNSIGNED_INT_SAMPLER_3D" => TypeTag::UnsignedIntSampler3D,
    "UNSIGNED_INT_SAMPLER_CUBE" => TypeTag::UnsignedIntSamplerCube,
    "UNSIGNED_INT_SAMPLER_2D_ARRAY" => TypeTag::UnsignedIntSampler2DArray,
    "SAMPLER_2D_SHADOW" => TypeTag::Sampler2DShadow,
    "SAMPLER_CUBE_SHADOW" => TypeTag::SamplerCubeShadow,
    "SAMPLER_2D_ARRAY_SHADOW" => TypeTag::Sampler2DArrayShadow,
};

impl TypeTag {
    /// Decode a GL enum value. The struct sentinel has no GL value and is rejected.
    pub fn from_gl(value: u32) -> Result<Self, TagError> {
        match decode_gl(value)? {
            TypeTag::Struct => Err(TagError::UnknownValue(std::any::type_name::<Self>(), value)),
            tag => Ok(tag),
        }
    }

    pub fn gl_value(self) -> u32 {
        self as u32
    }

    /// Every tag, sorted by GL value
    pub fn all() -> Vec<TypeTag> {
        let mut tags: Vec<TypeTag> = TYPE_TAG_NAMES.values().copied().collect();
        tags.sort();
        tags
    }

    /// The GL name without the `GL_` prefix
    pub fn name(self) -> &'static str {
        TYPE_TAG_NAMES
            .entries()
            .find(|(_, tag)| **tag == self)
            .map(|(name, _)| *name)
            .unwrap_or_else(|| unreachable!("{:?} missing from TYPE_TAG_NAMES", self))
    }

    /// `(columns, rows)`. Vectors are one row, samplers and scalars are 1x1.
    ///
    /// Records have no components of their own, so [TypeTag::Struct] is 0x0.
    pub fn shape(self) -> (u8, u8) {
        use TypeTag::*;
        match self {
            FloatVec2 | IntVec2 | UnsignedIntVec2 | BoolVec2 => (2, 1),
            FloatVec3 | IntVec3 | UnsignedIntVec3 | BoolVec3 => (3, 1),
            FloatVec4 | IntVec4 | UnsignedIntVec4 | BoolVec4 => (4, 1),
            FloatMat2 => (2, 2),
            FloatMat3 => (3, 3),
            FloatMat4 => (4, 4),
            FloatMat2x3 => (2, 3),
            FloatMat2x4 => (2, 4),
            FloatMat3x2 => (3, 2),
            FloatMat3x4 => (3, 4),
            FloatMat4x2 => (4, 2),
            FloatMat4x3 => (4, 3),
            Struct => (0, 0),
            _ => (1, 1),
        }
    }

    pub fn column_count(self) -> u8 {
        self.shape().0
    }
    pub fn row_count(self) -> u8 {
        self.shape().1
    }
    pub fn component_count(self) -> u8 {
        let (cols, rows) = self.shape();
        cols * rows
    }

    pub fn is_matrix(self) -> bool {
        use TypeTag::*;
        matches!(
            self,
            FloatMat2
                | FloatMat3
                | FloatMat4
                | FloatMat2x3
                | FloatMat2x4
                | FloatMat3x2
                | FloatMat3x4
                | FloatMat4x2
                | FloatMat4x3
        )
    }

    pub fn is_sampler(self) -> bool {
        use TypeTag::*;
        matches!(
            self,
            Sampler2D
                | Sampler3D
                | SamplerCube
                | SamplerExternalOes
                | Sampler2DRectArb
                | Sampler2DArray
                | IntSampler2D
                | IntSampler3D
                | IntSamplerCube
                | IntSampler2DArray
                | UnsignedIntSampler2D
                | UnsignedIntSampler3D
                | UnsignedIntSamplerCube
                | UnsignedIntSampler2DArray
                | Sampler2DShadow
                | SamplerCubeShadow
                | Sampler2DArrayShadow
        )
    }

    /// The scalar tag each component is made of. Samplers are their own component type.
    pub fn component_type(self) -> TypeTag {
        use TypeTag::*;
        match self {
            Float | FloatVec2 | FloatVec3 | FloatVec4 => Float,
            x if x.is_matrix() => Float,
            Int | IntVec2 | IntVec3 | IntVec4 => Int,
            UnsignedInt | UnsignedIntVec2 | UnsignedIntVec3 | UnsignedIntVec4 => UnsignedInt,
            Bool | BoolVec2 | BoolVec3 | BoolVec4 => Bool,
            other => other,
        }
    }

    /// Swap the columns and rows of a matrix tag. Other tags are returned unchanged.
    pub fn transposed(self) -> TypeTag {
        use TypeTag::*;
        match self {
            FloatMat2x3 => FloatMat3x2,
            FloatMat3x2 => FloatMat2x3,
            FloatMat2x4 => FloatMat4x2,
            FloatMat4x2 => FloatMat2x4,
            FloatMat3x4 => FloatMat4x3,
            FloatMat4x3 => FloatMat3x4,
            other => other,
        }
    }
}
impl Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl FromStr for TypeTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("GL_").unwrap_or(s);
        TYPE_TAG_NAMES
            .get(s)
            .copied()
            .ok_or_else(|| TagError::UnknownName(s.to_owned()))
    }
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum PrecisionTag {
    /// Booleans, samplers and records
    None = 0,
    LowFloat = 0x8DF0,
    MediumFloat = 0x8DF1,
    HighFloat = 0x8DF2,
    LowInt = 0x8DF3,
    MediumInt = 0x8DF4,
    HighInt = 0x8DF5,
}
impl PrecisionTag {
    pub fn from_gl(value: u32) -> Result<Self, TagError> {
        decode_gl(value)
    }
    pub fn gl_value(self) -> u32 {
        self as u32
    }
}
impl Display for PrecisionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PrecisionTag::None => "NONE",
            PrecisionTag::LowFloat => "LOW_FLOAT",
            PrecisionTag::MediumFloat => "MEDIUM_FLOAT",
            PrecisionTag::HighFloat => "HIGH_FLOAT",
            PrecisionTag::LowInt => "LOW_INT",
            PrecisionTag::MediumInt => "MEDIUM_INT",
            PrecisionTag::HighInt => "HIGH_INT",
        };
        write!(f, "{}", s)
    }
}
