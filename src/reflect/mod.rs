//! Active-variable records handed to the code generator and the runtime introspection table.
use crate::{
    qualifier::InterpolationMode,
    tags::{PrecisionTag, TypeTag},
};

pub mod traverse;

pub use traverse::{
    InterfaceBlockFieldVisitor, NoVisit, VariableTraverser, VariableVisitor, VaryingVisitor,
};

/// A reflected variable, generic over the variant-specific data `X`.
///
/// For nested record fields, `name` is the field name rather than a qualified path.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderVariable<X> {
    pub name: String,
    pub type_tag: TypeTag,
    pub precision: PrecisionTag,
    /// 0 if not an array
    pub array_size: u32,
    /// Non-empty only if `type_tag` is [TypeTag::Struct]
    pub fields: Vec<ShaderVariable<X>>,
    pub ext: X,
}
impl<X> ShaderVariable<X> {
    pub fn is_struct(&self) -> bool {
        self.type_tag == TypeTag::Struct
    }
    pub fn is_array(&self) -> bool {
        self.array_size > 0
    }
    /// The number of elements, treating a non-array as one
    pub fn element_count(&self) -> u32 {
        self.array_size.max(1)
    }
    pub fn field(&self, name: &str) -> Option<&ShaderVariable<X>> {
        self.fields.iter().find(|f| f.name == name)
    }
}

pub type Uniform = ShaderVariable<()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VaryingInfo {
    pub interpolation: InterpolationMode,
    pub is_invariant: bool,
}
pub type Varying = ShaderVariable<VaryingInfo>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockFieldInfo {
    /// Only ever set on matrix fields of a row-major block
    pub is_row_major_matrix: bool,
}
pub type InterfaceBlockField = ShaderVariable<BlockFieldInfo>;
