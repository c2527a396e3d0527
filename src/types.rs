//! The front end's view of a declared shader type.
//!
//! A [TypeDesc] is handed to this crate fully resolved: precisions have been defaulted,
//! basic kind/arity combinations have been validated. Nothing here mutates it.

/// The scalar category of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicKind {
    Float,
    Int,
    UInt,
    Bool,
    Sampler2D,
    Sampler3D,
    SamplerCube,
    SamplerExternalOes,
    Sampler2DRect,
    Sampler2DArray,
    ISampler2D,
    ISampler3D,
    ISamplerCube,
    ISampler2DArray,
    USampler2D,
    USampler3D,
    USamplerCube,
    USampler2DArray,
    Sampler2DShadow,
    SamplerCubeShadow,
    Sampler2DArrayShadow,
}
impl BasicKind {
    pub fn is_sampler(&self) -> bool {
        !matches!(self, Self::Float | Self::Int | Self::UInt | Self::Bool)
    }
}

/// Scalar/vector/matrix shape of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Scalar,
    Vector(u8),
    Matrix { cols: u8, rows: u8 },
}

/// Declared precision.
///
/// `Undefined` should never reach the mappers for numeric types - a default-precision pass resolves it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    High,
    Medium,
    Low,
    Undefined,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: TypeDesc,
}

/// Ordered field list of a record type
#[derive(Debug, Clone, PartialEq)]
pub struct StructDef {
    pub name: Option<String>,
    pub fields: Vec<Field>,
}
impl StructDef {
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// One node of a shader type tree.
///
/// When `structure` is set the node is a record and `basic_kind`, `arity` and `precision` are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDesc {
    pub basic_kind: BasicKind,
    pub arity: Arity,
    pub precision: Precision,
    pub array_size: Option<u32>,
    pub structure: Option<StructDef>,
}
impl TypeDesc {
    pub fn new(basic_kind: BasicKind, arity: Arity, precision: Precision) -> Self {
        Self {
            basic_kind,
            arity,
            precision,
            array_size: None,
            structure: None,
        }
    }

    pub fn scalar(basic_kind: BasicKind, precision: Precision) -> Self {
        Self::new(basic_kind, Arity::Scalar, precision)
    }
    pub fn vector(basic_kind: BasicKind, n: u8, precision: Precision) -> Self {
        Self::new(basic_kind, Arity::Vector(n), precision)
    }
    pub fn matrix(cols: u8, rows: u8, precision: Precision) -> Self {
        Self::new(BasicKind::Float, Arity::Matrix { cols, rows }, precision)
    }
    pub fn sampler(basic_kind: BasicKind) -> Self {
        Self::new(basic_kind, Arity::Scalar, Precision::Undefined)
    }

    /// Build a record type out of `(name, type)` pairs, keeping their order.
    pub fn record<N: Into<String>>(fields: impl IntoIterator<Item = (N, TypeDesc)>) -> Self {
        Self {
            // ignored for records
            basic_kind: BasicKind::Float,
            arity: Arity::Scalar,
            precision: Precision::Undefined,
            array_size: None,
            structure: Some(StructDef {
                name: None,
                fields: fields
                    .into_iter()
                    .map(|(name, ty)| Field {
                        name: name.into(),
                        ty,
                    })
                    .collect(),
            }),
        }
    }

    pub fn named(mut self, struct_name: &str) -> Self {
        if let Some(s) = self.structure.as_mut() {
            s.name = Some(struct_name.to_owned());
        }
        self
    }

    pub fn array(mut self, size: u32) -> Self {
        self.array_size = Some(size);
        self
    }

    pub fn is_array(&self) -> bool {
        self.array_size.is_some()
    }
    pub fn is_struct(&self) -> bool {
        self.structure.is_some()
    }
    pub fn is_matrix(&self) -> bool {
        matches!(self.arity, Arity::Matrix { .. }) && !self.is_struct()
    }

    pub fn structure(&self) -> Option<&StructDef> {
        self.structure.as_ref()
    }
}

/// The bracketed array suffix for a declarator, e.g. `[5]`, or an empty string for non-arrays.
pub fn array_string(ty: &TypeDesc) -> String {
    match ty.array_size {
        Some(size) => format!("[{}]", size),
        None => String::new(),
    }
}
