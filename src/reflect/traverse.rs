use crate::{
    mapping::{variable_precision, variable_type},
    qualifier::Qualifier,
    tags::{PrecisionTag, TypeTag},
    types::TypeDesc,
};

use super::{BlockFieldInfo, ShaderVariable, VaryingInfo};

/// Post-processing applied to every record once its fields are filled in, before it is appended.
pub trait VariableVisitor<X> {
    fn visit_variable(&mut self, variable: &mut ShaderVariable<X>);
}

/// Leaves records untouched. Used for uniforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVisit;
impl<X> VariableVisitor<X> for NoVisit {
    fn visit_variable(&mut self, _: &mut ShaderVariable<X>) {}
}

/// Propagates the enclosing block's matrix packing onto matrix fields
#[derive(Debug, Clone, Copy)]
pub struct InterfaceBlockFieldVisitor {
    pub is_row_major: bool,
}
impl VariableVisitor<BlockFieldInfo> for InterfaceBlockFieldVisitor {
    fn visit_variable(&mut self, variable: &mut ShaderVariable<BlockFieldInfo>) {
        if variable.type_tag.is_matrix() {
            variable.ext.is_row_major_matrix = self.is_row_major;
        }
    }
}

/// Fills in interpolation and invariance from the declaration's qualifier
#[derive(Debug, Clone, Copy)]
pub struct VaryingVisitor {
    qualifier: Qualifier,
}
impl VaryingVisitor {
    /// Panics if `qualifier` is not a varying qualifier.
    pub fn new(qualifier: Qualifier) -> Self {
        if !qualifier.is_varying() {
            panic!("varying traverser built for non-varying qualifier {:?}", qualifier);
        }
        Self { qualifier }
    }
}
impl VariableVisitor<VaryingInfo> for VaryingVisitor {
    fn visit_variable(&mut self, variable: &mut ShaderVariable<VaryingInfo>) {
        variable.ext = VaryingInfo {
            interpolation: self.qualifier.interpolation(),
            is_invariant: self.qualifier.is_invariant(),
        };
    }
}

/// Flattens type trees into [ShaderVariable] records.
///
/// Top-level records are appended to the output given at construction.
/// While a record type is being walked, its fields are collected in a pending list on top of an explicit stack,
/// so the number of pending lists always equals the current record nesting depth.
/// Arrays are not unrolled: an array of records is one record with `array_size` set.
#[derive(Debug)]
pub struct VariableTraverser<'o, X, V> {
    output: &'o mut Vec<ShaderVariable<X>>,
    pending: Vec<Vec<ShaderVariable<X>>>,
    visitor: V,
}

impl<'o, X: Default> VariableTraverser<'o, X, NoVisit> {
    pub fn new(output: &'o mut Vec<ShaderVariable<X>>) -> Self {
        Self::with_visitor(output, NoVisit)
    }
}

impl<'o> VariableTraverser<'o, BlockFieldInfo, InterfaceBlockFieldVisitor> {
    pub fn interface_block_fields(
        output: &'o mut Vec<ShaderVariable<BlockFieldInfo>>,
        is_row_major: bool,
    ) -> Self {
        Self::with_visitor(output, InterfaceBlockFieldVisitor { is_row_major })
    }
}

impl<'o> VariableTraverser<'o, VaryingInfo, VaryingVisitor> {
    /// Panics if `qualifier` is not a varying qualifier.
    pub fn varyings(
        output: &'o mut Vec<ShaderVariable<VaryingInfo>>,
        qualifier: Qualifier,
    ) -> Self {
        Self::with_visitor(output, VaryingVisitor::new(qualifier))
    }
}

impl<'o, X: Default, V: VariableVisitor<X>> VariableTraverser<'o, X, V> {
    pub fn with_visitor(output: &'o mut Vec<ShaderVariable<X>>, visitor: V) -> Self {
        Self {
            output,
            pending: vec![],
            visitor,
        }
    }

    /// Current record nesting depth. Zero between top-level calls to [Self::traverse].
    pub fn depth(&self) -> usize {
        self.pending.len()
    }

    /// Reflect one variable of type `ty`, appending the record to the current destination.
    pub fn traverse(&mut self, ty: &TypeDesc, name: &str) {
        let array_size = ty.array_size.unwrap_or(0);

        let mut variable = match ty.structure() {
            None => ShaderVariable {
                name: name.to_owned(),
                type_tag: variable_type(ty),
                precision: variable_precision(ty),
                array_size,
                fields: vec![],
                ext: X::default(),
            },
            Some(structure) => {
                self.pending.push(Vec::with_capacity(structure.fields().len()));
                for field in structure.fields() {
                    self.traverse(&field.ty, &field.name);
                }
                let fields = match self.pending.pop() {
                    Some(fields) => fields,
                    None => {
                        unreachable!("pending field stack underflow while reflecting '{}'", name)
                    }
                };
                ShaderVariable {
                    name: name.to_owned(),
                    type_tag: TypeTag::Struct,
                    precision: PrecisionTag::None,
                    array_size,
                    fields,
                    ext: X::default(),
                }
            }
        };

        self.visitor.visit_variable(&mut variable);

        log::trace!(
            "{:indent$}{}: {} {} [{}]",
            "",
            variable.name,
            variable.type_tag,
            variable.precision,
            variable.array_size,
            indent = self.pending.len() * 2
        );
        self.destination().push(variable);
    }

    fn destination(&mut self) -> &mut Vec<ShaderVariable<X>> {
        match self.pending.last_mut() {
            Some(fields) => fields,
            None => &mut *self.output,
        }
    }
}
