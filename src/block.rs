//! Interface block classification and reflection.
//!
//! Only the layout *family* is decided here. Offsets and strides are computed downstream.
use crate::{
    reflect::{InterfaceBlockField, VariableTraverser},
    types::Field,
};

/// Declared block storage qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockStorage {
    /// Not yet resolved to a default. Must not reach [block_layout_type].
    Unspecified,
    Packed,
    Shared,
    Std140,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockLayout {
    Packed,
    Shared,
    Standard140,
}

/// Panics on [BlockStorage::Unspecified].
pub fn block_layout_type(storage: BlockStorage) -> BlockLayout {
    match storage {
        BlockStorage::Packed => BlockLayout::Packed,
        BlockStorage::Shared => BlockLayout::Shared,
        BlockStorage::Std140 => BlockLayout::Standard140,
        BlockStorage::Unspecified => {
            panic!("block storage must be resolved before layout classification")
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceBlock {
    pub name: String,
    pub instance_name: Option<String>,
    /// 0 if not an array
    pub array_size: u32,
    pub layout: BlockLayout,
    pub is_row_major_layout: bool,
    pub fields: Vec<InterfaceBlockField>,
}
impl InterfaceBlock {
    /// Reflect a block declaration, classifying its storage and walking every field in order.
    pub fn reflect(
        name: &str,
        instance_name: Option<&str>,
        array_size: Option<u32>,
        storage: BlockStorage,
        is_row_major_layout: bool,
        fields: &[Field],
    ) -> Self {
        let layout = block_layout_type(storage);

        let mut reflected = Vec::with_capacity(fields.len());
        let mut traverser =
            VariableTraverser::interface_block_fields(&mut reflected, is_row_major_layout);
        for field in fields {
            traverser.traverse(&field.ty, &field.name);
        }

        log::debug!(
            "block {} ({:?}, row major: {}) reflected {} fields",
            name,
            layout,
            is_row_major_layout,
            reflected.len()
        );

        Self {
            name: name.to_owned(),
            instance_name: instance_name.map(str::to_owned),
            array_size: array_size.unwrap_or(0),
            layout,
            is_row_major_layout,
            fields: reflected,
        }
    }
}
