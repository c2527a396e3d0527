//! Variable reflection for a GLSL compiler back end.
//!
//! The front end hands over a resolved [types::TypeDesc] tree per active variable,
//! and this crate projects it onto the tags the GL runtime and code generator understand.
//!
//! - [mapping] turns a type into a [tags::TypeTag] and a [tags::PrecisionTag]
//! - [qualifier] classifies varyings and their interpolation
//! - [block] classifies interface block layouts and reflects block fields
//! - [reflect::VariableTraverser] flattens nested record types into [reflect::ShaderVariable] trees
//! - [literal] lexes numeric literals with a defined fallback on failure
//!
//! Types reaching this crate are assumed to be already validated.
//! Combinations with no mapping are compiler bugs and panic, they are never reported as user errors.

#[macro_use]
extern crate num_derive;

pub mod block;
pub mod literal;
pub mod mapping;
pub mod qualifier;
pub mod reflect;
pub mod tags;
pub mod types;

pub use block::{block_layout_type, BlockLayout, BlockStorage, InterfaceBlock};
pub use mapping::{variable_precision, variable_type};
pub use qualifier::{InterpolationMode, Qualifier};
pub use reflect::{InterfaceBlockField, ShaderVariable, Uniform, VariableTraverser, Varying};
pub use tags::{PrecisionTag, TypeTag};
pub use types::{array_string, TypeDesc};
