use glsl_reflect::{
    mapping::lookup_type_tag,
    reflect::ShaderVariable,
    tags::{PrecisionTag, TagError, TypeTag},
    types::{Arity, BasicKind, Precision, TypeDesc},
    variable_precision, variable_type, VariableTraverser,
};

#[test]
fn test_float_types() {
    let p = Precision::High;
    let expected = [
        (Arity::Scalar, TypeTag::Float),
        (Arity::Vector(2), TypeTag::FloatVec2),
        (Arity::Vector(3), TypeTag::FloatVec3),
        (Arity::Vector(4), TypeTag::FloatVec4),
    ];
    for (arity, tag) in expected {
        assert_eq!(variable_type(&TypeDesc::new(BasicKind::Float, arity, p)), tag);
    }
}

#[test]
fn test_matrix_types() {
    let expected = [
        (2, 2, TypeTag::FloatMat2),
        (2, 3, TypeTag::FloatMat2x3),
        (2, 4, TypeTag::FloatMat2x4),
        (3, 2, TypeTag::FloatMat3x2),
        (3, 3, TypeTag::FloatMat3),
        (3, 4, TypeTag::FloatMat3x4),
        (4, 2, TypeTag::FloatMat4x2),
        (4, 3, TypeTag::FloatMat4x3),
        (4, 4, TypeTag::FloatMat4),
    ];
    for (cols, rows, tag) in expected {
        let ty = TypeDesc::matrix(cols, rows, Precision::Medium);
        assert_eq!(variable_type(&ty), tag);
        assert_eq!(tag.column_count(), cols);
        assert_eq!(tag.row_count(), rows);
    }
}

#[test]
fn test_integer_and_bool_types() {
    let p = Precision::Low;
    assert_eq!(variable_type(&TypeDesc::scalar(BasicKind::Int, p)), TypeTag::Int);
    assert_eq!(variable_type(&TypeDesc::vector(BasicKind::Int, 3, p)), TypeTag::IntVec3);
    assert_eq!(variable_type(&TypeDesc::scalar(BasicKind::UInt, p)), TypeTag::UnsignedInt);
    assert_eq!(
        variable_type(&TypeDesc::vector(BasicKind::UInt, 4, p)),
        TypeTag::UnsignedIntVec4
    );
    assert_eq!(
        variable_type(&TypeDesc::scalar(BasicKind::Bool, Precision::Undefined)),
        TypeTag::Bool
    );
    assert_eq!(
        variable_type(&TypeDesc::vector(BasicKind::Bool, 2, Precision::Undefined)),
        TypeTag::BoolVec2
    );
}

#[test]
fn test_sampler_types() {
    let expected = [
        (BasicKind::Sampler2D, TypeTag::Sampler2D),
        (BasicKind::Sampler3D, TypeTag::Sampler3D),
        (BasicKind::SamplerCube, TypeTag::SamplerCube),
        (BasicKind::SamplerExternalOes, TypeTag::SamplerExternalOes),
        (BasicKind::Sampler2DRect, TypeTag::Sampler2DRectArb),
        (BasicKind::Sampler2DArray, TypeTag::Sampler2DArray),
        (BasicKind::ISampler2D, TypeTag::IntSampler2D),
        (BasicKind::ISampler3D, TypeTag::IntSampler3D),
        (BasicKind::ISamplerCube, TypeTag::IntSamplerCube),
        (BasicKind::ISampler2DArray, TypeTag::IntSampler2DArray),
        (BasicKind::USampler2D, TypeTag::UnsignedIntSampler2D),
        (BasicKind::USampler3D, TypeTag::UnsignedIntSampler3D),
        (BasicKind::USamplerCube, TypeTag::UnsignedIntSamplerCube),
        (BasicKind::USampler2DArray, TypeTag::UnsignedIntSampler2DArray),
        (BasicKind::Sampler2DShadow, TypeTag::Sampler2DShadow),
        (BasicKind::SamplerCubeShadow, TypeTag::SamplerCubeShadow),
        (BasicKind::Sampler2DArrayShadow, TypeTag::Sampler2DArrayShadow),
    ];
    for (kind, tag) in expected {
        let ty = TypeDesc::sampler(kind);
        assert_eq!(variable_type(&ty), tag);
        assert!(tag.is_sampler());
        assert_eq!(variable_precision(&ty), PrecisionTag::None);
    }
}

#[test]
fn test_invalid_combinations_have_no_row() {
    let invalid = [
        (BasicKind::Int, Arity::Matrix { cols: 2, rows: 2 }),
        (BasicKind::Bool, Arity::Matrix { cols: 3, rows: 3 }),
        (BasicKind::Float, Arity::Vector(5)),
        (BasicKind::Float, Arity::Matrix { cols: 1, rows: 4 }),
        (BasicKind::Sampler2D, Arity::Vector(2)),
    ];
    for (kind, arity) in invalid {
        assert_eq!(lookup_type_tag(kind, arity), None, "{:?} {:?}", kind, arity);
    }
}

#[test]
#[should_panic(expected = "no type tag for basic kind Int")]
fn test_int_matrix_is_fatal() {
    variable_type(&TypeDesc::new(
        BasicKind::Int,
        Arity::Matrix { cols: 2, rows: 2 },
        Precision::High,
    ));
}

#[test]
#[should_panic(expected = "no type tag for basic kind SamplerCube")]
fn test_sampler_vector_is_fatal() {
    variable_type(&TypeDesc::new(
        BasicKind::SamplerCube,
        Arity::Vector(3),
        Precision::Undefined,
    ));
}

#[test]
#[should_panic(expected = "record type")]
fn test_record_has_no_type_tag() {
    let x = TypeDesc::scalar(BasicKind::Float, Precision::High);
    variable_type(&TypeDesc::record([("x", x)]));
}

#[test]
fn test_precisions() {
    let cases = [
        (BasicKind::Float, Precision::High, PrecisionTag::HighFloat),
        (BasicKind::Float, Precision::Medium, PrecisionTag::MediumFloat),
        (BasicKind::Float, Precision::Low, PrecisionTag::LowFloat),
        (BasicKind::Int, Precision::High, PrecisionTag::HighInt),
        (BasicKind::Int, Precision::Medium, PrecisionTag::MediumInt),
        (BasicKind::Int, Precision::Low, PrecisionTag::LowInt),
        (BasicKind::UInt, Precision::High, PrecisionTag::HighInt),
        (BasicKind::UInt, Precision::Low, PrecisionTag::LowInt),
    ];
    for (kind, precision, tag) in cases {
        assert_eq!(variable_precision(&TypeDesc::scalar(kind, precision)), tag);
        assert_eq!(variable_precision(&TypeDesc::vector(kind, 3, precision)), tag);
    }
    assert_eq!(
        variable_precision(&TypeDesc::matrix(4, 4, Precision::Medium)),
        PrecisionTag::MediumFloat
    );
}

#[test]
fn test_bool_and_samplers_ignore_stored_precision() {
    let precisions = [
        Precision::High,
        Precision::Medium,
        Precision::Low,
        Precision::Undefined,
    ];
    for precision in precisions {
        let boolean = TypeDesc::scalar(BasicKind::Bool, precision);
        assert_eq!(variable_precision(&boolean), PrecisionTag::None);
        let sampler = TypeDesc::new(BasicKind::Sampler2DShadow, Arity::Scalar, precision);
        assert_eq!(variable_precision(&sampler), PrecisionTag::None);
    }
}

#[test]
#[should_panic(expected = "undefined precision")]
fn test_undefined_float_precision_is_fatal() {
    variable_precision(&TypeDesc::vector(BasicKind::Float, 2, Precision::Undefined));
}

#[test]
#[should_panic(expected = "undefined precision")]
fn test_undefined_uint_precision_is_fatal() {
    variable_precision(&TypeDesc::scalar(BasicKind::UInt, Precision::Undefined));
}

#[test]
fn test_gl_values() {
    assert_eq!(TypeTag::Float.gl_value(), 0x1406);
    assert_eq!(TypeTag::FloatMat2x3.gl_value(), 0x8B65);
    assert_eq!(TypeTag::from_gl(0x8B51), Ok(TypeTag::FloatVec3));
    assert_eq!(TypeTag::from_gl(0x8DD7), Ok(TypeTag::UnsignedIntSampler2DArray));
    assert!(matches!(TypeTag::from_gl(0), Err(TagError::UnknownValue(_, 0))));
    assert!(matches!(TypeTag::from_gl(0x1234), Err(TagError::UnknownValue(_, 0x1234))));

    assert_eq!(PrecisionTag::HighInt.gl_value(), 0x8DF5);
    assert_eq!(PrecisionTag::from_gl(0x8DF0), Ok(PrecisionTag::LowFloat));
    assert_eq!(PrecisionTag::from_gl(0), Ok(PrecisionTag::None));
}

#[test]
fn test_tag_names() {
    assert_eq!(TypeTag::FloatMat2x3.to_string(), "FLOAT_MAT2x3");
    assert_eq!(TypeTag::Sampler2DRectArb.to_string(), "SAMPLER_2D_RECT_ARB");
    assert_eq!("FLOAT_MAT4".parse(), Ok(TypeTag::FloatMat4));
    assert_eq!("GL_INT_VEC2".parse(), Ok(TypeTag::IntVec2));
    assert_eq!(
        "FLOAT_MAT5".parse::<TypeTag>(),
        Err(TagError::UnknownName("FLOAT_MAT5".into()))
    );
    for tag in TypeTag::all() {
        assert_eq!(tag.name().parse(), Ok(tag));
    }
}

#[test]
fn test_tag_metadata() {
    assert_eq!(TypeTag::FloatMat3x4.component_type(), TypeTag::Float);
    assert_eq!(TypeTag::UnsignedIntVec3.component_type(), TypeTag::UnsignedInt);
    assert_eq!(TypeTag::BoolVec4.component_type(), TypeTag::Bool);
    assert_eq!(TypeTag::IntSampler3D.component_type(), TypeTag::IntSampler3D);

    assert_eq!(TypeTag::FloatMat3x4.component_count(), 12);
    assert_eq!(TypeTag::IntVec3.component_count(), 3);
    assert_eq!(TypeTag::SamplerCube.component_count(), 1);

    assert_eq!(TypeTag::FloatMat2x4.transposed(), TypeTag::FloatMat4x2);
    assert_eq!(TypeTag::FloatMat3.transposed(), TypeTag::FloatMat3);
    assert_eq!(TypeTag::FloatVec2.transposed(), TypeTag::FloatVec2);

    assert!(TypeTag::FloatMat4x3.is_matrix());
    assert!(!TypeTag::FloatVec4.is_matrix());
    assert!(!TypeTag::Float.is_sampler());
}

#[test]
fn test_record_precision_ignores_basic_kind() {
    let mut record = TypeDesc::record([("x", TypeDesc::scalar(BasicKind::Int, Precision::Low))]);
    let kinds = [
        BasicKind::Float,
        BasicKind::Int,
        BasicKind::UInt,
        BasicKind::Bool,
        BasicKind::SamplerCube,
    ];
    for kind in kinds {
        record.basic_kind = kind;
        for precision in [Precision::Undefined, Precision::High] {
            record.precision = precision;
            assert_eq!(variable_precision(&record), PrecisionTag::None, "{:?}", kind);
        }
    }
}

#[test]
fn test_record_tag_shape() {
    let mut uniforms: Vec<ShaderVariable<()>> = vec![];
    let float = TypeDesc::scalar(BasicKind::Float, Precision::High);
    VariableTraverser::new(&mut uniforms).traverse(&TypeDesc::record([("x", float)]), "s");

    let tag = uniforms[0].type_tag;
    assert_eq!(tag, TypeTag::Struct);
    assert_eq!(tag.shape(), (0, 0));
    assert_eq!(tag.column_count(), 0);
    assert_eq!(tag.row_count(), 0);
    assert_eq!(tag.component_count(), 0);
    assert!(!tag.is_matrix());
    assert!(!tag.is_sampler());
    assert_eq!(tag.transposed(), TypeTag::Struct);
}
