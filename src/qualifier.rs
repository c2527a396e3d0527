use bitflags::bitflags;

/// Storage, direction and interpolation of a declared variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier {
    Temporary,
    Global,
    Const,
    Attribute,
    Uniform,
    /// `in` on a vertex shader input
    VertexIn,
    /// `out` on a fragment shader output
    FragmentOut,

    VaryingIn,
    VaryingOut,
    InvariantVaryingIn,
    InvariantVaryingOut,
    SmoothIn,
    SmoothOut,
    FlatIn,
    FlatOut,
    CentroidIn,
    CentroidOut,
    /// Vertex stage `out`, same as `smooth out`
    VertexOut,
    /// Fragment stage `in`, same as `smooth in`
    FragmentIn,
}

pub const ALL_QUALIFIERS: [Qualifier; 19] = [
    Qualifier::Temporary,
    Qualifier::Global,
    Qualifier::Const,
    Qualifier::Attribute,
    Qualifier::Uniform,
    Qualifier::VertexIn,
    Qualifier::FragmentOut,
    Qualifier::VaryingIn,
    Qualifier::VaryingOut,
    Qualifier::InvariantVaryingIn,
    Qualifier::InvariantVaryingOut,
    Qualifier::SmoothIn,
    Qualifier::SmoothOut,
    Qualifier::FlatIn,
    Qualifier::FlatOut,
    Qualifier::CentroidIn,
    Qualifier::CentroidOut,
    Qualifier::VertexOut,
    Qualifier::FragmentIn,
];

bitflags! {
    /// Properties of a qualifier relevant to varyings
    pub struct QualifierFlags: u8 {
        const VARYING_IN = 0b0000_0001;
        const VARYING_OUT = 0b0000_0010;
        const FLAT = 0b0000_0100;
        const CENTROID = 0b0000_1000;
        const INVARIANT = 0b0001_0000;

        const VARYING = Self::VARYING_IN.bits | Self::VARYING_OUT.bits;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMode {
    Smooth,
    Centroid,
    Flat,
}
impl Default for InterpolationMode {
    fn default() -> Self {
        Self::Smooth
    }
}

impl Qualifier {
    pub fn flags(self) -> QualifierFlags {
        use Qualifier::*;
        match self {
            VaryingIn | SmoothIn | FragmentIn => QualifierFlags::VARYING_IN,
            VaryingOut | SmoothOut | VertexOut => QualifierFlags::VARYING_OUT,
            InvariantVaryingIn => QualifierFlags::VARYING_IN | QualifierFlags::INVARIANT,
            InvariantVaryingOut => QualifierFlags::VARYING_OUT | QualifierFlags::INVARIANT,
            FlatIn => QualifierFlags::VARYING_IN | QualifierFlags::FLAT,
            FlatOut => QualifierFlags::VARYING_OUT | QualifierFlags::FLAT,
            CentroidIn => QualifierFlags::VARYING_IN | QualifierFlags::CENTROID,
            CentroidOut => QualifierFlags::VARYING_OUT | QualifierFlags::CENTROID,
            Temporary | Global | Const | Attribute | Uniform | VertexIn | FragmentOut => {
                QualifierFlags::empty()
            }
        }
    }

    pub fn is_varying_in(self) -> bool {
        self.flags().contains(QualifierFlags::VARYING_IN)
    }
    pub fn is_varying_out(self) -> bool {
        self.flags().contains(QualifierFlags::VARYING_OUT)
    }
    pub fn is_varying(self) -> bool {
        self.flags().intersects(QualifierFlags::VARYING)
    }
    pub fn is_invariant(self) -> bool {
        self.flags().contains(QualifierFlags::INVARIANT)
    }

    /// Interpolation of a varying.
    ///
    /// Panics if the qualifier is not a varying - filter with [Qualifier::is_varying] first.
    pub fn interpolation(self) -> InterpolationMode {
        let flags = self.flags();
        if !flags.intersects(QualifierFlags::VARYING) {
            panic!("interpolation requested for non-varying qualifier {:?}", self);
        }
        if flags.contains(QualifierFlags::FLAT) {
            InterpolationMode::Flat
        } else if flags.contains(QualifierFlags::CENTROID) {
            InterpolationMode::Centroid
        } else {
            InterpolationMode::Smooth
        }
    }
}
