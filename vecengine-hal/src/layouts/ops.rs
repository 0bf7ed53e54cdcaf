/// Lane-wise bitwise operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
}

/// Ordered comparisons producing one mask bit per lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
}

/// Equality comparisons producing one mask bit per lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EqOp {
    Eq,
    Neq,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaxMinOp {
    Max,
    Min,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
}

/// Elementary functions and conversions of the math layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementaryOp {
    Sqrt,
    Inv,
    InvSqrt,
    Sin,
    Cos,
    SinCos,
    SinCosComplex,
    Fix2Float,
    Float2Fix,
    Tanh,
    Exp2,
}

impl ElementaryOp {
    /// Lanes processed by one native invocation for `bits`-wide inputs.
    pub const fn native_lanes(self, bits: usize) -> usize {
        match self {
            ElementaryOp::Inv | ElementaryOp::InvSqrt => 256 / bits,
            _ => 512 / bits,
        }
    }
}
