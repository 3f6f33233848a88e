//! Matrix element type constraints
//!
//! Only integer element types are supported. Every arithmetic step goes
//! through the checked operations below so that results never wrap.

use core::fmt;
use core::str::FromStr;

/// Integer types supported as matrix elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DataType {
    I32 = 0,
    I64 = 1,
}

impl DataType {
    /// Get the size in bytes for this data type
    pub const fn size_bytes(&self) -> usize {
        match self {
            DataType::I32 => 4,
            DataType::I64 => 8,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
        }
    }
}

/// Trait for types that can be stored as matrix elements
///
/// Elements must be cheap to copy, comparable for equality (so that the
/// zero value can be recognized and never stored), printable, and
/// parseable from the text format.
pub trait MatrixElement:
    Copy + Eq + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static
{
    /// The additive identity, which is never stored explicitly
    const ZERO: Self;

    /// Get the DataType representation for this element type
    fn data_type() -> DataType;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Whether this value is represented by absence
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Addition, `None` on overflow
    fn try_add(self, rhs: Self) -> Option<Self>;

    /// Subtraction, `None` on overflow
    fn try_sub(self, rhs: Self) -> Option<Self>;

    /// Multiplication, `None` on overflow
    fn try_mul(self, rhs: Self) -> Option<Self>;

    /// Negation, `None` on overflow
    fn try_neg(self) -> Option<Self>;

    /// Lossless conversion into the accumulator type used by multiplication
    fn widen(self) -> i128;

    /// Conversion back from the accumulator, `None` if the value does not fit
    fn narrow(wide: i128) -> Option<Self>;
}

impl MatrixElement for i32 {
    const ZERO: Self = 0;

    fn data_type() -> DataType {
        DataType::I32
    }

    fn try_add(self, rhs: Self) -> Option<Self> {
        self.checked_add(rhs)
    }

    fn try_sub(self, rhs: Self) -> Option<Self> {
        self.checked_sub(rhs)
    }

    fn try_mul(self, rhs: Self) -> Option<Self> {
        self.checked_mul(rhs)
    }

    fn try_neg(self) -> Option<Self> {
        self.checked_neg()
    }

    fn widen(self) -> i128 {
        i128::from(self)
    }

    fn narrow(wide: i128) -> Option<Self> {
        Self::try_from(wide).ok()
    }
}

impl MatrixElement for i64 {
    const ZERO: Self = 0;

    fn data_type() -> DataType {
        DataType::I64
    }

    fn try_add(self, rhs: Self) -> Option<Self> {
        self.checked_add(rhs)
    }

    fn try_sub(self, rhs: Self) -> Option<Self> {
        self.checked_sub(rhs)
    }

    fn try_mul(self, rhs: Self) -> Option<Self> {
        self.checked_mul(rhs)
    }

    fn try_neg(self) -> Option<Self> {
        self.checked_neg()
    }

    fn widen(self) -> i128 {
        i128::from(self)
    }

    fn narrow(wide: i128) -> Option<Self> {
        Self::try_from(wide).ok()
    }
}
