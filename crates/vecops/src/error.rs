use std::fmt;

use thiserror::Error;

/// Result type for vector operations.
pub type Result<T> = std::result::Result<T, VecError>;

/// Binary operations that carry a precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Mul,
    Add,
    Sub,
    Div,
    Dot,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Operation::Mul => "Mul",
            Operation::Add => "Add",
            Operation::Sub => "Sub",
            Operation::Div => "Div",
            Operation::Dot => "Dot",
        };
        write!(f, "{}", name)
    }
}

/// Precondition violation reported by a vector operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VecError {
    /// Operands of a binary operation differ in length.
    #[error("vec.{op}: length of the first vector is {lhs}, length of the second vector is {rhs}; they must match")]
    LengthMismatch {
        op: Operation,
        lhs: usize,
        rhs: usize,
    },

    /// The divisor holds `0.0` at `index` (first offending entry).
    #[error("vec.{op}: entry {index} in the second vector is 0.0; cannot divide by 0.0")]
    DivisionByZero { op: Operation, index: usize },
}

impl VecError {
    pub fn operation(&self) -> Operation {
        match self {
            VecError::LengthMismatch { op, .. } | VecError::DivisionByZero { op, .. } => *op,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = VecError::LengthMismatch {
            op: Operation::Add,
            lhs: 3,
            rhs: 2,
        };
        assert_eq!(
            err.to_string(),
            "vec.Add: length of the first vector is 3, length of the second vector is 2; they must match"
        );
    }

    #[test]
    fn test_division_by_zero_message() {
        let err = VecError::DivisionByZero {
            op: Operation::Div,
            index: 4,
        };
        assert_eq!(
            err.to_string(),
            "vec.Div: entry 4 in the second vector is 0.0; cannot divide by 0.0"
        );
    }

    #[test]
    fn test_operation_accessor() {
        let err = VecError::LengthMismatch {
            op: Operation::Dot,
            lhs: 1,
            rhs: 0,
        };
        assert_eq!(err.operation(), Operation::Dot);
        let err = VecError::DivisionByZero {
            op: Operation::Div,
            index: 0,
        };
        assert_eq!(err.operation(), Operation::Div);
    }
}
