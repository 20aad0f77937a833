use super::op::Operator;
use crate::error;
use crate::lang::{Error, Int};

type Result<T> = std::result::Result<T, Error>;

/// ## Integer arithmetic
///
/// Every operation is checked; wraparound is an `OVF` error.

pub struct Operation {}

impl Operation {
    pub fn truth(b: bool) -> Int {
        if b {
            -1
        } else {
            0
        }
    }

    pub fn unary(op: Operator, val: Int) -> Result<Int> {
        use Operator::*;
        match op {
            Neg => Operation::negate(val),
            Plus => Ok(val),
            Not => Ok(Operation::truth(val == 0)),
            Complement => Ok(!val),
            _ => Err(error!(IllFormed; op.to_string())),
        }
    }

    pub fn binary(op: Operator, lhs: Int, rhs: Int, div_error: bool) -> Result<Int> {
        use Operator::*;
        match op {
            Mul => Operation::multiply(lhs, rhs),
            Div => Operation::divide(lhs, rhs, div_error),
            Rem => Operation::remainder(lhs, rhs, div_error),
            Add => Operation::sum(lhs, rhs),
            Sub => Operation::subtract(lhs, rhs),
            Shl => Operation::shift_left(lhs, rhs),
            Shr => Operation::shift_right(lhs, rhs),
            Lt => Ok(Operation::truth(lhs < rhs)),
            Le => Ok(Operation::truth(lhs <= rhs)),
            Gt => Ok(Operation::truth(lhs > rhs)),
            Ge => Ok(Operation::truth(lhs >= rhs)),
            Eq => Ok(Operation::truth(lhs == rhs)),
            Ne => Ok(Operation::truth(lhs != rhs)),
            And => Ok(lhs & rhs),
            Xor => Ok(lhs ^ rhs),
            Or => Ok(lhs | rhs),
            Neg | Plus | Not | Complement => Err(error!(IllFormed; op.to_string())),
        }
    }

    pub fn negate(val: Int) -> Result<Int> {
        val.checked_neg().ok_or_else(|| error!(Overflow))
    }

    pub fn multiply(lhs: Int, rhs: Int) -> Result<Int> {
        lhs.checked_mul(rhs).ok_or_else(|| error!(Overflow))
    }

    pub fn divide(lhs: Int, rhs: Int, div_error: bool) -> Result<Int> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None if rhs != 0 => Err(error!(Overflow)),
            None if div_error => Err(error!(DivisionByZero)),
            None => Ok(0),
        }
    }

    pub fn remainder(lhs: Int, rhs: Int, div_error: bool) -> Result<Int> {
        match lhs.checked_rem(rhs) {
            Some(i) => Ok(i),
            None if rhs != 0 => Err(error!(Overflow)),
            None if div_error => Err(error!(DivisionByZero)),
            None => Ok(0),
        }
    }

    pub fn sum(lhs: Int, rhs: Int) -> Result<Int> {
        lhs.checked_add(rhs).ok_or_else(|| error!(Overflow))
    }

    pub fn subtract(lhs: Int, rhs: Int) -> Result<Int> {
        lhs.checked_sub(rhs).ok_or_else(|| error!(Overflow))
    }

    pub fn shift_left(lhs: Int, rhs: Int) -> Result<Int> {
        if rhs < 0 {
            return Operation::shift_right(lhs, Operation::negate(rhs)?);
        }
        if rhs >= Int::BITS as Int {
            return if lhs == 0 { Ok(0) } else { Err(error!(Overflow)) };
        }
        let shifted = lhs << rhs;
        if shifted >> rhs != lhs {
            return Err(error!(Overflow));
        }
        Ok(shifted)
    }

    pub fn shift_right(lhs: Int, rhs: Int) -> Result<Int> {
        if rhs < 0 {
            return Operation::shift_left(lhs, Operation::negate(rhs)?);
        }
        if rhs >= Int::BITS as Int {
            return Ok(if lhs < 0 { -1 } else { 0 });
        }
        Ok(lhs >> rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Operation::divide(5, 0, false), Ok(0));
        assert_eq!(
            Operation::divide(5, 0, true).unwrap_err().code(),
            ErrorCode::DivisionByZero
        );
        assert_eq!(Operation::remainder(7, 0, false), Ok(0));
        assert_eq!(Operation::remainder(7, 3, true), Ok(1));
    }

    #[test]
    fn test_overflow() {
        let ovf = ErrorCode::Overflow;
        assert_eq!(Operation::sum(Int::MAX, 1).unwrap_err().code(), ovf);
        assert_eq!(Operation::negate(Int::MIN).unwrap_err().code(), ovf);
        assert_eq!(Operation::divide(Int::MIN, -1, false).unwrap_err().code(), ovf);
        assert_eq!(Operation::shift_left(1, 63).unwrap_err().code(), ovf);
        assert_eq!(Operation::shift_left(3, 2), Ok(12));
        assert_eq!(Operation::shift_right(-8, 100), Ok(-1));
    }

    #[test]
    fn test_comparisons_are_truth_values() {
        assert_eq!(Operation::binary(Operator::Lt, 1, 2, false), Ok(-1));
        assert_eq!(Operation::binary(Operator::Ne, 2, 2, false), Ok(0));
        assert_eq!(Operation::unary(Operator::Not, 0), Ok(-1));
        assert_eq!(Operation::unary(Operator::Complement, 0), Ok(-1));
    }
}
