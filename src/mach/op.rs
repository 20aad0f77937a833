/// ## Expression operators
///
/// Classic TECO evaluates strictly left to right. The extended set
/// (remainder, shifts, comparisons, xor, logical not) is recognized
/// only inside parentheses, where `<`, `>`, `=` and `!` cannot be
/// commands.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // *** Prefix
    Neg,
    Plus,
    Not,
    // *** Postfix
    Complement,
    // *** Binary
    Mul,
    Div,
    Rem,
    Add,
    Sub,
    Shl,
    Shr,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    And,
    Xor,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    Prefix,
    Postfix,
    Binary,
}

/// Selects how binary operators bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    Flat,
    CLike,
}

impl Operator {
    pub fn fixity(&self) -> Fixity {
        use Operator::*;
        match self {
            Neg | Plus | Not => Fixity::Prefix,
            Complement => Fixity::Postfix,
            _ => Fixity::Binary,
        }
    }

    pub fn right_assoc(&self) -> bool {
        self.fixity() == Fixity::Prefix
    }

    pub fn precedence(&self, mode: Precedence) -> u8 {
        use Operator::*;
        match self.fixity() {
            Fixity::Postfix => 12,
            Fixity::Prefix => 11,
            Fixity::Binary if mode == Precedence::Flat => 1,
            Fixity::Binary => match self {
                Mul | Div | Rem => 10,
                Add | Sub => 9,
                Shl | Shr => 8,
                Lt | Le | Gt | Ge => 7,
                Eq | Ne => 6,
                And => 5,
                Xor => 4,
                _ => 3,
            },
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Neg => write!(f, "-"),
            Plus => write!(f, "+"),
            Not => write!(f, "!"),
            Complement => write!(f, "^_"),
            Mul => write!(f, "*"),
            Div => write!(f, "/"),
            Rem => write!(f, "//"),
            Add => write!(f, "+"),
            Sub => write!(f, "-"),
            Shl => write!(f, "<<"),
            Shr => write!(f, ">>"),
            Lt => write!(f, "<"),
            Le => write!(f, "<="),
            Gt => write!(f, ">"),
            Ge => write!(f, ">="),
            Eq => write!(f, "=="),
            Ne => write!(f, "<>"),
            And => write!(f, "&"),
            Xor => write!(f, "~"),
            Or => write!(f, "#"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_binary_is_level() {
        let p = Precedence::Flat;
        assert_eq!(Operator::Mul.precedence(p), Operator::Add.precedence(p));
        assert!(Operator::Neg.precedence(p) > Operator::Mul.precedence(p));
    }

    #[test]
    fn test_c_like_order() {
        let p = Precedence::CLike;
        let order = [
            Operator::Mul,
            Operator::Add,
            Operator::Shl,
            Operator::Lt,
            Operator::Eq,
            Operator::And,
            Operator::Xor,
            Operator::Or,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].precedence(p) > pair[1].precedence(p), "{}", pair[0]);
        }
    }
}
