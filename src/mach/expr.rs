use super::op::{Fixity, Operator, Precedence};
use super::{Operation, Stack};
use crate::error;
use crate::lang::{Error, Int};

type Result<T> = std::result::Result<T, Error>;

/// ## Expression stack
///
/// A shunting-yard evaluator fed one token at a time by the command
/// scanner. Each macro level and skip scan works in its own context so
/// a half-built expression in the caller is never disturbed.

#[derive(Debug)]
pub struct Expr {
    limit: usize,
    contexts: Vec<Context>,
}

/// How binary operators bind and what dividing by zero does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arith {
    pub precedence: Precedence,
    pub div_error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Item {
    Op(Operator),
    /// `replace` discards the operand that preceded the paren.
    Paren { replace: bool },
}

#[derive(Debug)]
struct Context {
    operands: Stack<Int>,
    operators: Stack<Item>,
    nesting: usize,
    after_operand: bool,
}

impl Context {
    fn new(limit: usize) -> Context {
        Context {
            operands: Stack::new(limit, "EXPRESSION TOO COMPLEX"),
            operators: Stack::new(limit, "EXPRESSION TOO COMPLEX"),
            nesting: 0,
            after_operand: false,
        }
    }

    fn clear(&mut self) {
        self.operands.clear();
        self.operators.clear();
        self.nesting = 0;
        self.after_operand = false;
    }

    fn apply(&mut self, item: Item, arith: Arith) -> Result<()> {
        let op = match item {
            Item::Op(op) => op,
            Item::Paren { .. } => return Err(error!(MissingRightParen)),
        };
        let val = match op.fixity() {
            Fixity::Binary => match self.operands.pop_2() {
                Some((lhs, rhs)) => Operation::binary(op, lhs, rhs, arith.div_error)?,
                None => return Err(error!(IllFormed)),
            },
            _ => match self.operands.pop() {
                Some(val) => Operation::unary(op, val)?,
                None => return Err(error!(IllFormed)),
            },
        };
        self.operands.push(val)
    }

    /// Applies stacked operators down to the nearest paren while
    /// `binds` accepts them.
    fn reduce<F: Fn(Operator) -> bool>(&mut self, arith: Arith, binds: F) -> Result<()> {
        while let Some(&Item::Op(op)) = self.operators.last() {
            if !binds(op) {
                break;
            }
            self.operators.pop();
            self.apply(Item::Op(op), arith)?;
        }
        Ok(())
    }
}

impl Expr {
    pub fn new(limit: usize) -> Expr {
        Expr {
            limit,
            contexts: vec![Context::new(limit)],
        }
    }

    fn context(&mut self) -> &mut Context {
        if self.contexts.is_empty() {
            self.contexts.push(Context::new(self.limit));
        }
        let last = self.contexts.len() - 1;
        &mut self.contexts[last]
    }

    pub fn push_context(&mut self) {
        self.contexts.push(Context::new(self.limit));
    }

    pub fn pop_context(&mut self) {
        self.contexts.pop();
    }

    /// Drops everything in every context.
    pub fn reset(&mut self) {
        self.contexts.truncate(1);
        self.context().clear();
    }

    /// Drops the current context's contents between commands.
    pub fn clear(&mut self) {
        self.context().clear();
    }

    pub fn nesting(&self) -> usize {
        self.contexts.last().map_or(0, |c| c.nesting)
    }

    /// True when the last thing pushed was a value, so `+` and `-`
    /// are binary.
    pub fn has_operand(&self) -> bool {
        self.contexts.last().map_or(false, |c| c.after_operand)
    }

    /// True when the context holds nothing at all.
    pub fn is_empty(&self) -> bool {
        self.contexts
            .last()
            .map_or(true, |c| c.operands.is_empty() && c.operators.is_empty())
    }

    pub fn push_operand(&mut self, val: Int) -> Result<()> {
        let ctx = self.context();
        if ctx.after_operand {
            ctx.operands.pop();
        }
        ctx.operands.push(val)?;
        ctx.after_operand = true;
        Ok(())
    }

    pub fn push_operator(&mut self, op: Operator, arith: Arith) -> Result<()> {
        let ctx = self.context();
        match op.fixity() {
            Fixity::Prefix => {
                ctx.operators.push(Item::Op(op))?;
                ctx.after_operand = false;
            }
            Fixity::Postfix => {
                if !ctx.after_operand {
                    return Err(error!(NoArgComplement));
                }
                if arith.precedence == Precedence::Flat {
                    ctx.reduce(arith, |_| true)?;
                }
                ctx.apply(Item::Op(op), arith)?;
            }
            Fixity::Binary => {
                if !ctx.after_operand {
                    return Err(error!(IllFormed; op.to_string()));
                }
                let prec = op.precedence(arith.precedence);
                ctx.reduce(arith, |top| {
                    let top_prec = top.precedence(arith.precedence);
                    top_prec > prec || (top_prec == prec && !op.right_assoc())
                })?;
                ctx.operators.push(Item::Op(op))?;
                ctx.after_operand = false;
            }
        }
        Ok(())
    }

    pub fn open_paren(&mut self) -> Result<()> {
        let ctx = self.context();
        let replace = ctx.after_operand;
        ctx.operators.push(Item::Paren { replace })?;
        ctx.nesting += 1;
        ctx.after_operand = false;
        Ok(())
    }

    pub fn close_paren(&mut self, arith: Arith) -> Result<()> {
        let ctx = self.context();
        if ctx.nesting == 0 {
            return Err(error!(MissingLeftParen));
        }
        if !ctx.after_operand {
            return Err(error!(IllFormed));
        }
        ctx.reduce(arith, |_| true)?;
        let val = ctx.operands.pop().ok_or_else(|| error!(IllFormed))?;
        let replace = match ctx.operators.pop() {
            Some(Item::Paren { replace }) => replace,
            _ => return Err(error!(MissingLeftParen)),
        };
        ctx.nesting -= 1;
        if replace {
            ctx.operands.pop();
        }
        ctx.operands.push(val)?;
        ctx.after_operand = true;
        if let Some(&Item::Op(op)) = ctx.operators.last() {
            if op.fixity() == Fixity::Prefix {
                ctx.operators.pop();
                ctx.apply(Item::Op(op), arith)?;
            }
        }
        Ok(())
    }

    /// Pops the value pending inside the innermost paren, if any.
    /// Used by commands that act as operands and take an optional n.
    pub fn pop_pending(&mut self, arith: Arith) -> Result<Option<Int>> {
        let ctx = self.context();
        if !ctx.after_operand {
            return Ok(None);
        }
        ctx.reduce(arith, |_| true)?;
        let val = ctx.operands.pop();
        ctx.after_operand = false;
        Ok(val)
    }

    /// Resolves the whole context into the n argument of a command.
    pub fn pop_n(&mut self, arith: Arith) -> Result<Option<Int>> {
        let ctx = self.context();
        if ctx.nesting > 0 {
            return Err(error!(MissingRightParen));
        }
        if !ctx.after_operand {
            let lone = match (ctx.operands.len(), ctx.operators.len()) {
                (0, 0) => None,
                (0, 1) => match ctx.operators.last() {
                    Some(Item::Op(Operator::Neg)) => Some(-1),
                    Some(Item::Op(Operator::Plus)) => None,
                    _ => return Err(error!(IllFormed)),
                },
                _ => return Err(error!(IllFormed)),
            };
            ctx.clear();
            return Ok(lone);
        }
        ctx.reduce(arith, |_| true)?;
        let val = ctx.operands.pop();
        ctx.clear();
        Ok(val)
    }
}
