use crate::flatten::{flatten, ParseError, Postfix};
use crate::registry::{Operator, Registry};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum EvalErr {
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("not enough operands for '{0}'")]
    StackUnderflow(String),
    #[error("{0} operands left over on the stack")]
    ResidualOperands(usize),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// What to do when more than one value is left after the last token.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Residual {
    /// Return the top of the stack, discarding the rest
    #[default]
    TakeTop,
    /// Fail with `EvalErr::ResidualOperands`
    Reject,
}

#[derive(Clone, Debug)]
pub struct Calculator {
    registry: Registry,
    residual: Residual,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Calculator {
        Self::with_registry(Registry::standard(), Residual::TakeTop)
    }

    pub fn strict() -> Calculator {
        Self::with_registry(Registry::standard(), Residual::Reject)
    }

    pub fn with_registry(registry: Registry, residual: Residual) -> Calculator {
        Calculator { registry, residual }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn residual(&self) -> Residual {
        self.residual
    }

    pub fn flatten(&self, expr: &str) -> Result<Postfix, ParseError> {
        flatten(expr, &self.registry)
    }

    pub fn evaluate(&self, expr: &str) -> Result<f64, EvalErr> {
        let postfix = self.flatten(expr)?;
        self.eval(&postfix)
    }

    pub fn eval(&self, rpn: &Postfix) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in rpn.tokens() {
            if let Ok(num) = token.parse::<f64>() {
                operands.push(num);
                log::trace!("{:>8} -> {:?}", token, operands);
                continue;
            }
            let underflow = || EvalErr::StackUnderflow(token.to_string());
            match self.registry.lookup(token) {
                Some(Operator::Unary(f)) => {
                    let o = operands.pop().ok_or_else(underflow)?;
                    operands.push(f(o));
                }
                Some(Operator::Binary(f)) => {
                    let r = operands.pop().ok_or_else(underflow)?;
                    let l = operands.pop().ok_or_else(underflow)?;
                    operands.push(f(l, r));
                }
                None => return Err(EvalErr::InvalidToken(token.to_string())),
            }
            log::trace!("{:>8} -> {:?}", token, operands);
        }

        let result = operands
            .pop()
            .ok_or_else(|| EvalErr::StackUnderflow(format!("result")))?;
        if !operands.is_empty() {
            match self.residual {
                Residual::Reject => return Err(EvalErr::ResidualOperands(operands.len() + 1)),
                Residual::TakeTop => {
                    log::info!("discarding leftover operands {:?} of '{}'", operands, rpn)
                }
            }
        }
        Ok(result)
    }
}
