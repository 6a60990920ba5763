use crate::registry::Registry;
use crate::scanner::Scanner;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ParseError {
    #[error("missing opening paren")]
    MissingOParen,
    #[error("missing closing paren")]
    MissingCParen,
}

/// Flat postfix tokens, ready for the evaluator.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Postfix(pub Vec<String>);

impl Postfix {
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|t| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum State {
    Idle,
    // a unary symbol was just emitted, the next char sticks to it
    BuildingUnary,
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Pending {
    OParen,
    Op(char),
}

// pop pending operators into `out` until the innermost open paren
fn flush(stack: &mut Vec<Pending>, out: &mut String) {
    while let Some(&Pending::Op(c)) = stack.last() {
        out.push(c);
        stack.pop();
    }
}

/// Rewrite an rpn expression that may group sub-expressions in brackets,
/// eg: `(3.141 (2 3 +) (1.571 sin) *)`, into plain postfix tokens
/// `3.141 2 3 + 1.571 sin *`.
///
/// Numbers must be separated from their neighbours by whitespace, they are
/// not validated here.
pub fn flatten(expr: &str, registry: &Registry) -> Result<Postfix, ParseError> {
    let mut out = String::with_capacity(expr.len());
    let mut stack = Vec::new();
    let mut state = State::Idle;
    let mut src = Scanner::new(expr);

    while let Some(c) = src.next() {
        match c {
            c if c.is_whitespace() => {
                flush(&mut stack, &mut out);
                out.push(' ');
                state = State::Idle;
            }
            '(' => {
                stack.push(Pending::OParen);
                state = State::Idle;
            }
            ')' => {
                flush(&mut stack, &mut out);
                if stack.pop() != Some(Pending::OParen) {
                    return Err(ParseError::MissingOParen);
                }
                state = State::Idle;
            }
            _ => {
                if let Some(word) = src.accept_any_word(registry.words()) {
                    flush(&mut stack, &mut out);
                    out.push_str(word);
                    state = State::Idle;
                } else if registry.is_unary(c.encode_utf8(&mut [0; 4])) {
                    out.push(c);
                    state = State::BuildingUnary;
                } else if state == State::BuildingUnary {
                    out.push(c);
                    state = State::Idle;
                } else {
                    flush(&mut stack, &mut out);
                    stack.push(Pending::Op(c));
                }
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::OParen => return Err(ParseError::MissingCParen),
            Pending::Op(c) => out.push(c),
        }
    }

    let tokens = out.split_whitespace().map(String::from).collect();
    let postfix = Postfix(tokens);
    log::debug!("flattened {:?} into '{}'", expr, postfix);
    Ok(postfix)
}
