use log::debug;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::{broken_feature::will_always_fail, calculator};

/// An operation exposed by the crate, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Add,
    Multiply,
    WillAlwaysFail,
}

impl Operation {
    pub fn all() -> [Operation; 3] {
        [Operation::Add, Operation::Multiply, Operation::WillAlwaysFail]
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Multiply => "multiply",
            Operation::WillAlwaysFail => "will-always-fail",
        }
    }

    /// Number of arguments the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Operation::Add | Operation::Multiply => 2,
            Operation::WillAlwaysFail => 1,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "multiply" => Ok(Operation::Multiply),
            "will-always-fail" | "will_always_fail" | "willAlwaysFail" => {
                Ok(Operation::WillAlwaysFail)
            }
            _ => Err(OperationError::UnknownOperation(s.to_string())),
        }
    }
}

/// Largest magnitude below which every integral `f64` is exactly an `i64`.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Result of evaluating an operation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Evaluation {
    Number(f64),
    Boolean(bool),
}

impl Serialize for Evaluation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            // Integral results are written the way `Display` renders them.
            Evaluation::Number(n) if n.fract() == 0.0 && n.abs() < EXACT_INTEGER_LIMIT => {
                serializer.serialize_i64(n as i64)
            }
            Evaluation::Number(n) => serializer.serialize_f64(n),
            Evaluation::Boolean(b) => serializer.serialize_bool(b),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `+ 0.0` folds negative zero into zero.
            Evaluation::Number(n) => write!(f, "{}", *n + 0.0),
            Evaluation::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Machine-readable record of a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub operation: Operation,
    pub arguments: Vec<Value>,
    pub result: Evaluation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OperationError {
    UnknownOperation(String),
    Arity {
        operation: Operation,
        expected: usize,
        found: usize,
    },
    NotANumber {
        operation: Operation,
        position: usize,
        value: Value,
    },
    NonFiniteResult {
        operation: Operation,
    },
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationError::UnknownOperation(name) => write!(f, "Unknown operation: {}", name),
            OperationError::Arity {
                operation,
                expected,
                found,
            } => write!(
                f,
                "{} takes {} argument(s), got {}",
                operation, expected, found
            ),
            OperationError::NotANumber {
                operation,
                position,
                value,
            } => write!(
                f,
                "{} expects a number at position {}, got {}",
                operation, position, value
            ),
            OperationError::NonFiniteResult { operation } => {
                write!(f, "{} result is not a finite number", operation)
            }
        }
    }
}

impl std::error::Error for OperationError {}

/// Parses a raw token as JSON, treating anything that isn't valid JSON as a string.
pub fn parse_argument(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Evaluates `operation` against dynamically-typed arguments.
pub fn evaluate(operation: Operation, args: &[Value]) -> Result<Evaluation, OperationError> {
    if args.len() != operation.arity() {
        return Err(OperationError::Arity {
            operation,
            expected: operation.arity(),
            found: args.len(),
        });
    }

    let result = match operation {
        Operation::Add => {
            let (a, b) = number_pair(operation, args)?;
            Evaluation::Number(calculator::add(a, b))
        }
        Operation::Multiply => {
            let (a, b) = number_pair(operation, args)?;
            Evaluation::Number(calculator::multiply(a, b))
        }
        Operation::WillAlwaysFail => Evaluation::Boolean(will_always_fail(&args[0])),
    };

    if let Evaluation::Number(n) = result {
        if !n.is_finite() {
            return Err(OperationError::NonFiniteResult { operation });
        }
    }

    debug!("{}({:?}) = {}", operation, args, result);
    Ok(result)
}

fn number_pair(operation: Operation, args: &[Value]) -> Result<(f64, f64), OperationError> {
    Ok((
        number_at(operation, args, 0)?,
        number_at(operation, args, 1)?,
    ))
}

fn number_at(operation: Operation, args: &[Value], position: usize) -> Result<f64, OperationError> {
    let value = &args[position];
    let Some(n) = value.as_f64().filter(|n| n.is_finite()) else {
        return Err(OperationError::NotANumber {
            operation,
            position,
            value: value.clone(),
        });
    };
    Ok(n)
}
