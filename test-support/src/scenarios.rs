use arith_demo::{Evaluation, Operation};
use serde_json::{json, Value};

/// A literal call and the result it must produce.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub operation: Operation,
    pub arguments: Vec<Value>,
    pub expected: Evaluation,
}

impl Scenario {
    fn new(
        name: &'static str,
        operation: Operation,
        arguments: Vec<Value>,
        expected: Evaluation,
    ) -> Self {
        Self {
            name,
            operation,
            arguments,
            expected,
        }
    }

    /// Arguments as they would be typed on the command line.
    pub fn raw_arguments(&self) -> Vec<String> {
        self.arguments
            .iter()
            .map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()
    }
}

/// The reference scenarios every front end must reproduce.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "add_positive",
            Operation::Add,
            vec![json!(1), json!(2)],
            Evaluation::Number(3.0),
        ),
        Scenario::new(
            "add_to_zero",
            Operation::Add,
            vec![json!(-1), json!(1)],
            Evaluation::Number(0.0),
        ),
        Scenario::new(
            "multiply_positive",
            Operation::Multiply,
            vec![json!(3), json!(4)],
            Evaluation::Number(12.0),
        ),
        Scenario::new(
            "multiply_negative",
            Operation::Multiply,
            vec![json!(-2), json!(3)],
            Evaluation::Number(-6.0),
        ),
        Scenario::new(
            "will_always_fail_number",
            Operation::WillAlwaysFail,
            vec![json!(1)],
            Evaluation::Boolean(true),
        ),
        Scenario::new(
            "will_always_fail_string",
            Operation::WillAlwaysFail,
            vec![json!("x")],
            Evaluation::Boolean(true),
        ),
    ]
}
