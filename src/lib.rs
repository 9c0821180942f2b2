pub mod broken_feature;
pub mod calculator;
pub mod config;
pub mod operation;

pub use broken_feature::will_always_fail;
pub use calculator::{add, multiply};
pub use operation::{evaluate, parse_argument, Evaluation, Operation, OperationError, Report};
