use crate::domain::model::{Evaluation, Operation};
use crate::utils::error::Result;

/// The calls shown by `small-calc demo`, in order.
pub const DEMO_CALLS: [(Operation, &[f64]); 6] = [
    (Operation::Add, &[10.0, 5.0]),
    (Operation::Subtract, &[10.0, 5.0]),
    (Operation::Multiply, &[10.0, 5.0]),
    (Operation::Divide, &[10.0, 5.0]),
    (Operation::Sqrt, &[25.0]),
    (Operation::Power, &[2.0, 3.0]),
];

pub fn demo_evaluations() -> Result<Vec<Evaluation>> {
    DEMO_CALLS
        .iter()
        .map(|(operation, operands)| operation.evaluate(operands))
        .collect()
}
