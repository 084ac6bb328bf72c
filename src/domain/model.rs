use crate::core::calculator;
use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Sqrt,
    Power,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Sqrt,
        Operation::Power,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Sqrt => "sqrt",
            Operation::Power => "power",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Sqrt => "√",
            Operation::Power => "^",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Operation::Sqrt => 1,
            _ => 2,
        }
    }

    /// Run the operation on `operands`, which must hold exactly `arity()` values.
    pub fn evaluate(self, operands: &[f64]) -> Result<Evaluation> {
        let result = match (self, operands) {
            (Operation::Add, &[a, b]) => calculator::add(a, b),
            (Operation::Subtract, &[a, b]) => calculator::subtract(a, b),
            (Operation::Multiply, &[a, b]) => calculator::multiply(a, b),
            (Operation::Divide, &[a, b]) => calculator::divide(a, b)?,
            (Operation::Sqrt, &[a]) => calculator::sqrt(a)?,
            (Operation::Power, &[base, exponent]) => calculator::power(base, exponent),
            _ => {
                return Err(CalcError::ArityMismatch {
                    operation: self.name().to_string(),
                    expected: self.arity(),
                    actual: operands.len(),
                })
            }
        };

        Ok(Evaluation {
            operation: self,
            operands: operands.to_vec(),
            result,
        })
    }

    /// Infix form of the call, e.g. `10 + 5`, `√25` or `2^3`.
    pub fn expression(self, operands: &[f64]) -> String {
        match (self, operands) {
            (Operation::Sqrt, [a]) => format!("√{}", a),
            (Operation::Power, [base, exponent]) => format!("{}^{}", base, exponent),
            (op, [a, b]) => format!("{} {} {}", a, op.symbol(), b),
            (op, rest) => {
                let args: Vec<String> = rest.iter().map(|v| v.to_string()).collect();
                format!("{}({})", op.name(), args.join(", "))
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "*" => Ok(Operation::Multiply),
            "divide" | "div" | "/" => Ok(Operation::Divide),
            "sqrt" => Ok(Operation::Sqrt),
            "power" | "pow" | "^" => Ok(Operation::Power),
            _ => Err(CalcError::UnknownOperation {
                name: s.to_string(),
            }),
        }
    }
}

/// One completed operation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub operation: Operation,
    #[serde(with = "crate::utils::non_finite::seq")]
    pub operands: Vec<f64>,
    #[serde(with = "crate::utils::non_finite")]
    pub result: f64,
}

impl Evaluation {
    pub fn expression(&self) -> String {
        self.operation.expression(&self.operands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DIVIDE_BY_ZERO;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("SUB".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!(" pow ".parse::<Operation>().unwrap(), Operation::Power);
        assert_eq!("/".parse::<Operation>().unwrap(), Operation::Divide);
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_parse_unknown_operation() {
        let err = "modulo".parse::<Operation>().unwrap_err();
        assert!(matches!(err, CalcError::UnknownOperation { ref name } if name == "modulo"));
    }

    #[test]
    fn test_evaluate_checks_arity() {
        let err = Operation::Sqrt.evaluate(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            CalcError::ArityMismatch {
                expected: 1,
                actual: 2,
                ..
            }
        ));
        assert!(Operation::Add.evaluate(&[]).is_err());
    }

    #[test]
    fn test_evaluate_propagates_invalid_argument() {
        let err = Operation::Divide.evaluate(&[10.0, 0.0]).unwrap_err();
        assert_eq!(err.to_string(), DIVIDE_BY_ZERO);
    }

    #[test]
    fn test_expression_forms() {
        assert_eq!(Operation::Add.expression(&[10.0, 5.0]), "10 + 5");
        assert_eq!(Operation::Divide.expression(&[2.5, -5.0]), "2.5 / -5");
        assert_eq!(Operation::Sqrt.expression(&[25.0]), "√25");
        assert_eq!(Operation::Power.expression(&[2.0, 3.0]), "2^3");
    }

    #[test]
    fn test_evaluation_serializes_lowercase_operation() {
        let eval = Operation::Multiply.evaluate(&[10.0, 5.0]).unwrap();
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"operation": "multiply", "operands": [10.0, 5.0], "result": 50.0})
        );
    }
}
