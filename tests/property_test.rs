use proptest::prelude::*;
use small_calc::{add, divide, multiply, power, sqrt, subtract, DIVIDE_BY_ZERO, NEGATIVE_SQRT};

/// Finite values small enough that sums and products stay finite.
fn finite() -> impl Strategy<Value = f64> {
    -1e150..1e150f64
}

fn nonzero() -> impl Strategy<Value = f64> {
    finite().prop_filter("divisor must be nonzero", |b| *b != 0.0)
}

fn relative_close(expected: f64, actual: f64) -> bool {
    (expected - actual).abs() <= 1e-9 * expected.abs().max(1.0)
}

proptest! {
    #[test]
    fn add_is_commutative(a in finite(), b in finite()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn subtract_is_anti_commutative(a in finite(), b in finite()) {
        prop_assert_eq!(subtract(a, b), -subtract(b, a));
    }

    #[test]
    fn multiply_is_commutative(a in finite(), b in finite()) {
        prop_assert_eq!(multiply(a, b), multiply(b, a));
    }

    #[test]
    fn divide_then_multiply_round_trips(a in finite(), b in nonzero()) {
        let quotient = divide(a, b).unwrap();
        prop_assume!(a == 0.0 || quotient.is_normal());
        prop_assert!(relative_close(a, multiply(quotient, b)));
    }

    #[test]
    fn sqrt_squared_is_identity(a in 0.0..1e300f64) {
        let root = sqrt(a).unwrap();
        prop_assert!(root >= 0.0);
        prop_assert!(relative_close(a, root * root));
    }

    #[test]
    fn power_zero_is_one(a in any::<f64>()) {
        prop_assert_eq!(power(a, 0.0), 1.0);
    }

    #[test]
    fn divide_by_zero_always_fails(a in any::<f64>(), negative in any::<bool>()) {
        let zero = if negative { -0.0 } else { 0.0 };
        let err = divide(a, zero).unwrap_err();
        prop_assert_eq!(err.to_string(), DIVIDE_BY_ZERO);
    }

    #[test]
    fn sqrt_of_negative_always_fails(a in -1e300..-1e-300f64) {
        let err = sqrt(a).unwrap_err();
        prop_assert_eq!(err.to_string(), NEGATIVE_SQRT);
    }
}
