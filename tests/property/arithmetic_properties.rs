use arith_demo::{add, evaluate, multiply, will_always_fail, Evaluation, Operation};
use proptest::prelude::*;
use serde_json::json;

fn finite() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(test_support::proptest_cases()))]

    #[test]
    fn test_add_is_commutative(x in finite(), y in finite()) {
        prop_assert_eq!(add(x, y), add(y, x));
    }

    #[test]
    fn test_add_identity(x in finite()) {
        prop_assert_eq!(add(x, 0.0), x);
    }

    #[test]
    fn test_multiply_is_commutative(x in finite(), y in finite()) {
        prop_assert_eq!(multiply(x, y), multiply(y, x));
    }

    #[test]
    fn test_multiply_identity(x in finite()) {
        prop_assert_eq!(multiply(x, 1.0), x);
    }

    #[test]
    fn test_multiply_by_zero(x in finite()) {
        prop_assert_eq!(multiply(x, 0.0), 0.0);
    }

    #[test]
    fn test_multiply_sign(x in 1.0f64..1.0e6, y in 1.0f64..1.0e6) {
        prop_assert!(multiply(-x, y) < 0.0);
        prop_assert!(multiply(-x, -y) > 0.0);
    }

    #[test]
    fn test_small_integers_are_exact(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        prop_assert_eq!(add(a as f64, b as f64), (a + b) as f64);
        prop_assert_eq!(multiply(a as f64, b as f64), (a * b) as f64);
    }

    #[test]
    fn test_will_always_fail_ignores_input(s in ".*", n in any::<i64>(), b in any::<bool>()) {
        prop_assert!(will_always_fail(s.as_str()));
        prop_assert!(will_always_fail(&n));
        prop_assert!(will_always_fail(&b));
    }

    #[test]
    fn test_dispatch_agrees_with_add(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let result = evaluate(Operation::Add, &[json!(a), json!(b)]).unwrap();
        prop_assert_eq!(result, Evaluation::Number(add(a as f64, b as f64)));
    }

    #[test]
    fn test_dispatch_rejects_strings(s in "[a-zA-Z]+", n in any::<i32>()) {
        prop_assert!(evaluate(Operation::Multiply, &[json!(s), json!(n)]).is_err());
    }
}
