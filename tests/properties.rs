use proptest::prelude::*;
use reckon::evaluate_script;

const MAX_INPUT_BYTES: usize = 256;

fn binary_op() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
}

proptest! {
    #[test]
    fn binary_arithmetic_matches_ieee(
        a in -1e6f64..1e6,
        b in -1e6f64..1e6,
        op in binary_op()
    ) {
        let source = format!("{a} {op} {b};");
        let results = evaluate_script(&source).unwrap();
        let expected = match op {
            '+' => a + b,
            '-' => a - b,
            '*' => a * b,
            '/' if b == 0.0 => f64::INFINITY,
            '/' => a / b,
            _ => unreachable!(),
        };
        prop_assert_eq!(results, vec![expected]);
    }

    #[test]
    fn parenthesized_grouping_matches_ieee(
        a in -1e3f64..1e3,
        b in -1e3f64..1e3,
        c in -1e3f64..1e3
    ) {
        let source = format!("({a} + {b}) * {c};");
        let results = evaluate_script(&source).unwrap();
        prop_assert_eq!(results, vec![(a + b) * c]);
    }

    #[test]
    fn arbitrary_input_never_panics(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        let _ = evaluate_script(&input);
    }
}
