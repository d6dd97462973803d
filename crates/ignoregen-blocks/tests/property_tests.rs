use ignoregen_blocks::{extract, flatten, trim_last_empty_lines};
use proptest::prelude::*;

/// Lines that can never be directives: anything not starting with `#`.
fn plain_line() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z./!*_ -]{1,12}"]
}

proptest! {
    #[test]
    fn test_identity_without_directives(lines in prop::collection::vec(plain_line(), 0..20)) {
        let output = flatten(extract(&lines));
        prop_assert_eq!(output, trim_last_empty_lines(lines));
    }

    #[test]
    fn test_never_two_trailing_empty_lines(
        lines in prop::collection::vec(
            prop_oneof![plain_line(), Just("# ignoregen env".to_string())],
            0..20,
        )
    ) {
        let output = flatten(extract(&lines));
        let n = output.len();
        prop_assert!(n < 2 || !(output[n - 1].trim().is_empty() && output[n - 2].trim().is_empty()));
    }

    #[test]
    fn test_trim_is_idempotent(lines in prop::collection::vec(plain_line(), 0..20)) {
        let once = trim_last_empty_lines(lines);
        prop_assert_eq!(trim_last_empty_lines(once.clone()), once);
    }
}
