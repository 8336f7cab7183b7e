use super::*;

/// Helper: fold the first `-` in `source`.
fn fold_first(source: &str) -> Option<usize> {
    let minus = source.find('-').expect("test source contains a minus");
    folded_digit(source.as_bytes(), minus)
}

// === Lookahead ===

#[test]
fn digit_directly_after_sign() {
    assert_eq!(digit_after_sign(b"-5", 0), Some(1));
}

#[test]
fn digit_after_whitespace_run() {
    assert_eq!(digit_after_sign(b"- \t\r\n 99", 0), Some(6));
}

#[test]
fn non_digit_after_sign() {
    assert_eq!(digit_after_sign(b"-user_id", 0), None);
    assert_eq!(digit_after_sign(b"- - 3", 0), None);
    assert_eq!(digit_after_sign(b"-'1'", 0), None);
}

#[test]
fn sign_at_end_of_input() {
    assert_eq!(digit_after_sign(b"a -", 2), None);
    assert_eq!(digit_after_sign(b"a -   ", 2), None);
    assert_eq!(fold_first("1 = -"), None);
}

#[test]
fn lookahead_past_end_is_none() {
    assert_eq!(digit_after_sign(b"-", 5), None);
}

// === Lookbehind ===

#[test]
fn byte_before_skips_whitespace() {
    assert_eq!(byte_before(b"( \t -1", 4), Some(b'('));
}

#[test]
fn byte_before_start_is_none() {
    assert_eq!(byte_before(b"-1", 0), None);
    assert_eq!(byte_before(b"   -1", 3), None);
}

#[test]
fn operator_context() {
    for source in [
        "= -1", "(-1", ", -1", "< -1", "> -1", "+ -1", "--1", "/ -1", "* -1", "% -1", "& -1",
        "~ -1", "| -1", "^ -1", ">> -1", "<< -1", "<> -1", "!= -1",
    ] {
        let minus = source.rfind('-').expect("minus");
        assert!(
            has_sign_context(source.as_bytes(), minus),
            "expected sign context in {source:?}"
        );
    }
}

#[test]
fn name_context() {
    assert!(has_sign_context(b"AND -1", 4));
    assert!(has_sign_context(b"col_ -1", 5));
    assert!(has_sign_context(b"a-1", 1));
}

#[test]
fn no_context_after_closing_tokens() {
    for source in [") -1", "5 -1", "' -1", "` -1", "? -1", ". -1"] {
        let minus = source.rfind('-').expect("minus");
        assert!(
            !has_sign_context(source.as_bytes(), minus),
            "unexpected sign context in {source:?}"
        );
    }
}

// === Folding ===

#[test]
fn sign_at_position_zero_is_not_folded() {
    assert_eq!(fold_first("-1"), None);
    assert_eq!(fold_first("-   1"), None);
}

#[test]
fn sign_after_equals_is_folded() {
    assert_eq!(fold_first("user_id = -123"), Some(11));
}

#[test]
fn sign_with_whitespace_gap_is_folded() {
    assert_eq!(fold_first("IN ( - 999"), Some(7));
}

#[test]
fn minus_before_name_is_not_folded() {
    assert_eq!(fold_first("AND -user_id = 1"), None);
}

#[test]
fn consecutive_signs_fold_only_the_last() {
    let source = b"=-+-+-++-1";
    let folded: Vec<usize> = source
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'-')
        .filter_map(|(i, _)| folded_digit(source, i))
        .collect();
    assert_eq!(folded, vec![9]);
}

#[test]
fn double_minus_before_digit() {
    // First `-` sees another `-` ahead; the second sees `-` behind.
    assert_eq!(folded_digit(b"a--1", 1), None);
    assert_eq!(folded_digit(b"a--1", 2), Some(3));
}

mod proptest_sign {
    use super::super::*;
    use crate::char_class::is_whitespace;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn helpers_are_total(bytes in proptest::collection::vec(any::<u8>(), 0..64), pos in 0usize..80) {
            let _ = digit_after_sign(&bytes, pos);
            let _ = byte_before(&bytes, pos);
            let _ = has_sign_context(&bytes, pos);
        }

        #[test]
        fn folded_digit_skips_only_whitespace(
            before in "[a-z(=, ]{0,6}",
            gap in "[ \t\r\n]{0,4}",
            after in "[0-9a-z ]{0,4}",
        ) {
            let source = format!("{before}-{gap}{after}");
            let minus = before.len();
            if let Some(digit) = folded_digit(source.as_bytes(), minus) {
                prop_assert!(source.as_bytes()[digit].is_ascii_digit());
                prop_assert!(source.as_bytes()[minus + 1..digit].iter().all(|&b| is_whitespace(b)));
            }
        }
    }
}
