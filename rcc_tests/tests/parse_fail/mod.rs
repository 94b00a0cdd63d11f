use rcc_err::{
    diag::render,
    err::{FrontendErr, RccErr},
};
use rcc_parse::{config::ParseConfig, translate};
use std::fs;

// Fails with an error of the given kind at the given byte offset of the input file.
macro_rules! parse_fail_test {
    ($test_name:ident, $file_name:expr, $kind:ident, $pos:expr) => {
        #[test]
        fn $test_name() {
            let path = format!("./tests/parse_fail/inputs/{}.rc", $file_name);
            let src = fs::read_to_string(&path).unwrap();

            let result = translate(&src, &ParseConfig::default());
            let err = result.unwrap_err();
            match err {
                FrontendErr::$kind(_) => (),
                ref other => panic!("wrong error kind: {:?}", other),
            }
            assert_eq!(err.pos(), $pos);

            let report = render(&src, err.pos(), &err.to_msg());
            assert!(report.contains(&err.to_msg()));
        }
    };
}

parse_fail_test!(missing_operand, "missing_operand", Parse, 2);
parse_fail_test!(missing_semicolon, "missing_semicolon", Parse, 4);
parse_fail_test!(unclosed_paren, "unclosed_paren", Parse, 9);
parse_fail_test!(unknown_char, "unknown_char", Lex, 9);
parse_fail_test!(stray_right_paren, "stray_right_paren", Parse, 5);
parse_fail_test!(bare_bang, "bare_bang", Lex, 7);
parse_fail_test!(too_deep, "too_deep", Parse, 259);
