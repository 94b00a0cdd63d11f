use rcc_parse::{config::ParseConfig, printer::render_program, translate};
use std::fs;

// Each input has a matching `.ast` file holding the expected rendering of the program.
macro_rules! parse_pass_test {
    ($test_name:ident, $file_name:expr) => {
        #[test]
        fn $test_name() {
            let path = format!("./tests/parse_pass/inputs/{}.rc", $file_name);
            let src = fs::read_to_string(&path).unwrap();

            let result = translate(&src, &ParseConfig::default());
            assert!(result.is_ok(), "{:?}", result.err());

            let expected_path = format!("./tests/parse_pass/inputs/{}.ast", $file_name);
            let expected = fs::read_to_string(&expected_path).unwrap();
            let (program, _) = result.unwrap();
            assert_eq!(render_program(&program), expected);
        }
    };
}

parse_pass_test!(arith, "arith");
parse_pass_test!(assign_chain, "assign_chain");
parse_pass_test!(comparisons, "comparisons");
parse_pass_test!(locals, "locals");
parse_pass_test!(multiline, "multiline");
parse_pass_test!(unary, "unary");
