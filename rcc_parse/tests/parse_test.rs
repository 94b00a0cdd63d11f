use rcc_err::{
    err::{FrontendErr, RccErr},
    parse_err::ParseErrTy,
};
use rcc_parse::{
    ast::{AstNode, BinOp, Program},
    config::{ParseConfig, DEFAULT_MAX_DEPTH},
    lex::tokenize,
    parser::Parser,
    printer::{render, render_program},
    symtab::{SymTab, SymTabMode},
    token::{Token, TokenTy},
    translate,
};

fn parse(src: &str) -> Program {
    let (program, _) = translate(src, &ParseConfig::default()).unwrap();
    program
}

fn parse_err(src: &str) -> FrontendErr {
    translate(src, &ParseConfig::default()).unwrap_err()
}

/// Strip the statement wrapper off a single statement program.
fn single_expr(src: &str) -> AstNode {
    let program = parse(src);
    assert_eq!(program.len(), 1);
    match program.stmts.into_iter().next().unwrap() {
        AstNode::ExprStmt { expr } => *expr,
        other => panic!("expected an expression statement, found {:?}", other),
    }
}

#[test]
fn one_root_per_statement() {
    let program = parse("1; 2+3; a=4; (5);");
    assert_eq!(program.len(), 4);
    for stmt in program.iter() {
        match stmt {
            AstNode::ExprStmt { .. } => (),
            other => panic!("statement root is not ExprStmt: {:?}", other),
        }
    }
    assert_eq!(render(&program.stmts[0]), "(stmt 1)");
    assert_eq!(render(&program.stmts[3]), "(stmt 5)");
}

#[test]
fn empty_program() {
    let program = parse("   ");
    assert!(program.is_empty());
    assert_eq!(program.frame_size, 0);
}

#[test]
fn precedence() {
    let ast = single_expr("1 + 2 * 3 == 7 - 8 / 4;");
    assert_eq!(render(&ast), "(== (+ 1 (* 2 3)) (- 7 (/ 8 4)))");
}

#[test]
fn left_associative_arithmetic() {
    let ast = single_expr("1 - 2 - 3;");
    let expected = AstNode::binary(
        BinOp::Sub,
        AstNode::binary(BinOp::Sub, AstNode::num(1), AstNode::num(2)),
        AstNode::num(3),
    );
    assert_eq!(ast, expected);
}

#[test]
fn redundant_parens_do_not_change_tree() {
    let plain = single_expr("a = 1 + 2 * 3 < 4;");
    let grouped = single_expr("(a) = ((((1) + ((2) * (3)))) < (4));");
    assert_eq!(plain, grouped);
}

#[test]
fn parens_change_grouping_only() {
    let ast = single_expr("(1 + 2) * 3;");
    assert_eq!(render(&ast), "(* (+ 1 2) 3)");
}

#[test]
fn greater_than_is_canonicalized() {
    let gt = single_expr("a > b;");
    let lt = single_expr("b < a;");

    // `a` is seen first in the first program and `b` in the second, so compare against
    // explicit offsets rather than against each other.
    assert_eq!(
        gt,
        AstNode::binary(BinOp::Lt, AstNode::lvar(16), AstNode::lvar(8))
    );
    assert_eq!(
        lt,
        AstNode::binary(BinOp::Lt, AstNode::lvar(8), AstNode::lvar(16))
    );
}

#[test]
fn greater_than_matches_less_than_with_same_bindings() {
    let program = parse("a; b; a > b; b < a; a >= b; b <= a;");
    assert_eq!(program.stmts[2], program.stmts[3]);
    assert_eq!(program.stmts[4], program.stmts[5]);
    assert_eq!(
        render(&program.stmts[4]),
        "(stmt (<= (lvar 16) (lvar 8)))"
    );
}

#[test]
fn assignment_is_right_associative() {
    let ast = single_expr("a=b=1;");
    match ast {
        AstNode::Assign { lhs, rhs } => {
            assert_eq!(*lhs, AstNode::lvar(8));
            assert_eq!(*rhs, AstNode::assign(AstNode::lvar(16), AstNode::num(1)));
        }
        other => panic!("expected assignment, found {:?}", other),
    }
}

#[test]
fn unary_minus_is_zero_minus() {
    let ast = single_expr("-3 * +x;");
    assert_eq!(render(&ast), "(* (- 0 3) (lvar 8))");
}

#[test]
fn unary_minus_binds_to_primary() {
    let ast = single_expr("-(1+2);");
    let expected = AstNode::binary(
        BinOp::Sub,
        AstNode::num(0),
        AstNode::binary(BinOp::Add, AstNode::num(1), AstNode::num(2)),
    );
    assert_eq!(ast, expected);
}

#[test]
fn symbol_offsets_follow_first_appearance() {
    let (program, symtab) = translate("a=1;b=2;a;", &ParseConfig::default()).unwrap();

    assert_eq!(symtab.lookup("a"), Some(8));
    assert_eq!(symtab.lookup("b"), Some(16));
    assert_eq!(symtab.len(), 2);
    assert_eq!(program.frame_size, 16);
    assert_eq!(render(&program.stmts[2]), "(stmt (lvar 8))");
}

#[test]
fn eager_registration_gives_same_offsets() {
    let src = "foo = 3; bar = foo * 2; baz = bar > foo;";
    let lazy = translate(src, &ParseConfig::default()).unwrap().0;

    let config = ParseConfig {
        eager_idents: true,
        ..ParseConfig::default()
    };
    let eager = translate(src, &config).unwrap().0;

    assert_eq!(lazy, eager);
}

#[test]
fn shadowing_mode_resolves_to_most_recent_entry() {
    let config = ParseConfig {
        eager_idents: true,
        sym_tab_mode: SymTabMode::Shadowing,
        ..ParseConfig::default()
    };
    let (program, symtab) = translate("a=1;a;", &config).unwrap();

    assert_eq!(symtab.len(), 2);
    assert_eq!(
        render_program(&program),
        "(stmt (= (lvar 16) 1))\n(stmt (lvar 16))\n"
    );
}

#[test]
fn custom_slot_width() {
    let config = ParseConfig {
        slot_width: 4,
        ..ParseConfig::default()
    };
    let (program, _) = translate("x; y; z;", &config).unwrap();
    assert_eq!(
        render_program(&program),
        "(stmt (lvar 4))\n(stmt (lvar 8))\n(stmt (lvar 12))\n"
    );
    assert_eq!(program.frame_size, 12);
}

#[test]
fn missing_operand_reports_offset_of_semicolon() {
    let err = parse_err("1+;");
    assert_eq!(err.pos(), 2);
    match err {
        FrontendErr::Parse(e) => {
            assert_eq!(e.ty, ParseErrTy::ExpectedOperand(String::from(";")))
        }
        other => panic!("expected a syntax error, found {:?}", other),
    }
}

#[test]
fn unknown_char_reports_its_offset() {
    let err = parse_err("a = 2 $ 3;");
    assert_eq!(err.pos(), 6);
    match err {
        FrontendErr::Lex(_) => (),
        other => panic!("expected a lexical error, found {:?}", other),
    }
}

#[test]
fn unterminated_statement_fails() {
    let err = parse_err("1+1");
    assert_eq!(err.pos(), 3);
    match err {
        FrontendErr::Parse(e) => assert_eq!(
            e.ty,
            ParseErrTy::TknMismatch(String::from(";"), String::from("EOF"))
        ),
        other => panic!("expected a syntax error, found {:?}", other),
    }
}

#[test]
fn missing_right_paren() {
    let err = parse_err("(1+2;");
    assert_eq!(err.pos(), 4);
    assert_eq!(err.to_msg(), "expected ')', but found ';'");
}

#[test]
fn double_unary_is_rejected() {
    let err = parse_err("--1;");
    assert_eq!(err.pos(), 1);
}

#[test]
fn first_error_stops_parsing() {
    let err = parse_err("1; 2 +; 3 *;");
    assert_eq!(err.pos(), 6);
}

#[test]
fn parser_appends_missing_eof() {
    let src = "7;";
    let mut tokens: Vec<Token> = tokenize(src).unwrap();
    tokens.pop();

    let mut symtab = SymTab::new();
    let program = Parser::new(tokens, &mut symtab).parse().unwrap();
    assert_eq!(render_program(&program), "(stmt 7)\n");
}

#[test]
fn parser_accepts_only_eof() {
    let mut symtab = SymTab::new();
    let tokens = vec![Token::new(TokenTy::Eof, "", 0)];
    let program = Parser::new(tokens, &mut symtab).parse().unwrap();
    assert!(program.is_empty());
}

fn assert_well_formed(node: &AstNode) {
    match node {
        AstNode::ExprStmt { expr } => assert_well_formed(expr),
        _ if node.is_leaf() => assert!(node.children().is_none()),
        _ => {
            let (lhs, rhs) = node.children().unwrap();
            assert_well_formed(lhs);
            assert_well_formed(rhs);
        }
    }
}

#[test]
fn binary_nodes_have_two_children() {
    let program = parse("a = (b + 1) * -c >= 4 == (d = e != 2); f / 2 - 3 < +g;");
    for stmt in program.iter() {
        assert_well_formed(stmt);
    }
}

#[test]
fn only_less_than_comparisons_survive() {
    let ast = single_expr("1 > 2 >= 3;");
    match ast {
        AstNode::Binary { op, lhs, .. } => {
            assert_eq!(op, BinOp::Le);
            assert!(op.is_comparison());
            match *lhs {
                AstNode::Num { val } => assert_eq!(val, 3),
                other => panic!("expected literal, found {:?}", other),
            }
        }
        other => panic!("expected comparison, found {:?}", other),
    }
    assert!(!BinOp::Add.is_comparison());
}

fn nested(depth: usize) -> String {
    format!("{}1{};", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let ast = single_expr(&nested(DEFAULT_MAX_DEPTH));
    assert_eq!(ast, AstNode::num(1));
}

#[test]
fn nesting_past_the_limit_fails_at_paren() {
    let err = parse_err(&nested(DEFAULT_MAX_DEPTH + 1));
    assert_eq!(err.pos(), DEFAULT_MAX_DEPTH);
    match err {
        FrontendErr::Parse(e) => assert_eq!(e.ty, ParseErrTy::NestingTooDeep(DEFAULT_MAX_DEPTH)),
        other => panic!("expected a syntax error, found {:?}", other),
    }
}

#[test]
fn long_assignment_chain_fails_at_equals() {
    let src = format!("{}1;", "a=".repeat(DEFAULT_MAX_DEPTH + 1));
    let err = parse_err(&src);

    // The first `=` past the limit.
    assert_eq!(err.pos(), 2 * DEFAULT_MAX_DEPTH + 1);
    assert_eq!(
        err.to_msg(),
        format!("expression nested too deeply (limit is {})", DEFAULT_MAX_DEPTH)
    );
}

#[test]
fn closed_groups_do_not_count_toward_depth() {
    let src = format!("{}1;", "(1)+".repeat(DEFAULT_MAX_DEPTH * 2));
    let program = parse(&src);
    assert_eq!(program.len(), 1);
}

#[test]
fn custom_max_depth() {
    let config = ParseConfig {
        max_depth: 2,
        ..ParseConfig::default()
    };
    assert!(translate("((1));", &config).is_ok());

    let err = translate("(((1)));", &config).unwrap_err();
    assert_eq!(err.pos(), 2);
}
