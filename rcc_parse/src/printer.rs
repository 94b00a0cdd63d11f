use crate::{
    ast::{AstNode, Program},
    symtab::SymTab,
};

/// Render a program as one parenthesized expression per statement, one per line.
pub fn render_program(program: &Program) -> String {
    let mut out = String::new();
    for stmt in program.iter() {
        render_into(stmt, &mut out);
        out.push('\n');
    }
    out
}

/// Render a single node in prefix form. Parentheses in the rendering come from the
/// tree shape only, so inputs that differ only by redundant grouping render the same.
///
/// `a = -(1 + 2);` renders as `(stmt (= (lvar 8) (- 0 (+ 1 2))))`.
pub fn render(node: &AstNode) -> String {
    let mut out = String::new();
    render_into(node, &mut out);
    out
}

/// Lists the frame layout, one local per line, most recently declared first.
pub fn dump_locals(sym_tab: &SymTab) -> String {
    let mut out = format!(
        "locals: {} (frame size {})\n",
        sym_tab.len(),
        sym_tab.frame_size()
    );

    for var in sym_tab.iter() {
        out.push_str(&format!("\t {}\t ; offset {}\n", var.name, var.offset));
    }
    out
}

fn render_into(node: &AstNode, out: &mut String) {
    match node {
        AstNode::ExprStmt { expr } => {
            out.push_str("(stmt ");
            render_into(expr, out);
            out.push(')');
        }
        AstNode::Assign { lhs, rhs } => render_pair("=", lhs, rhs, out),
        AstNode::Binary { op, lhs, rhs } => render_pair(&op.to_string(), lhs, rhs, out),
        AstNode::Num { val } => out.push_str(&val.to_string()),
        AstNode::LVar { offset } => out.push_str(&format!("(lvar {})", offset)),
    }
}

fn render_pair(op: &str, lhs: &AstNode, rhs: &AstNode, out: &mut String) {
    out.push('(');
    out.push_str(op);
    out.push(' ');
    render_into(lhs, out);
    out.push(' ');
    render_into(rhs, out);
    out.push(')');
}
