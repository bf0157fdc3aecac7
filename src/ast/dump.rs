//! Depth-first textual rendering of a finished tree, two spaces of
//! indentation per nesting level. This is a display aid for the CLI
//! driver and the tests; parsing never depends on it.

use super::{
    expressions::Expr,
    statements::{Block, Function, Program, Stmt},
};

fn pad(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push(' ');
    }
}

fn dump_expr(expr: &Expr, indent: usize, out: &mut String) {
    pad(out, indent);
    match expr {
        Expr::Int(v) => out.push_str(&format!("Int({})\n", v)),
        Expr::Float(v) => out.push_str(&format!("Float({})\n", v)),
        Expr::Str(v) => out.push_str(&format!("String({})\n", v)),
        Expr::Char(v) => out.push_str(&format!("Char('{}')\n", *v as char)),
        Expr::Bool(v) => out.push_str(&format!("Bool({})\n", v)),
        Expr::Void => out.push_str("Void\n"),
        Expr::Var(name) => out.push_str(&format!("Var({})\n", name)),
        Expr::Binary { op, left, right } => {
            out.push_str(&format!("Binary({})\n", op));
            dump_expr(left, indent + 2, out);
            dump_expr(right, indent + 2, out);
        }
        Expr::Call { callee, args } => {
            out.push_str(&format!("Call({})\n", callee));
            for arg in args {
                dump_expr(arg, indent + 2, out);
            }
        }
    }
}

fn dump_stmt(stmt: &Stmt, indent: usize, out: &mut String) {
    match stmt {
        Stmt::Return(value) => {
            pad(out, indent);
            out.push_str("Return\n");
            dump_expr(value, indent + 2, out);
        }
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            pad(out, indent);
            out.push_str("If\n");
            dump_expr(condition, indent + 2, out);
            pad(out, indent);
            out.push_str("Then:\n");
            for s in then_branch {
                dump_stmt(s, indent + 2, out);
            }
            if let Some(else_branch) = else_branch {
                pad(out, indent);
                out.push_str("Else:\n");
                for s in else_branch {
                    dump_stmt(s, indent + 2, out);
                }
            }
        }
        Stmt::Let {
            name,
            var_type,
            init,
        } => {
            pad(out, indent);
            out.push_str(&format!("Let({}: {})\n", name, var_type));
            if let Some(init) = init {
                dump_expr(init, indent + 2, out);
            }
        }
        Stmt::Expr(expr) => dump_expr(expr, indent, out),
    }
}

fn dump_block(block: &Block, indent: usize, out: &mut String) {
    pad(out, indent);
    out.push_str("Block\n");
    for stmt in block.iter() {
        dump_stmt(stmt, indent + 2, out);
    }
}

fn dump_function(function: &Function, indent: usize, out: &mut String) {
    pad(out, indent);
    out.push_str(&format!(
        "Function {} -> {}\n",
        function.name, function.return_type
    ));
    for (name, ty) in &function.params {
        pad(out, indent + 2);
        out.push_str(&format!("Param: {}: {}\n", name, ty));
    }
    dump_block(&function.body, indent + 2, out);
}

impl Program {
    /// Renders the whole tree, visiting every function in source order.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        out.push_str("Program\n");
        for function in &self.functions {
            dump_function(function, 2, &mut out);
        }
        out
    }
}
