/// An expression node. Binary operands and call arguments are owned by
/// their parent; argument order is source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(i64),
    Float(f64),
    Str(String),
    Char(u8),
    Bool(bool),
    Void,
    Var(String),
    Binary {
        /// The literal operator text, e.g. `"+"` or `"<="`.
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        callee: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn binary(op: impl Into<String>, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
