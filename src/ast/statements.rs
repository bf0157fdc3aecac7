use super::{expressions::Expr, types::VarType};

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Return(Expr),
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
    },
    Let {
        name: String,
        var_type: VarType,
        init: Option<Expr>,
    },
    /// A bare expression in statement position.
    Expr(Expr),
}

/// An ordered sequence of statements. Function bodies are always a
/// block, possibly empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Block {
        Block { statements }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }
}

/// A function declaration: name, return type, ordered parameter list,
/// and a body block.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub return_type: VarType,
    pub params: Vec<(String, VarType)>,
    pub body: Block,
}

/// The root of a parsed source file. Function order is source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub functions: Vec<Function>,
}
