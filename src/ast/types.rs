use std::fmt::Display;

/// The closed set of variable types. Every `let` binding, parameter,
/// and return type resolves to one of these at parse time; there is no
/// inference and no user-defined type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Int,
    Float,
    String,
    Char,
    Bool,
    Void,
}

impl VarType {
    /// Resolves a type name against the fixed table. Returns `None` for
    /// any other name used in type position; the parser turns that into
    /// an "unknown type" error.
    pub fn from_name(name: &str) -> Option<VarType> {
        match name {
            "Int" => Some(VarType::Int),
            "Float" => Some(VarType::Float),
            "String" => Some(VarType::String),
            "Char" => Some(VarType::Char),
            "Bool" => Some(VarType::Bool),
            "Void" => Some(VarType::Void),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VarType::Int => "Int",
            VarType::Float => "Float",
            VarType::String => "String",
            VarType::Char => "Char",
            VarType::Bool => "Bool",
            VarType::Void => "Void",
        }
    }
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
