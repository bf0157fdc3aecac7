//! AST (Abstract Syntax Tree) definitions.
//!
//! Each node category is a closed enum owning its children outright:
//! the tree is never shared and never cyclic, so child slots are plain
//! `Box`/`Vec` containment. Nodes are built exclusively by the parser
//! and never mutated afterwards.
//!
//! Submodules:
//! - types: the six primitive variable types
//! - expressions: expression variants
//! - statements: statement variants, functions, and the program root
//! - dump: indentation-based textual rendering of a finished tree

pub mod dump;
pub mod expressions;
pub mod statements;
pub mod types;
