/// AST (Abstract Syntax Tree) module
/// Contains the node arena and the typed nodes it owns
///
/// Submodules:
/// - ast: The node arena and node ids
/// - expressions: Typed expressions and their operators
/// - statements: Statements
/// - declarations: Program, variable and function declarations
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod statements;
