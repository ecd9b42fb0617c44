pub mod graph;
pub mod lexer;
pub mod machines;
pub mod token;

pub use graph::{LexicalGraph, StateId, TraversalEnd};
pub use lexer::Lexer;
pub use machines::Scan;
pub use token::{Token, TokenKind, TokenString};
