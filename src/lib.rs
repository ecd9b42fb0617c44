pub mod diagnostic;
pub mod lexing;
pub mod source;

use diagnostic::*;
use lexing::*;
pub use source::Source;
use std::rc::Rc;

/// Tokenizes the source with the default (printing) reporter attached.
pub fn run(source: Source) -> Vec<Token> {
    let reporter: Rc<dyn Reporter> = DefaultReporter::new();
    Lexer::new(source, reporter).lex()
}
