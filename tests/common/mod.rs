pub use vela::diagnostic::*;
use std::cell::RefCell;
use std::rc::Rc;
use vela::lexing::{Lexer, Token};

pub type TestResult = std::result::Result<(), String>;

#[allow(dead_code)]
pub mod test_token {

    use vela::lexing::{Token, TokenKind};

    pub fn test(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text)
    }

    pub fn keyword(text: &str) -> Token {
        test(TokenKind::Keyword, text)
    }

    pub fn identifier(text: &str) -> Token {
        test(TokenKind::Identifier, text)
    }

    pub fn literal(text: &str) -> Token {
        test(TokenKind::Literal, text)
    }

    pub fn int(text: &str) -> Token {
        test(TokenKind::IntLiteral, text)
    }

    pub fn double(text: &str) -> Token {
        test(TokenKind::DoubleLiteral, text)
    }

    pub fn operator(text: &str) -> Token {
        test(TokenKind::Operator, text)
    }

    pub fn punctuation(text: &str) -> Token {
        test(TokenKind::Punctuation, text)
    }

    pub fn unknown(text: &str) -> Token {
        test(TokenKind::Unknown, text)
    }
}

pub struct DiagnosticCapture {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCapture {
    pub fn unwrap(&mut self) -> Vec<Diagnostic> {
        let captured = RefCell::new(Vec::new());
        self.diagnostics.swap(&captured);
        captured.into_inner()
    }
}

pub struct TestReporter {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl TestReporter {
    pub fn new() -> (Rc<dyn Reporter>, DiagnosticCapture) {
        let diagnostics = Rc::new(RefCell::new(Vec::new()));
        (
            Rc::new(TestReporter {
                diagnostics: Rc::clone(&diagnostics),
            }),
            DiagnosticCapture { diagnostics },
        )
    }
}

impl Reporter for TestReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

pub fn test_lex(text: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let source = vela::source::text(text);
    let (reporter, mut diagnostics) = TestReporter::new();

    let tokens = Lexer::new(source, reporter).lex();

    (tokens, diagnostics.unwrap())
}

pub fn assert_slices_equal<T, U>(
    kind: &str,
    got: &[T],
    expected: &[T],
    test: U,
    list: &str,
) -> TestResult
where
    T: std::fmt::Display,
    U: Fn(&T, &T) -> bool,
{
    if got.len() != expected.len() {
        let one_line = format!("Expected {} {}, got {}", expected.len(), kind, got.len());
        println!("{}\n{}", &one_line, list);
        return Err(one_line);
    }

    for (lhs, rhs) in got.iter().zip(expected) {
        if !test(lhs, rhs) {
            println!("Expected:\n  {}\nGot:\n  {}", rhs, lhs);
            return Err(String::from("Unexpected item"));
        }
    }

    Ok(())
}
