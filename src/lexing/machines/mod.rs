pub mod identifier;
pub mod number;
pub mod operator;
pub mod punctuation;
pub mod string;

pub use identifier::IdentifierMachine;
pub use number::NumberMachine;
pub use operator::OperatorMachine;
pub use punctuation::PunctuationMachine;
pub use string::StringMachine;

use super::token::{Token, TokenKind};

/// The result of running one machine against a source suffix: exactly one
/// token, plus the byte length of input it consumed. Machines hold no
/// scratch state, so a `Scan` is a pure function of (machine, input).
pub struct Scan {
    pub token: Token,
    pub consumed: usize,
}

impl Scan {
    fn accept(kind: TokenKind, lexeme: &str) -> Scan {
        Scan {
            token: Token::new(kind, lexeme),
            consumed: lexeme.len(),
        }
    }

    /// Rejected input consumes exactly one character, classified UNKNOWN, so
    /// the caller always makes forward progress. Empty input consumes nothing.
    fn reject(input: &str) -> Scan {
        match input.chars().next() {
            Some(character) => {
                let consumed = character.len_utf8();
                Scan {
                    token: Token::new(TokenKind::Unknown, &input[..consumed]),
                    consumed,
                }
            }
            None => Scan {
                token: Token::new(TokenKind::Unknown, ""),
                consumed: 0,
            },
        }
    }
}
