use super::machines::*;
use super::token::Token;
use crate::diagnostic;
use crate::source::Source;
use log::trace;
use std::rc::Rc;

/// One-pass scanner. Owns one instance of each sub-machine; the machines'
/// transition tables are built once, here, and reused across dispatches.
pub struct Lexer {
    source: Source,
    position: usize,
    reporter: Rc<dyn diagnostic::Reporter>,
    identifiers: IdentifierMachine,
    numbers: NumberMachine,
    strings: StringMachine,
    operators: OperatorMachine,
    punctuation: PunctuationMachine,
}

impl Lexer {
    pub fn new(source: Source, reporter: Rc<dyn diagnostic::Reporter>) -> Self {
        Lexer {
            source,
            position: 0,
            reporter,
            identifiers: IdentifierMachine::new(),
            numbers: NumberMachine::new(),
            strings: StringMachine::new(),
            operators: OperatorMachine::new(),
            punctuation: PunctuationMachine::new(),
        }
    }

    /// Tokenizes the whole source. Each iteration either emits one token,
    /// skips one whitespace character, or reports and skips one unrecognized
    /// character, so the cursor strictly advances until the source ends.
    pub fn lex(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(character) = self.remaining().chars().next() {
            if character.is_ascii_whitespace() {
                self.position += character.len_utf8();
                continue;
            }

            let scan = match character {
                'a'..='z' | 'A'..='Z' => self.identifiers.scan(self.remaining()),
                '0'..='9' => self.numbers.scan(self.remaining()),
                '+' | '-' | '*' | '/' | '=' => self.operators.scan(self.remaining()),
                ':' | ';' | ',' | '.' | '(' | ')' | '{' | '}' => {
                    self.punctuation.scan(self.remaining())
                }
                '"' => self.strings.scan(self.remaining()),
                _ => {
                    self.reporter
                        .report(diagnostic::Diagnostic::unrecognized_character(
                            self.position,
                            character,
                        ));
                    self.position += character.len_utf8();
                    continue;
                }
            };

            trace!(target: "lexer", "emitted {}", scan.token);
            self.position += scan.consumed;
            tokens.push(scan.token);
        }

        tokens
    }

    /// The unconsumed suffix of the source. Machines always see this
    /// suffix, never a previously-consumed copy.
    fn remaining(&self) -> &str {
        self.source.suffix(self.position)
    }
}
