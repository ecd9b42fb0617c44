use super::Scan;
use crate::lexing::graph::{LexicalGraph, StateId};
use crate::lexing::token::TokenKind;

/// Recognizes numeric literals: a digit run, optionally followed by a
/// decimal point and more digits. A letter directly after the digits drags
/// the whole run into an absorbing error state.
pub struct NumberMachine {
    graph: LexicalGraph,
    integer: StateId,
    fraction: StateId,
    error: StateId,
}

impl NumberMachine {
    pub fn new() -> Self {
        let mut graph = LexicalGraph::new();
        let head = graph.add_state("s1", false);
        let integer = graph.add_state("s2", true);
        let fraction = graph.add_state("s3", true);
        let error = graph.add_state("s_error", true);

        graph.add_transitions(head, '0'..='9', integer);
        graph.add_transitions(integer, '0'..='9', integer);
        graph.add_transition(integer, '.', fraction);
        graph.add_transitions(fraction, '0'..='9', fraction);

        for (from, to) in [('a', 'z'), ('A', 'Z')].iter().copied() {
            graph.add_transitions(integer, from..=to, error);
            graph.add_transitions(fraction, from..=to, error);
            graph.add_transitions(error, from..=to, error);
        }

        NumberMachine {
            graph,
            integer,
            fraction,
            error,
        }
    }

    pub fn scan(&self, input: &str) -> Scan {
        let end = self.graph.traverse(input);
        let lexeme = &input[..end.consumed];

        let kind = if end.state == self.integer {
            if lexeme.contains('.') {
                TokenKind::DoubleLiteral
            } else {
                TokenKind::IntLiteral
            }
        } else if end.state == self.fraction {
            TokenKind::DoubleLiteral
        } else if end.state == self.error {
            // The malformed run is emitted whole, not character by character.
            TokenKind::Unknown
        } else {
            return Scan::reject(input);
        };

        Scan::accept(kind, lexeme)
    }
}
