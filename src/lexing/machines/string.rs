use super::Scan;
use crate::lexing::graph::{LexicalGraph, StateId};
use crate::lexing::token::TokenKind;

/// Recognizes double-quoted string literals over printable ASCII. The
/// emitted lexeme keeps the delimiting quotes.
pub struct StringMachine {
    graph: LexicalGraph,
    closed: StateId,
}

impl StringMachine {
    pub fn new() -> Self {
        let mut graph = LexicalGraph::new();
        let head = graph.add_state("s1", false);
        let body = graph.add_state("s2", false);
        let closed = graph.add_state("s3", true);

        graph.add_transition(head, '"', body);
        for code in 0x20u8..0x7f {
            let character = code as char;
            if character != '"' {
                graph.add_transition(body, character, body);
            }
        }
        graph.add_transition(body, '"', closed);

        StringMachine { graph, closed }
    }

    /// An unterminated string does not consume to end of input: it collapses
    /// to a one-character UNKNOWN (the opening quote), and the caller resumes
    /// scanning just past it.
    pub fn scan(&self, input: &str) -> Scan {
        let end = self.graph.traverse(input);
        if end.state != self.closed {
            return Scan::reject(input);
        }

        Scan::accept(TokenKind::Literal, &input[..end.consumed])
    }
}
