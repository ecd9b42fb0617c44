use super::Scan;
use crate::lexing::graph::LexicalGraph;
use crate::lexing::token::TokenKind;

/// Recognizes the single-character operators `+ - * / =`. The accepting
/// state has no outgoing edges, so an operator lexeme is always one
/// character long.
pub struct OperatorMachine {
    graph: LexicalGraph,
}

impl OperatorMachine {
    pub fn new() -> Self {
        let mut graph = LexicalGraph::new();
        let head = graph.add_state("s1", false);
        let accept = graph.add_state("s2", true);

        for character in ['+', '-', '*', '/', '='].iter().copied() {
            graph.add_transition(head, character, accept);
        }

        OperatorMachine { graph }
    }

    pub fn scan(&self, input: &str) -> Scan {
        let end = self.graph.traverse(input);
        if !self.graph.is_terminal(end.state) {
            return Scan::reject(input);
        }

        Scan::accept(TokenKind::Operator, &input[..end.consumed])
    }
}
