use super::Scan;
use crate::lexing::graph::LexicalGraph;
use crate::lexing::token::TokenKind;

/// Recognizes runs of the punctuation characters `: ; , . ( ) { }`. The
/// single state is terminal and self-loops, so adjacent punctuation merges
/// into one token.
pub struct PunctuationMachine {
    graph: LexicalGraph,
}

impl PunctuationMachine {
    pub fn new() -> Self {
        let mut graph = LexicalGraph::new();
        let hub = graph.add_state("s1", true);

        for character in [':', ';', ',', '.', '(', ')', '{', '}'].iter().copied() {
            graph.add_transition(hub, character, hub);
        }

        PunctuationMachine { graph }
    }

    pub fn scan(&self, input: &str) -> Scan {
        let end = self.graph.traverse(input);
        // The start state is terminal; an empty match never counts as an accept.
        if end.consumed == 0 || !self.graph.is_terminal(end.state) {
            return Scan::reject(input);
        }

        Scan::accept(TokenKind::Punctuation, &input[..end.consumed])
    }
}
