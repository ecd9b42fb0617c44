use super::Scan;
use crate::lexing::graph::LexicalGraph;
use crate::lexing::token::TokenKind;
use std::collections::HashSet;
use std::sync::LazyLock;

/// The closed set of reserved words. Membership is case-sensitive.
static KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "PROG", "FUNC", "BEGIN", "VAR", "INTEGER", "DOUBLE", "STRING", "RETURN", "END", "INPUT",
        "OUTPUT", "FOR", "TO", "NOT", "WHILE", "BOOL", "TRUE", "FALSE", "IS", "IN", "IF", "ELIF",
        "ELSE", "THEN", "CASE", "VALIDATE", "MATCH", "CHECK", "ENUM", "AND",
    ]
    .iter()
    .copied()
    .collect()
});

/// Recognizes identifiers: a letter followed by any run of letters, digits
/// and underscores. A lexeme in the reserved-word set classifies as a
/// keyword instead.
pub struct IdentifierMachine {
    graph: LexicalGraph,
}

impl IdentifierMachine {
    pub fn new() -> Self {
        let mut graph = LexicalGraph::new();
        let head = graph.add_state("s1", false);
        let body = graph.add_state("s2", true);

        graph.add_transitions(head, 'a'..='z', body);
        graph.add_transitions(head, 'A'..='Z', body);
        graph.add_transitions(body, 'a'..='z', body);
        graph.add_transitions(body, 'A'..='Z', body);
        graph.add_transitions(body, '0'..='9', body);
        graph.add_transition(body, '_', body);

        IdentifierMachine { graph }
    }

    pub fn scan(&self, input: &str) -> Scan {
        let end = self.graph.traverse(input);
        if !self.graph.is_terminal(end.state) {
            return Scan::reject(input);
        }

        let lexeme = &input[..end.consumed];
        let kind = if KEYWORDS.contains(lexeme) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Scan::accept(kind, lexeme)
    }
}
