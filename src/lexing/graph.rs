use log::trace;
use std::collections::HashMap;

/// Identifies a state within its owning graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateId(usize);

/// A single FSM state: a transition table from one character to a successor
/// state, and a terminal flag. Named for trace output only.
pub struct LexicalNode {
    name: &'static str,
    transitions: HashMap<char, StateId>,
    terminal: bool,
}

/// A deterministic finite-state machine. The transition tables are built
/// once, when the owning machine is constructed, and never change afterwards.
/// The first state added is the start state.
pub struct LexicalGraph {
    nodes: Vec<LexicalNode>,
}

/// Where a traversal stopped: the last state reached and the byte length of
/// the matched prefix.
pub struct TraversalEnd {
    pub state: StateId,
    pub consumed: usize,
}

impl LexicalGraph {
    pub fn new() -> Self {
        LexicalGraph { nodes: Vec::new() }
    }

    pub fn add_state(&mut self, name: &'static str, terminal: bool) -> StateId {
        self.nodes.push(LexicalNode {
            name,
            transitions: HashMap::new(),
            terminal,
        });
        StateId(self.nodes.len() - 1)
    }

    pub fn add_transition(&mut self, from: StateId, on: char, to: StateId) {
        self.nodes[from.0].transitions.insert(on, to);
    }

    pub fn add_transitions<I>(&mut self, from: StateId, on: I, to: StateId)
    where
        I: IntoIterator<Item = char>,
    {
        for character in on {
            self.add_transition(from, character, to);
        }
    }

    pub fn is_terminal(&self, state: StateId) -> bool {
        self.nodes[state.0].terminal
    }

    pub fn state_name(&self, state: StateId) -> &'static str {
        self.nodes[state.0].name
    }

    /// Maximal munch: starting at the start state, follow transitions while
    /// one exists for the next character. Stops on end of input or on the
    /// first character with no transition; that character is not consumed
    /// and remains for the caller.
    pub fn traverse(&self, input: &str) -> TraversalEnd {
        let mut state = StateId(0);
        let mut consumed = 0;

        for character in input.chars() {
            let node = &self.nodes[state.0];
            match node.transitions.get(&character) {
                Some(&next) => {
                    trace!(
                        target: "lexer",
                        "{} -> {} on {:?}",
                        node.name,
                        self.nodes[next.0].name,
                        character
                    );
                    state = next;
                    consumed += character.len_utf8();
                }
                None => {
                    trace!(target: "lexer", "no transition from {} on {:?}", node.name, character);
                    return TraversalEnd { state, consumed };
                }
            }
        }

        trace!(target: "lexer", "end of input in {}", self.nodes[state.0].name);
        TraversalEnd { state, consumed }
    }
}
