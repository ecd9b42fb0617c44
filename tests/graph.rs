use vela::lexing::LexicalGraph;

fn sample_graph() -> LexicalGraph {
    // x moves to an accepting state that loops on y.
    let mut graph = LexicalGraph::new();
    let head = graph.add_state("head", false);
    let body = graph.add_state("body", true);
    graph.add_transition(head, 'x', body);
    graph.add_transition(body, 'y', body);
    graph
}

#[test]
fn traversal_is_maximal() {
    let graph = sample_graph();
    let end = graph.traverse("xyyz");
    assert_eq!(end.consumed, 3);
    assert!(graph.is_terminal(end.state));
}

#[test]
fn failing_character_is_not_consumed() {
    let graph = sample_graph();
    let end = graph.traverse("xz");
    assert_eq!(end.consumed, 1);
    assert_eq!(graph.state_name(end.state), "body");
}

#[test]
fn empty_input_stays_at_start() {
    let graph = sample_graph();
    let end = graph.traverse("");
    assert_eq!(end.consumed, 0);
    assert_eq!(graph.state_name(end.state), "head");
    assert!(!graph.is_terminal(end.state));
}

#[test]
fn no_transition_from_start() {
    let graph = sample_graph();
    let end = graph.traverse("q");
    assert_eq!(end.consumed, 0);
    assert_eq!(graph.state_name(end.state), "head");
}
