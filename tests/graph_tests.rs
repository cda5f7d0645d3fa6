use ordered_float::OrderedFloat;
use sssp_engine::graph::generators::{generate_barabasi_albert, generate_grid, generate_random};
use sssp_engine::{Cost, DirectedGraph, Error, Graph, MutableGraph};
use std::collections::{BTreeMap, HashMap};

fn sample_graph() -> DirectedGraph<&'static str, f64> {
    DirectedGraph::from_adjacency([
        ("A", vec![("B", 1.0), ("C", 4.0)]),
        ("B", vec![("C", 2.0), ("D", 5.0)]),
        ("C", vec![("D", 1.0)]),
        ("D", vec![]),
    ])
    .unwrap()
}

#[test]
fn test_nodes_and_counts() {
    let graph = sample_graph();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 5);
    let nodes: Vec<_> = graph.nodes().copied().collect();
    assert_eq!(nodes, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_neighbors_keep_insertion_order() {
    let graph = sample_graph();
    assert_eq!(graph.neighbors(&"A").unwrap(), vec![&"B", &"C"]);
    assert_eq!(graph.neighbors(&"B").unwrap(), vec![&"C", &"D"]);
}

#[test]
fn test_node_without_edges_is_distinct_from_unknown_node() {
    let graph = sample_graph();
    assert!(graph.has_node(&"D"));
    assert!(graph.neighbors(&"D").unwrap().is_empty());

    assert!(!graph.has_node(&"Z"));
    assert!(matches!(graph.neighbors(&"Z"), Err(Error::UnknownNode(_))));
    assert!(matches!(graph.outgoing_edges(&"Z"), Err(Error::UnknownNode(_))));
}

#[test]
fn test_edge_destinations_are_registered() {
    let graph = DirectedGraph::from_adjacency([("A", vec![("B", 1.0)]), ("C", vec![("D", 1.0)])]).unwrap();
    assert_eq!(graph.node_count(), 4);
    assert!(graph.has_node(&"B"));
    assert!(graph.neighbors(&"B").unwrap().is_empty());
}

#[test]
fn test_cost_of_missing_edge_is_infinite() {
    let graph = sample_graph();
    assert_eq!(graph.cost(&"A", &"B"), Cost::Finite(1.0));
    assert_eq!(graph.cost(&"A", &"D"), Cost::Infinite);
    assert_eq!(graph.cost(&"Z", &"A"), Cost::Infinite);
    assert!(graph.cost(&"A", &"D") > Cost::Finite(f64::MAX));
    assert!(graph.cost(&"A", &"C") < graph.cost(&"C", &"A"));
}

#[test]
fn test_negative_weight_is_rejected() {
    let result = DirectedGraph::from_adjacency([("A", vec![("B", 1.0)]), ("B", vec![("C", -0.5)])]);
    match result {
        Err(Error::InvalidWeight { from, to, .. }) => {
            assert_eq!(from, "\"B\"");
            assert_eq!(to, "\"C\"");
        }
        other => panic!("expected InvalidWeight, got {:?}", other),
    }
}

#[test]
fn test_non_finite_weights_are_rejected() {
    for weight in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = DirectedGraph::from_adjacency([(1u32, vec![(2u32, weight)])]);
        assert!(matches!(result, Err(Error::InvalidWeight { .. })));
    }
}

#[test]
fn test_zero_weight_is_accepted() {
    let graph = DirectedGraph::from_adjacency([(1u32, vec![(2u32, 0.0)])]).unwrap();
    assert_eq!(graph.edge_weight(&1, &2), Some(0.0));
}

#[test]
fn test_mutation() {
    let mut graph: DirectedGraph<u32, f64> = DirectedGraph::new();
    assert!(graph.add_node(1));
    assert!(!graph.add_node(1));

    graph.add_edge(1, 2, 3.0).unwrap();
    graph.add_edge(1, 2, 2.0).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(&1, &2), Some(2.0));

    assert!(graph.update_edge_weight(&1, &2, 7.0).unwrap());
    assert!(!graph.update_edge_weight(&2, &1, 7.0).unwrap());
    assert!(matches!(
        graph.update_edge_weight(&1, &2, -1.0),
        Err(Error::InvalidWeight { .. })
    ));
    assert_eq!(graph.edge_weight(&1, &2), Some(7.0));

    assert!(matches!(graph.add_edge(2, 3, -1.0), Err(Error::InvalidWeight { .. })));
    assert!(!graph.has_node(&3));

    assert!(graph.remove_edge(&1, &2));
    assert!(!graph.remove_edge(&1, &2));
    assert!(!graph.has_edge(&1, &2));
    assert!(graph.has_node(&2));
}

#[test]
fn test_from_hash_map_literal() {
    let adjacency: HashMap<&str, HashMap<&str, f64>> = HashMap::from([
        ("A", HashMap::from([("B", 1.0)])),
        ("B", HashMap::new()),
    ]);
    let graph = DirectedGraph::from_adjacency(adjacency).unwrap();
    assert_eq!(graph.node_count(), 2);
    assert!(graph.has_edge(&"A", &"B"));
}

#[test]
fn test_ordered_float_weights() {
    let graph = DirectedGraph::from_adjacency([(0usize, vec![(1usize, OrderedFloat(2.5))])]).unwrap();
    assert_eq!(graph.cost(&0, &1), Cost::Finite(OrderedFloat(2.5)));
}

#[test]
fn test_json_round_trip() {
    let graph = DirectedGraph::<String, f64>::from_json_str(r#"{"A": {"B": 1, "C": 4.5}, "B": {}, "C": {"A": 0}}"#).unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_weight(&"A".to_string(), &"C".to_string()), Some(4.5));

    let adjacency = graph.to_adjacency();
    let expected: BTreeMap<String, BTreeMap<String, f64>> = serde_json::from_str(
        r#"{"A": {"B": 1.0, "C": 4.5}, "B": {}, "C": {"A": 0.0}}"#,
    )
    .unwrap();
    assert_eq!(adjacency, expected);
}

#[test]
fn test_json_errors() {
    assert!(matches!(
        DirectedGraph::<String, f64>::from_json_str(r#"{"A": {"B": -2}}"#),
        Err(Error::InvalidWeight { .. })
    ));
    assert!(matches!(
        DirectedGraph::<String, f64>::from_json_str(r#"{"A": ["B"]}"#),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_generators() {
    let grid = generate_grid(4, 3).unwrap();
    assert_eq!(grid.node_count(), 12);
    // 3 rows * 3 horizontal pairs + 2 * 4 vertical pairs, both directions
    assert_eq!(grid.edge_count(), 2 * (9 + 8));

    let random = generate_random(50, 200, 1.0..10.0, 3).unwrap();
    assert_eq!(random.node_count(), 50);
    let again = generate_random(50, 200, 1.0..10.0, 3).unwrap();
    assert_eq!(random.to_adjacency(), again.to_adjacency());

    let scale_free = generate_barabasi_albert(100, 2, 5).unwrap();
    assert_eq!(scale_free.node_count(), 100);
    assert!(scale_free.edge_count() >= 2 * 98);
}

#[test]
fn test_barabasi_albert_rejects_bad_parameters() {
    assert!(matches!(generate_barabasi_albert(10, 0, 1), Err(Error::InvalidParameter(_))));
    assert!(matches!(generate_barabasi_albert(3, 3, 1), Err(Error::InvalidParameter(_))));
    assert!(matches!(generate_barabasi_albert(2, 5, 1), Err(Error::InvalidParameter(_))));
}
