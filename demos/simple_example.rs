use sssp_engine::{Cost, DirectedGraph, Graph, ShortestPathEngine};

fn main() -> sssp_engine::Result<()> {
    // Create a simple directed graph
    let graph = DirectedGraph::from_adjacency([
        ("A", vec![("B", 1.0), ("C", 4.0)]),
        ("B", vec![("C", 2.0), ("D", 5.0)]),
        ("C", vec![("D", 1.0)]),
        ("D", vec![]),
        ("E", vec![("A", 3.0)]),
    ])?;

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

    let mut engine = ShortestPathEngine::new(&graph);
    engine.compute_from(&"A")?;

    for node in graph.nodes() {
        match engine.distance_to(node)? {
            Cost::Finite(dist) => {
                let path = engine.path_to(node)?;
                println!("Node {}: distance = {:.1}, path = {:?}", node, dist, path);
            }
            Cost::Infinite => println!("Node {}: unreachable", node),
        }
    }

    Ok(())
}
