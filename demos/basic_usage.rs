//! Basic build -> query -> traverse -> reconfigure flow.

use adjgraph::*;

fn main() -> GraphResult<()> {
    // Build a small directed graph
    let mut graph: Graph = GraphBuilder::new()
        .vertices(["A", "B", "C", "D"])
        .edge("A", "B")
        .edge("A", "C")
        .edge("B", "D")
        .edge("C", "D")
        .build()?;

    println!(
        "Graph created with {} vertices and {} edges",
        graph.get_v(),
        graph.get_e()
    );
    println!("Inbound to D: {:?}", graph.inbound_neighbours("D")?);

    println!("BFS from A:");
    for (vertex, depth) in graph.bfs("A")? {
        println!("  [depth {}] {}", depth, vertex);
    }

    println!("DFS from A:");
    for (vertex, depth) in graph.dfs("A")? {
        println!("  [depth {}] {}", depth, vertex);
    }

    // Switch to an undirected, weighted graph and adjust one edge
    graph.change_if_directed(false);
    graph.change_if_weighted(true);
    graph.set_weight("D", "B", 2.5)?;

    print!("\n{}", graph);
    Ok(())
}
