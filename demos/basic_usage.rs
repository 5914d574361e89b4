//! Basic build -> query flow on a small undirected graph.

use pathgraph::{Graph, GraphResult};

fn main() -> GraphResult<()> {
    env_logger::init();

    // A tiny metro map
    let mut graph = Graph::new(false);
    for station in ["north", "center", "east", "west", "south", "airport"] {
        graph.add_vertex(station);
    }
    graph.add_edge("north", "center")?;
    graph.add_edge("center", "east")?;
    graph.add_edge("center", "west")?;
    graph.add_edge("west", "south")?;
    graph.add_edge("south", "airport")?;
    graph.add_edge("east", "airport")?;

    println!(
        "Graph created with {} stations and {} connections",
        graph.vertex_count(),
        graph.edge_count() / 2
    );

    match graph.shortest_path(&"north", &"airport")? {
        Some(path) => println!("north -> airport: {}", path.join(" -> ")),
        None => println!("airport is unreachable from north"),
    }

    Ok(())
}
