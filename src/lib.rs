//! pathgraph — generic adjacency-map graph with BFS shortest paths.
//!
//! A [`Graph<V>`](Graph) is constructed as either directed or undirected
//! and grows by adding vertices and edges; it never shrinks. The one
//! query beyond plain adjacency lookups is an unweighted shortest-path
//! search ([`Graph::shortest_path`]) using breadth-first search.
//!
//! ```
//! use pathgraph::Graph;
//!
//! let mut graph: Graph<u32> = Graph::new(true);
//! graph.add_vertex(1);
//! graph.add_vertex(2);
//! graph.add_vertex(3);
//! graph.add_edge(1, 2)?;
//! graph.add_edge(2, 3)?;
//!
//! assert_eq!(graph.shortest_path(&1, &3)?, Some(vec![1, 2, 3]));
//! # Ok::<(), pathgraph::GraphError>(())
//! ```

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{shortest_path, Graph};
pub use types::{GraphError, GraphResult};
