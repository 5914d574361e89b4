//! In-memory graph operations — the core data structure.

pub mod adjacency;
pub mod traversal;

pub use adjacency::Graph;
pub use traversal::shortest_path;
