pub mod health;
pub mod graph;
pub mod route;

pub use health::{check, index};
pub use graph::{get_graph, stats};
pub use route::{all_paths, shortest_path};
