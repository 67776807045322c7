//! 算法模块
//!
//! 包含全源最短路径算法实现

pub mod floyd_warshall;
pub mod matrix;

// 重新导出常用算法结构体
pub use floyd_warshall::FloydWarshall;
pub use matrix::{RoutingMatrix, Weight};
