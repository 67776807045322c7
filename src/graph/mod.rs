//! 图模型模块
//!
//! 包含图定义、校验后的不可变图以及内置配送网络

pub mod delivery;
pub mod model;

pub use delivery::delivery_network;
pub use model::{Edge, EdgeWeight, Graph, GraphDefinition, Node};
