//! 内置配送网络
//!
//! 未配置图文件时使用的默认图：仓库 Warehouse 与 A..J 十个配送点

use super::model::{Edge, GraphDefinition, Node};

const NODES: [(&str, i32, i32); 11] = [
    ("Warehouse", 150, 100),
    ("A", 350, 80),
    ("B", 550, 100),
    ("C", 150, 250),
    ("D", 350, 220),
    ("E", 550, 250),
    ("F", 750, 200),
    ("G", 250, 400),
    ("H", 450, 380),
    ("I", 650, 400),
    ("J", 450, 520),
];

const EDGES: [(&str, &str, u32); 25] = [
    ("Warehouse", "A", 5),
    ("Warehouse", "C", 8),
    ("A", "B", 7),
    ("A", "D", 6),
    ("B", "E", 4),
    ("B", "F", 9),
    ("C", "D", 3),
    ("C", "G", 10),
    ("D", "E", 5),
    ("D", "H", 7),
    ("E", "F", 6),
    ("E", "I", 8),
    ("F", "I", 5),
    ("G", "H", 4),
    ("G", "J", 12),
    ("H", "I", 6),
    ("H", "J", 5),
    ("I", "J", 7),
    // 反向通行
    ("D", "A", 6),
    ("E", "D", 5),
    ("I", "E", 8),
    ("J", "H", 5),
    ("A", "Warehouse", 5),
    ("B", "A", 7),
    ("C", "Warehouse", 8),
];

/// 默认配送网络定义
pub fn delivery_network() -> GraphDefinition {
    GraphDefinition::new(
        NODES
            .iter()
            .map(|&(id, x, y)| Node::new(id, x, y))
            .collect(),
        EDGES
            .iter()
            .map(|&(from, to, weight)| Edge::new(from, to, weight))
            .collect(),
    )
}
