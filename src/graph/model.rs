//! 图模型
//!
//! 固定的节点和有向带权边集合，按节点列表顺序为每个节点分配稠密下标

use crate::core::{GraphError, GraphResult, RouteError, RouteResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// 边权重，非负整数
pub type EdgeWeight = u32;

/// 图中的一个地点
///
/// 坐标仅用于展示，算法不使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

impl Node {
    pub fn new(id: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }
}

/// 有向带权边，A -> B 不蕴含 B -> A
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: EdgeWeight,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: EdgeWeight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// 图定义，即对外暴露的原始节点和边列表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDefinition {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphDefinition {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn from_json_str(content: &str) -> GraphResult<Self> {
        serde_json::from_str(content).map_err(|e| GraphError::Load(e.to_string()))
    }

    pub fn from_toml_str(content: &str) -> GraphResult<Self> {
        toml::from_str(content).map_err(|e| GraphError::Load(e.to_string()))
    }

    /// 从文件加载图定义，`.toml` 按 TOML 解析，其余按 JSON 解析
    pub fn load<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::Load(format!("{}: {}", path.display(), e)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }
}

/// 经过校验的不可变图
///
/// 构建时检查节点唯一性和每条边的端点
#[derive(Debug, Clone)]
pub struct Graph {
    definition: GraphDefinition,
    index: HashMap<String, usize>,
}

impl Graph {
    pub fn new(definition: GraphDefinition) -> GraphResult<Self> {
        let mut index = HashMap::with_capacity(definition.nodes.len());
        for (i, node) in definition.nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
        }

        for edge in &definition.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !index.contains_key(endpoint) {
                    return Err(GraphError::UnknownEndpoint {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        Ok(Self { definition, index })
    }

    /// 节点总数 N
    pub fn node_count(&self) -> usize {
        self.definition.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.definition.edges.len()
    }

    /// 节点标识到稠密下标的映射
    pub fn index_of(&self, id: &str) -> RouteResult<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| RouteError::NodeNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// 按下标取节点，下标必须小于 `node_count()`
    pub fn node(&self, index: usize) -> &Node {
        &self.definition.nodes[index]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.definition.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.definition.edges
    }

    /// 按定义顺序返回 (起点下标, 终点下标, 权重)
    pub fn indexed_edges(&self) -> impl Iterator<Item = (usize, usize, EdgeWeight)> + '_ {
        self.definition
            .edges
            .iter()
            .map(|edge| (self.index[&edge.from], self.index[&edge.to], edge.weight))
    }

    pub fn definition(&self) -> &GraphDefinition {
        &self.definition
    }
}

impl TryFrom<GraphDefinition> for Graph {
    type Error = GraphError;

    fn try_from(definition: GraphDefinition) -> GraphResult<Self> {
        Graph::new(definition)
    }
}
