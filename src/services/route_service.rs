//! 路径/距离查询服务
//!
//! `RouteEngine` 在构造时一次性完成全源最短路径计算，之后只读，
//! 可以通过 `Arc` 在多个请求处理任务之间共享而无需加锁

use crate::config::Config;
use crate::core::{GraphResult, PlannerResult, RouteError, RouteResult};
use crate::graph::{Graph, GraphDefinition};
use crate::services::algorithm::{FloydWarshall, RoutingMatrix, Weight};
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;

/// 一条最短路径及其总代价
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: Vec<String>,
    pub distance: Weight,
}

impl Route {
    /// 经停次数，即路径边数
    pub fn stops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// 全源导出中的单个节点对，不可达时两个字段均为 `None`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairRoute {
    pub path: Option<Vec<String>>,
    pub distance: Option<Weight>,
}

/// 按起点、终点分组的全源导出
pub type AllPairs = BTreeMap<String, BTreeMap<String, PairRoute>>;

/// 全源最短路径引擎
#[derive(Debug, Clone)]
pub struct RouteEngine {
    graph: Graph,
    matrix: RoutingMatrix,
}

impl RouteEngine {
    /// 用已校验的图构建引擎，同步执行 O(N^3) 预计算
    pub fn new(graph: Graph) -> Self {
        let started = Instant::now();
        let matrix = FloydWarshall::shortest_paths(&graph);
        info!(
            "Floyd-Warshall 预计算完成: {} 个节点, {} 条边, 耗时 {:?}",
            graph.node_count(),
            graph.edge_count(),
            started.elapsed()
        );

        Self { graph, matrix }
    }

    /// 校验图定义后构建引擎，端点无效时立即失败
    pub fn from_definition(definition: GraphDefinition) -> GraphResult<Self> {
        Ok(Self::new(Graph::new(definition)?))
    }

    /// 按配置加载图定义并构建引擎
    pub fn from_config(config: &Config) -> PlannerResult<Self> {
        let definition = config.load_graph()?;
        Ok(Self::from_definition(definition)?)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn matrix(&self) -> &RoutingMatrix {
        &self.matrix
    }

    /// 最短距离，`Ok(None)` 表示不可达
    pub fn distance(&self, start: &str, end: &str) -> RouteResult<Option<Weight>> {
        let (u, v) = self.resolve(start, end)?;
        Ok(self.matrix.distance(u, v))
    }

    /// 最短路径（包含两端节点），`Ok(None)` 表示不存在路径
    pub fn path(&self, start: &str, end: &str) -> RouteResult<Option<Vec<String>>> {
        let (u, v) = self.resolve(start, end)?;
        self.walk(u, v)
    }

    /// 同时返回路径和距离
    pub fn route(&self, start: &str, end: &str) -> RouteResult<Option<Route>> {
        let (u, v) = self.resolve(start, end)?;
        let Some(distance) = self.matrix.distance(u, v) else {
            return Ok(None);
        };

        match self.walk(u, v)? {
            Some(path) => Ok(Some(Route { path, distance })),
            None => Err(self.inconsistent(u, v)),
        }
    }

    /// 所有不同有序节点对的路径和距离，共 N^2 - N 项
    pub fn all_pairs(&self) -> RouteResult<AllPairs> {
        let n = self.graph.node_count();

        let rows = (0..n)
            .into_par_iter()
            .map(|u| -> RouteResult<(String, BTreeMap<String, PairRoute>)> {
                let mut row = BTreeMap::new();
                for v in (0..n).filter(|&v| v != u) {
                    let pair = PairRoute {
                        path: self.walk(u, v)?,
                        distance: self.matrix.distance(u, v),
                    };
                    row.insert(self.graph.node(v).id.clone(), pair);
                }
                Ok((self.graph.node(u).id.clone(), row))
            })
            .collect::<RouteResult<Vec<_>>>()?;

        Ok(rows.into_iter().collect())
    }

    /// 偏心距：到其他可达节点的最大距离
    pub fn eccentricity(&self, node: &str) -> RouteResult<Option<Weight>> {
        let u = self.graph.index_of(node)?;
        Ok(self.eccentricity_of(u))
    }

    /// 图的直径（最长的有限最短路径）
    pub fn diameter(&self) -> Option<Weight> {
        (0..self.graph.node_count())
            .filter_map(|u| self.eccentricity_of(u))
            .max()
    }

    /// 图的半径（最小偏心距）
    pub fn radius(&self) -> Option<Weight> {
        (0..self.graph.node_count())
            .filter_map(|u| self.eccentricity_of(u))
            .min()
    }

    /// 图的中心（偏心距最小的节点，相同时取节点顺序靠前者）
    pub fn center(&self) -> Option<&str> {
        let mut best: Option<(usize, Weight)> = None;
        for u in 0..self.graph.node_count() {
            if let Some(e) = self.eccentricity_of(u) {
                if best.map_or(true, |(_, min)| e < min) {
                    best = Some((u, e));
                }
            }
        }
        best.map(|(u, _)| self.graph.node(u).id.as_str())
    }

    /// 可达的不同有序节点对数量
    pub fn reachable_pairs(&self) -> usize {
        let n = self.graph.node_count();
        (0..n)
            .flat_map(|u| (0..n).map(move |v| (u, v)))
            .filter(|&(u, v)| u != v && self.matrix.distance(u, v).is_some())
            .count()
    }

    fn resolve(&self, start: &str, end: &str) -> RouteResult<(usize, usize)> {
        Ok((self.graph.index_of(start)?, self.graph.index_of(end)?))
    }

    fn eccentricity_of(&self, u: usize) -> Option<Weight> {
        (0..self.graph.node_count())
            .filter(|&v| v != u)
            .filter_map(|v| self.matrix.distance(u, v))
            .max()
    }

    /// 沿下一跳矩阵重建路径
    ///
    /// 合法矩阵中路径最多 N 个节点，超出或中途断开视为矩阵不一致
    fn walk(&self, u: usize, v: usize) -> RouteResult<Option<Vec<String>>> {
        if u == v {
            return Ok(Some(vec![self.graph.node(u).id.clone()]));
        }
        if self.matrix.next_hop(u, v).is_none() {
            return Ok(None);
        }

        let limit = self.graph.node_count();
        let mut indices = vec![u];
        let mut current = u;

        while current != v {
            current = self
                .matrix
                .next_hop(current, v)
                .ok_or_else(|| self.inconsistent(u, v))?;
            indices.push(current);
            if indices.len() > limit {
                return Err(self.inconsistent(u, v));
            }
        }

        Ok(Some(
            indices
                .into_iter()
                .map(|i| self.graph.node(i).id.clone())
                .collect(),
        ))
    }

    fn inconsistent(&self, u: usize, v: usize) -> RouteError {
        RouteError::InconsistentRoutes {
            from: self.graph.node(u).id.clone(),
            to: self.graph.node(v).id.clone(),
        }
    }
}
