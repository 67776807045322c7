//! 距离矩阵与下一跳矩阵
//!
//! 两个 N×N 矩阵按行主序存放在连续的 Vec 中

use crate::graph::Graph;
use log::debug;

/// 路径总代价
pub type Weight = u64;

/// 全源最短路径的路由矩阵
///
/// - `dist[i][j]`：i 到 j 的最小代价，`None` 表示不可达
/// - `next[i][j]`：从 i 前往 j 的第一跳下标，`None` 表示没有下一跳
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingMatrix {
    size: usize,
    dist: Vec<Option<Weight>>,
    next: Vec<Option<usize>>,
}

impl RoutingMatrix {
    /// 空矩阵：除对角线为 0 外全部不可达
    pub fn new(size: usize) -> Self {
        let mut dist = vec![None; size * size];
        for i in 0..size {
            dist[i * size + i] = Some(0);
        }

        Self {
            size,
            dist,
            next: vec![None; size * size],
        }
    }

    /// 用图中的直接边初始化矩阵
    ///
    /// 同一有序节点对的重复边保留最小权重；自环不会使对角线大于 0
    pub fn seed(graph: &Graph) -> Self {
        let mut matrix = Self::new(graph.node_count());

        for (u, v, weight) in graph.indexed_edges() {
            if u == v {
                debug!("忽略自环: {}", graph.node(u).id);
                continue;
            }

            let weight = Weight::from(weight);
            let idx = matrix.offset(u, v);
            match matrix.dist[idx] {
                Some(existing) if existing <= weight => {
                    debug!(
                        "重复边 {} -> {}: 保留权重 {}",
                        graph.node(u).id,
                        graph.node(v).id,
                        existing
                    );
                }
                _ => {
                    matrix.dist[idx] = Some(weight);
                    matrix.next[idx] = Some(v);
                }
            }
        }

        matrix
    }

    /// 矩阵维度 N
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn distance(&self, from: usize, to: usize) -> Option<Weight> {
        self.dist[self.offset(from, to)]
    }

    pub fn next_hop(&self, from: usize, to: usize) -> Option<usize> {
        self.next[self.offset(from, to)]
    }

    pub(crate) fn set(&mut self, from: usize, to: usize, distance: Weight, hop: Option<usize>) {
        let idx = self.offset(from, to);
        self.dist[idx] = Some(distance);
        self.next[idx] = hop;
    }

    #[inline]
    fn offset(&self, from: usize, to: usize) -> usize {
        from * self.size + to
    }
}
