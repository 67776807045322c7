//! Floyd-Warshall算法模块
//!
//! 全源最短路径，适用于稠密图，时间复杂度O(V^3)，空间复杂度O(V^2)

use super::matrix::RoutingMatrix;
use crate::graph::Graph;

/// Floyd-Warshall算法结构体
pub struct FloydWarshall;

impl FloydWarshall {
    /// 执行Floyd-Warshall算法
    ///
    /// # 参数
    /// - `graph`: 已校验的带权有向图
    ///
    /// # 返回
    /// 松弛完成的路由矩阵，包含距离和下一跳信息
    pub fn shortest_paths(graph: &Graph) -> RoutingMatrix {
        let mut matrix = RoutingMatrix::seed(graph);
        Self::relax(&mut matrix);
        matrix
    }

    /// 对已初始化的矩阵做三重循环松弛
    ///
    /// 迭代顺序固定为 k、i、j 升序；只有严格更短时才替换，
    /// 等价路径保留先发现的一条
    pub fn relax(matrix: &mut RoutingMatrix) {
        let n = matrix.size();

        for k in 0..n {
            for i in 0..n {
                let Some(d_ik) = matrix.distance(i, k) else {
                    continue;
                };
                let hop_ik = matrix.next_hop(i, k);

                for j in 0..n {
                    let Some(d_kj) = matrix.distance(k, j) else {
                        continue;
                    };
                    let Some(through) = d_ik.checked_add(d_kj) else {
                        continue;
                    };

                    let shorter = match matrix.distance(i, j) {
                        Some(current) => through < current,
                        None => true,
                    };
                    if shorter {
                        matrix.set(i, j, through, hop_ik);
                    }
                }
            }
        }
    }
}
