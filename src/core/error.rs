//! 统一错误处理 for route-planner
//!
//! - 图模型错误 `GraphError`：启动阶段构建图时产生，属于致命错误
//! - 路由查询错误 `RouteError`：查询阶段产生，未知节点是调用方错误，
//!   路由矩阵不一致是内部错误
//! - `PlannerError` 通过 `#[from]` 汇总以上错误，`PlannerResult<T>` 为统一返回类型
//!
//! 不可达的节点对不是错误，查询接口以 `Ok(None)` 表示。

use thiserror::Error;

/// 统一的错误类型
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("图模型错误: {0}")]
    Graph(#[from] GraphError),

    #[error("路由查询错误: {0}")]
    Route(#[from] RouteError),
}

/// 统一的结果类型
pub type PlannerResult<T> = Result<T, PlannerError>;

/// 图模型结果类型
pub type GraphResult<T> = Result<T, GraphError>;

/// 路由查询结果类型
pub type RouteResult<T> = Result<T, RouteError>;

/// 图模型错误类型
///
/// 涵盖图定义的加载和校验
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("节点重复定义: {0}")]
    DuplicateNode(String),

    #[error("边 {from} -> {to} 引用了未定义的节点: {missing}")]
    UnknownEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    #[error("图定义加载失败: {0}")]
    Load(String),
}

/// 路由查询错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("节点未找到: {0}")]
    NodeNotFound(String),

    /// 沿下一跳矩阵重建路径时超过节点总数或中途断开
    #[error("路由矩阵不一致: {from} -> {to}")]
    InconsistentRoutes { from: String, to: String },
}

impl RouteError {
    /// 是否为调用方输入导致的错误
    pub fn is_caller_error(&self) -> bool {
        matches!(self, RouteError::NodeNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_error_classification() {
        assert!(RouteError::NodeNotFound("Z".to_string()).is_caller_error());
        assert!(!RouteError::InconsistentRoutes {
            from: "A".to_string(),
            to: "B".to_string(),
        }
        .is_caller_error());
    }

    #[test]
    fn test_planner_error_from_graph_error() {
        let err: PlannerError = GraphError::DuplicateNode("A".to_string()).into();
        assert!(matches!(err, PlannerError::Graph(GraphError::DuplicateNode(_))));
        assert!(err.to_string().contains("A"));
    }

    #[test]
    fn test_unknown_endpoint_message() {
        let err = GraphError::UnknownEndpoint {
            from: "A".to_string(),
            to: "Q".to_string(),
            missing: "Q".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("A -> Q"));
        assert!(message.ends_with("Q"));
    }
}
