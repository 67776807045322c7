//! 集成测试共享工具模块
//!
//! 提供测试图、引擎和 HTTP 路由的构建函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use route_planner::graph::{delivery_network, Edge, GraphDefinition, Node};
use route_planner::services::{RouteEngine, Weight};

/// Warehouse -> A (5), A -> B (7)
pub fn warehouse_definition() -> GraphDefinition {
    GraphDefinition::new(
        vec![
            Node::new("Warehouse", 150, 100),
            Node::new("A", 350, 80),
            Node::new("B", 550, 100),
        ],
        vec![Edge::new("Warehouse", "A", 5), Edge::new("A", "B", 7)],
    )
}

pub fn warehouse_engine() -> RouteEngine {
    RouteEngine::from_definition(warehouse_definition()).expect("引擎构建失败")
}

pub fn delivery_engine() -> RouteEngine {
    RouteEngine::from_definition(delivery_network()).expect("内置图应当有效")
}

/// 路径上相邻节点之间的最小边权之和，存在不相连的相邻节点时返回 None
pub fn path_weight(definition: &GraphDefinition, path: &[String]) -> Option<Weight> {
    let mut edges: HashMap<(&str, &str), Weight> = HashMap::new();
    for edge in &definition.edges {
        let weight = Weight::from(edge.weight);
        edges
            .entry((edge.from.as_str(), edge.to.as_str()))
            .and_modify(|w| *w = (*w).min(weight))
            .or_insert(weight);
    }

    path.windows(2)
        .map(|pair| edges.get(&(pair[0].as_str(), pair[1].as_str())).copied())
        .sum()
}

/// 节点标识列表
pub fn node_ids(definition: &GraphDefinition) -> Vec<String> {
    definition.nodes.iter().map(|n| n.id.clone()).collect()
}

#[cfg(feature = "server")]
pub mod http {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use route_planner::api::server::http::{create_router, AppState};
    use route_planner::config::Config;
    use tower::ServiceExt;

    pub fn router_for(engine: RouteEngine, config: &Config) -> Router {
        create_router(AppState::new(Arc::new(engine)), config)
    }

    pub fn delivery_router() -> Router {
        router_for(delivery_engine(), &Config::default())
    }

    /// 发送请求并把响应体解析为 JSON
    pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router.oneshot(request).await.expect("请求处理失败");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("读取响应体失败");
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("响应体不是合法 JSON")
        };
        (status, value)
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("构建请求失败")
    }

    pub fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("构建请求失败")
    }
}
