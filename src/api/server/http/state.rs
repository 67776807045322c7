use crate::services::RouteEngine;
use std::sync::Arc;

/// 处理器共享状态，引擎在服务启动前构建完成，之后只读
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RouteEngine>,
}

impl AppState {
    pub fn new(engine: Arc<RouteEngine>) -> Self {
        Self { engine }
    }
}
