//! HTTP 服务器
//!
//! 持有配置和已完成预计算的路由引擎，绑定监听地址并提供服务

use crate::api::server::http::{router::create_router, state::AppState};
use crate::config::Config;
use crate::services::RouteEngine;
use axum::Router;
use log::info;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// HTTP 服务器
///
/// 引擎必须在构造之前完成初始化，保证监听开始时所有查询都可以直接应答
pub struct HttpServer {
    config: Config,
    engine: Arc<RouteEngine>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: Config, engine: Arc<RouteEngine>) -> Self {
        Self { config, engine }
    }

    /// 获取路由引擎
    pub fn engine(&self) -> &RouteEngine {
        &self.engine
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 构建 axum 路由
    pub fn router(&self) -> Router {
        create_router(AppState::new(self.engine.clone()), &self.config)
    }

    /// 绑定地址并服务，直到 `shutdown` 完成
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = self.config.server.bind_address();
        let listener = TcpListener::bind(&address).await?;
        info!("HTTP 服务已启动: http://{}", address);
        if self.config.cors.is_permissive() {
            info!("CORS: 允许任意来源");
        } else {
            info!("CORS: 允许来源 {:?}", self.config.cors.allowed_origins);
        }

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP 服务已停止");
        Ok(())
    }
}
