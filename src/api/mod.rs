use anyhow::{Context, Result};
use log::{error, info, warn};
use std::sync::Arc;
use tokio::signal;

pub mod server;

use crate::api::server::http::ShortestPathResponse;
use crate::api::server::HttpServer;
use crate::config::Config;
use crate::services::RouteEngine;
use crate::utils::logging;

/// 读取配置，文件缺失或无效时回退到默认配置
pub fn load_config(config_path: &str) -> Config {
    match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Failed to load config from '{}': {}, using default config",
                config_path, e
            );
            Config::default()
        }
    }
}

/// 加载图定义并完成全源最短路径预计算
pub fn build_engine(config: &Config) -> Result<RouteEngine> {
    match &config.graph.path {
        Some(path) => info!("加载图文件: {}", path),
        None => info!("使用内置配送网络"),
    }

    info!("正在初始化 Floyd-Warshall 算法...");
    let engine = RouteEngine::from_config(config)?;
    info!(
        "算法初始化成功: {} 个节点, {} 条边",
        engine.graph().node_count(),
        engine.graph().edge_count()
    );
    Ok(engine)
}

pub async fn start_service(config_path: String) -> Result<()> {
    let config = load_config(&config_path);

    logging::init(&config.log)
        .map_err(|e| anyhow::anyhow!("日志初始化失败: {}", e))?;
    info!("配置已加载: {:?}", config);

    // 引擎在监听之前构建完成
    let engine = match build_engine(&config) {
        Ok(engine) => Arc::new(engine),
        Err(e) => {
            error!("路由引擎初始化失败: {:#}", e);
            logging::shutdown();
            return Err(e);
        }
    };

    let server = HttpServer::new(config, engine);
    let result = server.serve(shutdown_signal()).await;

    info!("Shutting down route planner service...");
    logging::shutdown();
    result
}

/// 离线计算单条最短路径并以 JSON 输出
pub fn execute_route(config_path: &str, start: &str, end: &str) -> Result<()> {
    let config = load_config(config_path);
    let engine = build_engine(&config)?;

    let route = engine
        .route(start, end)
        .with_context(|| format!("无法计算 {} -> {}", start, end))?;
    let response = match route {
        Some(route) => ShortestPathResponse::found(route),
        None => ShortestPathResponse::no_path(start, end),
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// 离线导出全部节点对的最短路径
pub fn execute_all_paths(config_path: &str) -> Result<()> {
    let config = load_config(config_path);
    let engine = build_engine(&config)?;

    println!("{}", serde_json::to_string_pretty(&engine.all_pairs()?)?);
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Received shutdown signal");
}
