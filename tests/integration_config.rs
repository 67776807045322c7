//! 配置模块集成测试
//!
//! 测试范围:
//! - config - TOML 加载、默认值、图文件路径解析
//! - services::route_service - 按配置构建引擎

mod common;

use std::fs;

use route_planner::config::Config;
use route_planner::core::{GraphError, PlannerError};
use route_planner::services::RouteEngine;
use tempfile::TempDir;

use common::warehouse_definition;

#[test]
fn test_config_roundtrip_through_file() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.server.port = 8088;
    config.log.level = "debug".to_string();
    config.cors.allowed_origins = vec!["http://localhost:5173".to_string()];
    config.save(&path).expect("保存配置失败");

    let content = fs::read_to_string(&path).expect("读取配置失败");
    assert!(content.contains("[server]"));
    assert!(content.contains("port = 8088"));

    let loaded = Config::load(&path).expect("加载配置失败");
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = TempDir::new().expect("创建临时目录失败");
    assert!(Config::load(dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_engine_from_json_graph_file() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let graph_json = serde_json::to_string_pretty(&warehouse_definition()).expect("序列化失败");
    fs::write(dir.path().join("graph.json"), graph_json).expect("写入图文件失败");
    fs::write(
        dir.path().join("config.toml"),
        "[graph]\npath = \"graph.json\"\n",
    )
    .expect("写入配置失败");

    let config = Config::load(dir.path().join("config.toml")).expect("加载配置失败");
    let engine = RouteEngine::from_config(&config).expect("引擎构建失败");

    assert_eq!(engine.graph().node_count(), 3);
    assert_eq!(engine.distance("Warehouse", "B"), Ok(Some(12)));
}

#[test]
fn test_engine_from_toml_graph_file() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let graph_toml = toml::to_string_pretty(&warehouse_definition()).expect("序列化失败");
    let graph_path = dir.path().join("graph.toml");
    fs::write(&graph_path, graph_toml).expect("写入图文件失败");

    let mut config = Config::default();
    config.graph.path = Some(graph_path.to_string_lossy().into_owned());

    let engine = RouteEngine::from_config(&config).expect("引擎构建失败");
    assert_eq!(
        engine.path("Warehouse", "B").expect("查询失败").map(|p| p.len()),
        Some(3)
    );
}

#[test]
fn test_invalid_graph_file_fails_fast() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let graph_path = dir.path().join("graph.json");
    fs::write(
        &graph_path,
        r#"{"nodes": [{"id": "A"}], "edges": [{"from": "A", "to": "B", "weight": 1}]}"#,
    )
    .expect("写入图文件失败");

    let mut config = Config::default();
    config.graph.path = Some(graph_path.to_string_lossy().into_owned());

    let err = RouteEngine::from_config(&config).expect_err("应当启动失败");
    assert!(matches!(
        err,
        PlannerError::Graph(GraphError::UnknownEndpoint { .. })
    ));
}

#[test]
fn test_missing_graph_file_is_a_load_error() {
    let mut config = Config::default();
    config.graph.path = Some("does/not/exist.json".to_string());

    let err = RouteEngine::from_config(&config).expect_err("应当启动失败");
    assert!(matches!(err, PlannerError::Graph(GraphError::Load(_))));
}
