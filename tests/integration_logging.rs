//! 日志系统集成测试
//!
//! 测试范围:
//! - 日志配置默认值
//! - utils::logging 初始化、写入与关闭
//!
//! flexi_logger 使用全局 logger，同一进程只能初始化一次

use std::fs;
use std::path::PathBuf;

use route_planner::config::{Config, LogConfig};
use route_planner::utils::logging;
use serial_test::serial;

#[test]
#[serial]
fn test_log_config_defaults() {
    let config = Config::default();

    assert_eq!(config.log.level, "info");
    assert_eq!(config.log.dir, "logs");
    assert_eq!(config.log.file, "route-planner");
    assert_eq!(config.log.max_file_size, 100 * 1024 * 1024); // 100MB
    assert_eq!(config.log.max_files, 5);
    assert!(config.log.to_file);
}

#[test]
#[serial]
fn test_logging_init_write_and_shutdown() {
    let log_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("test-logs")
        .join(format!("logging_test_{}", std::process::id()));
    let _ = fs::remove_dir_all(&log_dir);

    let config = LogConfig {
        level: "info".to_string(),
        dir: log_dir.to_string_lossy().into_owned(),
        file: "route_planner_test".to_string(),
        max_file_size: 1024 * 1024,
        max_files: 2,
        to_file: true,
    };

    logging::init(&config).expect("日志初始化失败");
    assert!(logging::is_initialized());

    log::info!("路由引擎日志测试");
    log::debug!("低于配置级别的日志");

    logging::shutdown();
    assert!(!logging::is_initialized());

    let contents: Vec<String> = fs::read_dir(&log_dir)
        .expect("读取日志目录失败")
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name().to_string_lossy().to_string();
            name.starts_with("route_planner_test") && name.ends_with(".log")
        })
        .map(|e| fs::read_to_string(e.path()).expect("读取日志文件失败"))
        .collect();

    assert!(!contents.is_empty(), "应该至少有一个日志文件");
    let all = contents.join("\n");
    assert!(all.contains("路由引擎日志测试"));
    assert!(!all.contains("低于配置级别的日志"));

    let _ = fs::remove_dir_all(&log_dir);
}
