use crate::core::GraphResult;
use crate::graph::{delivery_network, GraphDefinition};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub log: LogConfig,
    pub graph: GraphConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 跨域配置，列表为空或包含 "*" 时允许任意来源
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
    pub to_file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "route-planner".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
            to_file: true,
        }
    }
}

/// 图数据来源，未配置路径时使用内置配送网络
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GraphConfig {
    pub path: Option<String>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        if let Some(graph_path) = config.graph.path.take() {
            config.graph.path = Some(Config::resolve_relative_to(path, &graph_path));
        }
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 读取配置的图定义
    pub fn load_graph(&self) -> GraphResult<GraphDefinition> {
        match &self.graph.path {
            Some(path) => GraphDefinition::load(path),
            None => Ok(delivery_network()),
        }
    }

    /// 相对路径以配置文件所在目录为基准
    fn resolve_relative_to(config_path: &Path, target: &str) -> String {
        let target_path = PathBuf::from(target);
        if target_path.is_absolute() {
            return target.to_string();
        }

        match config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                dir.join(target_path).to_string_lossy().into_owned()
            }
            _ => target.to_string(),
        }
    }
}
