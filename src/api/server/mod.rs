//! 网络服务层
//!
//! 提供基于 HTTP 的路由规划服务接口

pub mod http;

pub use http::HttpServer;
