//! 服务层模块
//!
//! 包含最短路径算法和路由查询服务

pub mod algorithm;
pub mod route_service;

// 重新导出常用服务
pub use algorithm::*;
pub use route_service::{AllPairs, PairRoute, Route, RouteEngine};
