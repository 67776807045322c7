//! HTTP 服务模块
//!
//! 提供基于 HTTP 协议的路由查询接口

pub mod server;
pub mod state;
pub mod error;
pub mod router;
pub mod handlers;
pub mod middleware;

pub use server::HttpServer;
pub use handlers::route::{ShortestPathRequest, ShortestPathResponse};
pub use router::create_router;
pub use state::AppState;
pub use error::HttpError;
