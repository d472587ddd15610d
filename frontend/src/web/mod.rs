//! 浏览器 API 封装模块
//!
//! 为核心控制层的三个接口提供浏览器实现：
//! - `HttpClient` -> fetch（gloo-net）
//! - `SessionStorage` -> LocalStorage
//! - `Notifier` -> window.alert

mod http;
mod notify;
mod storage;

pub use http::FetchHttpClient;
pub use notify::BrowserNotifier;
pub use storage::BrowserStorage;
