//! Storefront 核心
//!
//! 与平台无关的店面控制层：
//! - `request`: HTTP 抽象（浏览器、测试各自实现）
//! - `api`: 后端接口的类型化封装
//! - `session`: 本地会话标记
//! - `storefront`: 控制器与 UI 状态

// =========================================================
// 跨平台日志宏
// =========================================================

#[cfg(target_arch = "wasm32")]
macro_rules! log_info {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_info {
    ($($t:tt)*) => (println!($($t)*))
}

#[cfg(target_arch = "wasm32")]
macro_rules! log_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_error {
    ($($t:tt)*) => (eprintln!($($t)*))
}

pub mod api;
pub mod config;
pub mod error;
pub mod request;
pub mod session;
pub mod storefront;

pub use api::StorefrontApi;
pub use config::StoreConfig;
pub use error::{StoreError, StoreErrorKind, StoreResult};
pub use request::{HttpClient, HttpRequest, HttpResponse};
#[cfg(test)]
pub use session::MemoryStorage;
pub use session::{SessionManager, SessionStorage};
pub use storefront::{ActiveDialog, Notifier, StateCell, Storefront, StorefrontState};
pub use storefront_shared as shared;
