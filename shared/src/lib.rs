//! Storefront 共享协议
//!
//! 前端与控制层共用的领域模型、接口定义与展示辅助函数。

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod date;
pub mod protocol;

pub use protocol::{ApiRequest, HttpMethod};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const API_PREFIX: &str = "/api";
pub const DEFAULT_CURRENCY: &str = "USD";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_true() -> bool {
    true
}

/// 价格展示，沿用后端数值的最短表示（20.0 -> "$20"，9.99 -> "$9.99"）
pub fn format_price(amount: f64) -> String {
    format!("${}", amount)
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 会话用户
///
/// 只保存 email 与后端返回的 id，序列化后即为本地会话标记。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub id: String,
}

impl User {
    pub fn new(email: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            id: id.into(),
        }
    }
}

/// 订阅套餐（只读目录项）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: String,
    pub service_name: String,
    pub plan_name: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub duration: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub image_url: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl SubscriptionPlan {
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// 订单状态
///
/// 后端给出的是自由字符串，未知值原样保留。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
    Failed,
    Other(String),
}

/// 状态对应的展示色调
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Error,
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Failed => "failed",
            OrderStatus::Other(s) => s,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            OrderStatus::Completed => StatusTone::Success,
            OrderStatus::Pending => StatusTone::Warning,
            _ => StatusTone::Error,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => OrderStatus::Pending,
            "completed" => OrderStatus::Completed,
            "cancelled" => OrderStatus::Cancelled,
            "failed" => OrderStatus::Failed,
            _ => OrderStatus::Other(s),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    pub subscription_plan_id: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// 缺失时视为未知状态，按错误色调展示
    #[serde(default = "unknown_status")]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_session_id: Option<String>,
    // 后端输出的是不带时区的 ISO 时间，解析交给 date 模块
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn unknown_status() -> OrderStatus {
    OrderStatus::Other(String::new())
}

impl Order {
    pub fn display_amount(&self) -> String {
        format_price(self.amount)
    }

    /// 下单日期（M/D/YYYY），无法解析时原样返回
    pub fn display_date(&self) -> String {
        date::format_date(&self.created_at).unwrap_or_else(|| self.created_at.clone())
    }
}
