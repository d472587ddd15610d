use serde::Deserialize;
use std::fmt;

/// 后端未提供 detail 时展示给用户的兜底文案
pub const FALLBACK_MESSAGE: &str = "Unknown error";

// =========================================================
// 错误类型枚举
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// 请求未能到达后端（断网、CORS、超时）
    Network,
    /// 后端返回非 2xx
    Rejected,
    /// JSON 序列化或反序列化失败
    Decode,
    /// 本地会话标记读写失败
    Storage,
}

impl StoreErrorKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreErrorKind::Network => "NETWORK_ERROR",
            StoreErrorKind::Rejected => "REQUEST_REJECTED",
            StoreErrorKind::Decode => "JSON_PARSE_ERROR",
            StoreErrorKind::Storage => "STORAGE_ERROR",
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

/// Storefront 错误
///
/// - kind: 错误类型
/// - message: 诊断信息（写入日志）
/// - status: 后端返回的 HTTP 状态码（仅 Rejected）
/// - detail: 后端给出的可读错误（用于弹窗）
#[derive(Debug, Clone)]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub message: String,
    status: Option<u16>,
    detail: Option<String>,
}

impl StoreError {
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            detail: None,
        }
    }

    // --- Convenience constructors ---

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Decode, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Storage, message)
    }

    /// 由非 2xx 响应构造，body 中的 detail 会被提取
    pub fn rejected(status: u16, body: &str) -> Self {
        Self {
            kind: StoreErrorKind::Rejected,
            message: format!("HTTP {}", status),
            status: Some(status),
            detail: extract_detail(body),
        }
    }

    // --- Accessors ---

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    /// 弹窗文案：有 detail 用 detail，否则兜底
    ///
    /// 网络错误、超时与后端拒绝在这里不做区分。
    pub fn user_message(&self) -> &str {
        self.detail().unwrap_or(FALLBACK_MESSAGE)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

// =========================================================
// detail 提取
// =========================================================

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// 从错误响应中提取可读信息
///
/// - `{"detail": "..."}` 直接使用
/// - FastAPI 校验错误 `{"detail": [{"msg": "..."}]}` 以 "; " 拼接
fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let err = StoreError::rejected(401, r#"{"detail":"Invalid credentials"}"#);
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(
            err.to_string(),
            "[REQUEST_REJECTED] HTTP 401: Invalid credentials"
        );
    }

    #[test]
    fn test_validation_detail_is_joined() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required","type":"value_error.missing"},{"loc":["body","password"],"msg":"field required"}]}"#;
        let err = StoreError::rejected(422, body);
        assert_eq!(err.user_message(), "field required; field required");
    }

    #[test]
    fn test_missing_detail_falls_back() {
        assert_eq!(
            StoreError::rejected(500, "Internal Server Error").user_message(),
            FALLBACK_MESSAGE
        );
        assert_eq!(StoreError::rejected(500, "{}").user_message(), FALLBACK_MESSAGE);
        assert_eq!(
            StoreError::rejected(400, r#"{"detail":""}"#).user_message(),
            FALLBACK_MESSAGE
        );
        assert_eq!(StoreError::network("offline").user_message(), FALLBACK_MESSAGE);
    }
}
