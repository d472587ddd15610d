// =========================================================
// 构建期配置 (Build-time Configuration)
// =========================================================

/// 未配置时使用同源（相对路径 `/api/...`）
const DEFAULT_BACKEND_URL: &str = "";
const DEFAULT_SESSION_KEY: &str = "user";

/// Storefront 配置
///
/// 后端地址在构建时通过 `STOREFRONT_BACKEND_URL` 注入，
/// 浏览器内没有运行期环境变量可读。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend_url: String,
    /// 会话标记在 LocalStorage 中的键
    pub session_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL, DEFAULT_SESSION_KEY)
    }
}

impl StoreConfig {
    pub fn new(backend_url: &str, session_key: &str) -> Self {
        Self {
            backend_url: backend_url.trim().trim_end_matches('/').to_string(),
            session_key: session_key.to_string(),
        }
    }

    /// 读取构建期环境变量，缺省时回退到默认值
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("STOREFRONT_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL),
            option_env!("STOREFRONT_SESSION_KEY")
                .filter(|k| !k.is_empty())
                .unwrap_or(DEFAULT_SESSION_KEY),
        )
    }

    pub fn with_backend_url(mut self, backend_url: &str) -> Self {
        self.backend_url = backend_url.trim().trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = StoreConfig::default().with_backend_url("https://shop.example.com/");
        assert_eq!(config.backend_url, "https://shop.example.com");
        assert_eq!(config.session_key, "user");
    }

    #[test]
    fn test_default_is_same_origin() {
        assert_eq!(StoreConfig::default().backend_url, "");
    }
}
