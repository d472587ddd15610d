use crate::{Order, OrderStatus, SubscriptionPlan};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    /// GET 请求不携带 body，参数走 query
    pub fn has_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path (or prefix when `path()` is overridden).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// Path including any path segments or query string.
    /// Values must already be percent-encoded by the caller.
    fn path(&self) -> String {
        Self::PATH.to_string()
    }
}

// =========================================================
// Request Definitions
// =========================================================

/// API root, used as a connectivity probe
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiInfoRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    #[serde(default)]
    pub version: Option<String>,
}

impl ApiRequest for ApiInfoRequest {
    type Response = ApiInfo;
    const PATH: &'static str = "/api/";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// List the whole catalog
#[derive(Debug, Serialize, Deserialize)]
pub struct ListSubscriptionsRequest;

impl ApiRequest for ListSubscriptionsRequest {
    type Response = Vec<SubscriptionPlan>;
    const PATH: &'static str = "/api/subscriptions";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Fetch one plan by id
#[derive(Debug, Serialize, Deserialize)]
pub struct GetSubscriptionRequest {
    /// Percent-encoded plan id
    #[serde(skip)]
    pub encoded_id: String,
}

impl ApiRequest for GetSubscriptionRequest {
    type Response = SubscriptionPlan;
    const PATH: &'static str = "/api/subscriptions";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{}/{}", Self::PATH, self.encoded_id)
    }
}

/// Orders of a single user
#[derive(Debug, Serialize, Deserialize)]
pub struct ListOrdersRequest {
    /// Percent-encoded e-mail
    #[serde(skip)]
    pub encoded_email: String,
}

impl ApiRequest for ListOrdersRequest {
    type Response = Vec<Order>;
    const PATH: &'static str = "/api/orders";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{}?user_email={}", Self::PATH, self.encoded_email)
    }
}

/// Fetch one order by id
#[derive(Debug, Serialize, Deserialize)]
pub struct GetOrderRequest {
    #[serde(skip)]
    pub encoded_id: String,
}

impl ApiRequest for GetOrderRequest {
    type Response = Order;
    const PATH: &'static str = "/api/orders";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{}/{}", Self::PATH, self.encoded_id)
    }
}

/// Place an order for a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub user_email: String,
    pub subscription_plan_id: String,
}

/// 下单接口的回执
///
/// 只保证有 `id`，其余字段以随后的订单列表为准。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub id: String,
    #[serde(default)]
    pub subscription_plan_id: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

impl ApiRequest for CreateOrderRequest {
    type Response = CreatedOrder;
    const PATH: &'static str = "/api/orders";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Credential check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/api/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Account creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Account record returned by the backend (password is never echoed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl ApiRequest for SignupRequest {
    type Response = UserAccount;
    const PATH: &'static str = "/api/users";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_orders_path_carries_query() {
        let req = ListOrdersRequest {
            encoded_email: "a%2Bb%40c.com".to_string(),
        };
        assert_eq!(req.path(), "/api/orders?user_email=a%2Bb%40c.com");
    }

    #[test]
    fn test_signup_body_uses_snake_case_names() {
        let req = SignupRequest {
            email: "a@b.com".into(),
            password: "pw".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "email": "a@b.com",
                "password": "pw",
                "first_name": "John",
                "last_name": "Doe"
            })
        );
    }

    #[test]
    fn test_login_response_ignores_message() {
        let resp: LoginResponse =
            serde_json::from_value(json!({ "message": "Login successful", "user_id": "u1" }))
                .unwrap();
        assert_eq!(resp.user_id, "u1");
    }

    #[test]
    fn test_created_order_needs_only_id() {
        let created: CreatedOrder = serde_json::from_value(json!({ "id": "o1" })).unwrap();
        assert_eq!(created.id, "o1");
        assert_eq!(created.amount, None);

        let full: CreatedOrder = serde_json::from_value(json!({
            "id": "o2",
            "subscription_plan_id": "p1",
            "amount": 9.99,
            "status": "pending"
        }))
        .unwrap();
        assert_eq!(full.status, Some(OrderStatus::Pending));
    }

    #[test]
    fn test_get_requests_have_no_body() {
        assert!(!ListSubscriptionsRequest::METHOD.has_body());
        assert!(CreateOrderRequest::METHOD.has_body());
    }
}
