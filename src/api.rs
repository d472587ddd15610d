use crate::error::{StoreError, StoreResult};
use crate::request::{HttpClient, HttpRequest};
use storefront_shared::protocol::{
    ApiInfo, ApiInfoRequest, CreateOrderRequest, CreatedOrder, GetOrderRequest,
    GetSubscriptionRequest, ListOrdersRequest, ListSubscriptionsRequest, LoginRequest,
    LoginResponse, SignupRequest, UserAccount,
};
use storefront_shared::{ApiRequest, Order, SubscriptionPlan};

// =========================================================
// 后端网关 (Backend Gateway)
// =========================================================

/// 后端 REST 接口的类型化封装
///
/// 接受任何实现了 HttpClient 的客户端，从而解耦具体的 HTTP 实现。
#[derive(Debug, Clone)]
pub struct StorefrontApi<C: HttpClient> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> StorefrontApi<C> {
    pub fn new(client: C, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送一个 ApiRequest 并解析响应
    pub async fn call<R: ApiRequest>(&self, req: &R) -> StoreResult<R::Response> {
        let url = self.url(&req.path());
        let mut http = HttpRequest::new(&url, R::METHOD).with_header("Accept", "application/json");
        if R::METHOD.has_body() {
            http = http.with_json(req)?;
        }

        let resp = self.client.send(http).await?;
        if !resp.is_success() {
            return Err(StoreError::rejected(resp.status, &resp.body));
        }
        resp.json()
    }

    pub async fn info(&self) -> StoreResult<ApiInfo> {
        self.call(&ApiInfoRequest).await
    }

    pub async fn subscriptions(&self) -> StoreResult<Vec<SubscriptionPlan>> {
        self.call(&ListSubscriptionsRequest).await
    }

    pub async fn subscription(&self, plan_id: &str) -> StoreResult<SubscriptionPlan> {
        let req = GetSubscriptionRequest {
            encoded_id: urlencoding::encode(plan_id).into_owned(),
        };
        self.call(&req).await
    }

    pub async fn orders(&self, user_email: &str) -> StoreResult<Vec<Order>> {
        let req = ListOrdersRequest {
            encoded_email: urlencoding::encode(user_email).into_owned(),
        };
        self.call(&req).await
    }

    pub async fn order(&self, order_id: &str) -> StoreResult<Order> {
        let req = GetOrderRequest {
            encoded_id: urlencoding::encode(order_id).into_owned(),
        };
        self.call(&req).await
    }

    pub async fn create_order(&self, user_email: &str, plan_id: &str) -> StoreResult<CreatedOrder> {
        let req = CreateOrderRequest {
            user_email: user_email.to_string(),
            subscription_plan_id: plan_id.to_string(),
        };
        self.call(&req).await
    }

    pub async fn login(&self, email: &str, password: &str) -> StoreResult<LoginResponse> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.call(&req).await
    }

    pub async fn signup(&self, req: &SignupRequest) -> StoreResult<UserAccount> {
        self.call(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreErrorKind;
    use crate::request::MockHttpClient;
    use serde_json::json;
    use storefront_shared::HttpMethod;

    const BASE: &str = "https://shop.test";

    fn api() -> StorefrontApi<MockHttpClient> {
        StorefrontApi::new(MockHttpClient::new(), "https://shop.test/")
    }

    #[tokio::test]
    async fn test_orders_query_is_percent_encoded() {
        let api = api();
        let url = format!("{}/api/orders?user_email=a%2Btag%40b.com", BASE);
        api.client().mock_response(HttpMethod::Get, &url, 200, json!([]));

        let orders = api.orders("a+tag@b.com").await.unwrap();

        assert!(orders.is_empty());
        assert_eq!(api.client().count(HttpMethod::Get, &url), 1);
    }

    #[tokio::test]
    async fn test_get_sends_no_body_and_post_sends_json() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Get,
            &format!("{}/api/subscriptions", BASE),
            200,
            json!([]),
        );
        api.client().mock_response(
            HttpMethod::Post,
            &format!("{}/api/orders", BASE),
            200,
            json!({ "id": "o1", "subscription_plan_id": "p1", "amount": 9.99 }),
        );

        api.subscriptions().await.unwrap();
        let order = api.create_order("a@b.com", "p1").await.unwrap();
        assert_eq!(order.id, "o1");

        let reqs = api.client().requests.borrow();
        assert_eq!(reqs[0].2, None);
        let body: serde_json::Value = serde_json::from_str(reqs[1].2.as_ref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({ "user_email": "a@b.com", "subscription_plan_id": "p1" })
        );
    }

    #[tokio::test]
    async fn test_rejection_carries_detail() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Post,
            &format!("{}/api/users", BASE),
            400,
            json!({ "detail": "Email already registered" }),
        );

        let err = api
            .signup(&SignupRequest {
                email: "a@b.com".into(),
                password: "pw".into(),
                first_name: "A".into(),
                last_name: "B".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind, StoreErrorKind::Rejected);
        assert_eq!(err.detail(), Some("Email already registered"));
    }

    #[tokio::test]
    async fn test_unknown_plan_is_404() {
        let api = api();
        let err = api.subscription("missing plan").await.unwrap_err();
        assert_eq!(err.status(), Some(404));

        let reqs = api.client().requests.borrow();
        assert_eq!(reqs[0].1, format!("{}/api/subscriptions/missing%20plan", BASE));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Get,
            &format!("{}/api/", BASE),
            200,
            json!({ "unexpected": true }),
        );

        let err = api.info().await.unwrap_err();
        assert_eq!(err.kind, StoreErrorKind::Decode);
    }
}
