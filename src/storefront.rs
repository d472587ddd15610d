//! 店面控制器
//!
//! 持有 UI 状态（当前用户、套餐目录、订单、对话框、加载标记），
//! 把用户动作翻译成一次后端调用加一次状态更新。
//!
//! 失败处理分两类：
//! - 后台拉取（目录、订单）只写日志
//! - 用户主动操作（登录、注册、下单）弹窗提示

use crate::api::StorefrontApi;
use crate::config::StoreConfig;
use crate::request::HttpClient;
use crate::session::{SessionManager, SessionStorage};
use std::cell::RefCell;
use std::rc::Rc;
use storefront_shared::protocol::SignupRequest;
use storefront_shared::{Order, SubscriptionPlan, User};

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please login to purchase subscriptions";
pub const ORDER_CREATED_MESSAGE: &str = "Order created successfully! Payment integration coming soon.";

// =========================================================
// 状态模型 (State)
// =========================================================

/// 当前打开的对话框，同一时间最多一个
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Login,
    Signup,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontState {
    pub user: Option<User>,
    pub catalog: Vec<SubscriptionPlan>,
    pub orders: Vec<Order>,
    pub dialog: ActiveDialog,
    /// 目录首次加载完成前为 true
    pub loading: bool,
}

impl Default for StorefrontState {
    fn default() -> Self {
        Self {
            user: None,
            catalog: Vec::new(),
            orders: Vec::new(),
            dialog: ActiveDialog::None,
            loading: true,
        }
    }
}

impl StorefrontState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn current_email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    pub fn welcome(&self) -> Option<String> {
        self.current_email().map(|email| format!("Welcome, {}", email))
    }

    /// 订单表格只在已登录且有订单时展示
    pub fn shows_orders(&self) -> bool {
        self.is_logged_in() && !self.orders.is_empty()
    }
}

/// 状态容器接口
///
/// 浏览器中由响应式 signal 实现，测试中用 RefCell。
pub trait StateCell {
    fn with<R>(&self, f: impl FnOnce(&StorefrontState) -> R) -> R;
    fn update(&self, f: impl FnOnce(&mut StorefrontState));
}

impl StateCell for RefCell<StorefrontState> {
    fn with<R>(&self, f: impl FnOnce(&StorefrontState) -> R) -> R {
        f(&self.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut StorefrontState)) {
        f(&mut self.borrow_mut())
    }
}

impl<T: StateCell> StateCell for Rc<T> {
    fn with<R>(&self, f: impl FnOnce(&StorefrontState) -> R) -> R {
        (**self).with(f)
    }

    fn update(&self, f: impl FnOnce(&mut StorefrontState)) {
        (**self).update(f)
    }
}

/// 阻塞式用户提示（浏览器中为 window.alert）
pub trait Notifier {
    fn alert(&self, message: &str);
}

// =========================================================
// 控制器 (Controller)
// =========================================================

#[derive(Clone)]
pub struct Storefront<C, S, N, T>
where
    C: HttpClient,
    S: SessionStorage,
    N: Notifier,
    T: StateCell,
{
    api: StorefrontApi<C>,
    session: SessionManager<S>,
    notifier: N,
    state: T,
}

impl<C, S, N, T> Storefront<C, S, N, T>
where
    C: HttpClient,
    S: SessionStorage,
    N: Notifier,
    T: StateCell,
{
    pub fn new(config: &StoreConfig, client: C, storage: S, notifier: N, state: T) -> Self {
        Self {
            api: StorefrontApi::new(client, &config.backend_url),
            session: SessionManager::new(storage, &config.session_key),
            notifier,
            state,
        }
    }

    pub fn api(&self) -> &StorefrontApi<C> {
        &self.api
    }

    pub fn session(&self) -> &SessionManager<S> {
        &self.session
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    /// 页面挂载：恢复会话并加载目录
    ///
    /// 恢复的会话不拉取订单，订单只在登录或下单后刷新。
    pub async fn mount(&self) {
        self.restore_session();
        self.load_catalog().await;
    }

    /// 加载套餐目录，无论成功与否都清除 loading
    pub async fn load_catalog(&self) {
        self.state.update(|s| s.loading = true);

        match self.api.subscriptions().await {
            Ok(plans) => {
                log_info!("[Storefront] Loaded {} subscription plans", plans.len());
                self.state.update(|s| s.catalog = plans);
            }
            Err(e) => log_error!("Error fetching subscriptions: {}", e),
        }

        self.state.update(|s| s.loading = false);
    }

    /// 从本地存储恢复会话标记
    ///
    /// 标记不做校验也不过期；无法解析的标记会被删除。
    pub fn restore_session(&self) -> Option<User> {
        match self.session.load() {
            Ok(Some(user)) => {
                log_info!("[Storefront] Restored session for {}", user.email);
                let restored = user.clone();
                self.state.update(|s| s.user = Some(user));
                Some(restored)
            }
            Ok(None) => None,
            Err(e) => {
                log_error!("Discarding session marker: {}", e);
                if let Err(e) = self.session.clear() {
                    log_error!("Failed to remove session marker: {}", e);
                }
                None
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> bool {
        match self.api.login(email, password).await {
            Ok(resp) => {
                self.begin_session(User::new(email, resp.user_id));
                // 登录完成后再拉订单，保证顺序
                self.refresh_orders().await;
                true
            }
            Err(e) => {
                log_error!("Login failed: {}", e);
                self.notifier
                    .alert(&format!("Login failed: {}", e.user_message()));
                false
            }
        }
    }

    /// 注册成功后直接登录，新用户没有订单所以不拉取
    pub async fn signup(&self, form: &SignupRequest) -> bool {
        match self.api.signup(form).await {
            Ok(account) => {
                self.begin_session(User::new(form.email.as_str(), account.id));
                true
            }
            Err(e) => {
                log_error!("Signup failed: {}", e);
                self.notifier
                    .alert(&format!("Signup failed: {}", e.user_message()));
                false
            }
        }
    }

    /// 未登录时打开登录框，不发请求
    pub async fn purchase(&self, plan_id: &str) -> bool {
        let email = self.state.with(|s| s.current_email().map(str::to_string));
        let Some(email) = email else {
            self.notifier.alert(LOGIN_REQUIRED_MESSAGE);
            self.open_dialog(ActiveDialog::Login);
            return false;
        };

        match self.api.create_order(&email, plan_id).await {
            Ok(order) => {
                log_info!("[Storefront] Order {} created for plan {}", order.id, plan_id);
                self.notifier.alert(ORDER_CREATED_MESSAGE);
                self.refresh_orders().await;
                true
            }
            Err(e) => {
                log_error!("Purchase failed: {}", e);
                self.notifier
                    .alert(&format!("Purchase failed: {}", e.user_message()));
                false
            }
        }
    }

    /// 全量拉取当前用户的订单并替换
    pub async fn refresh_orders(&self) {
        let email = self.state.with(|s| s.current_email().map(str::to_string));
        let Some(email) = email else {
            return;
        };

        match self.api.orders(&email).await {
            Ok(orders) => {
                let mut applied = false;
                self.state.update(|s| {
                    // 请求期间可能已登出或切换用户
                    if s.current_email() == Some(email.as_str()) {
                        s.orders = orders;
                        applied = true;
                    }
                });
                if !applied {
                    log_info!("[Storefront] Dropped stale orders for {}", email);
                }
            }
            Err(e) => log_error!("Error fetching orders: {}", e),
        }
    }

    pub fn logout(&self) {
        if let Err(e) = self.session.clear() {
            log_error!("Failed to remove session marker: {}", e);
        }
        self.state.update(|s| {
            s.user = None;
            s.orders.clear();
        });
        log_info!("[Storefront] Logged out");
    }

    pub fn open_dialog(&self, dialog: ActiveDialog) {
        self.state.update(|s| s.dialog = dialog);
    }

    pub fn close_dialog(&self) {
        self.state.update(|s| s.dialog = ActiveDialog::None);
    }

    fn begin_session(&self, user: User) {
        // 持久化失败不影响本次会话
        if let Err(e) = self.session.save(&user) {
            log_error!("Failed to persist session: {}", e);
        }
        log_info!("[Storefront] Logged in as {}", user.email);
        self.state.update(|s| {
            if s.current_email() != Some(user.email.as_str()) {
                s.orders.clear();
            }
            s.user = Some(user);
            s.dialog = ActiveDialog::None;
        });
    }
}
