//! Premium Subscriptions 前端应用
//!
//! 采用 Context-Driven 架构：
//! - `store`: 控制器与响应式状态的绑定
//! - `web`: 浏览器 API 封装（fetch / LocalStorage / alert）
//! - `components`: UI 组件层

mod components {
    pub mod catalog;
    pub mod hero;
    mod icons;
    pub mod login;
    pub mod nav;
    pub mod orders;
    pub mod signup;
    pub mod storefront;
}
mod store;
pub(crate) mod web;

use crate::components::storefront::StorefrontPage;
use crate::store::init_store;

use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // 创建店面上下文并启动挂载流程
    init_store();

    view! { <StorefrontPage /> }
}

/// 安装 panic hook 并挂载应用
pub fn start() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
