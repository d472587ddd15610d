//! 店面状态上下文
//!
//! 把核心控制器与响应式状态绑定，通过 Context 在组件间共享。

use crate::web::{BrowserNotifier, BrowserStorage, FetchHttpClient};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use storefront::{StateCell, StoreConfig, Storefront, StorefrontState};

/// 以 signal 作为控制器的状态容器
///
/// 控制器内部读取不追踪依赖，写入会通知所有订阅的视图。
#[derive(Clone, Copy)]
pub struct SignalState(pub RwSignal<StorefrontState>);

impl StateCell for SignalState {
    fn with<R>(&self, f: impl FnOnce(&StorefrontState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut StorefrontState)) {
        self.0.update(f);
    }
}

pub type AppStore = Storefront<FetchHttpClient, BrowserStorage, BrowserNotifier, SignalState>;

/// 店面上下文
///
/// `state` 供视图读取，`store` 供事件处理调用控制器。
#[derive(Clone, Copy)]
pub struct StoreContext {
    store: StoredValue<AppStore>,
    pub state: RwSignal<StorefrontState>,
}

impl StoreContext {
    pub fn new(config: &StoreConfig) -> Self {
        let state = RwSignal::new(StorefrontState::default());
        let store = Storefront::new(
            config,
            FetchHttpClient,
            BrowserStorage,
            BrowserNotifier,
            SignalState(state),
        );
        Self {
            store: StoredValue::new(store),
            state,
        }
    }

    /// 同步调用控制器（对话框开关、登出）
    pub fn run<R>(&self, f: impl FnOnce(&AppStore) -> R) -> R {
        self.store.with_value(f)
    }

    /// 在事件循环上启动一个异步动作，发出后不可取消
    pub fn spawn<F, Fut>(&self, f: F)
    where
        F: FnOnce(AppStore) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let store = self.store.get_value();
        spawn_local(f(store));
    }
}

/// 创建上下文并执行挂载流程（恢复会话 + 加载目录）
pub fn init_store() -> StoreContext {
    let config = StoreConfig::from_build_env();
    let ctx = StoreContext::new(&config);
    provide_context(ctx);

    ctx.spawn(|store| async move { store.mount().await });
    ctx
}

/// 从 Context 获取店面上下文
pub fn use_store() -> StoreContext {
    use_context::<StoreContext>().expect("StoreContext should be provided")
}
