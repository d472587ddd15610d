//! 会话标记模块
//!
//! 会话只是存放在本地存储中的 `{ email, id }` JSON，
//! 读取时不做任何服务端校验，也没有过期时间。

use crate::error::{StoreError, StoreResult};
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
use storefront_shared::User;

/// 键值存储接口（浏览器中对应 LocalStorage）
pub trait SessionStorage {
    /// 键不存在或读取失败时返回 None
    fn get(&self, key: &str) -> Option<String>;
    /// 写入是否成功
    fn set(&self, key: &str, value: &str) -> bool;
    /// 删除是否成功
    fn delete(&self, key: &str) -> bool;
}

/// 内存存储，测试夹具
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.set(key, value);
        storage
    }
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.items.borrow_mut().remove(key);
        true
    }
}

impl<S: SessionStorage> SessionStorage for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> bool {
        (**self).delete(key)
    }
}

/// 会话标记的读写
#[derive(Debug, Clone)]
pub struct SessionManager<S: SessionStorage> {
    storage: S,
    key: String,
}

impl<S: SessionStorage> SessionManager<S> {
    pub fn new(storage: S, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 读取会话标记
    ///
    /// - `Ok(None)` 未登录
    /// - `Err` 标记存在但无法解析
    pub fn load(&self) -> StoreResult<Option<User>> {
        match self.storage.get(&self.key) {
            None => Ok(None),
            Some(raw) => serde_json::from_str::<User>(&raw)
                .map(Some)
                .map_err(|e| StoreError::storage(format!("会话标记无法解析: {}", e))),
        }
    }

    pub fn save(&self, user: &User) -> StoreResult<()> {
        let raw = serde_json::to_string(user)
            .map_err(|e| StoreError::storage(format!("会话标记序列化失败: {}", e)))?;
        if self.storage.set(&self.key, &raw) {
            Ok(())
        } else {
            Err(StoreError::storage("会话标记写入失败"))
        }
    }

    /// 删除失败时标记仍在，下次加载会重新登录
    pub fn clear(&self) -> StoreResult<()> {
        if self.storage.delete(&self.key) {
            Ok(())
        } else {
            Err(StoreError::storage("会话标记删除失败"))
        }
    }
}
