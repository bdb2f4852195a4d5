//! 应用上下文
//!
//! 保存配置、API 网关、数据来源以及当前用户，通过 Context 在组件间共享。
//! 当前用户同时写入 LocalStorage，刷新页面后恢复。

use crate::web::router::RouterService;
use crate::web::{BrowserStore, FetchHttpClient};
use agriconnect::config::{API_URL_VAR, DATA_SOURCE_VAR};
use agriconnect::{
    AgriApi, AppConfig, AppRoute, BackendSource, DataSource, DataSourceKind, Endpoints, ErrorKind,
    FixtureSource, Session,
};
use agriconnect_shared::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

pub type Api = AgriApi<FetchHttpClient>;

/// 读取编译期注入的配置，非法值回退到默认配置
pub fn load_config() -> AppConfig {
    let lookup = |key: &str| match key {
        API_URL_VAR => option_env!("AGRICONNECT_API_URL").map(str::to_string),
        DATA_SOURCE_VAR => option_env!("AGRICONNECT_DATA_SOURCE").map(str::to_string),
        _ => None,
    };
    AppConfig::from_lookup(lookup).unwrap_or_else(|e| {
        log::error!("[Config] {}, using defaults", e);
        AppConfig::default()
    })
}

pub fn session() -> Session<BrowserStore> {
    Session::new(BrowserStore)
}

/// 应用上下文
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<AppConfig>,
    api: StoredValue<Api, LocalStorage>,
    source: StoredValue<Rc<dyn DataSource>, LocalStorage>,
    /// 当前用户，未登录时为 `None`
    pub user: RwSignal<Option<User>>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let api = AgriApi::new(Endpoints::new(&config.api_base), FetchHttpClient);
        let source: Rc<dyn DataSource> = match config.data_source {
            DataSourceKind::Fixture => Rc::new(FixtureSource::new()),
            DataSourceKind::Backend => Rc::new(BackendSource::new(api.clone())),
        };
        log::info!(
            "[App] api base {}, data source {:?}",
            config.api_base,
            config.data_source
        );

        Self {
            config: StoredValue::new(config),
            api: StoredValue::new_local(api),
            source: StoredValue::new_local(source),
            user: RwSignal::new(session().user()),
        }
    }

    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    pub fn source(&self) -> Rc<dyn DataSource> {
        self.source.get_value()
    }

    /// 登录成功后从会话槽位同步当前用户
    pub fn sync_user(&self) {
        self.user.set(session().user());
    }

    pub fn user_id(&self) -> Option<String> {
        self.user.with_untracked(|u| u.as_ref().map(|u| u.id.clone()))
    }
}

/// 从 Context 获取应用上下文
pub fn use_auth() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// 使用后端时通过 `/auth/me` 校正本地保存的用户
pub fn init_auth(ctx: &AppContext) {
    if ctx.config.with_value(|c| c.data_source) != DataSourceKind::Backend {
        return;
    }

    let source = ctx.source();
    let user = ctx.user;
    spawn_local(async move {
        match source.current_user().await {
            Ok(me) => {
                session().sign_in(&me);
                user.set(Some(me));
            }
            Err(e) if e.kind == ErrorKind::Auth => {
                session().sign_out();
                user.set(None);
            }
            Err(e) => log::warn!("[Auth] session refresh failed: {}", e),
        }
    });
}

/// 注销：通知后端、清除会话并回到登录页
pub fn logout(ctx: &AppContext, router: RouterService) {
    let api = ctx.api();
    let user = ctx.user;
    spawn_local(async move {
        if let Err(e) = api.logout().await {
            log::warn!("[Auth] logout request failed: {}", e);
        }
        session().sign_out();
        user.set(None);
        router.navigate_to(AppRoute::Login { registered: false });
    });
}
