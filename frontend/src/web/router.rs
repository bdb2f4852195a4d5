//! 基于 History API 的客户端路由
//!
//! 所有 `window.history` 调用只出现在这里。
//! 路由只解析一次：URL -> `AppRoute`，布局和页面都由它决定。

use agriconnect::{AppRoute, LayoutKind};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径（包含查询串）
fn current_path() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务，当前路由保存在信号中
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
}

impl RouterService {
    fn new() -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 当前路由对应的路径，用于导航高亮
    pub fn current_path(&self) -> Signal<String> {
        let route = self.current_route;
        Signal::derive(move || route.get().to_path())
    }

    pub fn navigate(&self, path: &str) {
        self.navigate_to(AppRoute::from_path(path));
    }

    /// 推入 History 并更新界面
    pub fn navigate_to(&self, target: AppRoute) {
        log::debug!("[Router] navigate -> {}", target);
        push_history_state(&target.to_path());
        self.set_route.set(target);
    }

    /// 浏览器后退，由 popstate 监听器更新路由
    pub fn back(&self) {
        let history = web_sys::window().and_then(|w| w.history().ok());
        match history {
            Some(history) if history.length().unwrap_or(0) > 1 => {
                let _ = history.back();
            }
            _ => self.navigate_to(AppRoute::Home),
        }
    }

    /// 监听浏览器的后退/前进
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            log::debug!("[Router] popstate -> {}", target_route);
            set_route.set(target_route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器与页面同寿命
        closure.forget();
    }
}

fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("use_router called outside <Router>")
}

// =========================================================
// 组件
// =========================================================

#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();
    children()
}

/// 渲染当前路由对应的布局和页面
///
/// 布局只在类型变化时重建，同一布局内切换路由只替换页面，
/// 导航栏因此保持挂载，高亮条可以平移过渡。
#[component]
pub fn RouterOutlet(
    shell: fn(LayoutKind, AnyView) -> AnyView,
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let route = use_router().current_route();
    let layout = Memo::new(move |_| route.with(AppRoute::layout));

    move || {
        let kind = layout.get();
        // 布局切换时旧外壳即将销毁，不再为它创建页面
        let page = move || {
            let current = route.get();
            (current.layout() == kind).then(|| matcher(current))
        };
        shell(kind, page.into_any())
    }
}

/// 站内链接
///
/// 普通点击走路由服务，带修饰键的点击交给浏览器处理。
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::web_sys::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
            return;
        }
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
