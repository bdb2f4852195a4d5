//! AgriConnect 前端应用
//!
//! 平台无关的逻辑都在 `agriconnect` 核心库中，这里只负责：
//! - `web`: 浏览器 API 封装（fetch、History、LocalStorage、FileReader）
//! - `auth`: 应用上下文与当前用户
//! - `components`: 布局和页面

mod auth;
mod components {
    pub mod chat;
    pub mod communities;
    pub mod create_post;
    pub mod home;
    mod icons;
    pub mod layout;
    pub mod login;
    pub mod messages;
    pub mod not_found;
    pub mod post_detail;
    pub mod profile;
    pub mod register;
    mod ui;
}
mod web;

use crate::auth::{AppContext, init_auth, load_config};
use crate::components::chat::ChatPage;
use crate::components::communities::CommunitiesPage;
use crate::components::create_post::CreatePostPage;
use crate::components::home::HomePage;
use crate::components::layout::{FocusedLayout, FullLayout};
use crate::components::login::LoginPage;
use crate::components::messages::MessagesPage;
use crate::components::not_found::NotFoundPage;
use crate::components::post_detail::PostDetailPage;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::web::router::{Router, RouterOutlet};

use agriconnect::{AppRoute, LayoutKind};
use leptos::prelude::*;

/// 路由匹配函数
///
/// 每次路由变化都会重新创建页面，页面状态随之丢弃。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login { registered } => view! { <LoginPage registered=registered /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::PostDetail { id } => view! { <PostDetailPage id=id /> }.into_any(),
        AppRoute::CreatePost => view! { <CreatePostPage /> }.into_any(),
        AppRoute::Chat { id } => view! { <ChatPage id=id /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Communities => view! { <CommunitiesPage /> }.into_any(),
        AppRoute::Messages => view! { <MessagesPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NotFound { path } => view! { <NotFoundPage path=path /> }.into_any(),
    }
}

/// 布局外壳
fn layout_shell(layout: LayoutKind, page: AnyView) -> AnyView {
    match layout {
        LayoutKind::Full => view! { <FullLayout>{page}</FullLayout> }.into_any(),
        LayoutKind::Focused => view! { <FocusedLayout>{page}</FocusedLayout> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    if let Err(e) = agriconnect::validate_navigation() {
        log::error!("[App] navigation table is inconsistent: {}", e);
    }

    // 1. 创建应用上下文
    let ctx = AppContext::new(load_config());
    provide_context(ctx);

    // 2. 使用后端时校正本地保存的用户
    init_auth(&ctx);

    view! {
        <Router>
            <RouterOutlet shell=layout_shell matcher=route_matcher />
        </Router>
    }
}
