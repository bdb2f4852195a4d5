//! 布局外壳
//!
//! - Full: 宽屏左侧导航，窄屏底部导航
//! - Focused: 居中的内容框，不显示导航

use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOutIcon, NavIcon, SproutIcon};
use crate::components::ui::{Avatar, tab_class};
use crate::web::router::{Link, use_router};
use agriconnect::nav::{
    BOTTOM_COMPOSE_SLOT, BOTTOM_TABS, COMPOSE_BOTTOM, COMPOSE_SIDE, Highlight, SIDE_TABS, Tab,
    highlight, tab_states,
};
use leptos::prelude::*;

#[component]
pub fn FullLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 md:flex">
            <SideNav />
            <main class="flex-1 max-w-2xl mx-auto w-full pb-20 md:pb-0">{children()}</main>
            <BottomNav />
        </div>
    }
}

#[component]
pub fn FocusedLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex justify-center">
            <div class="w-full max-w-2xl bg-white min-h-screen shadow-sm">{children()}</div>
        </div>
    }
}

/// 导航标签列表，高亮随当前路径变化
#[component]
fn TabList(tabs: &'static [Tab], item_class: &'static str) -> impl IntoView {
    let router = use_router();
    let path = router.current_path();

    move || {
        tab_states(tabs, &path.get())
            .into_iter()
            .map(|state| {
                let class = format!("{} {}", item_class, tab_class(state.variant()));
                view! {
                    <Link to=state.tab.path class=class>
                        <NavIcon icon=state.tab.icon />
                        <span>{state.tab.label}</span>
                    </Link>
                }
            })
            .collect_view()
    }
}

#[derive(Clone, Copy)]
enum Axis {
    Vertical,
    Horizontal,
}

fn indicator_style(axis: Axis, at: Option<Highlight>) -> String {
    let Some(h) = at else {
        return "opacity: 0;".to_string();
    };
    match axis {
        Axis::Vertical => format!(
            "height: {:.4}%; transform: translateY({}%);",
            h.size_percent(),
            h.offset_percent()
        ),
        Axis::Horizontal => format!(
            "width: {:.4}%; transform: translateX({}%);",
            h.size_percent(),
            h.offset_percent()
        ),
    }
}

/// 唯一的高亮条，激活标签变化时平移到新的槽位
#[component]
fn Indicator(tabs: &'static [Tab], inserted_at: Option<usize>, axis: Axis) -> impl IntoView {
    let router = use_router();
    let path = router.current_path();
    let at = Memo::new(move |_| highlight(tabs, &path.get(), inserted_at));

    let class = match axis {
        Axis::Vertical => "absolute left-0 top-0 w-1 flex items-center",
        Axis::Horizontal => "absolute left-0 top-0 h-1 flex justify-center",
    };
    let bar = match axis {
        Axis::Vertical => "w-1 h-8 bg-green-500 rounded-r-full",
        Axis::Horizontal => "h-1 w-8 bg-green-500 rounded-b-full",
    };

    view! {
        <div
            aria-hidden="true"
            class=format!("{} pointer-events-none transition-all duration-300 ease-out", class)
            style=move || indicator_style(axis, at.get())
        >
            <div class=bar></div>
        </div>
    }
}

#[component]
fn SideNav() -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();
    let on_logout = move |_| logout(&ctx, router);

    view! {
        <aside class="hidden md:flex flex-col w-64 h-screen sticky top-0 bg-white border-r border-gray-100 p-4">
            <div class="flex items-center gap-2 px-3 py-4 text-green-700">
                <SproutIcon />
                <span class="text-xl font-bold">"AgriConnect"</span>
            </div>
            <nav class="flex flex-col flex-1">
                <div class="relative flex flex-col">
                    <Indicator tabs=SIDE_TABS inserted_at=None axis=Axis::Vertical />
                    <TabList tabs=SIDE_TABS item_class="flex items-center gap-3 px-4 h-12 rounded-xl" />
                </div>
                <Link to=COMPOSE_SIDE.path class="btn btn-success text-white rounded-xl mt-4">
                    <NavIcon icon=COMPOSE_SIDE.icon />
                    <span>{COMPOSE_SIDE.label}</span>
                </Link>
            </nav>
            {move || match ctx.user.get() {
                Some(user) => view! {
                    <div class="flex items-center gap-3 p-3 rounded-xl bg-gray-50">
                        <Avatar src=user.avatar.clone() name=user.name.clone() />
                        <div class="flex-1 min-w-0">
                            <p class="font-semibold truncate">{user.name.clone()}</p>
                            <p class="text-xs text-gray-500">{user.role.handle()}</p>
                        </div>
                        <button class="btn btn-ghost btn-sm" title="Log out" on:click=on_logout>
                            <LogOutIcon />
                        </button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <Link to="/login" class="btn btn-outline btn-success rounded-xl">"Sign In"</Link>
                }
                .into_any(),
            }}
        </aside>
    }
}

#[component]
fn BottomNav() -> impl IntoView {
    let item_class = "flex-1 flex flex-col items-center justify-center text-xs py-1";

    view! {
        <nav class="md:hidden fixed bottom-0 inset-x-0 bg-white border-t border-gray-100 flex py-2 z-50">
            <Indicator tabs=BOTTOM_TABS inserted_at=Some(BOTTOM_COMPOSE_SLOT) axis=Axis::Horizontal />
            <TabList tabs=&BOTTOM_TABS[..BOTTOM_COMPOSE_SLOT] item_class=item_class />
            <Link to=COMPOSE_BOTTOM.path class=format!("{} text-green-700", item_class)>
                <NavIcon icon=COMPOSE_BOTTOM.icon />
                <span>{COMPOSE_BOTTOM.label}</span>
            </Link>
            <TabList tabs=&BOTTOM_TABS[BOTTOM_COMPOSE_SLOT..] item_class=item_class />
        </nav>
    }
}
