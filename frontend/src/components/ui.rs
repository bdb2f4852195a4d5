//! 通用展示组件
//!
//! 核心库给出视觉变体，这里负责把变体映射为样式类。

use crate::components::icons::{HeartIcon, MessageCircleIcon};
use crate::web::router::Link;
use agriconnect::nav::TabVariant;
use agriconnect::{AppRoute, MountScope, RequestResult};
use agriconnect::pages::{BubbleVariant, RoleVariant, SegmentVariant};
use agriconnect_shared::{ChatMessage, Comment, Community, Expert, Post};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

// =========================================================
// 变体 -> 样式
// =========================================================

pub fn tab_class(variant: TabVariant) -> &'static str {
    match variant {
        TabVariant::Active => "bg-green-50 text-green-700 font-semibold",
        TabVariant::Inactive => "text-gray-500 hover:bg-gray-50 hover:text-gray-900",
    }
}

pub fn bubble_class(variant: BubbleVariant) -> &'static str {
    match variant {
        BubbleVariant::Sent => "bg-green-600 text-white rounded-br-none self-end",
        BubbleVariant::Received => "bg-white text-gray-900 rounded-bl-none self-start shadow-sm",
    }
}

pub fn segment_class(variant: SegmentVariant) -> &'static str {
    match variant {
        SegmentVariant::Active => "bg-white text-gray-900 shadow-sm",
        SegmentVariant::Inactive => "text-gray-500 hover:text-gray-700",
    }
}

pub fn role_class(variant: RoleVariant) -> &'static str {
    match variant {
        RoleVariant::FarmerSelected => "border-green-600 bg-green-50 text-green-700",
        RoleVariant::ExpertSelected => "border-blue-600 bg-blue-50 text-blue-700",
        RoleVariant::Unselected => "border-gray-200",
    }
}

// =========================================================
// 数据加载
// =========================================================

/// 页面数据的加载状态，`None` 表示仍在加载
pub type Loaded<T> = RwSignal<Option<Result<T, String>>>;

/// 在页面作用域内运行加载任务，页面卸载后结果被丢弃
pub fn load_guarded<T, Fut>(
    scope: StoredValue<MountScope, LocalStorage>,
    target: Loaded<T>,
    fut: Fut,
) where
    T: Send + Sync + 'static,
    Fut: Future<Output = RequestResult<T>> + 'static,
{
    let token = scope.with_value(MountScope::token);
    spawn_local(async move {
        let result = fut.await.map_err(|e| {
            log::warn!("[Page] load failed: {}", e);
            e.message
        });
        token.apply(result, |r| target.set(Some(r)));
    });
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-12">
            <span class="loading loading-spinner loading-lg text-success"></span>
        </div>
    }
}

/// 按加载状态渲染：加载中、失败提示或内容
pub fn render_loaded<T, V>(
    state: Loaded<T>,
    render: impl Fn(&T) -> V + Send + Sync + 'static,
) -> impl IntoView
where
    T: Send + Sync + 'static,
    V: IntoAny + 'static,
{
    move || {
        state.with(|s| match s {
            None => view! { <Spinner /> }.into_any(),
            Some(Err(msg)) => view! {
                <div role="alert" class="alert alert-error text-sm m-4">
                    <span>{msg.clone()}</span>
                </div>
            }
            .into_any(),
            Some(Ok(value)) => render(value).into_any(),
        })
    }
}

// =========================================================
// 组件
// =========================================================

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[component]
pub fn Avatar(
    src: Option<String>,
    #[prop(into)] name: String,
    #[prop(default = "w-10 h-10")] size: &'static str,
) -> impl IntoView {
    let class = format!("{} rounded-full object-cover bg-gray-200 shrink-0", size);
    match src {
        Some(src) => view! { <img src=src alt=name class=class /> }.into_any(),
        None => {
            let class = format!("{} flex items-center justify-center text-sm font-semibold", class);
            view! { <div class=class>{initials(&name)}</div> }.into_any()
        }
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = AppRoute::PostDetail {
        id: post.id.clone(),
    }
    .to_path();
    let title = post.title.clone().unwrap_or_default();

    view! {
        <article class="card bg-base-100 shadow-sm">
            <div class="card-body p-4 gap-3">
                <div class="flex items-center gap-3">
                    <Avatar src=post.author.avatar.clone() name=post.author.name.clone() />
                    <div>
                        <h3 class="font-bold text-gray-900">{post.author.name.clone()}</h3>
                        <span class="text-xs text-gray-500">
                            {format!("{} • {}", post.time_ago, post.author.role)}
                        </span>
                    </div>
                </div>
                <Link to=href.clone()>
                    <h2 class="text-lg font-bold">{title.clone()}</h2>
                    <p class="text-gray-700 line-clamp-3">{post.description.clone()}</p>
                </Link>
                {post.image.clone().map(|src| view! {
                    <img src=src alt=title class="rounded-xl w-full object-cover max-h-80" />
                })}
                <div class="flex flex-wrap gap-2">
                    {post.tags.iter().map(|t| view! {
                        <span class="badge badge-ghost text-xs">{format!("#{}", t)}</span>
                    }).collect_view()}
                </div>
                <div class="flex items-center gap-6 text-gray-500 text-sm">
                    <span class="flex items-center gap-1"><HeartIcon />{post.likes}</span>
                    <Link to=href class="flex items-center gap-1">
                        <MessageCircleIcon />{post.comments}
                    </Link>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn ExpertCard(expert: Expert) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 p-4 bg-white rounded-2xl shadow-sm">
            <Avatar src=expert.avatar.clone() name=expert.name.clone() size="w-14 h-14" />
            <div class="flex-1 min-w-0">
                <h3 class="font-semibold text-gray-900 truncate">{expert.name.clone()}</h3>
                <p class="text-sm text-green-700">{expert.specialty.clone()}</p>
                <p class="text-xs text-gray-500">{format!("{} followers", expert.followers)}</p>
            </div>
            <button class="btn btn-sm btn-outline btn-success rounded-full">"Follow"</button>
        </div>
    }
}

#[component]
pub fn CommunityCard(community: Community) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 p-4 bg-white rounded-2xl shadow-sm">
            <Avatar src=community.image.clone() name=community.name.clone() size="w-14 h-14" />
            <div class="flex-1 min-w-0">
                <h3 class="font-semibold text-gray-900 truncate">{community.name.clone()}</h3>
                <p class="text-sm text-gray-500">{community.description.clone().unwrap_or_default()}</p>
                <p class="text-xs text-gray-500">{format!("{} members", community.members)}</p>
            </div>
            <button class="btn btn-sm btn-success rounded-full">"Join"</button>
        </div>
    }
}

#[component]
pub fn CommentItem(comment: Comment) -> impl IntoView {
    view! {
        <div class="flex gap-3">
            <Avatar src=comment.avatar.clone() name=comment.author.clone() size="w-8 h-8" />
            <div class="flex-1 bg-gray-50 rounded-2xl px-4 py-2">
                <div class="flex items-center justify-between">
                    <span class="font-semibold text-sm">{comment.author.clone()}</span>
                    <span class="text-xs text-gray-400">{comment.time_ago.clone()}</span>
                </div>
                <p class="text-sm text-gray-700">{comment.text.clone()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let variant = BubbleVariant::of(&message);
    let class = format!("max-w-[75%] px-4 py-2 rounded-2xl {}", bubble_class(variant));
    let time_class = match variant {
        BubbleVariant::Sent => "text-[10px] text-green-100 text-right",
        BubbleVariant::Received => "text-[10px] text-gray-400",
    };

    view! {
        <div id=message.id.clone() class=class>
            <p class="text-sm">{message.message.clone()}</p>
            <p class=time_class>{message.time.clone()}</p>
        </div>
    }
}
