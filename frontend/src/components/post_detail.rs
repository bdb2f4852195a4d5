use crate::auth::use_auth;
use crate::components::icons::{ArrowLeftIcon, HeartIcon, MessageCircleIcon, SendIcon};
use crate::components::ui::{Avatar, CommentItem, ErrorAlert, Spinner};
use crate::web::router::Link;
use agriconnect::MountScope;
use agriconnect::pages::PostDetailState;
use agriconnect_shared::Post;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn PostDetailPage(id: String) -> impl IntoView {
    let ctx = use_auth();
    let state = RwSignal::new(PostDetailState::new());
    let scope = StoredValue::new_local(MountScope::new());
    let post_id = StoredValue::new(id);

    // 挂载时读取帖子和评论
    {
        let token = scope.with_value(MountScope::token);
        let source = ctx.source();
        let id = post_id.get_value();
        spawn_local(async move {
            let result = PostDetailState::fetch(&*source, &id).await;
            token.apply(result, |r| state.update(|s| s.apply_load(r)));
        });
    }

    let on_comment = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = state.try_update(|s| s.begin_comment()).flatten() else {
            return;
        };

        let token = scope.with_value(MountScope::token);
        let source = ctx.source();
        let id = post_id.get_value();
        spawn_local(async move {
            let result = source.add_comment(&id, &text).await;
            token.apply(result, |r| state.update(|s| s.finish_comment(r)));
        });
    };

    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let me = move || ctx.user.get();

    view! {
        <div class="bg-white min-h-screen pb-24">
            <header class="sticky top-0 z-40 bg-white/80 backdrop-blur-md border-b border-gray-100 px-4 py-3 flex items-center gap-4">
                <Link to="/" class="text-gray-600 hover:text-gray-900">
                    <ArrowLeftIcon />
                </Link>
                <h1 class="font-semibold text-gray-900">"Post Details"</h1>
            </header>

            <div class="p-4 space-y-6">
                <ErrorAlert message=error />
                {move || {
                    if state.with(|s| s.loading) {
                        return view! { <Spinner /> }.into_any();
                    }
                    state.with(|s| s.post.clone())
                        .map(|post| view! { <PostBody post=post /> }.into_any())
                        .unwrap_or_else(|| ().into_any())
                }}

                <div class="space-y-4">
                    <h3 class="font-bold text-gray-900">"Comments"</h3>
                    {move || state.with(|s| s.comments.clone())
                        .into_iter()
                        .map(|comment| view! { <CommentItem comment=comment /> })
                        .collect_view()}
                </div>
            </div>

            <form
                class="fixed bottom-0 inset-x-0 p-4 bg-white border-t border-gray-100"
                on:submit=on_comment
            >
                <div class="flex items-center gap-3 max-w-md mx-auto">
                    {move || {
                        let (avatar, name) = me()
                            .map(|u| (u.avatar, u.name))
                            .unwrap_or_else(|| (None, "ME".to_string()));
                        view! { <Avatar src=avatar name=name size="w-8 h-8" /> }
                    }}
                    <input
                        type="text"
                        placeholder="Add a comment..."
                        class="input input-bordered input-sm flex-1 rounded-full bg-gray-100"
                        prop:value=move || state.with(|s| s.draft.clone())
                        on:input=move |ev| state.update(|s| s.draft = event_target_value(&ev))
                    />
                    <button
                        class="btn btn-success btn-sm btn-circle text-white"
                        disabled=move || !state.with(PostDetailState::can_comment)
                    >
                        <SendIcon />
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn PostBody(post: Post) -> impl IntoView {
    let title = post.title.clone().unwrap_or_default();

    view! {
        <article class="space-y-4">
            <div class="flex items-center gap-3">
                <Avatar src=post.author.avatar.clone() name=post.author.name.clone() />
                <div>
                    <h3 class="font-bold text-gray-900">{post.author.name.clone()}</h3>
                    <span class="text-xs text-gray-500">
                        {format!("{} • {}", post.time_ago, post.author.role)}
                    </span>
                </div>
            </div>
            <h1 class="text-xl font-bold text-gray-900">{title.clone()}</h1>
            <p class="text-gray-700 leading-relaxed">{post.description.clone()}</p>
            {post.image.clone().map(|src| view! {
                <img src=src alt=title class="w-full h-auto rounded-2xl shadow-sm" />
            })}
            <div class="flex items-center gap-6 py-4 border-y border-gray-100 text-gray-500">
                <span class="flex items-center gap-2"><HeartIcon />{post.likes}</span>
                <span class="flex items-center gap-2"><MessageCircleIcon />{post.comments}</span>
            </div>
        </article>
    }
}
