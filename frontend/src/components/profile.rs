//! 个人主页
//!
//! 已登录时展示会话中的用户，否则从数据来源读取当前用户。

use crate::auth::use_auth;
use crate::components::ui::{Avatar, Loaded, PostCard, load_guarded, render_loaded};
use agriconnect::MountScope;
use agriconnect_shared::{Post, User};
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_auth();
    let scope = StoredValue::new_local(MountScope::new());
    let user: Loaded<User> = RwSignal::new(None);
    let posts: Loaded<Vec<Post>> = RwSignal::new(None);

    match ctx.user.get_untracked() {
        Some(me) => user.set(Some(Ok(me))),
        None => {
            let source = ctx.source();
            load_guarded(scope, user, async move { source.current_user().await });
        }
    }
    let source = ctx.source();
    load_guarded(scope, posts, async move { source.feed().await });

    view! {
        <div class="min-h-screen bg-gray-50 pb-24">
            <header class="bg-white sticky top-0 z-40 border-b border-gray-100 px-4 py-3">
                <h1 class="font-bold text-lg">"My Profile"</h1>
            </header>

            {render_loaded(user, |user: &User| view! { <ProfileHeader user=user.clone() /> })}

            <div class="px-4 space-y-4">
                <h3 class="font-bold text-gray-900 text-lg">"Recent Posts"</h3>
                {render_loaded(posts, |posts: &Vec<Post>| {
                    posts.iter().cloned().map(|post| view! { <PostCard post=post /> }).collect_view()
                })}
            </div>
        </div>
    }
}

#[component]
fn ProfileHeader(user: User) -> impl IntoView {
    let stats = [
        (user.posts, "Posts"),
        (user.followers, "Followers"),
        (user.following, "Following"),
    ];

    view! {
        <div class="bg-white pb-6 mb-4">
            <div class="relative h-32 bg-green-600">
                <div class="absolute -bottom-12 left-4 p-1 bg-white rounded-full">
                    <Avatar src=user.avatar.clone() name=user.name.clone() size="w-24 h-24" />
                </div>
            </div>

            <div class="pt-14 px-4 space-y-4">
                <div>
                    <h2 class="text-2xl font-bold text-gray-900">{user.name.clone()}</h2>
                    <span class="badge badge-success badge-outline text-xs mt-1">{user.role.as_str()}</span>
                </div>
                {user.bio.clone().map(|bio| view! { <p class="text-gray-600 leading-relaxed">{bio}</p> })}
                {user.location.clone().map(|loc| view! { <p class="text-sm text-gray-500">{loc}</p> })}

                <div class="flex items-center gap-8 border-t border-gray-100 pt-4">
                    {stats.into_iter().map(|(count, label)| view! {
                        <div class="text-center">
                            <div class="font-bold text-gray-900 text-lg">{count}</div>
                            <div class="text-xs text-gray-500">{label}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
