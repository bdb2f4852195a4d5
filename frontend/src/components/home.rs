use crate::auth::use_auth;
use crate::components::icons::SearchIcon;
use crate::components::ui::{Loaded, PostCard, load_guarded, render_loaded};
use agriconnect::MountScope;
use agriconnect_shared::Post;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_auth();
    let scope = StoredValue::new_local(MountScope::new());
    let feed: Loaded<Vec<Post>> = RwSignal::new(None);

    let source = ctx.source();
    load_guarded(scope, feed, async move { source.feed().await });

    view! {
        <div class="pb-20">
            <header class="sticky top-0 z-40 bg-white/80 backdrop-blur-md border-b border-gray-100 px-4 py-3 flex items-center justify-between">
                <h1 class="text-xl font-bold text-green-700">"AgriConnect"</h1>
                <button class="text-gray-500 hover:text-gray-900">
                    <SearchIcon />
                </button>
            </header>

            <div class="p-4 space-y-4">
                {render_loaded(feed, |posts: &Vec<Post>| {
                    posts.iter().cloned().map(|post| view! { <PostCard post=post /> }).collect_view()
                })}
            </div>
        </div>
    }
}
