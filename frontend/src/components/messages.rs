use crate::auth::use_auth;
use crate::components::icons::SearchIcon;
use crate::components::ui::{Avatar, Loaded, load_guarded, render_loaded};
use crate::web::router::Link;
use agriconnect::{AppRoute, MountScope};
use agriconnect_shared::Conversation;
use leptos::prelude::*;

#[component]
pub fn MessagesPage() -> impl IntoView {
    let ctx = use_auth();
    let scope = StoredValue::new_local(MountScope::new());
    let conversations: Loaded<Vec<Conversation>> = RwSignal::new(None);

    let source = ctx.source();
    load_guarded(scope, conversations, async move { source.conversations().await });

    view! {
        <div class="min-h-screen bg-white pb-24">
            <header class="sticky top-0 z-40 bg-white border-b border-gray-100 px-4 py-3">
                <h1 class="text-xl font-bold text-gray-900 mb-4">"Messages"</h1>
                <label class="input input-bordered flex items-center gap-2 bg-gray-100">
                    <SearchIcon />
                    <input type="text" class="grow" placeholder="Search messages..." />
                </label>
            </header>

            <div class="divide-y divide-gray-50">
                {render_loaded(conversations, |list: &Vec<Conversation>| {
                    list.iter().cloned().map(|c| view! { <ConversationRow conversation=c /> }).collect_view()
                })}
            </div>
        </div>
    }
}

#[component]
fn ConversationRow(conversation: Conversation) -> impl IntoView {
    let href = AppRoute::Chat {
        id: conversation.id.clone(),
    }
    .to_path();
    let unread = conversation.unread;
    let (time_class, preview_class) = if unread > 0 {
        ("text-xs text-green-600 font-bold", "text-sm truncate text-gray-900 font-medium")
    } else {
        ("text-xs text-gray-400", "text-sm truncate text-gray-500")
    };

    view! {
        <Link to=href class="flex items-center gap-4 p-4 hover:bg-gray-50 transition-colors">
            <Avatar src=conversation.sender.avatar.clone() name=conversation.sender.name.clone() size="w-12 h-12" />
            <div class="flex-1 min-w-0">
                <div class="flex items-center justify-between mb-1">
                    <h3 class="font-semibold text-gray-900 truncate">{conversation.sender.name.clone()}</h3>
                    <span class=time_class>{conversation.time.clone()}</span>
                </div>
                <div class="flex items-center justify-between">
                    <p class=preview_class>{conversation.last_message.clone()}</p>
                    <Show when=move || { unread > 0 }>
                        <span class="badge badge-success badge-sm text-white ml-2">{unread}</span>
                    </Show>
                </div>
            </div>
        </Link>
    }
}
