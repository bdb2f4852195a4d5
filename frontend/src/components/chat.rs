//! 聊天页
//!
//! 历史记录加载一次，之后发送的消息只追加到本地列表。

use crate::auth::use_auth;
use crate::components::icons::{ArrowLeftIcon, SendIcon};
use crate::components::ui::{Avatar, ChatBubble, Loaded, load_guarded, render_loaded};
use crate::web::router::use_router;
use crate::web::scroll_into_view;
use agriconnect::pages::ChatState;
use agriconnect::{MountScope, RequestError};
use leptos::prelude::*;

#[component]
pub fn ChatPage(id: String) -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();
    let scope = StoredValue::new_local(MountScope::new());
    let chat: Loaded<ChatState> = RwSignal::new(None);

    let source = ctx.source();
    let me = ctx.user_id();
    load_guarded(scope, chat, async move {
        let (conversations, history) = futures::try_join!(
            source.conversations(),
            source.chat_history(&id, me.as_deref())
        )?;
        Ok::<_, RequestError>(ChatState::open(&id, &conversations, history))
    });

    let edit = move |f: &dyn Fn(&mut ChatState)| {
        chat.update(|c| {
            if let Some(Ok(c)) = c {
                f(c);
            }
        })
    };
    let read = move |f: fn(&ChatState) -> bool| chat.with(|c| matches!(c, Some(Ok(c)) if f(c)));

    // 消息列表变化后滚动到最新一条
    Effect::new(move |_| {
        let anchor = chat.with(|c| match c {
            Some(Ok(c)) => c.scroll_anchor().map(str::to_string),
            _ => None,
        });
        if let Some(anchor) = anchor {
            scroll_into_view(&anchor);
        }
    });

    let on_send = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        edit(&|c| {
            c.send();
        });
    };

    let partner = move || {
        chat.with(|c| match c {
            Some(Ok(c)) => (c.partner.avatar.clone(), c.partner.name.clone()),
            _ => (None, String::new()),
        })
    };

    view! {
        <div class="flex flex-col h-screen bg-gray-50">
            <header class="bg-white border-b border-gray-100 px-4 py-3 flex items-center gap-3 shadow-sm z-10">
                <button class="text-gray-600 hover:text-gray-900" on:click=move |_| router.back()>
                    <ArrowLeftIcon />
                </button>
                {move || {
                    let (avatar, name) = partner();
                    view! {
                        <Avatar src=avatar name=name.clone() size="w-8 h-8" />
                        <div>
                            <h3 class="font-bold text-gray-900 text-sm">{name}</h3>
                            <span class="text-xs text-green-600">"Online"</span>
                        </div>
                    }
                }}
            </header>

            <div class="flex-1 overflow-y-auto p-4 flex flex-col gap-4">
                {render_loaded(chat, |c: &ChatState| {
                    c.messages.iter().cloned().map(|message| view! { <ChatBubble message=message /> }).collect_view()
                })}
            </div>

            <form class="bg-white border-t border-gray-100 p-4" on:submit=on_send>
                <div class="flex items-center gap-3 max-w-4xl mx-auto">
                    <input
                        type="text"
                        placeholder="Type a message..."
                        class="input input-bordered flex-1 rounded-full bg-gray-100"
                        prop:value=move || chat.with(|c| match c {
                            Some(Ok(c)) => c.draft.clone(),
                            _ => String::new(),
                        })
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            edit(&|c| c.draft = text.clone());
                        }
                    />
                    <button
                        type="submit"
                        class="btn btn-success btn-circle text-white"
                        disabled=move || !read(ChatState::can_send)
                    >
                        <SendIcon />
                    </button>
                </div>
            </form>
        </div>
    }
}
