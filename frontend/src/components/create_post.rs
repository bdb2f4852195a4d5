use crate::auth::use_auth;
use crate::components::icons::{CloseIcon, ImageIcon};
use crate::components::ui::{Avatar, ErrorAlert};
use crate::web::read_data_url;
use crate::web::router::use_router;
use agriconnect::pages::{CreatePostForm, SUBMIT_LATENCY};
use agriconnect::{MountScope, fixtures};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

#[component]
pub fn CreatePostPage() -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();

    let form = RwSignal::new(CreatePostForm::new());
    let error = RwSignal::new(None::<String>);
    let scope = StoredValue::new_local(MountScope::new());

    let on_file = move |ev: leptos::web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let token = scope.with_value(MountScope::token);
        spawn_local(async move {
            let result = read_data_url(&file).await;
            token.apply(result, |r| {
                let attached = match r {
                    Ok(url) => form
                        .try_update(|f| f.attach_image(url))
                        .unwrap_or(Ok(()))
                        .map_err(|e| e.message),
                    Err(e) => {
                        log::warn!("[CreatePost] {}", e);
                        Err("Could not read the selected file".to_string())
                    }
                };
                error.set(attached.err());
            });
        });
    };

    let on_submit = move |_| {
        if !form.try_update(CreatePostForm::begin).unwrap_or(false) {
            return;
        }

        let token = scope.with_value(MountScope::token);
        spawn_local(async move {
            gloo_timers::future::sleep(SUBMIT_LATENCY).await;
            let mut target = None;
            token.apply((), |_| form.update(|f| target = Some(f.finish())));
            if let Some(target) = target {
                router.navigate_to(target);
            }
        });
    };

    let author = move || ctx.user.get().unwrap_or_else(fixtures::current_user);
    let submitting = move || form.with(|f| f.submitting);

    view! {
        <div class="min-h-screen bg-white pb-24">
            <header class="sticky top-0 z-40 bg-white border-b border-gray-100 px-4 py-3 flex items-center justify-between">
                <div class="flex items-center gap-4">
                    <button class="text-gray-600" on:click=move |_| router.back()>
                        <CloseIcon />
                    </button>
                    <h1 class="font-semibold text-gray-900">"Create Post"</h1>
                </div>
                <button
                    class="btn btn-success btn-sm text-white rounded-full px-6"
                    disabled=submitting
                    on:click=on_submit
                >
                    {move || if submitting() {
                        view! { <span class="loading loading-spinner loading-xs"></span> }.into_any()
                    } else {
                        "Post".into_any()
                    }}
                </button>
            </header>

            <div class="p-4 space-y-4">
                {move || {
                    let user = author();
                    view! {
                        <div class="flex items-center gap-3">
                            <Avatar src=user.avatar.clone() name=user.name.clone() />
                            <div>
                                <p class="font-semibold text-gray-900">{user.name.clone()}</p>
                                <span class="badge badge-ghost text-xs">"Public"</span>
                            </div>
                        </div>
                    }
                }}

                <ErrorAlert message=error />

                <input
                    type="text"
                    placeholder="Give your post a title..."
                    class="w-full text-xl font-bold placeholder-gray-400 border-none focus:outline-none"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
                <textarea
                    placeholder="Share your farming experience or ask a question..."
                    class="w-full min-h-[200px] text-gray-700 placeholder-gray-400 border-none focus:outline-none resize-none"
                    prop:value=move || form.with(|f| f.body.clone())
                    on:input=move |ev| form.update(|f| f.body = event_target_value(&ev))
                ></textarea>

                {move || form.with(|f| f.image.clone()).map(|src| view! {
                    <div class="relative rounded-2xl overflow-hidden">
                        <img src=src alt="Upload preview" class="w-full h-auto max-h-80 object-cover" />
                        <button
                            type="button"
                            class="absolute top-2 right-2 btn btn-circle btn-xs bg-black/50 text-white border-none"
                            on:click=move |_| form.update(CreatePostForm::remove_image)
                        >
                            <CloseIcon />
                        </button>
                    </div>
                })}
            </div>

            <div class="fixed bottom-0 inset-x-0 p-4 bg-white border-t border-gray-100">
                <div class="flex items-center gap-4 max-w-md mx-auto">
                    <label class="p-3 text-green-600 bg-green-50 rounded-xl cursor-pointer hover:bg-green-100">
                        <input type="file" accept="image/*" class="hidden" on:change=on_file />
                        <ImageIcon />
                    </label>
                </div>
            </div>
        </div>
    }
}
