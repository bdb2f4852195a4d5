use crate::auth::{session, use_auth};
use crate::components::icons::SproutIcon;
use crate::components::ui::ErrorAlert;
use crate::web::router::{Link, use_router};
use agriconnect::MountScope;
use agriconnect::pages::LoginForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage(registered: bool) -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();

    let form = RwSignal::new(LoginForm::new(registered));
    let scope = StoredValue::new_local(MountScope::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(req) = form.try_update(|f| f.begin()).flatten() else {
            return;
        };

        let token = scope.with_value(MountScope::token);
        let api = ctx.api();
        spawn_local(async move {
            let result = api.login(&req).await;
            let mut target = None;
            token.apply(result, |r| {
                form.update(|f| target = f.finish(r, &session()));
            });
            if let Some(target) = target {
                ctx.sync_user();
                router.navigate_to(target);
            }
        });
    };

    let error = Signal::derive(move || form.with(|f| f.error.clone()));
    let submitting = move || form.with(|f| f.submitting);

    view! {
        <div class="min-h-screen flex items-center justify-center p-6">
            <div class="w-full max-w-sm space-y-8">
                <div class="text-center space-y-2">
                    <div class="inline-flex items-center justify-center w-16 h-16 rounded-2xl bg-green-600 text-white mb-4">
                        <SproutIcon />
                    </div>
                    <h1 class="text-3xl font-bold text-gray-900">"AgriConnect"</h1>
                    <p class="text-gray-500">"Welcome back"</p>
                </div>

                {move || form.with(|f| f.banner()).map(|text| view! {
                    <div role="status" class="alert alert-success text-sm py-2">
                        <span>{text}</span>
                    </div>
                })}

                <form class="space-y-6" on:submit=on_submit>
                    <ErrorAlert message=error />

                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">"Email Address"</span>
                        </label>
                        <input
                            id="email"
                            type="email"
                            placeholder="farmer@example.com"
                            class="input input-bordered w-full"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">"Password"</span>
                        </label>
                        <input
                            id="password"
                            type="password"
                            placeholder="••••••••"
                            class="input input-bordered w-full"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </div>

                    <button class="btn btn-success text-white w-full" disabled=submitting>
                        {move || if submitting() {
                            view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                        } else {
                            "Sign In".into_any()
                        }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-500">
                    "Don't have an account? "
                    <Link to="/register" class="font-semibold text-green-600 hover:underline">
                        "Create Account"
                    </Link>
                </p>
            </div>
        </div>
    }
}
