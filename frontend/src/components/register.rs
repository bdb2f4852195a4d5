use crate::auth::use_auth;
use crate::components::icons::ArrowLeftIcon;
use crate::components::ui::{ErrorAlert, role_class};
use crate::web::router::{Link, use_router};
use agriconnect::MountScope;
use agriconnect::pages::RegisterForm;
use agriconnect::pages::register::ROLE_OPTIONS;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();

    let form = RwSignal::new(RegisterForm::new());
    let scope = StoredValue::new_local(MountScope::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(req) = form.try_update(|f| f.begin()).flatten() else {
            return;
        };

        let token = scope.with_value(MountScope::token);
        let api = ctx.api();
        spawn_local(async move {
            let result = api.register(&req).await;
            let mut target = None;
            token.apply(result, |r| form.update(|f| target = f.finish(r)));
            if let Some(target) = target {
                router.navigate_to(target);
            }
        });
    };

    let error = Signal::derive(move || form.with(|f| f.error.clone()));
    let submitting = move || form.with(|f| f.submitting);

    view! {
        <div class="min-h-screen p-6">
            <Link to="/login" class="inline-flex items-center gap-2 text-gray-600 hover:text-gray-900 mb-8">
                <ArrowLeftIcon />
                "Back to Login"
            </Link>

            <div class="max-w-sm mx-auto space-y-8">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">"Create Account"</h1>
                    <p class="text-gray-500">"Join our agricultural community."</p>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    {ROLE_OPTIONS.iter().map(|&(role, label)| {
                        let class = move || format!(
                            "flex flex-col items-center gap-2 p-4 rounded-xl border-2 transition-colors {}",
                            role_class(form.with(|f| f.role_variant(role)))
                        );
                        view! {
                            <button type="button" class=class on:click=move |_| form.update(|f| f.select_role(role))>
                                <span>{label}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>

                <form class="space-y-6" on:submit=on_submit>
                    <ErrorAlert message=error />
                    <Show when=move || form.with(|f| !f.requirements.is_empty())>
                        <ul class="list-disc list-inside text-sm text-error">
                            {move || form.with(|f| f.requirements.clone())
                                .into_iter()
                                .map(|item| view! { <li>{item}</li> })
                                .collect_view()}
                        </ul>
                    </Show>

                    <div class="form-control">
                        <label class="label" for="name">
                            <span class="label-text">"Full Name"</span>
                        </label>
                        <input
                            id="name"
                            type="text"
                            placeholder="John Doe"
                            class="input input-bordered w-full"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">"Email Address"</span>
                        </label>
                        <input
                            id="email"
                            type="email"
                            placeholder="john@example.com"
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
                            placeholder="Create a password"
                            class="input input-bordered w-full"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </div>

                    <button class="btn btn-success text-white w-full" disabled=submitting>
                        {move || if submitting() {
                            view! { <span class="loading loading-spinner"></span> "Creating..." }.into_any()
                        } else {
                            "Create Account".into_any()
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
