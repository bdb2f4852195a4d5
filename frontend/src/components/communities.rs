use crate::auth::use_auth;
use crate::components::icons::SearchIcon;
use crate::components::ui::{
    CommunityCard, ExpertCard, Loaded, load_guarded, render_loaded, segment_class,
};
use agriconnect::{MountScope, RequestError};
use agriconnect::pages::{CommunitiesState, Segment};
use leptos::prelude::*;

#[component]
pub fn CommunitiesPage() -> impl IntoView {
    let ctx = use_auth();
    let scope = StoredValue::new_local(MountScope::new());
    let state: Loaded<CommunitiesState> = RwSignal::new(None);

    let source = ctx.source();
    load_guarded(scope, state, async move {
        let (experts, communities) = futures::try_join!(source.experts(), source.communities())?;
        Ok::<_, RequestError>(CommunitiesState::new(experts, communities))
    });

    // 分段和搜索词在加载完成前不生效
    let edit = move |f: &dyn Fn(&mut CommunitiesState)| {
        state.update(|s| {
            if let Some(Ok(s)) = s {
                f(s);
            }
        })
    };
    let current = move |segment: Segment| {
        state.with(|s| match s {
            Some(Ok(s)) => s.variant(segment),
            _ => CommunitiesState::default().variant(segment),
        })
    };

    view! {
        <div class="min-h-screen bg-gray-50 pb-24">
            <header class="bg-white sticky top-0 z-40 border-b border-gray-100 px-4 py-3">
                <h1 class="text-xl font-bold text-gray-900 mb-4">"Discover"</h1>
                <label class="input input-bordered flex items-center gap-2 bg-gray-100">
                    <SearchIcon />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search experts, topics, or groups..."
                        on:input=move |ev| {
                            let query = event_target_value(&ev);
                            edit(&|s| s.query = query.clone());
                        }
                    />
                </label>
            </header>

            <div class="px-4 py-4">
                <div class="flex p-1 bg-gray-200 rounded-xl mb-6">
                    {Segment::ALL.into_iter().map(|segment| {
                        let class = move || format!(
                            "flex-1 py-2 text-sm font-medium rounded-lg transition-all {}",
                            segment_class(current(segment))
                        );
                        view! {
                            <button class=class on:click=move |_| edit(&|s| s.select(segment))>
                                {segment.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="space-y-4">
                    {render_loaded(state, |s: &CommunitiesState| match s.segment {
                        Segment::Experts => s.visible_experts().into_iter().cloned()
                            .map(|expert| view! { <ExpertCard expert=expert /> })
                            .collect_view()
                            .into_any(),
                        Segment::Communities => s.visible_communities().into_iter().cloned()
                            .map(|community| view! { <CommunityCard community=community /> })
                            .collect_view()
                            .into_any(),
                    })}
                </div>
            </div>
        </div>
    }
}
