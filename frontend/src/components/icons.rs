//! 线条图标（lucide 风格的 24x24 SVG）

use agriconnect::nav::Icon;
use leptos::prelude::*;

#[component]
fn Svg(children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="h-6 w-6"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn HomeIcon() -> impl IntoView {
    view! {
        <Svg>
            <path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
            <polyline points="9 22 9 12 15 12 15 22" />
        </Svg>
    }
}

#[component]
pub fn UsersIcon() -> impl IntoView {
    view! {
        <Svg>
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
            <circle cx="9" cy="7" r="4" />
            <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
            <path d="M16 3.13a4 4 0 0 1 0 7.75" />
        </Svg>
    }
}

#[component]
pub fn PlusSquareIcon() -> impl IntoView {
    view! {
        <Svg>
            <rect width="18" height="18" x="3" y="3" rx="2" />
            <path d="M8 12h8" />
            <path d="M12 8v8" />
        </Svg>
    }
}

#[component]
pub fn MessageCircleIcon() -> impl IntoView {
    view! {
        <Svg>
            <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z" />
        </Svg>
    }
}

#[component]
pub fn UserIcon() -> impl IntoView {
    view! {
        <Svg>
            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
            <circle cx="12" cy="7" r="4" />
        </Svg>
    }
}

#[component]
pub fn ArrowLeftIcon() -> impl IntoView {
    view! {
        <Svg>
            <path d="m12 19-7-7 7-7" />
            <path d="M19 12H5" />
        </Svg>
    }
}

#[component]
pub fn CloseIcon() -> impl IntoView {
    view! {
        <Svg>
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </Svg>
    }
}

#[component]
pub fn SendIcon() -> impl IntoView {
    view! {
        <Svg>
            <path d="m22 2-7 20-4-9-9-4Z" />
            <path d="M22 2 11 13" />
        </Svg>
    }
}

#[component]
pub fn ImageIcon() -> impl IntoView {
    view! {
        <Svg>
            <rect width="18" height="18" x="3" y="3" rx="2" ry="2" />
            <circle cx="9" cy="9" r="2" />
            <path d="m21 15-3.09-3.09a2 2 0 0 0-2.82 0L6 21" />
        </Svg>
    }
}

#[component]
pub fn HeartIcon() -> impl IntoView {
    view! {
        <Svg>
            <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" />
        </Svg>
    }
}

#[component]
pub fn SearchIcon() -> impl IntoView {
    view! {
        <Svg>
            <circle cx="11" cy="11" r="8" />
            <path d="m21 21-4.3-4.3" />
        </Svg>
    }
}

#[component]
pub fn SproutIcon() -> impl IntoView {
    view! {
        <Svg>
            <path d="M7 20h10" />
            <path d="M10 20c5.5-2.5.8-6.4 3-10" />
            <path d="M9.5 9.4c1.1.8 1.8 2.2 2.3 3.7-2 .4-3.5.4-4.8-.3-1.2-.6-2.3-1.9-3-4.2 2.8-.5 4.4 0 5.5.8z" />
            <path d="M14.1 6a7 7 0 0 0-1.1 4c1.9-.1 3.3-.6 4.3-1.4 1-1 1.6-2.3 1.7-4.6-2.7.1-4 1-4.9 2z" />
        </Svg>
    }
}

#[component]
pub fn LogOutIcon() -> impl IntoView {
    view! {
        <Svg>
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" />
            <polyline points="16 17 21 12 16 7" />
            <line x1="21" x2="9" y1="12" y2="12" />
        </Svg>
    }
}

/// 导航图标引用到具体组件
#[component]
pub fn NavIcon(icon: Icon) -> impl IntoView {
    match icon {
        Icon::Home => view! { <HomeIcon /> }.into_any(),
        Icon::Users => view! { <UsersIcon /> }.into_any(),
        Icon::PlusSquare => view! { <PlusSquareIcon /> }.into_any(),
        Icon::MessageCircle => view! { <MessageCircleIcon /> }.into_any(),
        Icon::User => view! { <UserIcon /> }.into_any(),
    }
}
