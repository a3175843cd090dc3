//! Inline stroke icons (lucide outlines).

use leptos::*;

#[component]
fn IconFrame(#[prop(into)] class: String, children: Children) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn MailIcon(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <IconFrame class=class>
            <rect width="20" height="16" x="2" y="4" rx="2"></rect>
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"></path>
        </IconFrame>
    }
}

#[component]
pub fn LockIcon(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <IconFrame class=class>
            <rect width="18" height="11" x="3" y="11" rx="2" ry="2"></rect>
            <path d="M7 11V7a5 5 0 0 1 10 0v4"></path>
        </IconFrame>
    }
}

#[component]
pub fn EyeIcon(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <IconFrame class=class>
            <path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"></path>
            <circle cx="12" cy="12" r="3"></circle>
        </IconFrame>
    }
}

#[component]
pub fn EyeOffIcon(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <IconFrame class=class>
            <path d="M9.88 9.88a3 3 0 1 0 4.24 4.24"></path>
            <path d="M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68"></path>
            <path d="M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61"></path>
            <line x1="2" x2="22" y1="2" y2="22"></line>
        </IconFrame>
    }
}
