use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires authentication
/// Renders nothing until the user is signed in
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show when=move || auth.is_authenticated.get()>
            {children()}
        </Show>
    }
}
