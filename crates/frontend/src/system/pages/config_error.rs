use leptos::prelude::*;
use thaw::*;

/// Shown instead of the portal when the build carries no usable configuration
#[component]
pub fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <div style="max-width: 40rem; margin: 4rem auto; padding: 0 1rem;">
            <MessageBar intent=MessageBarIntent::Error>
                <div>
                    <strong>"The upload portal is not configured."</strong>
                    <p>{message}</p>
                    <p>
                        "Set UPLOAD_PORTAL_API_BASE_URL, UPLOAD_PORTAL_AUTH_DOMAIN, "
                        "UPLOAD_PORTAL_AUTH_CLIENT_ID and UPLOAD_PORTAL_AUTH_AUDIENCE "
                        "when building the frontend."
                    </p>
                </div>
            </MessageBar>
        </div>
    }
}
