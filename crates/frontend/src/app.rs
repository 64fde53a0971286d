use crate::shared::config::PortalConfig;
use crate::system::auth::context::AuthProvider;
use crate::system::pages::config_error::ConfigErrorPage;
use crate::usecases::u001_file_upload::FileUploadPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match PortalConfig::from_build_env() {
        Ok(config) => {
            log::debug!(
                "Portal configured for {} ({} presentation)",
                config.api_base_url,
                config.presentation.as_str()
            );
            let auth_config = config.auth.clone();
            // Provide the portal configuration to the whole app via context.
            provide_context(config);

            view! {
                <AuthProvider config=auth_config>
                    <FileUploadPage />
                </AuthProvider>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("Portal is not configured: {}", e);
            view! { <ConfigErrorPage message=e.to_string() /> }.into_any()
        }
    }
}
