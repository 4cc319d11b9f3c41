use crate::layout::global_context::AppGlobalContext;
use crate::layout::notice_service::NoticeService;
use crate::layout::Shell;
use crate::shared::api::HttpApiClient;
use crate::shared::config::AppConfig;
use crate::shared::permissions::PermissionBootstrap;
use crate::shared::services::AppServices;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_environment();
    log::info!("API base: {}", config.api_base);

    let client = Rc::new(HttpApiClient::new(
        config.api_base.clone(),
        config.login_url.clone(),
    ));
    provide_context(AppServices::new(client, PermissionBootstrap::new()));
    provide_context(NoticeService::new(config.notice_ttl_ms));
    provide_context(AppGlobalContext::new());
    provide_context(config);

    view! { <Shell /> }
}
