//! Top navigation bar: sidebar toggle, application title, profile shortcut
//! and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::system::auth::session;
use crate::system::profile::page::PROFILE_TAB_KEY;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let login_url = use_config().login_url;

    let is_sidebar_visible = move || ctx.left_open.get();
    let open_profile = move |_| ctx.open_tab(PROFILE_TAB_KEY, tab_label_for_key(PROFILE_TAB_KEY));
    let logout = move |_| {
        log::info!("Logout requested");
        session::expire(&login_url);
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menu" } else { "Mostrar menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"ERP Gestão"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=open_profile title="Meu perfil">
                    {icon("user")}
                </button>
                <button class="top-header__icon-btn" on:click=logout title="Sair">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
