pub mod center;
pub mod global_context;
pub mod left;
pub mod notice_service;
pub mod tabs;
pub mod top_header;

use center::tabs::Tabs;
use left::Sidebar;
use leptos::prelude::*;
use notice_service::NoticeStack;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |    Tabs                      |
/// |   (Left)  |   (Center)                   |
/// +------------------------------------------+
/// ```
///
/// Notices float above everything.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<global_context::AppGlobalContext>()
        .expect("AppGlobalContext not found");
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>
                    <Sidebar />
                </left::Left>
                <div class="app-main">
                    <center::Center>
                        <Tabs />
                    </center::Center>
                </div>
            </div>
            <NoticeStack />
        </div>
    }
}
