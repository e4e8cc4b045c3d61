use dioxus::prelude::*;
use ptik_portal::theme::ThemeProvider;
use ptik_portal::{ Dashboard, Landing, PortalConfig, PortalPage };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            let level = PortalConfig::from_env().log_level.to_string().to_lowercase();
            std::env::set_var("RUST_LOG", level);
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = console_log::init_with_level(PortalConfig::from_env().log_level) {
            web_sys::console::warn_1(&format!("Logger already initialised: {}", err).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(PortalConfig::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ThemeProvider {
            {
                match config.start_page {
                    PortalPage::Landing => rsx! { Landing {} },
                    PortalPage::Dashboard => rsx! { Dashboard {} },
                }
            }
        }
    }
}
