use dioxus::prelude::*;
use crate::components::landing::{ FeaturesSection, Footer, HeroSection, Navbar, StatsSection };
use crate::utils::PortalContent;

#[component]
pub fn Landing() -> Element {
    let content = use_hook(PortalContent::load);

    rsx! {
        div { class: "landing min-h-screen",
            Navbar {}
            HeroSection { stats: content.landing_stats.clone() }
            FeaturesSection { features: content.features.clone() }
            StatsSection { stats: content.landing_stats.clone() }
            Footer {}
        }
    }
}
