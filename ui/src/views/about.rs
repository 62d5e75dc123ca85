use dioxus::prelude::*;

use crate::components::{AppNavbar, SiteFooter};
use crate::core::sample::{ADVISOR, MISSION, TEAM};
use crate::t;

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "page page-about",
            AppNavbar {}

            main { class: "page__main",
                section { class: "about__title",
                    h1 { class: "page-title", {t!("about-title")} }
                    p { class: "about__subtitle",
                        "Automated Bibliometric Data Gathering System - Revolutionizing research evaluation through intelligent automation and comprehensive data collection across global scholarly databases."
                    }
                }

                section { class: "about__mission",
                    h2 { class: "section-title", {t!("about-mission")} }
                    div { class: "mission-cards",
                        for card in MISSION.iter() {
                            div { key: "{card.title}", class: "mission-card",
                                h3 { "{card.title}" }
                                p { "{card.body}" }
                            }
                        }
                    }
                }

                section { class: "about__team",
                    h2 { class: "section-title", {t!("about-team")} }
                    div { class: "advisor-card",
                        h3 { class: "advisor-card__title", {t!("about-advisor")} }
                        h2 { class: "advisor-card__name", "{ADVISOR.name}" }
                        p { class: "advisor-card__credentials", "{ADVISOR.credentials}" }
                        p { class: "advisor-card__position", "{ADVISOR.position}" }
                        div { class: "advisor-card__links",
                            for profile in ADVISOR.profiles.iter() {
                                a { key: "{profile}", href: "#", class: "link-item", "{profile}" }
                            }
                        }
                    }
                    div { class: "members-grid",
                        for member in TEAM.iter() {
                            div { key: "{member.id}", class: "member-card",
                                div { class: "member-card__icon", i { class: "bx bxs-user" } }
                                h3 { "{member.name}" }
                                p { "{member.id}" }
                            }
                        }
                    }
                }
            }

            SiteFooter {}
        }
    }
}
