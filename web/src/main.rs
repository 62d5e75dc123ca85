use dioxus::prelude::*;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(WebApp);
}

#[component]
fn WebApp() -> Element {
    rsx! {
        document::Title { "ScholarMetrics" }
        document::Style { "{MAIN_CSS_INLINE}" }
        ui::App {}
    }
}
