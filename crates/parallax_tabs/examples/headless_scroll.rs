//! Headless Scroll Demo
//!
//! Mounts a parallax tabs view without a renderer and replays a short
//! interaction: regions report their heights, the user scrolls the header
//! away, switches tabs and scrolls far enough to trigger lazy loading.
//! Every frame the header slots receive is printed as JSON.
//!
//! Run with: RUST_LOG=debug cargo run -p parallax_tabs --example headless_scroll

use parallax_core::{ViewEvent, Viewport};
use parallax_tabs::{ParallaxConfig, ParallaxFrame, ParallaxTabsView, TabPage};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r##"
image_height = 250.0
header_height = 50.0
primary_color = "rgba(85, 186, 255, 1)"
secondary_color = "white"
scroll_threshold = 0.5
threshold_interval_ms = 2000
tab_headings = ["Posters", "Characters", "Extra"]
"##;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ParallaxConfig::from_toml_str(CONFIG)?;

    let mut view = ParallaxTabsView::builder()
        .config(config)
        .viewport(Viewport::new(390.0, 844.0))
        .header_top(|frame: &ParallaxFrame| {
            match serde_json::to_string(frame) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("frame not printable: {err}"),
            }
        })
        .header_bottom(|_: &ParallaxFrame| {})
        .sub_header(|_: &ParallaxFrame| {})
        .tabs([TabPage::new(), TabPage::new(), TabPage::new()])
        .on_scroll_past_threshold(|index| tracing::info!(index, "load more"))
        .build()?;

    let script = [
        ViewEvent::RegionLayout { index: 0, height: 1400.0 },
        ViewEvent::RegionLayout { index: 1, height: 320.0 },
        ViewEvent::Scroll { offset: -20.0 },
        ViewEvent::Scroll { offset: 0.0 },
        ViewEvent::Scroll { offset: 100.0 },
        ViewEvent::Scroll { offset: 200.0 },
        ViewEvent::Scroll { offset: 800.0 },
        ViewEvent::ScrollEnd,
        ViewEvent::TabChange { index: 2 },
        ViewEvent::RegionLayout { index: 2, height: 900.0 },
        ViewEvent::Scroll { offset: 700.0 },
        ViewEvent::Resize(Viewport::new(844.0, 390.0)),
        ViewEvent::Unmount,
    ];
    for event in script {
        tracing::info!(event_type = event.event_type(), ?event, "dispatch");
        view.handle_event(event);
    }

    Ok(())
}
