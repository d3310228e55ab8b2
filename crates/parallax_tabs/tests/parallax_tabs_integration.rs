//! Integration tests for the parallax tabs view
//!
//! These tests drive a mounted view through host events and verify that:
//! - Breakpoint tables hit their stops exactly and clamp at the ends
//! - Tab changes and region measurements keep the scroll extent consistent
//! - The threshold callback is debounced by the cooldown window and reads
//!   the settled position
//! - Colors interpolate channel by channel across the collapse range

use parallax_core::{Color, ManualClock, ViewEvent, Viewport};
use parallax_tabs::{
    ConfigError, HeaderSlot, ParallaxConfig, ParallaxFrame, ParallaxTabsView, RegionFrame,
    TabContent, TabPage,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

fn noop(_: &ParallaxFrame) {}

fn view_with(config: ParallaxConfig, tabs: usize) -> ParallaxTabsView {
    ParallaxTabsView::builder()
        .config(config)
        .viewport(Viewport::new(400.0, 800.0))
        .header_top(noop)
        .tabs((0..tabs).map(|_| TabPage::new()))
        .build()
        .unwrap()
}

/// Tab content that records every region frame it receives
struct RecordingTab {
    frames: Rc<RefCell<Vec<RegionFrame>>>,
}

impl TabContent for RecordingTab {
    fn apply(&mut self, frame: &RegionFrame) {
        self.frames.borrow_mut().push(frame.clone());
    }
}

#[test]
fn test_header_tables_exact_at_breakpoints() {
    let mut view = view_with(ParallaxConfig::default(), 1);

    // collapse range is 200
    view.scroll(0.0);
    let frame = view.last_frame().unwrap().clone();
    assert_eq!(frame.header_image.opacity, 1.0);
    assert_eq!(frame.header_image.scale, 1.0);
    assert_eq!(frame.tab_bar.background, Color::WHITE);

    view.scroll(200.0);
    let frame = view.last_frame().unwrap().clone();
    assert_eq!(frame.header_image.opacity, 0.0);
    assert_eq!(frame.tab_bar.text_color, Color::WHITE);
    assert_eq!(frame.header_bar.background, Color::TRANSPARENT);
    assert_eq!(frame.tab_bar.translate_y, 3.0);
}

#[test]
fn test_header_tables_clamp_outside_range() {
    let config = ParallaxConfig::default();
    let primary = config.primary_color;
    let mut view = view_with(config, 1);

    view.scroll(5000.0);
    let frame = view.last_frame().unwrap().clone();
    assert_eq!(frame.header_image.opacity, 0.0);
    assert_eq!(frame.tab_bar.background, primary);
    assert_eq!(frame.header_bar.background, primary);

    view.scroll(-5000.0);
    let frame = view.last_frame().unwrap().clone();
    assert_eq!(frame.header_image.opacity, 1.0);
    assert_eq!(frame.tab_bar.text_color, primary);
    assert_eq!(frame.header_bar.background, Color::TRANSPARENT);
}

#[test]
fn test_out_of_range_tab_change_is_ignored() {
    let mut view = view_with(ParallaxConfig::default(), 3);
    view.handle_event(ViewEvent::TabChange { index: 1 });
    assert_eq!(view.active_tab(), 1);

    view.handle_event(ViewEvent::TabChange { index: 3 });
    view.handle_event(ViewEvent::TabChange { index: usize::MAX });
    assert_eq!(view.active_tab(), 1);
}

#[test]
fn test_record_height_sets_extent() {
    let mut view = view_with(ParallaxConfig::default(), 2);

    view.handle_event(ViewEvent::RegionLayout { index: 0, height: 640.0 });
    assert_eq!(view.extent(), 640.0);

    view.handle_event(ViewEvent::RegionLayout { index: 0, height: 120.0 });
    assert_eq!(view.extent(), 500.0);
}

#[test]
fn test_record_height_includes_header_bottom_spacer() {
    let mut view = ParallaxTabsView::builder()
        .header_top(noop)
        .header_bottom(noop)
        .tab(TabPage::new())
        .build()
        .unwrap();

    view.handle_event(ViewEvent::RegionLayout { index: 0, height: 400.0 });
    assert_eq!(view.extent(), 530.0);
    assert_eq!(view.layout().region_padding, 130.0);
}

#[test]
fn test_threshold_fires_once_per_cooldown() {
    let clock = ManualClock::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = fired.clone();
    let mut view = ParallaxTabsView::builder()
        .header_top(noop)
        .tabs([TabPage::new(), TabPage::new()])
        .clock(clock.clone())
        .on_scroll_past_threshold(move |index| sink.borrow_mut().push(index))
        .build()
        .unwrap();

    // 0.5 of the 500 minimum
    view.scroll(260.0);
    clock.advance_ms(200);
    view.scroll(100.0);
    clock.advance_ms(200);
    view.scroll(300.0);
    assert_eq!(*fired.borrow(), vec![0]);

    clock.advance_ms(1100);
    view.handle_event(ViewEvent::TabChange { index: 1 });
    view.scroll(280.0);
    assert_eq!(*fired.borrow(), vec![0, 1]);
}

#[test]
fn test_threshold_waits_for_settled_position() {
    let clock = ManualClock::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = fired.clone();
    let mut view = ParallaxTabsView::builder()
        .header_top(noop)
        .tabs([TabPage::new(), TabPage::new()])
        .clock(clock.clone())
        .on_scroll_past_threshold(move |index| sink.borrow_mut().push(index))
        .build()
        .unwrap();

    assert!(view.on_scroll(300.0));
    assert!(fired.borrow().is_empty());
    assert_eq!(view.last_frame().unwrap().scroll.settled, 0.0);

    view.handle_event(ViewEvent::ScrollEnd);
    assert_eq!(*fired.borrow(), vec![0]);
    assert_eq!(view.last_frame().unwrap().scroll.settled, 300.0);
}

#[test]
fn test_threshold_skips_below_ratio() {
    let fired = Rc::new(RefCell::new(0));
    let count = fired.clone();
    let mut view = ParallaxTabsView::builder()
        .header_top(noop)
        .tab(TabPage::new())
        .on_scroll_past_threshold(move |_| *count.borrow_mut() += 1)
        .build()
        .unwrap();

    view.handle_event(ViewEvent::RegionLayout { index: 0, height: 2000.0 });
    view.scroll(900.0);
    assert_eq!(*fired.borrow(), 0);
}

#[test]
fn test_switching_back_keeps_recorded_height() {
    let mut view = view_with(ParallaxConfig::default(), 2);

    view.handle_event(ViewEvent::RegionLayout { index: 0, height: 400.0 });
    view.handle_event(ViewEvent::TabChange { index: 1 });
    view.handle_event(ViewEvent::TabChange { index: 0 });
    assert_eq!(view.extent(), 500.0);

    view.handle_event(ViewEvent::RegionLayout { index: 0, height: 900.0 });
    view.handle_event(ViewEvent::TabChange { index: 1 });
    view.handle_event(ViewEvent::TabChange { index: 0 });
    assert_eq!(view.extent(), 900.0);
}

#[test]
fn test_three_regions_end_to_end() {
    let frames: Vec<_> = (0..3).map(|_| Rc::new(RefCell::new(Vec::new()))).collect();
    let mut builder = ParallaxTabsView::builder().header_top(noop);
    for sink in &frames {
        builder = builder.tab(RecordingTab {
            frames: sink.clone(),
        });
    }
    let mut view = builder.build().unwrap();
    assert_eq!(view.extent(), 500.0);

    view.handle_event(ViewEvent::RegionLayout { index: 0, height: 600.0 });
    assert_eq!(view.extent(), 600.0);

    view.handle_event(ViewEvent::TabChange { index: 2 });
    assert_eq!(view.extent(), 500.0);

    view.handle_event(ViewEvent::RegionLayout { index: 2, height: 800.0 });
    assert_eq!(view.extent(), 800.0);

    let last = frames[2].borrow().last().cloned().unwrap();
    assert_eq!(
        last,
        RegionFrame {
            index: 2,
            active: true,
            height: 800.0,
            heading: "Tab 3".to_string(),
        }
    );
    let first = frames[0].borrow().last().cloned().unwrap();
    assert!(!first.active);
    assert_eq!(first.height, 600.0);
}

#[test]
fn test_color_midpoint_across_collapse_range() {
    let config = ParallaxConfig::default()
        .with_palette("#000000", "#ffffff")
        .unwrap();
    assert_eq!(config.collapse_range(), 200.0);
    let mut view = view_with(config, 1);

    view.scroll(100.0);
    let frame = view.last_frame().unwrap();
    assert_eq!(frame.tab_bar.background.to_hex_string(), "#808080");
}

#[test]
fn test_custom_accent_table() {
    let config = ParallaxConfig::from_toml_str(
        r##"
        [[accent_colors]]
        at = 0.0
        color = "#000000"

        [[accent_colors]]
        at = 200.0
        color = "#ffffff"
        "##,
    )
    .unwrap();
    let mut view = view_with(config, 1);

    view.scroll(100.0);
    let frame = view.last_frame().unwrap();
    assert_eq!(frame.tab_bar.text_color.to_hex_string(), "#808080");
    assert_eq!(frame.tab_bar.underline_color, frame.tab_bar.text_color);
}

#[test]
fn test_fast_channel_colors() {
    let config = ParallaxConfig::from_toml_str(r#"color_channel = "fast""#).unwrap();
    let mut view = view_with(config, 1);

    assert!(view.on_scroll(200.0));
    let frame = view.last_frame().unwrap();
    assert_eq!(frame.scroll.settled, 0.0);
    assert_eq!(frame.tab_bar.text_color, Color::WHITE);
}

#[test]
fn test_logic_motion_channel() {
    let config = ParallaxConfig::from_toml_str(r#"motion_channel = "logic""#).unwrap();
    let mut view = view_with(config, 1);

    assert!(view.on_scroll(200.0));
    let frame = view.last_frame().unwrap();
    assert_eq!(frame.scroll.fast, 200.0);
    assert_eq!(frame.header_image.opacity, 1.0);
    assert_eq!(frame.header_image.translate_y, 0.0);

    assert!(view.pump());
    let frame = view.last_frame().unwrap();
    assert_eq!(frame.header_image.opacity, 0.0);
    assert!((frame.header_image.translate_y - 130.0).abs() < 1e-3);
}

#[test]
fn test_reconfigure_resolves_headings() {
    let mut view = view_with(ParallaxConfig::default(), 2);

    view.reconfigure(ParallaxConfig {
        tab_headings: vec!["Posters".into(), "Characters".into()],
        ..Default::default()
    })
    .unwrap();
    let headings: Vec<_> = view.composer().registry().headings().collect();
    assert_eq!(headings, vec!["Posters", "Characters"]);
}

#[test]
fn test_reconfigure_keeps_tab_heading_override() {
    let frames = Rc::new(RefCell::new(Vec::new()));
    let mut view = ParallaxTabsView::builder()
        .header_top(noop)
        .tab(RecordingTab {
            frames: frames.clone(),
        })
        .tab(TabPage::new().heading("Extra"))
        .build()
        .unwrap();

    view.reconfigure(ParallaxConfig {
        tab_headings: vec!["Posters".into(), "Characters".into()],
        ..Default::default()
    })
    .unwrap();
    let headings: Vec<_> = view.composer().registry().headings().collect();
    assert_eq!(headings, vec!["Posters", "Extra"]);
    assert_eq!(frames.borrow().last().unwrap().heading, "Posters");
}

#[test]
fn test_reconfigure_rebuilds_tables() {
    let mut view = view_with(ParallaxConfig::default(), 1);
    view.handle_event(ViewEvent::RegionLayout { index: 0, height: 700.0 });

    let config = ParallaxConfig {
        image_height: 450.0,
        ..Default::default()
    };
    view.reconfigure(config).unwrap();
    assert_eq!(view.extent(), 700.0);

    view.scroll(200.0);
    assert_eq!(view.last_frame().unwrap().header_image.opacity, 0.5);

    let err = view
        .reconfigure(ParallaxConfig {
            faded_primary_opacity: 2.0,
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidParameter { name: "faded_primary_opacity", .. }));
    assert_eq!(view.composer().config().image_height, 450.0);
}

#[test]
fn test_optional_overlays_absent_when_not_mounted() {
    let mut view = view_with(ParallaxConfig::default(), 1);
    view.scroll(120.0);
    let frame = view.last_frame().unwrap();
    assert!(frame.header_bottom.is_none());
    assert!(frame.sub_header.is_none());
    assert!(!view.has_slot(HeaderSlot::SubHeader));
    assert_eq!(view.layout().sub_header_top, None);
}

#[test]
fn test_events_after_unmount_are_ignored() {
    let fired = Rc::new(RefCell::new(0));
    let count = fired.clone();
    let mut view = ParallaxTabsView::builder()
        .header_top(noop)
        .tabs([TabPage::new(), TabPage::new()])
        .on_scroll_past_threshold(move |_| *count.borrow_mut() += 1)
        .build()
        .unwrap();

    view.handle_event(ViewEvent::Unmount);
    view.handle_event(ViewEvent::Scroll { offset: 900.0 });
    view.handle_event(ViewEvent::TabChange { index: 1 });
    view.handle_event(ViewEvent::RegionLayout { index: 0, height: 900.0 });

    assert_eq!(*fired.borrow(), 0);
    assert_eq!(view.active_tab(), 0);
    assert_eq!(view.extent(), 500.0);
}

#[test]
fn test_frame_serializes_to_json() {
    let mut view = view_with(ParallaxConfig::default(), 1);
    view.scroll(50.0);
    let json = serde_json::to_value(view.last_frame().unwrap()).unwrap();
    assert_eq!(json["active_tab"], 0);
    assert_eq!(json["tab_bar"]["translate_y"], 3.0);
    assert!(json["header_bottom"].is_null());
}
