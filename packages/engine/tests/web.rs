#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use lifeglow_engine::{BackgroundCore, CanvasSurface, EffectSettings, Surface};

wasm_bindgen_test_configure!(run_in_browser);

fn make_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().and_then(|w| w.document()).expect("document");
    let canvas = document
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into::<HtmlCanvasElement>()
        .expect("canvas element");
    canvas.set_id(id);
    document.body().expect("body").append_child(&canvas).expect("append");
    canvas
}

#[wasm_bindgen_test]
fn canvas_surface_resizes_and_paints() {
    let mut surface = CanvasSurface::new(make_canvas("bg-paint")).expect("2d context");
    surface.set_size(200, 100);
    assert_eq!(surface.size(), (200.0, 100.0));

    let mut core = BackgroundCore::with_seed(EffectSettings::DEFAULT, 9);
    core.on_resize(200.0, 100.0);
    core.spark_at_local(10.0, 10.0);
    let counts = core.paint(&mut surface);
    assert_eq!(counts.sparks, 1);
    assert_eq!(counts.cells, core.automaton().grid().live_count());
}

#[wasm_bindgen_test]
fn mount_reports_missing_elements() {
    make_canvas("bg-mount");
    assert!(lifeglow_engine::mount("bg-missing", "bg-mount").is_err());
    assert!(lifeglow_engine::mount("bg-mount", "hero-missing").is_err());
}

#[wasm_bindgen_test]
fn mount_starts_the_loop() {
    make_canvas("bg-live");
    let handle = lifeglow_engine::mount("bg-live", "bg-live").expect("mounted");
    assert_eq!(handle.generation(), 1);
    assert!(handle.stamp_pattern("glider", 0, 0) || handle.cols() == 0);
    assert!(!handle.stamp_pattern("no-such-pattern", 0, 0));
}
