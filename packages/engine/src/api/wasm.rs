//! wasm-bindgen entry point.
//!
//! `mount` wires one `BackgroundCore` to the page: the canvas it paints, a
//! window resize listener, a click listener on the hero element, and the
//! setTimeout -> requestAnimationFrame chain. Callbacks live for the page's
//! lifetime and are never torn down.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use crate::domain::settings::EffectSettings;
use crate::grid::patterns;
use crate::simulation::{BackgroundCore, PerfStats, Scheduler, Surface};

use super::canvas::CanvasSurface;

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Mounted {
    core: BackgroundCore,
    surface: CanvasSurface,
}

/// setTimeout for the cadence, requestAnimationFrame for the frame.
#[derive(Clone)]
struct BrowserScheduler {
    window: Window,
    tick: Callback,
    frame: Callback,
}

impl Scheduler for BrowserScheduler {
    fn schedule_tick(&mut self, delay_ms: u32) {
        let tick = self.tick.borrow();
        let Some(callback) = tick.as_ref() else {
            return;
        };
        let delay = delay_ms.min(i32::MAX as u32) as i32;
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), delay)
        {
            console_log!("lifeglow: setTimeout failed, loop stopped: {:?}", err);
        }
    }

    fn request_frame(&mut self) {
        let frame = self.frame.borrow();
        let Some(callback) = frame.as_ref() else {
            return;
        };
        if let Err(err) = self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            console_log!("lifeglow: requestAnimationFrame failed, loop stopped: {:?}", err);
        }
    }
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

/// Handle returned to the page; the loop keeps running whether or not it is
/// kept.
#[wasm_bindgen]
pub struct BackgroundHandle {
    mounted: Rc<RefCell<Mounted>>,
}

#[wasm_bindgen]
impl BackgroundHandle {
    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.mounted.borrow().core.automaton().cols() }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.mounted.borrow().core.automaton().rows() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.mounted.borrow().core.automaton().generation() }

    #[wasm_bindgen(getter)]
    pub fn live_cells(&self) -> u32 { self.mounted.borrow().core.last_counts().live }

    #[wasm_bindgen(getter)]
    pub fn spark_count(&self) -> u32 { self.mounted.borrow().core.sparks().len() as u32 }

    /// Enable or disable per-frame timings (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&self, enabled: bool) {
        self.mounted.borrow_mut().core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.mounted.borrow().core.get_perf_stats()
    }

    /// Stamp a named pattern with its origin at `(col, row)`.
    /// Returns false for an unknown name or an empty board.
    pub fn stamp_pattern(&self, name: &str, col: i32, row: i32) -> bool {
        let Some(pattern) = patterns::find(name) else {
            return false;
        };
        let mut mounted = self.mounted.borrow_mut();
        patterns::stamp(mounted.core.automaton_mut().grid_mut(), pattern, col as i64, row as i64)
    }

    pub fn settings_json(&self) -> String {
        self.mounted.borrow().core.settings().manifest_json()
    }
}

/// Bind the background to `#canvas_id`, taking clicks from `#click_target_id`.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, click_target_id: &str) -> Result<BackgroundHandle, JsValue> {
    let window = web_sys::window().ok_or("no global `window`")?;
    let document = window.document().ok_or("window has no document")?;

    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{canvas_id}")))?
        .dyn_into::<HtmlCanvasElement>()?;
    let click_target = document
        .get_element_by_id(click_target_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element #{click_target_id}")))?;

    let mut surface = CanvasSurface::new(canvas)?;
    let (width, height) = viewport_size(&window)?;
    surface.set_size(width as u32, height as u32);

    let mut core = BackgroundCore::new(EffectSettings::DEFAULT);
    core.on_resize(width, height);

    let mounted = Rc::new(RefCell::new(Mounted { core, surface }));
    let scheduler = BrowserScheduler {
        window: window.clone(),
        tick: Rc::new(RefCell::new(None)),
        frame: Rc::new(RefCell::new(None)),
    };

    // Cadence timer: only requests a frame.
    {
        let mounted = mounted.clone();
        let mut sched = scheduler.clone();
        *scheduler.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            mounted.borrow_mut().core.on_tick(&mut sched);
        }) as Box<dyn FnMut()>));
    }

    // Frame callback: step + paint, then re-arm the timer.
    {
        let mounted = mounted.clone();
        let mut sched = scheduler.clone();
        *scheduler.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut guard = mounted.borrow_mut();
            let Mounted { core, surface } = &mut *guard;
            core.on_frame(surface, &mut sched);
        }) as Box<dyn FnMut()>));
    }

    let on_resize = {
        let mounted = mounted.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            let (width, height) = match viewport_size(&window) {
                Ok(size) => size,
                Err(err) => {
                    console_log!("lifeglow: could not read viewport size: {:?}", err);
                    return;
                }
            };
            let mut guard = mounted.borrow_mut();
            let Mounted { core, surface } = &mut *guard;
            surface.set_size(width as u32, height as u32);
            core.on_resize(width, height);
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    let on_click = {
        let mounted = mounted.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let mut guard = mounted.borrow_mut();
            let (left, top) = guard.surface.client_offset();
            guard
                .core
                .on_click(event.client_x() as f64, event.client_y() as f64, left, top);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    click_target.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    {
        let mut guard = mounted.borrow_mut();
        let Mounted { core, surface } = &mut *guard;
        let mut sched = scheduler.clone();
        core.start(surface, &mut sched);
        console_log!(
            "lifeglow: mounted on #{} ({}x{} cells)",
            canvas_id,
            core.automaton().cols(),
            core.automaton().rows()
        );
    }

    Ok(BackgroundHandle { mounted })
}
