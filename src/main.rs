//! Lane Dodge entry point
//!
//! Browser builds wire the DOM to the loop driver and render through WebGPU.
//! Native builds play a headless autopilot run and log the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::convert::FromWasmAbi;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        AddEventListenerOptions, Document, EventTarget, HtmlCanvasElement, KeyboardEvent,
        PointerEvent,
    };

    use lane_dodge::LoopDriver;
    use lane_dodge::platform::{HoldButton, InputAdapter, Key, POINTER_RELEASE_EVENTS};
    use lane_dodge::renderer::{
        RenderState, VertexBatch, hud_score_text, hud_speed_text, overlay_for,
    };
    use lane_dodge::settings::Settings;
    use lane_dodge::sim::{FrameSnapshot, GameEvent, Viewport};

    /// Everything the browser callbacks share
    struct Game {
        driver: LoopDriver,
        input: InputAdapter,
        batch: VertexBatch,
        render_state: Option<RenderState>,
        document: Document,
    }

    impl Game {
        fn frame(&mut self, time: f64) {
            for event in self.driver.frame(time, &mut self.batch) {
                if let GameEvent::GameOver { score } = event {
                    log::info!("Final score: {}", score);
                }
            }
            self.render();
            self.update_hud(&self.driver.snapshot());
        }

        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            match render_state.render(&self.batch) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Update HUD text and the start / game over overlay
        fn update_hud(&self, snapshot: &FrameSnapshot) {
            set_text(&self.document, "score", &hud_score_text(snapshot));
            set_text(&self.document, "speed", &hud_speed_text(snapshot));

            let overlay = overlay_for(snapshot);
            if let Some(el) = self.document.get_element_by_id("overlay") {
                let _ = el.class_list().toggle_with_force("show", overlay.is_some());
            }
            if let Some(overlay) = overlay {
                set_text(&self.document, "overlayTitle", &overlay.title);
                set_text(&self.document, "overlayText", &overlay.text);
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    /// Attach a non-passive listener that lives for the rest of the page
    fn listen<E, F>(target: &EventTarget, kind: &str, handler: F)
    where
        E: FromWasmAbi + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        if target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .is_err()
        {
            log::warn!("Failed to attach {} listener", kind);
        }
        closure.forget();
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Lane Dodge starting...");

        let Some(window) = web_sys::window() else {
            web_sys::console::error_1(&"No window".into());
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("game")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #game canvas");
            return;
        };

        // The canvas attributes fix the logical viewport
        let mut settings = Settings {
            viewport: Viewport::new(canvas.width() as f32, canvas.height() as f32),
            ..Settings::default()
        };
        if let Err(e) = settings.validate() {
            log::warn!("{}; using the default viewport", e);
            settings.viewport = Viewport::default();
        }
        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);

        // Back the canvas with physical pixels
        let dpr = window.device_pixel_ratio();
        let width = (settings.viewport.width as f64 * dpr) as u32;
        let height = (settings.viewport.height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game {
            driver: LoopDriver::from_settings(&settings, seed),
            input: InputAdapter::new(),
            batch: VertexBatch::new(),
            render_state: None,
            document: document.clone(),
        }));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::HighPerformance,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        match RenderState::new(surface, &adapter, width, height, settings.viewport)
                            .await
                        {
                            Ok(render_state) => {
                                game.borrow_mut().render_state = Some(render_state);
                            }
                            Err(e) => log::error!("Failed to create device: {}", e),
                        }
                    }
                    Err(e) => log::error!("No suitable adapter: {}", e),
                }
            }
            Err(e) => log::error!("Failed to create surface: {}", e),
        }

        setup_keyboard(&window, game.clone());
        setup_buttons(&document, game.clone());
        setup_canvas(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Lane Dodge running!");
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            listen(window, "keydown", move |event: KeyboardEvent| {
                let Some(key) = Key::from_dom(&event.key()) else {
                    return;
                };
                if key.blocks_default() {
                    event.prevent_default();
                }
                let g = &mut *game.borrow_mut();
                g.input.key_down(key, &mut g.driver);
            });
        }

        listen(window, "keyup", move |event: KeyboardEvent| {
            let Some(key) = Key::from_dom(&event.key()) else {
                return;
            };
            let g = &mut *game.borrow_mut();
            g.input.key_up(key, &mut g.driver);
        });
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        for (id, button) in [("leftBtn", HoldButton::Left), ("rightBtn", HoldButton::Right)] {
            let Some(el) = document.get_element_by_id(id) else {
                continue;
            };

            {
                let game = game.clone();
                listen(&el, "pointerdown", move |event: PointerEvent| {
                    event.prevent_default();
                    let g = &mut *game.borrow_mut();
                    g.input.button_down(button, &mut g.driver);
                });
            }

            for kind in POINTER_RELEASE_EVENTS {
                let game = game.clone();
                listen(&el, kind, move |event: PointerEvent| {
                    event.prevent_default();
                    let g = &mut *game.borrow_mut();
                    g.input.pointer_up(&mut g.driver);
                });
            }
        }

        if let Some(el) = document.get_element_by_id("restartBtn") {
            listen(&el, "click", move |_event: web_sys::MouseEvent| {
                game.borrow_mut().driver.request_restart();
            });
        }
    }

    fn setup_canvas(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            listen(canvas, "pointerdown", move |event: PointerEvent| {
                event.prevent_default();
                let width = canvas_clone.client_width() as f32;
                let g = &mut *game.borrow_mut();
                g.input
                    .canvas_down(event.offset_x() as f32, width, &mut g.driver);
            });
        }

        for kind in POINTER_RELEASE_EVENTS {
            let game = game.clone();
            listen(canvas, kind, move |event: PointerEvent| {
                event.prevent_default();
                let g = &mut *game.borrow_mut();
                g.input.pointer_up(&mut g.driver);
            });
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Frames keep coming while idle or after game over so the overlay stays drawn
    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use lane_dodge::platform::FixedCadence;
    use lane_dodge::renderer::VertexBatch;
    use lane_dodge::{LoopDriver, Settings};

    env_logger::init();
    log::info!("Lane Dodge (native) starting...");

    let settings = Settings::load();
    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let seed = settings.seed_or(clock_seed);
    log::info!("Headless run with seed {} for up to {} frames", seed, settings.demo_frames);

    // The native run has no keyboard, so the autopilot always drives
    let mut driver = LoopDriver::from_settings(&settings, seed);
    driver.set_autopilot(true);
    driver.request_start();

    let mut source = FixedCadence::new(60.0, 0.0).take(settings.demo_frames as u64);
    let mut batch = VertexBatch::new();
    let summary = driver.run(&mut source, &mut batch);

    log::info!(
        "Run finished after {} frames: score {}, phase {:?}",
        summary.frames,
        summary.score,
        summary.phase
    );
    println!("score {} after {} frames", summary.score, summary.frames);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
