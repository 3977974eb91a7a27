use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::domain::color::Color;
use crate::input::{GestureState, PointerEvent};
use crate::persistence::{LocalStorageBackend, PersistenceAdapter, SnapshotStore};
use crate::render::{AnimationFrameScheduler, CanvasSurface};

use super::frame_stats::FrameStats;
use super::{now_ms, EditorSession, SurfaceBinding};

/// Editor handle for the hosting page.
///
/// Typical wiring: `new Editor()`, `attachCanvas(canvas)`, `startRenderLoop()`,
/// then forward `pointerdown/move/up` offsets to the `on_pointer_*` methods.
#[wasm_bindgen]
pub struct Editor {
    session: Rc<RefCell<EditorSession>>,
    binding: SurfaceBinding<CanvasSurface>,
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_session(EditorSession::default())
    }

    /// Create an editor from a JSON config; omitted keys keep their defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<Editor, JsValue> {
        let session = EditorSession::from_config_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_session(session))
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.session.borrow().grid().rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.session.borrow().grid().cols() }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.session.borrow().config().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.session.borrow().config().height }

    /// Bind a `<canvas>`; sizes it for the grid. Cells are drawn on the next flush.
    /// A running render loop switches to the new canvas.
    #[wasm_bindgen(js_name = attachCanvas)]
    pub fn attach_canvas(&mut self, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        self.binding.attach(surface);
        Ok(())
    }

    #[wasm_bindgen(js_name = startRenderLoop)]
    pub fn start_render_loop(&mut self) -> Result<(), JsValue> {
        if self.binding.start(Rc::new(AnimationFrameScheduler)) {
            Ok(())
        } else {
            Err(JsValue::from_str("attach a canvas before starting the render loop"))
        }
    }

    #[wasm_bindgen(js_name = stopRenderLoop)]
    pub fn stop_render_loop(&mut self) {
        if self.binding.stop() {
            console_log!("render loop stopped");
        }
    }

    #[wasm_bindgen(getter, js_name = isRendering)]
    pub fn is_rendering(&self) -> bool {
        self.binding.is_running()
    }

    /// Flush dirty cells now (hosts that drive their own frame loop).
    pub fn flush(&mut self) -> usize {
        self.binding.flush()
    }

    // === Pointer input (canvas offsetX/offsetY) ===

    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.session.borrow_mut().on_pointer_down(PointerEvent::new(x, y, now_ms()));
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.session.borrow_mut().on_pointer_move(PointerEvent::new(x, y, now_ms()))
    }

    pub fn on_pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.session.borrow_mut().on_pointer_up(PointerEvent::new(x, y, now_ms()))
    }

    pub fn on_click(&mut self, x: f64, y: f64) -> bool {
        self.session.borrow_mut().on_click(PointerEvent::new(x, y, now_ms()))
    }

    pub fn on_pointer_cancel(&mut self) {
        self.session.borrow_mut().on_pointer_cancel();
    }

    /// "idle", "pressed" or "dragging"
    #[wasm_bindgen(getter)]
    pub fn gesture(&self) -> String {
        match self.session.borrow().gesture() {
            GestureState::Idle => "idle",
            GestureState::Pressed { .. } => "pressed",
            GestureState::Dragging { .. } => "dragging",
        }
        .to_string()
    }

    // === Palette ===

    pub fn palette(&self) -> Vec<String> {
        self.session
            .borrow()
            .palette()
            .colors()
            .iter()
            .map(|c| c.to_hex())
            .collect()
    }

    #[wasm_bindgen(getter)]
    pub fn current_color(&self) -> String {
        self.session.borrow().current_color().to_hex()
    }

    /// Select a swatch by hex (`#rrggbb`). False for unknown colors.
    pub fn select_color(&mut self, hex: &str) -> bool {
        match Color::parse(hex) {
            Ok(color) => self.session.borrow_mut().select_color(color),
            Err(_) => false,
        }
    }

    /// Select a swatch by its position in `palette()`. False when out of range.
    #[wasm_bindgen(js_name = selectColorIndex)]
    pub fn select_color_index(&mut self, idx: usize) -> bool {
        self.session.borrow_mut().select_color_index(idx)
    }

    #[wasm_bindgen(getter, js_name = currentColorIndex)]
    pub fn current_color_index(&self) -> usize {
        self.session.borrow().palette().current_index()
    }

    // === Settings ===

    pub fn set_drag_delay_ms(&mut self, delay_ms: f64) -> bool {
        self.session.borrow_mut().set_drag_delay_ms(delay_ms)
    }

    pub fn set_strict_release_bounds(&mut self, strict: bool) {
        self.session.borrow_mut().set_strict_release_bounds(strict);
    }

    pub fn config_json(&self) -> String {
        self.session.borrow().config().to_json()
    }

    // === Sprite ===

    pub fn clear(&mut self) {
        self.session.borrow_mut().clear();
    }

    /// Flat `#rrggbb` list of the current sprite.
    pub fn snapshot(&self) -> Vec<String> {
        self.session
            .borrow()
            .snapshot()
            .colors()
            .iter()
            .map(|c| c.to_hex())
            .collect()
    }

    /// Append the sprite to localStorage. Returns the stored count.
    pub fn save(&self) -> Result<usize, JsValue> {
        let mut store = self.open_store()?;
        self.session
            .borrow()
            .save(&mut store)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of sprites in localStorage (0 when nothing was saved).
    pub fn saved_count(&self) -> Result<usize, JsValue> {
        let store = self.open_store()?;
        store
            .load_all()
            .map(|all| all.len())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Load saved sprite `index`. False when there is no such entry or its size differs.
    pub fn load(&mut self, index: usize) -> Result<bool, JsValue> {
        let store = self.open_store()?;
        self.session
            .borrow_mut()
            .load_saved(&store, index)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// PNG bytes of the sprite, `size` pixels wide.
    pub fn export_png(&self, size: u32, transparent: bool) -> Result<Vec<u8>, JsValue> {
        self.session
            .borrow()
            .export_png(size, transparent)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn frame_stats(&self) -> FrameStats {
        self.session.borrow().frame_stats()
    }
}

impl Editor {
    fn from_session(session: EditorSession) -> Self {
        let session = Rc::new(RefCell::new(session));
        Self {
            binding: SurfaceBinding::new(Rc::clone(&session)),
            session,
        }
    }

    fn open_store(&self) -> Result<SnapshotStore<LocalStorageBackend>, JsValue> {
        let backend = LocalStorageBackend::open().map_err(|e| {
            console_log!("sprite storage unavailable: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
        let key = self.session.borrow().config().storage_key.clone();
        Ok(SnapshotStore::new(backend, key))
    }

    pub fn session(&self) -> Rc<RefCell<EditorSession>> {
        Rc::clone(&self.session)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Editor {
    fn drop(&mut self) {
        self.stop_render_loop();
    }
}
