pub mod classifier;

pub use classifier::{GestureState, InputClassifier, PaintRequest, PointerEvent, DEFAULT_DRAG_DELAY_MS};
