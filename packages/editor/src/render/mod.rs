pub mod export;
pub mod recording;
pub mod render_loop;
pub mod renderer;
pub mod scheduler;
pub mod surface;

pub use render_loop::{RenderLoop, RenderLoopHandle};
pub use renderer::Renderer;
pub use scheduler::{AnimationFrameScheduler, FrameScheduler, ManualScheduler};
pub use surface::{CanvasSurface, DrawSurface};
