mod aspect_fitted;
mod clear_color;
mod error;
mod filter_mode;
mod frame_target;
mod pipeline;
mod preview;
mod render_pass;
mod renderer;
mod texture;
mod video_frame;
mod viewport;

pub use aspect_fitted::*;
pub use clear_color::*;
pub use error::*;
pub use filter_mode::*;
pub use frame_target::*;
pub use pipeline::*;
pub use preview::*;
pub use render_pass::*;
pub use renderer::*;
pub use texture::*;
pub use video_frame::*;
pub use viewport::*;
