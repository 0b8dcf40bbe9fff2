//! wgpu rendering

pub mod pipeline;
pub mod scene;
pub mod texture;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{build_draw_list, Sprite, SpriteDraw, SPRITE_COUNT};
pub use texture::Texture;
