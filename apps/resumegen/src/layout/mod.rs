// Layout: paragraph styles, font metrics, and the story of blocks the renderer draws.
// Line breaking is done here so the renderer only positions already-wrapped lines.

pub mod blocks;
pub mod font_metrics;
pub mod styles;
pub mod wrap;

pub use blocks::Block;
pub use wrap::{wrap_runs, WrappedLine};
