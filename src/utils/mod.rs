// Utils compartidos

pub mod constants;
pub mod markdown;
pub mod storage;

pub use constants::*;
pub use markdown::render_markdown;
pub use storage::*;
