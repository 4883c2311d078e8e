pub mod operations;
pub mod types;

pub use types::Config;

pub use operations::{init_cfg, load_cfg, reset_cfg, save_cfg};
