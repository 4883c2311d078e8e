mod io;

pub use io::{init_cfg, load_cfg, reset_cfg, save_cfg};
