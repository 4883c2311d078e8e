mod install;

pub use install::{install_zip_artifact, remove_artifact};
