//! Command modules
//!
//! Every module registers its commands in a static table. The CLI is built
//! from these tables and dispatches into the handler of the matched entry.

pub mod config;
pub mod info;
pub mod license;
pub mod patch;
pub mod tool;
pub(crate) mod types;

pub use types::Context;
use types::Module;

/// All modules, in help order
pub const MODULES: &[Module] = &[config::MODULE, info::MODULE, tool::MODULE, patch::MODULE, license::MODULE];

pub fn find_module(name: &str) -> Option<&'static Module> {
    MODULES.iter().find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_module_and_command_names_are_unique() {
        let modules: HashSet<_> = MODULES.iter().map(|m| m.name).collect();
        assert_eq!(modules.len(), MODULES.len());

        for module in MODULES {
            let commands: HashSet<_> = module.commands.iter().map(|c| c.cli_name()).collect();
            assert_eq!(commands.len(), module.commands.len(), "duplicate command in {}", module.name);
        }
    }

    #[test]
    fn test_find_module() {
        assert_eq!(find_module("patch").map(|m| m.name), Some("patch"));
        assert!(find_module("mods").is_none());
    }
}
