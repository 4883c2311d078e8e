//! `tool` commands
//!
//! Tools are patches the user wants to keep around: installing one by name
//! records it in the configuration, installing without a name reinstalls
//! every recorded tool.

use super::patch::{install_outcome, patch_name, state_label};
use super::types::{no_args, Context, Module, ModuleCommand};
use crate::config::save_cfg;
use crate::error::Result;
use crate::patches::{patch_for, ToolType};

use clap::Arg;

pub const MODULE: Module = Module {
    name: "tool",
    friendly_name: "Tools",
    commands: &[
        ModuleCommand {
            name: "install",
            about: "Install a tool, or every configured tool",
            args: tool_name_arg,
            run: |ctx, matches| install(ctx, patch_name(matches)?),
        },
        ModuleCommand {
            name: "list",
            about: "List configured tools",
            args: no_args,
            run: |ctx, _| list(ctx),
        },
    ],
};

fn tool_name_arg() -> Vec<Arg> {
    vec![Arg::new("name").value_name("NAME").help("Tool to add to the configuration")]
}

pub fn install(ctx: &mut Context<'_>, name: Option<ToolType>) -> Result<()> {
    let tools = match name {
        Some(tool) => {
            if !ctx.config.tools.contains(&tool) {
                ctx.config.tools.push(tool);
                save_cfg(&ctx.config)?;
            }
            vec![tool]
        }
        None => ctx.config.tools.clone(),
    };

    if tools.is_empty() {
        return ctx.interaction.tell("No tools configured.");
    }

    for tool in tools {
        let message = install_outcome(patch_for(tool, &ctx.config.game_path).as_ref())?;
        ctx.interaction.tell(&message)?;
    }
    Ok(())
}

pub fn list(ctx: &mut Context<'_>) -> Result<()> {
    if ctx.config.tools.is_empty() {
        return ctx.interaction.tell("No tools configured.");
    }

    let lines: Vec<_> = ctx
        .config
        .tools
        .iter()
        .map(|tool| {
            let patch = patch_for(*tool, &ctx.config.game_path);
            format!("{} ({}): {}", patch.friendly_name(), tool, state_label(patch.as_ref()))
        })
        .collect();
    ctx.interaction.tell(&lines.join("\n"))
}
