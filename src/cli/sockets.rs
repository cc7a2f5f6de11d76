//! Sockets command: shows the effective socket registry.

use crate::cli::common::{CliError, CliResult};
use crate::services::Workspace;
use clap::Args;
use serde::Serialize;

/// List known socket types with their colour and label
#[derive(Debug, Clone, Args)]
pub struct SocketsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct SocketOutput<'a> {
    id: &'a str,
    colour: String,
    label: &'a str,
}

impl SocketsArgs {
    /// Execute the sockets command
    pub fn execute(&self, workspace: &Workspace) -> CliResult<()> {
        let sockets: Vec<SocketOutput> = workspace
            .registry
            .iter()
            .map(|(id, socket_type)| SocketOutput {
                id,
                colour: socket_type.colour.to_hex(),
                label: &socket_type.label,
            })
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&sockets)
                .map_err(|e| CliError::io(format!("Failed to serialize sockets to JSON: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        let width = sockets.iter().map(|s| s.id.len()).max().unwrap_or(0);
        for socket in &sockets {
            println!(
                "{:<width$}  {}  {}",
                socket.id,
                socket.colour,
                socket.label,
                width = width
            );
        }
        Ok(())
    }
}
