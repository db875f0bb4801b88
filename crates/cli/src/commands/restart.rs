//! `restart` - restart the remapping daemon.

use anyhow::{Context, Result};

use keymapper_core::{DAEMON_SERVICE, ServiceCommand};

pub async fn run(restart_program: &str) -> Result<()> {
    let command = ServiceCommand::new(restart_program, DAEMON_SERVICE);
    command
        .restart()
        .await
        .with_context(|| format!("`{}` failed", command.display()))?;

    println!("{DAEMON_SERVICE} restarted; new configuration is active");
    Ok(())
}
