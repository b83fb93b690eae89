//! Detached process launch.

use std::process::{Command, Stdio};

use tracing::{debug, warn};

/// Starts `command` through `/bin/sh -c`, fully detached from the calling
/// process: its own session/process group, no inherited stdio, never waited
/// on. Launch failures are logged and swallowed; the dock has no way to
/// surface them and must keep running either way.
pub fn launch_detached(command: &str) {
    debug!(command = %command, "launching application");

    let mut shell = Command::new("/bin/sh");
    shell
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        shell.process_group(0);
    }

    match shell.spawn() {
        Ok(child) => debug!(pid = child.id(), "spawned application process"),
        Err(err) => warn!(command = %command, error = %err, "failed to launch application"),
    }
}
