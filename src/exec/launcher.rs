// src/exec/launcher.rs

//! Child process launcher.

use std::process::Stdio;

use tokio::process::{Child, ChildStdout, Command};
use tracing::{info, warn};

use crate::errors::{Result, WrapperError};
use crate::types::CommandSpec;

/// A freshly spawned child together with the read end of its stdout pipe.
#[derive(Debug)]
pub struct LaunchedChild {
    pub child: Child,
    pub stdout: ChildStdout,
    pub pid: Option<u32>,
}

/// Spawn `spec`, resolving the program through `PATH`.
///
/// stdout is piped back to us; stderr and stdin are inherited unchanged.
/// On unix the child leads a new process group so that anything it forks
/// can be killed with it (see [`kill_process_group`]).
/// Spawn failures (missing binary, permission denied, bad executable) are
/// returned as [`WrapperError::Spawn`] and never retried.
pub fn launch(spec: &CommandSpec) -> Result<LaunchedChild> {
    let mut std_cmd = std::process::Command::new(&spec.program);
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        std_cmd.process_group(0);
    }

    let mut cmd = Command::from(std_cmd);
    cmd.args(&spec.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|source| WrapperError::Spawn {
        program: spec.program.clone(),
        source,
    })?;

    let pid = child.id();

    let Some(stdout) = child.stdout.take() else {
        if let Err(e) = child.start_kill() {
            warn!(?pid, error = %e, "failed to kill child without stdout pipe");
        }
        return Err(WrapperError::MissingStdout);
    };

    info!(?pid, cmd = %spec, "child process launched");

    Ok(LaunchedChild { child, stdout, pid })
}

/// SIGKILL every process in the group led by `pid`.
///
/// Returns `true` if the signal was delivered. An empty group (`ESRCH`) is
/// not an error: everything already exited.
#[cfg(unix)]
pub fn kill_process_group(pid: Option<u32>) -> bool {
    let Some(pgid) = pid.and_then(|p| libc::pid_t::try_from(p).ok()) else {
        return false;
    };

    // SAFETY: killpg takes no pointers; pgid is a group we created at launch.
    let rc = unsafe { libc::killpg(pgid, libc::SIGKILL) };
    if rc == 0 {
        return true;
    }

    let err = std::io::Error::last_os_error();
    if err.raw_os_error() != Some(libc::ESRCH) {
        warn!(pgid, error = %err, "failed to kill child process group");
    }
    false
}

#[cfg(not(unix))]
pub fn kill_process_group(_pid: Option<u32>) -> bool {
    false
}
