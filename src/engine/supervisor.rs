// src/engine/supervisor.rs

//! Child supervisor.
//!
//! Owns everything created at launch (the clock, the child handle and its
//! stdout pipe) and guarantees that, whatever the outcome, the child's
//! process group is killed, the child reaped, and its pipe closed before
//! returning.

use std::fmt;
use std::future::Future;

use tokio::io::AsyncWrite;
use tokio::process::{Child, ChildStdout};
use tracing::{debug, info, warn};

use crate::clock::LaunchClock;
use crate::config::Options;
use crate::engine::decider::ExitDecider;
use crate::engine::driver::drive;
use crate::engine::outcome::Outcome;
use crate::engine::watchdog::Watchdog;
use crate::errors::Result;
use crate::exec::{kill_process_group, launch, LaunchedChild, LineReader};
use crate::output::Timestamper;

pub struct Supervisor {
    clock: LaunchClock,
    decider: ExitDecider,
    watchdog: Watchdog,
    child: Child,
    pid: Option<u32>,
    lines: LineReader<ChildStdout>,
}

impl fmt::Debug for Supervisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supervisor")
            .field("pid", &self.pid)
            .field("watchdog", &self.watchdog)
            .finish_non_exhaustive()
    }
}

impl Supervisor {
    /// Build the marker list and spawn the child.
    ///
    /// Markers are compiled first so a bad marker set never leaves a child
    /// behind.
    pub fn launch(options: &Options, clock: LaunchClock) -> Result<Self> {
        let markers = options.markers()?;
        let decider = ExitDecider::new(markers, options.panic_grace);
        let watchdog = Watchdog::new(options.timeout, &clock);

        let LaunchedChild { child, stdout, pid } = launch(&options.command)?;

        Ok(Self {
            clock,
            decider,
            watchdog,
            child,
            pid,
            lines: LineReader::new(stdout),
        })
    }

    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Run against the real stdout, stopping early on Ctrl-C.
    pub async fn run(self) -> Result<Outcome> {
        let interrupt = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        };
        self.run_with(tokio::io::stdout(), interrupt).await
    }

    /// Run with an explicit output sink and interrupt source.
    pub async fn run_with<W, I>(mut self, out: W, interrupt: I) -> Result<Outcome>
    where
        W: AsyncWrite + Unpin,
        I: Future<Output = ()>,
    {
        let mut out = Timestamper::new(out);
        let result = drive(
            &mut self.lines,
            &mut out,
            &mut self.decider,
            &self.clock,
            &self.watchdog,
            interrupt,
        )
        .await;

        self.shut_down().await;

        let outcome = result?;
        info!(
            pid = ?self.pid,
            %outcome,
            exit_code = outcome.exit_code(),
            elapsed = self.clock.elapsed_secs(),
            "run finished"
        );
        Ok(outcome)
    }

    /// Kill the process group, reap the child, then close the pipe.
    async fn shut_down(&mut self) {
        let pid = self.pid;

        let running = match self.child.try_wait() {
            Ok(Some(status)) => {
                debug!(?pid, %status, "child already exited; reaped");
                false
            }
            Ok(None) => true,
            Err(e) => {
                warn!(?pid, error = %e, "failed to poll child status");
                true
            }
        };

        // Grandchildren may still hold the group even after the child exited.
        let group_killed = kill_process_group(pid);
        if !running {
            return;
        }

        if !group_killed {
            debug!(?pid, "killing child process");
            if let Err(e) = self.child.start_kill() {
                warn!(?pid, error = %e, "failed to kill child process");
            }
        }

        match self.child.wait().await {
            Ok(status) => debug!(?pid, %status, "child killed and reaped"),
            Err(e) => warn!(?pid, error = %e, "failed to reap child process"),
        }
    }
}
