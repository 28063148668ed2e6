// src/engine/driver.rs

//! The read/decide loop.
//!
//! Each iteration waits on the first of:
//! - an interrupt request,
//! - the watchdog deadline,
//! - the end of a panic grace window,
//! - the next line from the child.
//!
//! A line is timestamped, written out, then handed to the decider. The loop
//! returns exactly one [`Outcome`]; cleanup of the child is the caller's job.

use std::future::Future;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::time::Instant;
use tracing::{debug, info, trace, warn};

use crate::clock::LaunchClock;
use crate::engine::decider::{Decision, ExitDecider};
use crate::engine::outcome::Outcome;
use crate::engine::watchdog::{wait_until, Watchdog};
use crate::errors::Result;
use crate::exec::LineReader;
use crate::output::Timestamper;

pub async fn drive<R, W, I>(
    lines: &mut LineReader<R>,
    out: &mut Timestamper<W>,
    decider: &mut ExitDecider,
    clock: &LaunchClock,
    watchdog: &Watchdog,
    interrupt: I,
) -> Result<Outcome>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    I: Future<Output = ()>,
{
    let expired = watchdog.expired();
    tokio::pin!(expired);
    tokio::pin!(interrupt);

    let mut grace_deadline: Option<Instant> = None;

    loop {
        tokio::select! {
            biased;

            _ = &mut interrupt => {
                info!(elapsed = clock.elapsed_secs(), "interrupt received; stopping");
                return Ok(Outcome::Interrupted);
            }

            _ = &mut expired => {
                let outcome = decider.timed_out();
                warn!(elapsed = clock.elapsed_secs(), %outcome, "timeout reached");
                return Ok(outcome);
            }

            _ = wait_until(grace_deadline), if grace_deadline.is_some() => {
                let outcome = decider.grace_elapsed();
                debug!(elapsed = clock.elapsed_secs(), %outcome, "panic grace window over");
                return Ok(outcome);
            }

            read = lines.next_line() => {
                let line = match read {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        let outcome = decider.stream_ended();
                        debug!(elapsed = clock.elapsed_secs(), %outcome, "child output closed");
                        return Ok(outcome);
                    }
                    Err(e) => {
                        let outcome = decider.stream_ended();
                        warn!(error = %e, %outcome, "reading child output failed; treating as end of stream");
                        return Ok(outcome);
                    }
                };

                let elapsed = clock.elapsed_secs();
                trace!(elapsed, line = %String::from_utf8_lossy(&line).trim_end(), "child line");
                out.write_line(elapsed, &line).await?;

                match decider.observe(&line) {
                    Decision::Continue => {}
                    Decision::Finish(outcome) => return Ok(outcome),
                    Decision::Drain { outcome, grace } => {
                        info!(%outcome, grace_secs = grace.as_secs(), "draining output before exit");
                        // An unrepresentable grace drains until stream end or timeout.
                        grace_deadline = Instant::now().checked_add(grace);
                    }
                }
            }
        }
    }
}
