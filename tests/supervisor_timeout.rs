// tests/supervisor_timeout.rs

use std::error::Error;
use std::time::{Duration, Instant};

use qemu_wrapper::clock::LaunchClock;
use qemu_wrapper::engine::{Outcome, Supervisor};
use qemu_wrapper_test_utils::builders::OptionsBuilder;
use qemu_wrapper_test_utils::{init_tracing, process_exists, sh, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn silent_child_times_out_and_is_reaped() -> TestResult {
    init_tracing();

    let options = OptionsBuilder::new(["sleep", "100"])
        .exit_on_success()
        .timeout_secs(2)
        .build();

    let started = Instant::now();
    let supervisor = Supervisor::launch(&options, LaunchClock::start())?;
    let pid = supervisor.pid().expect("child had a pid");
    assert!(process_exists(pid));

    let mut out = Vec::new();
    let outcome = with_timeout(supervisor.run_with(&mut out, std::future::pending())).await?;
    let took = started.elapsed();

    assert_eq!(outcome, Outcome::Timeout);
    assert_ne!(outcome.exit_code(), 0);
    assert!(took >= Duration::from_secs(2), "fired early: {took:?}");
    assert!(took < Duration::from_secs(10), "fired late: {took:?}");
    assert!(out.is_empty());
    assert!(!process_exists(pid), "child {pid} must not outlive the wrapper");

    Ok(())
}

#[tokio::test]
async fn chatty_child_still_times_out() -> TestResult {
    init_tracing();

    let options = OptionsBuilder::new(sh("while true; do echo tick; sleep 0.2; done"))
        .exit_on_success()
        .exit_on_failure()
        .timeout_secs(1)
        .build();

    let supervisor = Supervisor::launch(&options, LaunchClock::start())?;
    let mut out = Vec::new();
    let outcome = with_timeout(supervisor.run_with(&mut out, std::future::pending())).await?;

    assert_eq!(outcome, Outcome::Timeout);
    let out = String::from_utf8(out)?;
    assert!(out.lines().count() >= 1);
    assert!(out.lines().all(|l| l.ends_with(" tick")));

    Ok(())
}

#[tokio::test]
async fn marker_before_deadline_wins() -> TestResult {
    init_tracing();

    let options = OptionsBuilder::new(sh("echo TEST SUCCESS; exec sleep 100"))
        .exit_on_success()
        .timeout_secs(30)
        .build();

    let supervisor = Supervisor::launch(&options, LaunchClock::start())?;
    let outcome = with_timeout(supervisor.run_with(Vec::new(), std::future::pending())).await?;

    assert_eq!(outcome, Outcome::Success);
    Ok(())
}

#[tokio::test]
async fn unrepresentable_timeout_behaves_like_no_timeout() -> TestResult {
    init_tracing();

    let options = OptionsBuilder::new(sh("echo booting...; echo TEST SUCCESS"))
        .exit_on_success()
        .timeout_secs(u64::MAX)
        .build();

    let supervisor = Supervisor::launch(&options, LaunchClock::start())?;
    let outcome = with_timeout(supervisor.run_with(Vec::new(), std::future::pending())).await?;

    assert_eq!(outcome, Outcome::Success);
    Ok(())
}

#[tokio::test]
async fn unrepresentable_panic_grace_drains_to_stream_end() -> TestResult {
    init_tracing();

    let options = OptionsBuilder::new(sh("echo 'Kernel panic - not syncing'; echo 'Call Trace:'"))
        .exit_on_failure()
        .panic_grace_secs(u64::MAX)
        .build();

    let supervisor = Supervisor::launch(&options, LaunchClock::start())?;
    let mut out = Vec::new();
    let outcome = with_timeout(supervisor.run_with(&mut out, std::future::pending())).await?;

    assert_eq!(outcome, Outcome::Failure);
    assert_eq!(String::from_utf8(out)?.lines().count(), 2);
    Ok(())
}

#[tokio::test]
async fn interrupt_kills_the_child() -> TestResult {
    init_tracing();

    let options = OptionsBuilder::new(["sleep", "100"]).build();
    let supervisor = Supervisor::launch(&options, LaunchClock::start())?;
    let pid = supervisor.pid().expect("child had a pid");

    let interrupt = tokio::time::sleep(Duration::from_millis(200));
    let outcome = with_timeout(supervisor.run_with(Vec::new(), interrupt)).await?;

    assert_eq!(outcome, Outcome::Interrupted);
    assert_eq!(outcome.exit_code(), 130);
    assert!(!process_exists(pid));

    Ok(())
}
