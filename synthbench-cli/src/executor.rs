//! Suite Executor
//!
//! Runs the suite table in order and collects a [`Report`].
//!
//! ```text
//! WorkloadDef table
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Executor   │  fresh Bencher per workload, notes written as they appear
//! └──────┬───────┘
//!        │
//!        ▼
//!     Report  ──▶  format_human_output
//! ```

use std::io::{self, Write};
use std::time::Instant;
use synthbench_core::{SuiteContext, WorkloadDef};
use synthbench_report::{BANNER, Report, WorkloadTiming, format_human_output};
use tracing::{debug, info};

/// Sequential, in-process executor
pub struct Executor<'a> {
    ctx: &'a SuiteContext,
    suite: &'a [WorkloadDef],
}

impl<'a> Executor<'a> {
    /// Create an executor over `suite`
    pub fn new(ctx: &'a SuiteContext, suite: &'a [WorkloadDef]) -> Self {
        Self { ctx, suite }
    }

    /// Run every workload in table order.
    ///
    /// Lines a workload notes (the digest) are written to `out` as soon as
    /// that workload returns; timings are only collected.
    pub fn execute<W: Write>(&self, out: &mut W) -> io::Result<Report> {
        let started = Instant::now();
        let mut report = Report::default();

        for (stream, def) in self.suite.iter().enumerate() {
            let run = def.run(stream as u64, self.ctx);
            debug!(
                workload = def.id,
                elapsed_ns = run.elapsed.as_nanos() as u64,
                "workload finished"
            );

            for note in &run.notes {
                writeln!(out, "{}", note)?;
            }
            report.push(WorkloadTiming::new(def.id, def.label, run.elapsed));
        }

        report.total = started.elapsed();
        Ok(report)
    }
}

/// Run the whole suite, writing the banner, notes and results block to `out`.
pub fn run_suite<W: Write>(
    ctx: &SuiteContext,
    suite: &[WorkloadDef],
    out: &mut W,
) -> io::Result<Report> {
    info!(
        workloads = suite.len(),
        deterministic = ctx.rng_source().is_deterministic(),
        "starting suite"
    );

    writeln!(out, "{}", BANNER)?;
    out.flush()?;

    let report = Executor::new(ctx, suite).execute(out)?;

    out.write_all(format_human_output(&report).as_bytes())?;
    out.flush()?;

    info!(
        total_ms = report.total.as_millis() as u64,
        "suite finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use synthbench_core::{Bencher, RngSource, SuiteConfig};

    fn noop(b: &mut Bencher, _ctx: &SuiteContext) {
        b.iter(|| 1 + 1);
    }

    fn noisy(b: &mut Bencher, _ctx: &SuiteContext) {
        b.iter(|| ());
        b.note("first note");
    }

    static TABLE: [WorkloadDef; 2] = [
        WorkloadDef {
            id: "noop",
            label: "Noop",
            runner_fn: noop,
        },
        WorkloadDef {
            id: "noisy",
            label: "Noisy",
            runner_fn: noisy,
        },
    ];

    fn context() -> SuiteContext {
        let config = SuiteConfig {
            worker_threads: Some(1),
            ..SuiteConfig::default()
        };
        SuiteContext::new(config, RngSource::Seeded(0)).unwrap()
    }

    #[test]
    fn test_execute_collects_in_order() {
        let ctx = context();
        let mut out = Vec::new();
        let report = Executor::new(&ctx, &TABLE).execute(&mut out).unwrap();

        let ids: Vec<_> = report.results.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["noop", "noisy"]);
        assert_eq!(String::from_utf8(out).unwrap(), "first note\n");
        assert!(report.total >= report.measured());
    }

    #[test]
    fn test_run_suite_output_shape() {
        let ctx = context();
        let mut out = Vec::new();
        run_suite(&ctx, &TABLE, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Beginning benchmark...");
        assert_eq!(lines[1], "first note");
        assert!(lines[2].starts_with("Noop completed in "));
        assert!(lines[3].starts_with("Noisy completed in "));
        assert!(lines[3].ends_with(" seconds"));
    }

    #[test]
    fn test_write_failure_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let ctx = context();
        let err = run_suite(&ctx, &TABLE, &mut Broken).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
