//! One monitor invocation: select backend, parse watch list, query,
//! reconcile, and write the result lines.

use jobmon_core::{BackendConfig, MonitorError, SchedulerBackend};
use jobmon_state::{Scheduler, parse_watch_list, reconcile, write_results};
use std::fmt;
use std::io::Write;

/// Pipeline stages, in execution order. Each runs once; any failure ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SelectBackend,
    ParseWatchList,
    QueryLive,
    Reconcile,
    Format,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SelectBackend => "select-backend",
            Self::ParseWatchList => "parse-watch-list",
            Self::QueryLive => "query-live",
            Self::Reconcile => "reconcile",
            Self::Format => "format",
        };
        f.write_str(name)
    }
}

fn failed(stage: Stage) -> impl FnOnce(&MonitorError) {
    move |err: &MonitorError| tracing::debug!(%stage, %err, "stage failed")
}

/// Run the whole pipeline with the backend named by `config`.
pub async fn run<W: Write>(
    config: &BackendConfig,
    request: &str,
    out: &mut W,
) -> Result<(), MonitorError> {
    tracing::debug!(stage = %Stage::SelectBackend);
    let scheduler = Scheduler::from_config(config).inspect_err(failed(Stage::SelectBackend))?;
    run_with(&scheduler, request, out).await
}

/// Run every stage after backend selection.
///
/// Nothing is written to `out` unless all earlier stages succeed.
pub async fn run_with<B, W>(backend: &B, request: &str, out: &mut W) -> Result<(), MonitorError>
where
    B: SchedulerBackend,
    W: Write,
{
    tracing::debug!(stage = %Stage::ParseWatchList);
    let watch = parse_watch_list(request).inspect_err(failed(Stage::ParseWatchList))?;

    tracing::debug!(stage = %Stage::QueryLive);
    let raw = backend
        .query()
        .await
        .inspect_err(failed(Stage::QueryLive))?;
    let snapshot = backend.parse(&raw).inspect_err(failed(Stage::QueryLive))?;

    tracing::debug!(stage = %Stage::Reconcile);
    let resolved =
        reconcile(backend, &watch, &snapshot).inspect_err(failed(Stage::Reconcile))?;

    tracing::debug!(stage = %Stage::Format);
    write_results(&resolved, out).map_err(MonitorError::Output)?;

    tracing::info!(
        watched = watch.len(),
        live = snapshot.len(),
        resolved = resolved.len(),
        "job status reported"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use jobmon_core::{JobStatusSnapshot, ResolvedSet, SchedulerKind, WatchList};
    use jobmon_lsf::LsfBackend;
    use jobmon_slurm::SlurmBackend;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    /// Returns canned status output and delegates everything else.
    struct Canned<B> {
        output: String,
        inner: B,
    }

    impl<B: SchedulerBackend + Sync> SchedulerBackend for Canned<B> {
        async fn query(&self) -> Result<String, MonitorError> {
            Ok(self.output.clone())
        }

        fn parse(&self, raw: &str) -> Result<JobStatusSnapshot, MonitorError> {
            self.inner.parse(raw)
        }

        fn resolve_from_log(&self, unresolved: &WatchList) -> Result<ResolvedSet, MonitorError> {
            self.inner.resolve_from_log(unresolved)
        }
    }

    /// Query that fails like a scheduler command exiting non-zero.
    struct Unreachable;

    impl SchedulerBackend for Unreachable {
        async fn query(&self) -> Result<String, MonitorError> {
            Err(MonitorError::Query {
                command: "bjobs".to_string(),
                stderr: "cannot connect to LSF".to_string(),
            })
        }

        fn parse(&self, _raw: &str) -> Result<JobStatusSnapshot, MonitorError> {
            panic!("parse must not run after a failed query")
        }

        fn resolve_from_log(&self, _unresolved: &WatchList) -> Result<ResolvedSet, MonitorError> {
            panic!("log fallback must not run after a failed query")
        }
    }

    /// Sink whose writes always fail.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    fn config(
        scheduler: SchedulerKind,
        user: Option<&str>,
        log_dir: Option<&TempDir>,
    ) -> BackendConfig {
        BackendConfig {
            scheduler,
            user: user.map(str::to_string),
            log_dir: log_dir
                .map(|d| Utf8PathBuf::from_path_buf(d.path().to_path_buf()).unwrap()),
        }
    }

    fn lsf(output: &str, log_dir: Option<&TempDir>) -> Canned<LsfBackend> {
        Canned {
            output: output.to_string(),
            inner: LsfBackend::new(config(SchedulerKind::Lsf, None, log_dir)),
        }
    }

    fn slurm(kind: SchedulerKind, output: &str, log_dir: Option<&TempDir>) -> Canned<SlurmBackend> {
        Canned {
            output: output.to_string(),
            inner: SlurmBackend::from_config(config(kind, Some("tblock01"), log_dir)).unwrap(),
        }
    }

    async fn render<B: SchedulerBackend>(backend: &B, request: &str) -> Result<String, MonitorError> {
        let mut out = Vec::new();
        run_with(backend, request, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    const BJOBS_HEADER: &str =
        "JOBID   USER    STAT  QUEUE      FROM_HOST   EXEC_HOST   JOB_NAME   SUBMIT_TIME";

    #[tokio::test]
    async fn test_lsf_live_jobs() {
        let output = format!(
            "{BJOBS_HEADER}\n\
             1001 tblock RUN short host01 host143 foo Sep 21 10:30\n\
             1002 tblock EXIT short host01 host144 bar Sep 21 10:31\n"
        );
        let rendered = render(&lsf(&output, None), "1001_foo 1002_bar").await.unwrap();
        assert_eq!(rendered, "1001_foo,RUNNING,\n1002_bar,FAILED,\n");
    }

    #[tokio::test]
    async fn test_lsf_log_fallback() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("done-job.out"), "...\nSuccessfully completed.\n").unwrap();
        fs::write(temp.path().join("bad-job.out"), "Exited with exit code 2.\n").unwrap();
        let dir = temp.path().to_str().unwrap();

        let output = format!("{BJOBS_HEADER}\n1 tblock PEND short host01 live-job Sep 21 10:30\n");
        let rendered = render(
            &lsf(&output, Some(&temp)),
            "2_done-job 1_live-job 3_bad-job 4_lost-job",
        )
        .await
        .unwrap();

        assert_eq!(
            rendered,
            format!(
                "1_live-job,SCHEDULED,\n\
                 2_done-job,DONE,\n\
                 3_bad-job,FAILED,Check log file for details: {dir}/bad-job.out\n\
                 4_lost-job,DROPPED,log file for job does not exist: {dir}/lost-job.out\n"
            )
        );
    }

    #[tokio::test]
    async fn test_slurm_log_fallback_ignores_content() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("crashed.out"), "Traceback\n").unwrap();

        let output = "JOBID PARTITION NAME USER ST TIME NODES NODELIST(REASON)\n";
        let rendered = render(&slurm(SchedulerKind::Slurm, output, Some(&temp)), "9_crashed")
            .await
            .unwrap();
        assert_eq!(rendered, "9_crashed,DONE,\n");
    }

    #[tokio::test]
    async fn test_slurm_alternate_layout() {
        let output = "   JOBID PARTIT       QOS                 NAME       USER NODE  CPUS ST         TIME    TIME_LEFT PRIORITY NODELIST(REASON)\n\
                      8466477 standa     short ingest-slstr-s3a-uor   tblock01    1     1  PD         0:00      4:00:00    77911 (Priority)\n";
        let rendered = render(&slurm(SchedulerKind::SlurmAlt, output, None), "8466477_ingest")
            .await
            .unwrap();
        assert_eq!(rendered, "8466477_ingest,SCHEDULED,\n");
    }

    #[tokio::test]
    async fn test_all_live_needs_no_log_dir() {
        let output = "HEADER\n5 p name tblock01 R 0:01 1 host\n";
        let rendered = render(&slurm(SchedulerKind::Slurm, output, None), "5_name")
            .await
            .unwrap();
        assert_eq!(rendered, "5_name,RUNNING,\n");
    }

    #[tokio::test]
    async fn test_empty_watch_list_writes_nothing() {
        let rendered = render(&lsf(BJOBS_HEADER, None), "").await.unwrap();
        assert_eq!(rendered, "");
    }

    #[tokio::test]
    async fn test_missing_log_dir_fails_without_output() {
        let mut out = Vec::new();
        let err = run_with(&lsf(BJOBS_HEADER, None), "1_gone", &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, MonitorError::Configuration(_)));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_encoding_error_before_query() {
        let mut out = Vec::new();
        let err = run_with(&Unreachable, "1_ok broken", &mut out).await.unwrap_err();
        assert!(matches!(err, MonitorError::Encoding(_)));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_query_error_is_terminal() {
        let mut out = Vec::new();
        let err = run_with(&Unreachable, "1_job", &mut out).await.unwrap_err();
        assert!(matches!(err, MonitorError::Query { .. }));
        assert!(err.to_string().contains("cannot connect to LSF"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_parse_error_is_terminal() {
        let output = format!("{BJOBS_HEADER}\n1 tblock HELD short host01 host02 job Sep 21 10:30\n");
        let mut out = Vec::new();
        let err = run_with(&lsf(&output, None), "1_job", &mut out).await.unwrap_err();
        assert_eq!(err.to_string(), "unsupported status code: HELD");
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_is_output_error() {
        let output = format!("{BJOBS_HEADER}\n1 tblock RUN short host01 host02 job Sep 21 10:30\n");
        let err = run_with(&lsf(&output, None), "1_job", &mut ClosedPipe)
            .await
            .unwrap_err();
        match err {
            MonitorError::Output(source) => assert_eq!(source.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_flush_failure_on_empty_result_is_output_error() {
        let err = run_with(&lsf(BJOBS_HEADER, None), "", &mut ClosedPipe)
            .await
            .unwrap_err();
        assert!(matches!(err, MonitorError::Output(_)));
    }

    #[tokio::test]
    async fn test_slurm_without_user_fails_at_selection() {
        let mut out = Vec::new();
        let err = run(&config(SchedulerKind::Slurm, None, None), "1_job", &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, MonitorError::Configuration(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::SelectBackend.to_string(), "select-backend");
        assert_eq!(Stage::Format.to_string(), "format");
    }
}
