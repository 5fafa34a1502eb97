use crate::cli::input::load_log;
use crate::conf::{CruncherConfig, load_config_or_default};
use crate::index::CcLog;
use crate::logging::default_color;
use crate::report::{Report, ReportFormat, render_report};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line values that win over the config file.
#[derive(Debug, Default, Clone)]
pub struct ReportOverrides {
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub include_unspecified: bool,
}

impl ReportOverrides {
    pub fn apply(&self, mut cfg: CruncherConfig) -> CruncherConfig {
        if let Some(output) = &self.output {
            cfg.output = Some(output.clone());
        }
        if let Some(format) = self.format {
            cfg.format = format;
        }
        cfg.include_unspecified |= self.include_unspecified;
        cfg
    }
}

pub fn run_report(path: &Path, overrides: ReportOverrides) -> Result<()> {
    let cfg = load_config_or_default(overrides.config.as_deref(), Path::new("."))?;
    let cfg = overrides.apply(cfg);

    let log = load_log(path)?;

    match &cfg.output {
        Some(output) => {
            let mut buf = Vec::new();
            let requests = write_report(&log, &cfg, false, &mut buf)?;
            fs::write(output, buf)
                .with_context(|| format!("could not write report to {}", output.display()))?;
            info!(output = %output.display(), requests, "report written");
        }
        None => {
            write_report(&log, &cfg, default_color(), &mut io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Renders the report described by `cfg` into `out`, returning the number of requests in it.
pub fn write_report<W: Write>(
    log: &CcLog,
    cfg: &CruncherConfig,
    color: bool,
    out: &mut W,
) -> Result<usize> {
    let report = Report::build(log, cfg.include_unspecified);
    let rendered = render_report(&report, cfg.format, color)?;
    out.write_all(rendered.as_bytes())?;
    Ok(report.request_count())
}
