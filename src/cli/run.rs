//! Run background removal over the resolved targets and report each file.

use crate::config::NobgConfig;
use crate::image::background::{FileReport, process_all};
use crate::{debug, log};

/// Process every target in order, logging one line per file.
///
/// Failures are logged and counted, never propagated.
pub fn remove_backgrounds(config: &NobgConfig) -> Vec<FileReport> {
    debug!("nobg"; "project root: {}", config.get_root().display());
    let targets = config.targets();
    debug!("nobg"; "{} target{}", targets.len(), plural_s(targets.len()));

    let reports = process_all(&targets);
    for report in &reports {
        log_report(report);
    }

    let ok = reports.iter().filter(|r| r.is_ok()).count();
    log!("done"; "{}/{} image{} processed", ok, reports.len(), plural_s(reports.len()));
    reports
}

fn log_report(report: &FileReport) {
    match &report.result {
        Ok(removal) => {
            if let Some(bg) = removal.reference {
                debug!(
                    "nobg";
                    "{}: background rgba({}, {}, {}, {}), cleared {} of {} pixels",
                    report.path.display(),
                    bg[0], bg[1], bg[2], bg[3],
                    removal.cleared,
                    removal.width as usize * removal.height as usize
                );
            }
            log!("nobg"; "{}", report.summary());
        }
        Err(_) => log!("error"; "{}", report.summary()),
    }
}

#[inline]
fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
