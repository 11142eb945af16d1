//! Snapshot (optionally) and clean up

use crate::btrfs::BtrfsBackend;
use crate::settings::Settings;
use crate::util;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use retention::{CleanupController, CleanupReport, MemoryBackend, StorageBackend};

pub fn run(settings: &Settings) -> Result<CleanupReport> {
    if settings.test_mode {
        let mut backend = MemoryBackend::fixture();
        execute(&mut backend, settings)
    } else {
        let mut backend = BtrfsBackend::open(&settings.path)?;
        execute(&mut backend, settings)
    }
}

fn execute<B>(backend: &mut B, settings: &Settings) -> Result<CleanupReport>
where
    B: StorageBackend,
{
    let controller = CleanupController::new(settings.targets.clone())?;

    if let Some(source) = &settings.snapshot_source {
        let name = retention::take_snapshot(backend, source)
            .with_context(|| format!("Failed to snapshot {}", source.display()))?;
        println!("{} Created snapshot {}", "✓".green(), name);
    }

    tracing::debug!(
        "Cleaning {} toward: {}",
        settings.path.display(),
        util::describe_targets(controller.targets(), settings.target_freespace.as_ref()).join(", ")
    );

    let report = controller
        .run(backend)
        .with_context(|| format!("Cleanup of {} failed", settings.path.display()))?;

    print_report(&report);
    Ok(report)
}

fn print_report(report: &CleanupReport) {
    if report.removed.is_empty() {
        println!("{}", "No snapshots removed".dimmed());
    } else {
        for name in &report.removed {
            println!("  {} {}", "-".red(), name);
        }
        println!(
            "Snapshots removed: {}",
            report.removed.len().to_string().yellow()
        );
    }
    println!("Stopped: {}", report.stop);
}
