//! Shared output helpers

use retention::Targets;
use snapbtr_core::Size;

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    let (unit, scale) = match bytes {
        b if b >= TB => ("TB", TB),
        b if b >= GB => ("GB", GB),
        b if b >= MB => ("MB", MB),
        b if b >= KB => ("KB", KB),
        _ => return format!("{} B", bytes),
    };
    format!("{:.2} {}", bytes as f64 / scale as f64, unit)
}

/// One line per configured target, e.g. `free space >= 10G[10737418240] (10.00 GB)`
pub fn describe_targets(targets: &Targets, freespace: Option<&Size>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(bytes) = targets.target_freespace {
        let shown = freespace
            .map(|s| s.to_string())
            .unwrap_or_else(|| bytes.to_string());
        lines.push(format!("free space >= {} ({})", shown, format_size(bytes)));
    }
    if let Some(count) = targets.target_backups {
        lines.push(format!("backups <= {}", count));
    }
    if let Some(keep) = targets.keep_backups {
        lines.push(format!("keep at least {}", keep));
    }
    if let Some(max) = targets.target_removed {
        lines.push(format!("remove at most {}", max));
    }
    lines
}
