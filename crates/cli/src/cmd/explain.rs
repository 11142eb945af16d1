//! Describe the retention policy

/// What snapbtr does, in prose
pub const EXPLANATION: &str = "\
snapbtr keeps snapshots of btrfs filesystems.

Run it regularly (for example from cron.hourly) or once in a while to
maintain an interesting set of snapshots. Snapshots are subvolumes in
PATH named after the UTC instant they were taken, as YYYYMMDD-HHMMSS.
You may add or remove snapshots by hand at any time; anything in PATH
that is not named this way is left alone and not counted.

Each run optionally takes a new snapshot of SUBVOL, then removes
snapshots until every target holds:

  --target-freespace  at least SIZE bytes are free in PATH
  --target-backups    at most # snapshots remain

--keep-backups stops cleaning once that many snapshots remain, even if a
target is still unmet, and --max-removed caps removals per run. The
newest snapshot is never removed automatically.

Snapshots to remove are chosen by scoring each gap between consecutive
snapshots (older, newer). A snapshot's value grows exponentially with
its timestamp, and a gap scores the difference in value across it. The
newer snapshot of the lowest-scoring gap goes first. Recent gaps score
high even when the snapshots are close together, while old gaps score
high only when they are wide, so the snapshots that survive are spaced
further apart the further back in time they are.
";

pub fn run() {
    print!("{}", EXPLANATION);
}
