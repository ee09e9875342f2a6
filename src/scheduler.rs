mod cscan;
mod fcfs;
mod scan;

pub use cscan::total_movement_cscan;
pub(crate) use cscan::cscan_order;
pub use fcfs::{fcfs_order, total_movement_fcfs};
pub use scan::{scan_order, total_movement_scan};

use crate::constants::DEFAULT_MAX_CYLINDER;
use crate::error::{Result, SchedulerError};
use std::fmt;

/// Track position on the disk surface. Also used for the head position.
pub type Cylinder = i32;

/// Accumulated head movement. Wider than `Cylinder` so long request sets cannot overflow.
pub type MovementCost = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fcfs,
    Scan,
    CScan,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fcfs, Policy::Scan, Policy::CScan];

    // (short name, command line label). The labels keep the wording of the
    // established "<label> Total Head Movements" output lines.
    const fn names(self) -> (&'static str, &'static str) {
        match self {
            Policy::Fcfs => ("FCFS", "FCFS"),
            Policy::Scan => ("SCAN", "Elevator Algorithm"),
            Policy::CScan => ("C-SCAN", "Circular SCAN"),
        }
    }

    /// Name used in the command line report
    pub fn label(self) -> &'static str {
        self.names().1
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.names().0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyResult {
    pub policy: Policy,
    pub total_movement: MovementCost,
}

/// Evaluates the scheduling policies against one disk geometry.
///
/// Holds configuration only. Every call works on its own copy of the
/// requests, so a scheduler can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskScheduler {
    max_cylinder: Cylinder,
}

impl Default for DiskScheduler {
    fn default() -> Self {
        Self {
            max_cylinder: DEFAULT_MAX_CYLINDER,
        }
    }
}

impl DiskScheduler {
    pub fn new(max_cylinder: Cylinder) -> Result<Self> {
        validate_disk_size(max_cylinder)?;
        Ok(Self { max_cylinder })
    }

    pub fn max_cylinder(&self) -> Cylinder {
        self.max_cylinder
    }

    /// Order in which `policy` visits the requests, sentinels included
    pub fn service_order(
        &self,
        policy: Policy,
        requests: &[Cylinder],
        start: Cylinder,
    ) -> Vec<Cylinder> {
        match policy {
            Policy::Fcfs => fcfs_order(requests),
            Policy::Scan => scan_order(requests, start),
            Policy::CScan => cscan_order(requests, start, self.max_cylinder),
        }
    }

    pub fn total_movement(
        &self,
        policy: Policy,
        requests: &[Cylinder],
        start: Cylinder,
    ) -> MovementCost {
        seek_distance(self.service_order(policy, requests, start), start)
    }

    /// Runs every policy over the same request set
    pub fn evaluate_all(&self, requests: &[Cylinder], start: Cylinder) -> Vec<PolicyResult> {
        Policy::ALL
            .iter()
            .map(|&policy| PolicyResult {
                policy,
                total_movement: self.total_movement(policy, requests, start),
            })
            .collect()
    }
}

/// Visiting order of `policy` for a disk of `max_cylinder` cylinders.
///
/// # Errors
/// Returns `InvalidDiskSize` if `max_cylinder` is not positive
pub fn service_order(
    policy: Policy,
    requests: &[Cylinder],
    start: Cylinder,
    max_cylinder: Cylinder,
) -> Result<Vec<Cylinder>> {
    Ok(DiskScheduler::new(max_cylinder)?.service_order(policy, requests, start))
}

/// Sum of absolute differences between consecutive stops, beginning at `start`
pub fn seek_distance<I>(path: I, start: Cylinder) -> MovementCost
where
    I: IntoIterator<Item = Cylinder>,
{
    path.into_iter()
        .scan(start, |current, next| {
            let step = current.abs_diff(next);
            *current = next;
            Some(MovementCost::from(step))
        })
        .sum()
}

pub fn validate_disk_size(max_cylinder: Cylinder) -> Result<()> {
    if max_cylinder <= 0 {
        return Err(SchedulerError::InvalidDiskSize(max_cylinder));
    }
    Ok(())
}

/// First index whose cylinder is at or above `start`. A request equal to
/// the head position counts as ahead of it.
pub(crate) fn pivot(sorted: &[Cylinder], start: Cylinder) -> usize {
    sorted.partition_point(|&cylinder| cylinder < start)
}

// Working copy, the caller's slice is never reordered.
pub(crate) fn sorted_copy(requests: &[Cylinder]) -> Vec<Cylinder> {
    let mut sorted = requests.to_vec();
    sorted.sort_unstable();
    sorted
}
