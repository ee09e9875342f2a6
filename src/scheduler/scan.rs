use super::{Cylinder, MovementCost, pivot, seek_distance, sorted_copy, validate_disk_size};
use crate::error::Result;

/// Elevator order: sweep up from `start`, then reverse and sweep down.
///
/// The arm turns around at the outermost request, not at the disk edge.
pub fn scan_order(requests: &[Cylinder], start: Cylinder) -> Vec<Cylinder> {
    let sorted = sorted_copy(requests);
    let pivot = pivot(&sorted, start);
    let (behind, ahead) = sorted.split_at(pivot);

    let mut order = Vec::with_capacity(sorted.len());
    // ascend
    order.extend_from_slice(ahead);
    // descend, nearest request behind the head first
    order.extend(behind.iter().rev());
    order
}

/// Total head movement under SCAN, sweeping towards higher cylinders first.
///
/// # Arguments
/// * `requests` - pending cylinder requests, in any order
/// * `start` - head position before service begins
/// * `max_cylinder` - disk size, only validated since SCAN never goes past the last request
///
/// # Errors
/// Returns `InvalidDiskSize` if `max_cylinder` is not positive
pub fn total_movement_scan(
    requests: &[Cylinder],
    start: Cylinder,
    max_cylinder: Cylinder,
) -> Result<MovementCost> {
    validate_disk_size(max_cylinder)?;
    Ok(seek_distance(scan_order(requests, start), start))
}
