use super::{Cylinder, MovementCost, pivot, seek_distance, sorted_copy, validate_disk_size};
use crate::constants::FIRST_CYLINDER;
use crate::error::Result;

/// Adds the two disk edges, `max_cylinder - 1` and `0`, as ordinary stops.
///
/// These sentinels are what turn a plain sorted sweep into C-SCAN: the
/// forward sweep always runs to the last cylinder, and the wrap always
/// lands on the first one. They count towards the movement like any
/// request, so callers must not add them themselves.
pub(crate) fn with_boundary_sentinels(requests: &[Cylinder], max_cylinder: Cylinder) -> Vec<Cylinder> {
    let mut extended = Vec::with_capacity(requests.len() + 2);
    extended.extend_from_slice(requests);
    extended.push(max_cylinder - 1);
    extended.push(FIRST_CYLINDER);
    extended
}

/// Circular order: sweep up to the disk edge, jump to cylinder 0, sweep up again.
///
/// An empty request set yields an empty order, the arm stays put.
/// `max_cylinder` must already be validated.
pub(crate) fn cscan_order(requests: &[Cylinder], start: Cylinder, max_cylinder: Cylinder) -> Vec<Cylinder> {
    if requests.is_empty() {
        return Vec::new();
    }

    let sorted = sorted_copy(&with_boundary_sentinels(requests, max_cylinder));
    let pivot = pivot(&sorted, start);
    let (behind, ahead) = sorted.split_at(pivot);

    let mut order = Vec::with_capacity(sorted.len());
    // forward sweep, ends on the max_cylinder - 1 sentinel
    order.extend_from_slice(ahead);
    // wrap to sorted[0], then continue upwards; behind is empty when pivot == 0
    order.extend_from_slice(behind);
    order
}

/// Total head movement under C-SCAN.
///
/// The jump from the last cylinder back to cylinder 0 is charged as one
/// movement of `max_cylinder - 1`.
///
/// # Errors
/// Returns `InvalidDiskSize` if `max_cylinder` is not positive
pub fn total_movement_cscan(
    requests: &[Cylinder],
    start: Cylinder,
    max_cylinder: Cylinder,
) -> Result<MovementCost> {
    validate_disk_size(max_cylinder)?;
    Ok(seek_distance(cscan_order(requests, start, max_cylinder), start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchedulerError;

    const TEXTBOOK_REQUESTS: [Cylinder; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

    #[test]
    fn test_cscan_textbook_scenario() {
        // 53 -> 199, wrap 199 -> 0, then 0 -> 14 -> 37
        let total = total_movement_cscan(&TEXTBOOK_REQUESTS, 53, 200).unwrap();
        assert_eq!(total, 146 + 199 + 37);
        assert_eq!(total, 382);
    }

    #[test]
    fn test_cscan_textbook_order() {
        assert_eq!(
            cscan_order(&TEXTBOOK_REQUESTS, 53, 200),
            vec![65, 67, 98, 122, 124, 183, 199, 0, 14, 37]
        );
    }

    #[test]
    fn test_cscan_default_disk_size() {
        let total = total_movement_cscan(&TEXTBOOK_REQUESTS, 53, 5000).unwrap();
        assert_eq!(total, 4946 + 4999 + 37);
    }

    #[test]
    fn test_cscan_empty_requests() {
        assert_eq!(total_movement_cscan(&[], 53, 5000).unwrap(), 0);
        assert!(cscan_order(&[], 53, 5000).is_empty());
    }

    #[test]
    fn test_cscan_single_request_ahead() {
        // 53 -> 120 -> 199, then the wrap to 0
        assert_eq!(total_movement_cscan(&[120], 53, 200).unwrap(), 67 + 79 + 199);
    }

    #[test]
    fn test_cscan_single_request_behind() {
        // 53 -> 199, wrap to 0, then up to 10
        assert_eq!(total_movement_cscan(&[10], 53, 200).unwrap(), 146 + 199 + 10);
    }

    #[test]
    fn test_cscan_start_at_zero_never_wraps() {
        // the 0 sentinel equals the head and is served first
        assert_eq!(cscan_order(&[30, 10], 0, 100), vec![0, 10, 30, 99]);
        assert_eq!(total_movement_cscan(&[30, 10], 0, 100).unwrap(), 99);
    }

    #[test]
    fn test_cscan_request_at_head_is_ahead() {
        assert_eq!(cscan_order(&[20, 50], 50, 100), vec![50, 99, 0, 20]);
    }

    #[test]
    fn test_cscan_single_cylinder_disk() {
        // both sentinels collapse onto cylinder 0
        assert_eq!(cscan_order(&[0], 0, 1), vec![0, 0, 0]);
        assert_eq!(total_movement_cscan(&[0], 0, 1).unwrap(), 0);
    }

    #[test]
    fn test_cscan_is_permutation_invariant() {
        let mut shuffled = TEXTBOOK_REQUESTS;
        shuffled.rotate_left(3);
        assert_eq!(
            total_movement_cscan(&shuffled, 53, 200).unwrap(),
            total_movement_cscan(&TEXTBOOK_REQUESTS, 53, 200).unwrap()
        );
    }

    #[test]
    fn test_cscan_does_not_keep_sentinels_in_caller_requests() {
        let requests = TEXTBOOK_REQUESTS.to_vec();
        let first = total_movement_cscan(&requests, 53, 200).unwrap();
        let second = total_movement_cscan(&requests, 53, 200).unwrap();
        assert_eq!(first, second);
        assert_eq!(requests.len(), TEXTBOOK_REQUESTS.len());
    }

    #[test]
    fn test_with_boundary_sentinels() {
        assert_eq!(with_boundary_sentinels(&[5, 3], 10), vec![5, 3, 9, 0]);
    }

    #[test]
    fn test_cscan_rejects_invalid_disk_size() {
        let result = total_movement_cscan(&TEXTBOOK_REQUESTS, 53, 0);
        assert!(matches!(result, Err(SchedulerError::InvalidDiskSize(0))));

        let result = total_movement_cscan(&TEXTBOOK_REQUESTS, 53, -1);
        assert!(matches!(result, Err(SchedulerError::InvalidDiskSize(-1))));
    }
}
