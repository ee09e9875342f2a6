use super::{Cylinder, MovementCost, seek_distance};

/// Requests are served exactly in arrival order
pub fn fcfs_order(requests: &[Cylinder]) -> Vec<Cylinder> {
    requests.to_vec()
}

/// Total head movement under First-Come-First-Served.
///
/// No range checks are made: any integers, negative ones included, are
/// treated as plain positions. An empty request set costs nothing.
pub fn total_movement_fcfs(requests: &[Cylinder], start: Cylinder) -> MovementCost {
    seek_distance(requests.iter().copied(), start)
}
