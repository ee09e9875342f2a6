use crate::scheduler::Cylinder;

/// Disk size used when no `max_cylinder` is configured
pub const DEFAULT_MAX_CYLINDER: Cylinder = 5000;

/// Lowest addressable cylinder, the C-SCAN wrap target
pub const FIRST_CYLINDER: Cylinder = 0;

/// Request file read when neither the CLI nor the environment names one
pub const DEFAULT_REQUESTS_FILE: &str = "requests.txt";

/// Headers of the exported report
pub const REPORT_POLICY_HEADER: &str = "Policy";
pub const REPORT_MOVEMENT_HEADER: &str = "TotalMovement";
