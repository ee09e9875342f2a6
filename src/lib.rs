pub mod config;
pub mod constants;
pub mod error;
pub mod report;
pub mod requests;
pub mod scheduler;

pub use config::{Config, ConfigOverrides};
pub use constants::DEFAULT_MAX_CYLINDER;
pub use error::{Result, SchedulerError};
pub use report::export_to_csv_with_path;
pub use requests::{read_requests, read_requests_from_reader};
pub use scheduler::{
    Cylinder, DiskScheduler, MovementCost, Policy, PolicyResult, seek_distance, service_order,
    total_movement_cscan, total_movement_fcfs, total_movement_scan,
};
