pub mod discipline;
pub mod fencing;
pub mod laser_run;
pub mod obstacle;
pub mod swimming;
pub mod tables;

pub use discipline::{Discipline, DisciplineResult, compute_points};
pub use fencing::{FencingRankingParams, calculate_fencing_ranking, fencing_ranking_params};
pub use laser_run::{
    calculate_laser_run, format_laser_run_time, parse_laser_run_time, try_parse_time,
};
pub use tables::AgeCategory;
