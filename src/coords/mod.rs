pub mod geodetic;
pub mod obs;
pub mod vector;

pub use geodetic::{lat_lon_alt, observer_pos_vel, Geodetic};
pub use obs::{calculate_obs, ObsSet};
pub use vector::Vector;
