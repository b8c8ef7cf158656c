pub mod bmi;
pub mod grip;
pub mod katz;
pub mod lawton;
pub mod lower_limb;
pub mod six_minute_walk;
pub mod tug;
