pub mod assessment;
pub mod id;
pub mod patient;
