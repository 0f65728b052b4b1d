pub mod home;
pub mod not_found;
pub mod problem;
pub mod topic;
