pub mod activities;
pub mod campers;
pub mod signups;
pub mod validation;

pub use activities::ActivityRow;
pub use campers::CamperRow;
pub use signups::{ActivitySignupRow, CamperSignupRow, SignupRow};
