pub mod application;
pub mod job;
pub mod resume;
pub mod skill;
pub mod user;
