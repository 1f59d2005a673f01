pub mod admin;
pub mod members;
pub mod projects;
mod responses;
mod status;

pub use responses::*;
pub use status::*;
