mod data_stores;
mod email;
mod error;
mod listing;
mod member;
mod member_id;
mod member_name;
mod pagination;
mod project;
mod project_id;
mod project_title;
mod text;

pub use data_stores::*;
pub use email::*;
pub use error::*;
pub use listing::*;
pub use member::*;
pub use member_id::*;
pub use member_name::*;
pub use pagination::*;
pub use project::*;
pub use project_id::*;
pub use project_title::*;
pub use text::*;
