pub mod community;
pub mod detail;
pub mod list;
pub mod search;
pub mod status;
pub mod summary;
