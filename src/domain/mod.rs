pub mod inference;
pub mod keyword;
pub mod place;
pub mod report;
pub mod search_volume;
