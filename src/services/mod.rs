pub mod place_crawler;
pub mod search_ad;
pub mod signer;
pub mod volume_analyzer;

pub use place_crawler::*;
pub use search_ad::*;
pub use signer::*;
pub use volume_analyzer::*;
