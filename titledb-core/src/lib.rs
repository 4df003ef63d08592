//! Core types shared by the title database jobs: GameTDB identifiers,
//! region classification, ordered title maps and the merged record shape.

pub mod error;
pub mod identifier;
pub mod record;
pub mod region;
pub mod title_map;

pub use error::TitleError;
pub use identifier::{TitleLine, parse_title_line};
pub use record::{MergedRecord, OwnedTitle};
pub use region::RegionTable;
pub use title_map::TitleMap;
