pub mod error;
pub mod gametdb;
pub mod inventory;
pub mod title_list;
pub mod titles_json;

pub use error::DatError;
pub use gametdb::{load_gametdb, parse_gametdb};
pub use inventory::{InventoryEntry, load_inventory, parse_inventory};
pub use title_list::{HEADER_PREFIX, load_title_list, parse_title_list};
pub use titles_json::{load_titles_json, read_titles_json, write_titles_json};
