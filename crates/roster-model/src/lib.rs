pub mod fields;
pub mod player;
pub mod record;
pub mod value;

pub use player::NewPlayer;
pub use record::{RawTable, Record, RejectedRecord, SourceMetadata};
pub use value::CellValue;
