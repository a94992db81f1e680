pub mod aliases;
pub mod issue;
pub mod transform;

pub use aliases::{HEADER_ALIASES, canonical_header, normalize_headers};
pub use issue::ValidationIssue;
pub use transform::{TransformOutcome, transform_players};
