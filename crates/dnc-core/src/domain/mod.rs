pub mod exclusion;
pub mod phone;

pub use exclusion::ExclusionSet;
pub use phone::{canonical_match_key, canonicalize, is_valid_phone_number};
