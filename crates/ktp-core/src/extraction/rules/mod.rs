//! Rule tables and the per-stage functions built on them.

pub mod anchored;
pub mod labels;
pub mod normalize;
pub mod patterns;
pub mod search;
pub mod validate;

pub use anchored::LineAnchoredExtractor;
pub use labels::{label_table, LabelRule};
pub use normalize::{canonical_gender, normalize_fields, pad_rt_rw, FEMALE, MALE};
pub use patterns::{pattern_table, FieldPattern};
pub use search::PatternSearchExtractor;
pub use validate::{nik_errors, validate_fields};
