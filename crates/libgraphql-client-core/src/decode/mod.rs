//! Mapping a response `data` payload back onto a destination shape, guided
//! by the [`SelectionSet`](crate::operation::SelectionSet) it was requested
//! with.

mod decode_error;
mod decode_mode;
mod decoder;
mod response_path;
mod scalar_range_error;
mod selection_mismatch_error;

pub use decode_error::DecodeError;
pub use decode_mode::DecodeMode;
pub use decoder::Decoder;
pub use response_path::ResponsePath;
pub use response_path::ResponsePathSegment;
pub use scalar_range_error::ScalarRangeError;
pub use selection_mismatch_error::SelectionMismatchError;
pub use selection_mismatch_error::SelectionMismatchKind;

#[cfg(test)]
mod tests;
