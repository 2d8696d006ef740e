//! rsutil: a grab-bag utility library.
//!
//! The core is a path tree builder that groups flat records carrying
//! delimited path strings (`"a.b.c"`) into a forest of nested nodes.
//! Around it sit small, independent, pure helpers: value emptiness
//! predicates, key-case conversion, object diffing and type-shape
//! comparison, string helpers, date-delta math, immutability wrappers
//! and a random color generator.
//!
//! Everything is consumed as a library call; nothing here performs I/O or
//! keeps state across calls.

pub mod case;
pub mod color;
pub mod datetime;
pub mod diff;
pub mod errors;
pub mod immutable;
pub mod text;
pub mod tree;
pub mod util;
pub mod value;

pub use case::to_camel_case_keys;
pub use color::{random_color, random_color_with};
pub use datetime::{
    days_time_from_seconds, is_date, remaining_between, remaining_from_seconds, TimeRemaining,
};
pub use diff::{compare_object_arrays_type_safe, object_difference_by_props, PropertyDifference};
pub use errors::{CompareError, CompareResult};
pub use immutable::{Frozen, Sealed};
pub use text::{
    add_spaces_to_camel_case, initials, is_palindrome, lead_zero, none_if_empty,
    some_if_not_empty, StringExt,
};
pub use tree::TreeBuilder;
pub use value::{
    has_valid_length, is_empty, is_empty_in_depth, is_null_or_undefined,
    is_null_or_undefined_empty, is_object, shift_to_first_with,
};
