//! Value types that participate in the fixed-layout encoding.

mod fixed_string;

pub use fixed_string::FixedString;
