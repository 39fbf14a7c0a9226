use std::any::type_name;

use crate::data_structure::error::{ListError, Result};

/// Anything that may be handed to a positional operation.
///
/// Integer types resolve to their value; every other implementor is rejected
/// with [`ListError::TypeMismatch`]. Range checking is left to the list, which
/// knows its length.
pub trait Position {
    fn position(&self) -> Result<i128>;
}

macro_rules! integer_position {
    ($($t:ty),*) => {
        $(
            impl Position for $t {
                fn position(&self) -> Result<i128> {
                    Ok(*self as i128)
                }
            }
        )*
    };
}

macro_rules! rejected_position {
    ($($t:ty),*) => {
        $(
            impl Position for $t {
                fn position(&self) -> Result<i128> {
                    Err(ListError::TypeMismatch {
                        expected: "integer",
                        found: type_name::<$t>(),
                    })
                }
            }
        )*
    };
}

integer_position!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
rejected_position!(&str, String, char, bool, f32, f64);
