//! Error-message templates
//!
//! Templates use named placeholders (`{field}`, `{min}`, `{max}`). Callers render
//! them; predicates in this crate only ever return `bool` or a contract error.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    LengthTooLong,
    LengthTooShort,
    LengthOutOfRange,
    NotValidEmail,
    NumberOutOfRange,
    NotAnInteger,
    NotAFloat,
    NotANumber,
}

impl Message {
    pub const ALL: [Message; 8] = [
        Message::LengthTooLong,
        Message::LengthTooShort,
        Message::LengthOutOfRange,
        Message::NotValidEmail,
        Message::NumberOutOfRange,
        Message::NotAnInteger,
        Message::NotAFloat,
        Message::NotANumber,
    ];

    /// Stable identifier, e.g. for looking up a translation
    pub fn code(self) -> &'static str {
        match self {
            Message::LengthTooLong => "length_too_long",
            Message::LengthTooShort => "length_too_short",
            Message::LengthOutOfRange => "length_out_of_range",
            Message::NotValidEmail => "not_valid_email",
            Message::NumberOutOfRange => "number_out_of_range",
            Message::NotAnInteger => "not_an_integer",
            Message::NotAFloat => "not_a_float",
            Message::NotANumber => "not_a_number",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            Message::LengthTooLong => "{field} length can not be greater than {max}",
            Message::LengthTooShort => "{field} length can not be less than {min}",
            Message::LengthOutOfRange => "{field} length must be between {min} and {max}",
            Message::NotValidEmail => "{field} is not valid email address",
            Message::NumberOutOfRange => "{field} must be between {min} and {max}",
            Message::NotAnInteger => "{field} must be an integer",
            Message::NotAFloat => "{field} must be float",
            Message::NotANumber => "{field} must be number",
        }
    }

    /// Placeholder names in the order they appear in the template
    pub fn placeholders(self) -> &'static [&'static str] {
        match self {
            Message::LengthTooLong => &["field", "max"],
            Message::LengthTooShort => &["field", "min"],
            Message::LengthOutOfRange | Message::NumberOutOfRange => &["field", "min", "max"],
            Message::NotValidEmail
            | Message::NotAnInteger
            | Message::NotAFloat
            | Message::NotANumber => &["field"],
        }
    }
}
