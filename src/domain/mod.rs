//! Domain value objects and types.
//!
//! Each value object validates its input at construction time, so an
//! instance that exists is always valid. Instances are immutable and compare
//! by value.

pub mod address;
pub mod company;
pub mod email;
pub mod errors;
pub mod japanese_phone;
pub mod name;
pub mod path;
pub mod phone;
pub mod value_object;

pub use address::Address;
pub use company::Company;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use japanese_phone::{hyphenate, is_mobile_number, JapanesePhoneNumber, PhoneNumberKind};
pub use name::{FullName, JapaneseFullName};
pub use path::{DirectoryAndFilePath, DirectoryPath, FilePath};
pub use phone::PhoneNumber;
pub use value_object::{SingleValue, ValueObject};
