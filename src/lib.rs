//! jp-value-objects - Domain value objects for Japanese business data.
//!
//! The centerpiece is [`JapanesePhoneNumber`], which normalizes user input,
//! validates it as a 10 or 11 digit Japanese number, classifies it by its
//! numbering-plan prefix and renders the canonical hyphenated form.
//!
//! # Architecture
//!
//! - **domain**: Value objects (phone numbers, email, address, names, company, paths)
//! - **validation**: Reusable constructor rules (required, length, email format)
//! - **text**: Display-width counting with full-width characters as two columns
//! - **report**: Batch formatting of phone number inputs
//! - **config**: Configuration for the `jpvo` command from environment variables
//! - **error**: Error types outside the domain layer

pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod text;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use domain::{
    Address, Company, DirectoryAndFilePath, DirectoryPath, EmailAddress, FilePath, FullName,
    JapaneseFullName, JapanesePhoneNumber, PhoneNumber, PhoneNumberKind, ValidationError,
};
pub use error::ConfigError;
pub use report::{FormatOutcome, FormatReport};
