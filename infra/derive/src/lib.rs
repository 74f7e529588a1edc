#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the booking workspace.
//! Every crate declares exactly one error enum through [`macro@stay_error`], so failures look and
//! behave the same from the catalog up to the shell binary.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! stay-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Classification**: Generates a fieldless `<ErrorName>Kind` enum (`Copy + Eq + Hash`) and a
///   `kind()` accessor, so callers compare failures instead of matching on payloads.
/// * **Context Support**: Generates a companion `<ErrorName>Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` if an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants carry named fields or no fields at all. Tuple variants are rejected.
/// 3. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 4. Variants with a source field must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use stay_derive::stay_error;
/// use std::borrow::Cow;
///
/// #[stay_error]
/// pub enum LedgerError {
///     #[error("Hotel is fully booked")]
///     Full,
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// assert_eq!(LedgerError::Full.kind(), LedgerErrorKind::Full);
/// ```
#[proc_macro_attribute]
pub fn stay_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
