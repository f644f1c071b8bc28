//! Code generation for sample files.
//!
//! ## Submodules
//!
//! - [`request`] - Builds the request message statements
//! - [`invocation`] - Builds the call in either calling form and the
//!   statements that consume its result
//! - [`sample_file`] - Assembles a complete sample file
//!
//! ## Output Format
//!
//! Statement generators return `proc_macro2::TokenStream`, which is then:
//! - Validated with `syn::parse2` to ensure correctness
//! - Formatted with `prettyplease` for consistent style
//!
//! Comments and region markers cannot travel through a token stream, so
//! [`SampleFileBuilder`] stitches them around the formatted statements.

pub mod invocation;
pub mod request;
pub mod sample_file;

pub use invocation::{Invocation, generate_consume, generate_invocation};
pub use request::{RequestBinding, generate_request, request_bindings};
pub use sample_file::{SampleFileBuilder, format_statements};
