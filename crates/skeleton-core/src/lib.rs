//! Skeleton Core - the library half of a freshly scaffolded project.
//!
//! The crate exists to prove that a generated workspace compiles, links and
//! runs. It exposes one stateless capability set, `{greet, add}`, in two
//! shapes:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          skeleton-cli (binary)          │
//! │      (drives the Library, prints)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Library (zero-sized capability value) │
//! └──────────────────┬──────────────────────┘
//!                    │ delegates to
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        ops (pure free functions)        │
//! │   greet, add, multiply, checked_*       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use skeleton_core::prelude::*;
//!
//! let lib = Library::new();
//! assert_eq!(lib.add(5, 3), 8);
//! assert_eq!(ops::greet("World"), "Hello, World!");
//!
//! let mut out = Vec::new();
//! lib.hello_to(&mut out).unwrap();
//! assert_eq!(out, format!("{GREETING}\n").into_bytes());
//! ```
//!
//! ## Overflow policy
//!
//! [`ops::add`] and [`ops::multiply`] wrap on overflow (two's complement),
//! in debug and release builds alike. Callers that want a fault instead use
//! [`ops::checked_add`] / [`ops::checked_multiply`], which return
//! [`CoreError::Overflow`].

pub mod error;
pub mod greeting;
pub mod library;
pub mod ops;

pub use error::{CoreError, CoreResult, Operation};
pub use greeting::{GREETING, PROJECT_NAME};
pub use library::Library;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::greeting::{GREETING, PROJECT_NAME};
    pub use crate::library::Library;
    pub use crate::ops;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
