// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capitalize strings: first character uppercase, the rest lowercase.
//!
//! ```
//! use capcase::{Capitalize, capitalize};
//!
//! assert_eq!(capitalize("hello"), "Hello");
//! assert_eq!("TEST".capitalize(), "Test");
//! ```

mod capitalize;

pub use capitalize::{Capitalize, capitalize, capitalize_cow};
