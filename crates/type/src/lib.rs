// SPDX-License-Identifier: MIT
// Copyright (c) 2025 QuiverDB

pub mod error;
pub mod fragment;
pub mod value;

pub use error::{Error, diagnostic::Diagnostic};
pub use fragment::{Fragment, StatementColumn, StatementLine};
pub use value::r#type::Type;

pub type Result<T> = std::result::Result<T, Error>;
