// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

pub mod util;
pub mod value;

pub use quiver_type::{Error, Result};
pub use util::{BitVec, CowVec};
pub use value::{
	column::{Column, Columns, data::ColumnData, decoded::DecodedColumn, encoded::EncodedColumn},
	container::{BoolContainer, NumberContainer, UndefinedContainer, Utf8Container},
	rows::RowSet,
};
