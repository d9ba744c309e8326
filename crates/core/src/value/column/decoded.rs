// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use crate::value::{
	column::{data::ColumnData, encoded::EncodedColumn},
	container::NumberContainer,
};

/// An encoding-agnostic, row-indexed view over an [`EncodedColumn`].
///
/// The mapping from logical row to physical slot is resolved once when the
/// view is created; per-row calls only perform the value lookup.
#[derive(Clone, Copy, Debug)]
pub struct DecodedColumn<'a> {
	mapping: Mapping<'a>,
}

#[derive(Clone, Copy, Debug)]
enum Mapping<'a> {
	Constant {
		data: &'a ColumnData,
		row_count: usize,
	},
	Identity {
		data: &'a ColumnData,
	},
	Dictionary {
		ids: &'a NumberContainer<u32>,
		values: &'a ColumnData,
	},
}

impl<'a> DecodedColumn<'a> {
	pub(crate) fn new(column: &'a EncodedColumn) -> Self {
		let mapping = match column {
			EncodedColumn::Flat(data) => Mapping::Identity {
				data,
			},
			EncodedColumn::Constant {
				data,
				row_count,
			} => Mapping::Constant {
				data,
				row_count: *row_count,
			},
			EncodedColumn::Dictionary {
				ids,
				values,
			} => Mapping::Dictionary {
				ids,
				values,
			},
		};
		Self {
			mapping,
		}
	}

	/// One stored value answers for every row.
	pub fn is_constant_mapping(&self) -> bool {
		matches!(self.mapping, Mapping::Constant { .. })
	}

	/// Rows map straight onto physical slots.
	pub fn is_identity_mapping(&self) -> bool {
		matches!(self.mapping, Mapping::Identity { .. })
	}

	pub fn row_count(&self) -> usize {
		match self.mapping {
			Mapping::Constant {
				row_count,
				..
			} => row_count,
			Mapping::Identity {
				data,
			} => data.len(),
			Mapping::Dictionary {
				ids,
				..
			} => ids.len(),
		}
	}

	/// The backing values the mapping resolves into.
	pub fn data(&self) -> &'a ColumnData {
		match self.mapping {
			Mapping::Constant {
				data,
				..
			} => data,
			Mapping::Identity {
				data,
			} => data,
			Mapping::Dictionary {
				values,
				..
			} => values,
		}
	}

	/// The physical slot a row resolves to; `None` when the row has no
	/// slot at all (an undefined dictionary id).
	pub fn index_at(&self, row: usize) -> Option<usize> {
		match self.mapping {
			Mapping::Constant {
				..
			} => Some(0),
			Mapping::Identity {
				..
			} => Some(row),
			Mapping::Dictionary {
				ids,
				..
			} => ids.get(row).map(|&id| id as usize),
		}
	}

	pub fn is_undefined(&self, row: usize) -> bool {
		match self.index_at(row) {
			Some(index) => !self.data().is_defined(index),
			None => true,
		}
	}

	/// The logical value at `row`, widened to `i64`. `None` for undefined
	/// rows, non-integer payloads and `u64` values past `i64::MAX`.
	pub fn i64_at(&self, row: usize) -> Option<i64> {
		let index = self.index_at(row)?;
		integer_to_i64(self.data(), index)
	}
}

fn integer_to_i64(data: &ColumnData, index: usize) -> Option<i64> {
	match data {
		ColumnData::Int1(container) => container.get(index).map(|&value| value as i64),
		ColumnData::Int2(container) => container.get(index).map(|&value| value as i64),
		ColumnData::Int4(container) => container.get(index).map(|&value| value as i64),
		ColumnData::Int8(container) => container.get(index).copied(),
		ColumnData::Uint1(container) => container.get(index).map(|&value| value as i64),
		ColumnData::Uint2(container) => container.get(index).map(|&value| value as i64),
		ColumnData::Uint4(container) => container.get(index).map(|&value| value as i64),
		ColumnData::Uint8(container) => {
			container.get(index).and_then(|&value| i64::try_from(value).ok())
		}
		_ => None,
	}
}
