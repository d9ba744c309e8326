// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use quiver_type::{
	Type, error,
	error::diagnostic::encoding::{constant_data_too_long, dictionary_id_out_of_range},
};

use crate::value::{
	column::{data::ColumnData, decoded::DecodedColumn},
	container::NumberContainer,
	rows::RowSet,
};

/// The physical encoding of a batch column.
///
/// Every encoding yields exactly one logical value-or-undefined per row;
/// consumers go through [`EncodedColumn::decode`] and never index the
/// physical layout directly.
#[derive(Clone, Debug, PartialEq)]
pub enum EncodedColumn {
	/// One physical slot per logical row.
	Flat(ColumnData),

	/// A single stored value standing for every row. An empty payload, or
	/// a single undefined slot, makes every row undefined.
	Constant {
		data: ColumnData,
		row_count: usize,
	},

	/// Per-row ids into a dictionary of distinct values. A row is
	/// undefined when its id slot is undefined or the entry it points at
	/// is undefined.
	Dictionary {
		ids: NumberContainer<u32>,
		values: ColumnData,
	},
}

impl EncodedColumn {
	pub fn flat(data: ColumnData) -> Self {
		EncodedColumn::Flat(data)
	}

	pub fn constant(data: ColumnData, row_count: usize) -> crate::Result<Self> {
		if data.len() > 1 {
			return Err(error!(constant_data_too_long(data.len())));
		}
		Ok(EncodedColumn::Constant {
			data,
			row_count,
		})
	}

	pub fn dictionary(ids: NumberContainer<u32>, values: ColumnData) -> crate::Result<Self> {
		for id in ids.iter().flatten() {
			if id as usize >= values.len() {
				return Err(error!(dictionary_id_out_of_range(id, values.len())));
			}
		}
		Ok(EncodedColumn::Dictionary {
			ids,
			values,
		})
	}

	pub fn row_count(&self) -> usize {
		match self {
			EncodedColumn::Flat(data) => data.len(),
			EncodedColumn::Constant {
				row_count,
				..
			} => *row_count,
			EncodedColumn::Dictionary {
				ids,
				..
			} => ids.len(),
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			EncodedColumn::Flat(data) => data.get_type(),
			EncodedColumn::Constant {
				data,
				..
			} => data.get_type(),
			EncodedColumn::Dictionary {
				values,
				..
			} => values.get_type(),
		}
	}

	/// Resolve the encoding once for a batch and return a uniform
	/// row-indexed view. Classification happens here, value lookups happen
	/// per row through the returned view.
	pub fn decode(&self, rows: &RowSet) -> DecodedColumn<'_> {
		debug_assert_eq!(rows.row_count(), self.row_count());
		DecodedColumn::new(self)
	}
}
