// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use serde::{Deserialize, Serialize};

use crate::util::{BitVec, CowVec};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Utf8Container {
	values: CowVec<String>,
	bitvec: BitVec,
}

impl Utf8Container {
	pub fn new(values: Vec<String>, bitvec: BitVec) -> Self {
		debug_assert_eq!(values.len(), bitvec.len());
		Self {
			values: CowVec::new(values),
			bitvec,
		}
	}

	pub fn from_vec(values: Vec<String>) -> Self {
		let len = values.len();
		Self {
			values: CowVec::new(values),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.values.len(), self.bitvec.len());
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn push(&mut self, value: String) {
		self.values.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.values.push(String::new());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		if index < self.len() && self.bitvec.get(index) {
			self.values.get(index).map(|value| value.as_str())
		} else {
			None
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	pub fn is_fully_defined(&self) -> bool {
		self.bitvec.count_ones() == self.len()
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
		self.values
			.iter()
			.zip(self.bitvec.iter())
			.map(|(value, defined)| if defined { Some(value.as_str()) } else { None })
	}
}
