// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

use std::{ops::Deref, sync::Arc};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A copy-on-write vector: cheap to share between columns, cloned lazily on
/// first mutation.
#[derive(Debug, Clone)]
pub enum CowVec<T>
where
	T: Clone,
{
	Owned(Vec<T>),
	Shared(Arc<Vec<T>>),
}

impl<T> CowVec<T>
where
	T: Clone,
{
	pub fn new(vec: Vec<T>) -> Self {
		CowVec::Owned(vec)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		CowVec::Owned(Vec::with_capacity(capacity))
	}

	pub fn from_shared(vec: Arc<Vec<T>>) -> Self {
		CowVec::Shared(vec)
	}

	/// Ensures unique ownership and returns a mutable reference to the
	/// inner Vec.
	pub fn make_mut(&mut self) -> &mut Vec<T> {
		match self {
			CowVec::Owned(vec) => vec,
			CowVec::Shared(shared) => {
				let cloned = (**shared).clone();
				*self = CowVec::Owned(cloned);
				match self {
					CowVec::Owned(vec) => vec,
					CowVec::Shared(_) => unreachable!(),
				}
			}
		}
	}

	pub fn as_slice(&self) -> &[T] {
		match self {
			CowVec::Owned(vec) => vec,
			CowVec::Shared(shared) => shared,
		}
	}

	pub fn get(&self, idx: usize) -> Option<&T> {
		self.as_slice().get(idx)
	}

	/// Set by index (copy-on-write if necessary).
	pub fn set(&mut self, idx: usize, value: T) {
		let vec = self.make_mut();
		vec[idx] = value;
	}

	pub fn push(&mut self, value: T) {
		let vec = self.make_mut();
		vec.push(value);
	}

	pub fn capacity(&self) -> usize {
		match self {
			CowVec::Owned(vec) => vec.capacity(),
			CowVec::Shared(shared) => shared.capacity(),
		}
	}
}

impl<T> Deref for CowVec<T>
where
	T: Clone,
{
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl<T> PartialEq for CowVec<T>
where
	T: Clone + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<T> Serialize for CowVec<T>
where
	T: Clone + Serialize,
{
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.as_slice().serialize(serializer)
	}
}

impl<'de, T> Deserialize<'de> for CowVec<T>
where
	T: Clone + Deserialize<'de>,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(CowVec::Owned(Vec::deserialize(deserializer)?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_owned_roundtrip() {
		let mut vec = CowVec::new(vec![1, 2, 3]);
		vec.push(4);
		vec.set(0, 9);
		assert_eq!(vec.as_slice(), &[9, 2, 3, 4]);
	}

	#[test]
	fn test_shared_copy_on_write() {
		let shared = Arc::new(vec![1, 2, 3]);
		let mut vec = CowVec::from_shared(shared.clone());
		assert_eq!(vec.as_slice(), &[1, 2, 3]);

		vec.set(1, 7);
		// the shared original is untouched
		assert_eq!(shared.as_slice(), &[1, 2, 3]);
		assert_eq!(vec.as_slice(), &[1, 7, 3]);
	}

	#[test]
	fn test_deref() {
		let vec = CowVec::new(vec![10, 20, 30]);
		assert_eq!(vec.len(), 3);
		assert_eq!(vec[1], 20);
		assert_eq!(vec.iter().sum::<i32>(), 60);
	}
}
