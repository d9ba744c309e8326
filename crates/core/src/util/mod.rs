// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

pub mod bitvec;
pub mod cowvec;

pub use bitvec::BitVec;
pub use cowvec::CowVec;
