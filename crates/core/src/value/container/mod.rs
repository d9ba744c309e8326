// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 QuiverDB

pub mod bool;
pub mod number;
pub mod undefined;
pub mod utf8;

pub use self::bool::BoolContainer;
pub use self::number::NumberContainer;
pub use self::undefined::UndefinedContainer;
pub use self::utf8::Utf8Container;
