// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Catalogue logic: record store, JSON storage, and the facade the UI calls.

pub mod catalog;
pub mod storage;
pub mod store;
