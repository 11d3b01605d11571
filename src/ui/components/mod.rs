// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`pagination`] - Pager buttons and the "Showing X to Y of Z" summary
//! - [`field`] - Labeled text input with helper and error text
//! - [`table`] - Header row, data rows, status badges and the search toolbar

pub mod field;
pub mod pagination;
pub mod table;
