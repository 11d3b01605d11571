// SPDX-License-Identifier: MPL-2.0
//! `storefront_admin` is the administration dashboard of the Open E-Commerce
//! platform, built with the Iced GUI framework.
//!
//! Store owners, storefront pages and payments are managed from one window;
//! every change is confirmed through transient toast notifications.

pub mod app;
pub mod error;
pub mod i18n;
pub mod records;
pub mod session;
pub mod ui;
