// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`login`] - Sign-in card shown while signed out
//! - [`dashboard`] - Summary cards linking to the management screens
//! - [`pages`] - Storefront pages table with publish toggle
//! - [`owners`] - Add-owner form, owners table and details dialog
//! - [`payments`] - Payments table with status filter and refunds
//!
//! # Shared Infrastructure
//!
//! - [`sidebar`] - Identity block, navigation entries and logout
//! - [`header`] - Sidebar toggle, theme menu and avatar
//! - [`components`] - Form field, table and pagination building blocks
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod dashboard;
pub mod design_tokens;
pub mod header;
pub mod login;
pub mod notifications;
pub mod owners;
pub mod pages;
pub mod payments;
pub mod sidebar;
pub mod styles;
pub mod theming;
