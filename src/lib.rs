//! Client-side controller library for the CRM dashboard's customer list.
//!
//! The central piece is [`collection::controller::CollectionController`], a
//! presentation-agnostic owner of pagination, search, and sort state backed
//! by a remote listing endpoint. Rendering, routing, and the hosted CMS are
//! external collaborators; this crate only exposes state snapshots and the
//! mutators a view invokes in response to user input.

pub mod cms;
pub mod collection;
pub mod domain;
pub mod dto;
pub mod fetcher;
pub mod models;

/// Rows requested per page when the view has not chosen otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Page sizes the pagination control offers.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 20, 50];

/// Quiet window for coalescing search-box keystrokes into one fetch.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;
