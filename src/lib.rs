//! Shuttle translatable content between a content store and a translation
//! store.
//!
//! The core of the crate is backend-agnostic: the [`content::ContentStore`]
//! and [`translation::TranslationStore`] traits describe the two sides, the
//! strategies in [`topics`], [`tutorials`] and [`english`] drive the
//! push/pull protocol between them, and [`locale`] holds the mapping and
//! filtering rules shared by all of them. The concrete Desk and Transifex
//! clients are thin adapters behind those traits.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod content;
pub mod desk;
pub mod document;
pub mod english;
pub mod error;
pub mod locale;
pub mod sync;
pub mod topics;
pub mod transifex;
pub mod translation;
pub mod tutorials;

#[cfg(test)]
pub(crate) mod testing;
