//! Core domain types for Folio.
//!
//! This crate contains pure domain types with no IO and no async: the
//! contact-form data model and its validator, the site content model,
//! small text helpers, and the UI state primitives shared by the engine
//! and the renderer.

mod contact;
mod content;
mod text;
pub mod ui;
mod validate;

pub use contact::{ContactDraft, ContactField, FieldErrors, OutboundMessage, SubmissionStatus};
pub use content::{About, ContactMethod, Profile, Project, Section, Site, SkillGroup, SocialLink};
pub use text::truncate_with_ellipsis;
pub use validate::validate;
