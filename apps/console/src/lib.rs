//! Rolodex console client
//!
//! An interactive terminal client for the Rolodex API: lists the user
//! records, runs create/edit/delete form flows, tracks a selected subset,
//! and can send that subset through a transactional email service.

pub mod api_client;
pub mod app;
pub mod config;
pub mod form;
pub mod mailer;
pub mod roster;
