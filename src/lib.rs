//! Atlas Copco e-mail signature generator.
//!
//! Validates the employee's details, renders the signature as HTML, RTF and
//! plain text, and writes the three files for import into a mail client.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod util;
