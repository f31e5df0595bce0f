//! Askama templates for the signature variants.

pub mod views;
