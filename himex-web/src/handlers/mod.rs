//! HTTP handlers

pub mod contact;
pub mod pages;

pub use contact::{send_mail, CONTACT_REDIRECT};
