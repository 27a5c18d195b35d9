// src/extraction/mod.rs
//! Raw data extraction from uploaded résumé files: plain text from PDF
//! bytes, then contact metadata out of that text.

pub mod contact;
pub mod text;
