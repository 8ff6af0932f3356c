//! Data types shared by every pipeline stage.

pub mod action;
pub mod config;
pub mod document;
pub mod result;
pub mod risk;
pub mod session;
