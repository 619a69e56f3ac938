//! Categories Entity Module

pub mod category;
