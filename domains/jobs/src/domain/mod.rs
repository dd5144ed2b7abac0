//! Domain model for the Jobs domain

pub mod entities;
