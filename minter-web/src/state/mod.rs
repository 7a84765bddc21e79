//! Application-wide reactive state

pub mod wallet;
