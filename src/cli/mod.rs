//! Console front end
//!
//! This module bridges terminal input and output with the fleet store.

pub mod menu;

pub use menu::{Menu, MenuCommand};
