#![no_std]

pub mod access;
pub mod constants;
pub mod errors;
pub mod events;

pub use access::{RaterAccessClient, RaterAccessInterface};
