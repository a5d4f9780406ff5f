#![allow(unused_imports)]

pub mod vocabulary;

pub use vocabulary::*;
