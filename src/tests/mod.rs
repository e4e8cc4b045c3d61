pub mod common;

mod components;
