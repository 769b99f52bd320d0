pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod search;
pub mod suggest;
pub mod widgets;

#[cfg(test)]
mod test_utils;
