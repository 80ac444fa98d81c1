//! Application module

pub mod bootstrap;
pub mod startup;

#[cfg(test)]
mod tests;
