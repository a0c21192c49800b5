//! Atlas core: understanding Darija/French/Arabic idea submissions and
//! matching them with mentors who have lived the same problem.

pub mod brain;
pub mod config;
pub mod error;
pub mod geo;
pub mod logging;
pub mod matching;
pub mod priorities;

#[cfg(test)]
mod tests;
