//! Output formatting for command results

pub mod console;
pub mod formatter;
pub mod json;

#[cfg(test)]
pub(crate) mod test_fixtures;
