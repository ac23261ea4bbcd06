//! Test modules for the condition engine

#[cfg(test)]
mod engine_test;
