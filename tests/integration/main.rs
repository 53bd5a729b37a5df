//! Integration tests for docgrid

mod helpers;
mod render_test;
