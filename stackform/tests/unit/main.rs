//! Integration tests for the stack form

mod common;
mod test_form;
