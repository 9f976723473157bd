//! Service-level tests for question answering.

mod fakes;
