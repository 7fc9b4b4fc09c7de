// Core modules shared by the codec, marshaller, and CLI.
pub mod error;
