//! Request extractors whose rejections render as [`crate::ErrorResponse`].

pub mod json;

pub use json::JsonBody;
