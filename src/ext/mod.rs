mod async_conversion;

pub use async_conversion::AsyncTryFrom;
