mod i64_deserializer;
pub use i64_deserializer::*;
