#![allow(unused_imports)]

pub use tracing::{debug, info, instrument};

pub use crate::error::{Error, Result};
