pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod remote;
pub(crate) mod responses;

pub use client::{Client, Identity};
pub use error::{ClientError, Result as CliClientResult};
pub use responses::Session;
