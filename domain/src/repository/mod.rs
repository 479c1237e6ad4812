//! Repository cloning domain
//!
//! Pure pieces of the `clone_repo` tool: the request and result types, the
//! credential record written for token authentication, and the `git clone`
//! argument list. Running git and touching the filesystem happen in the
//! application layer.

pub mod credential;
pub mod invocation;
pub mod request;
pub mod result;

pub use credential::{CredentialRecord, network_location};
pub use invocation::{GIT_PROGRAM, clone_arguments, credential_environment};
pub use request::CloneRequest;
pub use result::{CloneResult, DestinationOwnership};
