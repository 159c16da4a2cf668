//! Sandboxed network diagnostics for termsim.
//!
//! A small set of real OS utilities (`ping`, `dig`, `netstat`, ...) may be
//! run on behalf of a shell session. Host-taking commands are checked
//! against a domain allow-list, every call is counted against a per-identity
//! sliding window, and each child process is bounded in time and output.

pub mod command;
pub mod gateway;
pub mod policy;
pub mod rate_limit;
pub mod runner;

pub use command::{Invocation, NetCommand};
pub use gateway::NetworkGateway;
pub use policy::DomainPolicy;
pub use rate_limit::RateLimiter;
pub use runner::{ProcessOutput, ProcessRunner, TokioRunner};
