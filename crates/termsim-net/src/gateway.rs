//! The policy layer in front of the process runner.

use std::time::Duration;

use termsim_types::config::NetworkConfig;
use termsim_types::error::{Result, ShellError};

use crate::command::NetCommand;
use crate::policy::DomainPolicy;
use crate::rate_limit::RateLimiter;
use crate::runner::{ProcessOutput, ProcessRunner, TokioRunner};

/// Validates, rate-limits, and runs whitelisted network diagnostics.
///
/// Checks run in a fixed order: domain first, then rate limit, then the
/// process. A restricted host is therefore rejected without consuming a
/// rate-limit slot.
pub struct NetworkGateway {
    policy: DomainPolicy,
    limiter: RateLimiter,
    timeout: Duration,
    max_output: usize,
    runner: Box<dyn ProcessRunner>,
}

impl NetworkGateway {
    /// Gateway backed by real OS processes.
    pub fn new(config: &NetworkConfig) -> Self {
        Self::with_runner(config, Box::new(TokioRunner))
    }

    /// Gateway backed by a custom runner.
    pub fn with_runner(config: &NetworkConfig, runner: Box<dyn ProcessRunner>) -> Self {
        Self {
            policy: DomainPolicy::new(&config.allowed_domains),
            limiter: RateLimiter::new(
                Duration::from_secs(config.rate_limit_window_secs),
                config.max_requests_per_window,
            ),
            timeout: Duration::from_millis(config.effective_timeout_ms()),
            max_output: config.max_output_bytes,
            runner,
        }
    }

    pub fn validate_domain(&self, name: &str) -> bool {
        self.policy.validate_domain(name)
    }

    pub fn check_rate_limit(&mut self, identity: &str) -> Result<()> {
        self.limiter.check(identity)
    }

    /// Run `command` on behalf of `identity`.
    ///
    /// A non-zero exit is an `Ok` output with `success == false`. Policy
    /// rejections, timeouts, and spawn failures are `Err`.
    pub fn execute(&mut self, identity: &str, command: &NetCommand) -> Result<ProcessOutput> {
        if let Some(target) = command.target() {
            if !self.policy.validate_domain(target) {
                log::warn!("{identity}: {} to restricted host {target}", command.name());
                return Err(ShellError::DomainRestricted(target.to_string()));
            }
        }
        self.limiter.check(identity)?;
        if let Some(reason) = command.unavailable_reason() {
            return Ok(ProcessOutput {
                success: false,
                text: reason.to_string(),
            });
        }

        let invocation = command.invocation();
        log::info!(
            "{identity}: running {} {}",
            invocation.program,
            invocation.args.join(" ")
        );
        self.runner.run(&invocation, self.timeout, self.max_output)
    }
}
