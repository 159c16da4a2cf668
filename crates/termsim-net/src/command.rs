//! Whitelisted diagnostic commands and how they map onto OS programs.

/// A network diagnostic the gateway knows how to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetCommand {
    Ping {
        host: String,
        count: u32,
        timeout_secs: u32,
    },
    Nslookup {
        domain: String,
        record_type: String,
    },
    Dig {
        domain: String,
        record_type: String,
    },
    Traceroute {
        host: String,
        max_hops: u32,
    },
    Netstat,
    IpAddrShow,
    Route,
    Arp,
    Whois {
        domain: String,
    },
    Iwconfig,
}

/// A program and its argument vector, passed to the OS without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl NetCommand {
    /// The user-facing command name, used to prefix error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ping { .. } => "ping",
            Self::Nslookup { .. } => "nslookup",
            Self::Dig { .. } => "dig",
            Self::Traceroute { .. } => "traceroute",
            Self::Netstat => "netstat",
            Self::IpAddrShow => "ip",
            Self::Route => "route",
            Self::Arp => "arp",
            Self::Whois { .. } => "whois",
            Self::Iwconfig => "iwconfig",
        }
    }

    /// The host or domain this command targets, if it takes one.
    ///
    /// Commands without a target skip domain validation.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Ping { host, .. } | Self::Traceroute { host, .. } => Some(host),
            Self::Nslookup { domain, .. }
            | Self::Dig { domain, .. }
            | Self::Whois { domain } => Some(domain),
            Self::Netstat | Self::IpAddrShow | Self::Route | Self::Arp | Self::Iwconfig => None,
        }
    }

    /// Why this command cannot run on the current platform, if it cannot.
    pub fn unavailable_reason(&self) -> Option<&'static str> {
        self.unavailable_reason_for(cfg!(windows))
    }

    pub(crate) fn unavailable_reason_for(&self, windows: bool) -> Option<&'static str> {
        match self {
            Self::Iwconfig if windows => Some("command not found (Windows system)"),
            _ => None,
        }
    }

    /// Build the OS invocation for the current platform.
    pub fn invocation(&self) -> Invocation {
        self.invocation_for(cfg!(windows))
    }

    pub(crate) fn invocation_for(&self, windows: bool) -> Invocation {
        match self {
            Self::Ping {
                host,
                count,
                timeout_secs,
            } => {
                let count = count.to_string();
                if windows {
                    let wait_ms = (timeout_secs * 1000).to_string();
                    Invocation::new("ping", &["-n", &count, "-w", &wait_ms, host])
                } else {
                    let wait = timeout_secs.to_string();
                    Invocation::new("ping", &["-c", &count, "-W", &wait, host])
                }
            },
            Self::Nslookup {
                domain,
                record_type,
            } => Invocation::new("nslookup", &[&format!("-type={record_type}"), domain]),
            Self::Dig {
                domain,
                record_type,
            } => Invocation::new("dig", &[record_type, domain]),
            Self::Traceroute { host, max_hops } => {
                let hops = max_hops.to_string();
                if windows {
                    Invocation::new("tracert", &["-h", &hops, host])
                } else {
                    Invocation::new("traceroute", &["-m", &hops, host])
                }
            },
            Self::Netstat if windows => Invocation::new("netstat", &["-an"]),
            Self::Netstat => Invocation::new("netstat", &["-tuln"]),
            Self::IpAddrShow if windows => Invocation::new("ipconfig", &["/all"]),
            Self::IpAddrShow => Invocation::new("ip", &["addr", "show"]),
            Self::Route if windows => Invocation::new("route", &["print"]),
            Self::Route => Invocation::new("route", &["-n"]),
            Self::Arp => Invocation::new("arp", &["-a"]),
            Self::Whois { domain } => Invocation::new("whois", &[domain]),
            Self::Iwconfig => Invocation::new("iwconfig", &[]),
        }
    }
}
