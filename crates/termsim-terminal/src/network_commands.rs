//! Network diagnostics: local flag parsing in front of the gateway.

use termsim_net::NetCommand;
use termsim_types::error::Result;

use crate::interpreter::{Command, CommandName, CommandRegistry, Environment};
use crate::result::CommandResult;

/// Register every network diagnostic, including the `ifconfig` alias.
pub fn register_network_commands(reg: &mut CommandRegistry) {
    for name in [
        CommandName::Ping,
        CommandName::Nslookup,
        CommandName::Dig,
        CommandName::Traceroute,
        CommandName::Netstat,
        CommandName::Ip,
        CommandName::Route,
        CommandName::Arp,
        CommandName::Whois,
        CommandName::Iwconfig,
        CommandName::Ifconfig,
    ] {
        reg.register(Box::new(NetworkCmd(name)));
    }
}

const PING_COUNT: (u32, u32, u32) = (4, 1, 10);
const PING_WAIT_SECS: (u32, u32, u32) = (5, 1, 5);
const TRACEROUTE_HOPS: (u32, u32, u32) = (30, 1, 30);
const DEFAULT_RECORD: &str = "A";

/// Parse a numeric flag value, falling back to the default and clamping.
fn bounded(value: Option<&str>, (default, min, max): (u32, u32, u32)) -> u32 {
    value
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

/// Flags and operands of a network command line, in any order.
#[derive(Debug, Default)]
struct NetArgs<'a> {
    operands: Vec<&'a str>,
    values: Vec<(&'a str, &'a str)>,
}

impl<'a> NetArgs<'a> {
    /// `valued` lists the flags that consume the next token.
    fn parse(args: &[&'a str], valued: &[&str]) -> Self {
        let mut parsed = Self::default();
        let mut iter = args.iter();
        while let Some(&arg) = iter.next() {
            if let Some((flag, value)) = arg.split_once('=').filter(|(f, _)| valued.contains(f)) {
                parsed.values.push((flag, value));
            } else if valued.contains(&arg) {
                if let Some(&value) = iter.next() {
                    parsed.values.push((arg, value));
                }
            } else if !(arg.starts_with('-') || arg.starts_with('+') || arg.starts_with('@')) {
                parsed.operands.push(arg);
            }
        }
        parsed
    }

    /// Last value given for `flag`.
    fn value(&self, flag: &str) -> Option<&'a str> {
        self.values
            .iter()
            .rev()
            .find(|(f, _)| *f == flag)
            .map(|(_, v)| *v)
    }

    fn record_type(&self, flag: &str, cmd: CommandName) -> std::result::Result<String, String> {
        let kind = self.value(flag).unwrap_or(DEFAULT_RECORD);
        if kind.is_empty() || !kind.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(format!("{cmd}: invalid record type '{kind}'"));
        }
        Ok(kind.to_ascii_uppercase())
    }
}

fn missing(cmd: CommandName, what: &str) -> String {
    format!("{cmd}: missing {what} operand\nTry '{cmd} --help' for more information.")
}

/// Build the gateway command, or the usage error to show instead.
fn parse_command(cmd: CommandName, args: &[&str]) -> std::result::Result<NetCommand, String> {
    let command = match cmd {
        CommandName::Ping => {
            let a = NetArgs::parse(args, &["-c", "-W"]);
            let host = a.operands.first().ok_or_else(|| missing(cmd, "host"))?;
            NetCommand::Ping {
                host: host.to_string(),
                count: bounded(a.value("-c"), PING_COUNT),
                timeout_secs: bounded(a.value("-W"), PING_WAIT_SECS),
            }
        },
        CommandName::Nslookup => {
            let a = NetArgs::parse(args, &["-type"]);
            let domain = a.operands.first().ok_or_else(|| missing(cmd, "domain"))?;
            NetCommand::Nslookup {
                domain: domain.to_string(),
                record_type: a.record_type("-type", cmd)?,
            }
        },
        CommandName::Dig => {
            let a = NetArgs::parse(args, &["+type"]);
            let domain = a.operands.first().ok_or_else(|| missing(cmd, "domain"))?;
            NetCommand::Dig {
                domain: domain.to_string(),
                record_type: a.record_type("+type", cmd)?,
            }
        },
        CommandName::Traceroute => {
            let a = NetArgs::parse(args, &["-m"]);
            let host = a.operands.first().ok_or_else(|| missing(cmd, "host"))?;
            NetCommand::Traceroute {
                host: host.to_string(),
                max_hops: bounded(a.value("-m"), TRACEROUTE_HOPS),
            }
        },
        CommandName::Whois => {
            let a = NetArgs::parse(args, &[]);
            let domain = a.operands.first().ok_or_else(|| missing(cmd, "domain"))?;
            NetCommand::Whois {
                domain: domain.to_string(),
            }
        },
        CommandName::Ip => {
            let a = NetArgs::parse(args, &[]);
            match a.operands.as_slice() {
                [] => return Err("ip: missing operand\nTry 'ip --help' for more information.".into()),
                ["addr" | "address" | "a"] | ["addr" | "address" | "a", "show"] => {
                    NetCommand::IpAddrShow
                },
                [sub, ..] => {
                    return Err(format!(
                        "ip: unknown command \"{sub}\"\nTry 'ip --help' for more information."
                    ));
                },
            }
        },
        CommandName::Ifconfig => NetCommand::IpAddrShow,
        CommandName::Netstat => NetCommand::Netstat,
        CommandName::Route => NetCommand::Route,
        CommandName::Arp => NetCommand::Arp,
        CommandName::Iwconfig => NetCommand::Iwconfig,
        other => return Err(format!("bash: {other}: command not found")),
    };
    Ok(command)
}

struct NetworkCmd(CommandName);

impl Command for NetworkCmd {
    fn name(&self) -> CommandName {
        self.0
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let command = match parse_command(self.0, args) {
            Ok(command) => command,
            Err(usage) => return Ok(CommandResult::failure(usage)),
        };
        let label = command.name();
        Ok(match env.gateway.execute(env.identity, &command) {
            Ok(out) if out.success => CommandResult::ok(out.text),
            Ok(out) => CommandResult::failure(format!("{label}: {}", out.text)),
            Err(e) => CommandResult::failure(format!("{label}: {e}")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;
    use termsim_net::Invocation;

    fn last_call(h: &Harness) -> Invocation {
        h.calls.borrow().last().cloned().unwrap()
    }

    #[test]
    fn ping_flags_anywhere() {
        let mut h = Harness::new();
        h.ok("ping -c 2 example.com");
        let first = last_call(&h);
        h.ok("ping example.com -c 2");
        assert_eq!(last_call(&h), first);
        assert_eq!(first.args.last().map(String::as_str), Some("example.com"));
    }

    #[test]
    fn ping_values_are_clamped() {
        assert_eq!(
            parse_command(CommandName::Ping, &["-c", "99", "-W", "0", "example.com"]),
            Ok(NetCommand::Ping {
                host: "example.com".into(),
                count: 10,
                timeout_secs: 1,
            })
        );
        assert_eq!(
            parse_command(CommandName::Traceroute, &["github.com", "-m", "x"]),
            Ok(NetCommand::Traceroute {
                host: "github.com".into(),
                max_hops: 30,
            })
        );
    }

    #[test]
    fn record_types() {
        assert_eq!(
            parse_command(CommandName::Nslookup, &["-type=mx", "github.com"]),
            Ok(NetCommand::Nslookup {
                domain: "github.com".into(),
                record_type: "MX".into(),
            })
        );
        assert_eq!(
            parse_command(CommandName::Dig, &["@8.8.8.8", "github.com", "+type", "aaaa"]),
            Ok(NetCommand::Dig {
                domain: "github.com".into(),
                record_type: "AAAA".into(),
            })
        );
        assert_eq!(
            parse_command(CommandName::Dig, &["github.com", "+type=A;rm"]),
            Err("dig: invalid record type 'A;rm'".into())
        );
    }

    #[test]
    fn missing_operands() {
        let mut h = Harness::new();
        assert_eq!(
            h.fail("ping"),
            "ping: missing host operand\nTry 'ping --help' for more information."
        );
        assert_eq!(
            h.fail("whois"),
            "whois: missing domain operand\nTry 'whois --help' for more information."
        );
        assert_eq!(h.fail("ip"), "ip: missing operand\nTry 'ip --help' for more information.");
        assert_eq!(
            h.fail("ip link"),
            "ip: unknown command \"link\"\nTry 'ip --help' for more information."
        );
        assert!(h.calls.borrow().is_empty());
    }

    #[test]
    fn ifconfig_is_ip_addr_show() {
        let mut h = Harness::new();
        let via_alias = h.ok("ifconfig");
        let direct = h.ok("ip addr show");
        assert_eq!(via_alias, direct);
        h.ok("ip a");
        assert_eq!(h.calls.borrow().len(), 3);
    }

    #[test]
    fn restricted_domain_never_runs() {
        let mut h = Harness::new();
        assert_eq!(
            h.fail("ping evil.test"),
            "ping: evil.test: Name or service not known (restricted domain)"
        );
        assert!(h.ok("whois docs.github.com").ends_with("docs.github.com"));
        assert_eq!(h.calls.borrow().len(), 1);
    }

    #[test]
    fn eleventh_call_is_rate_limited() {
        let mut h = Harness::new();
        for _ in 0..10 {
            h.ok("netstat");
        }
        let out = h.fail("route");
        assert!(out.starts_with("route: rate limit exceeded"), "{out}");
        assert_eq!(h.calls.borrow().len(), 10);
    }
}
