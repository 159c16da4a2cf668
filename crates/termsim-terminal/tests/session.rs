//! End-to-end sessions driven through `Shell::execute`.

use std::time::Duration;

use proptest::prelude::*;
use termsim_net::{Invocation, NetworkGateway, ProcessOutput, ProcessRunner};
use termsim_terminal::{CommandResult, Shell};
use termsim_types::config::ShellConfig;
use termsim_types::error::Result;
use termsim_vfs::Vfs;

/// Pretends every diagnostic succeeded.
struct Succeeds;

impl ProcessRunner for Succeeds {
    fn run(&self, invocation: &Invocation, _timeout: Duration, _max: usize) -> Result<ProcessOutput> {
        Ok(ProcessOutput {
            success: true,
            text: format!("{} ok", invocation.program),
        })
    }
}

fn shell() -> Shell {
    let config = ShellConfig::default();
    let gateway = NetworkGateway::with_runner(&config.network, Box::new(Succeeds));
    Shell::new(config, "integration").unwrap().with_gateway(gateway)
}

fn ok(sh: &mut Shell, line: &str) -> CommandResult {
    let r = sh.execute(line);
    assert!(r.success, "`{line}` failed: {}", r.output);
    r
}

/// Type `text` into an open editor one keystroke at a time.
fn type_text(sh: &mut Shell, text: &str) {
    for c in text.chars() {
        if c == '\n' {
            ok(sh, "enter");
        } else {
            ok(sh, &c.to_string());
        }
    }
}

#[test]
fn create_edit_and_read_back() {
    let mut sh = shell();
    ok(&mut sh, "mkdir test");
    ok(&mut sh, "cd test");
    assert_eq!(sh.cwd(), "/home/user/test");
    ok(&mut sh, "touch a.txt");
    assert_eq!(ok(&mut sh, "cat a.txt").output, "");

    let r = ok(&mut sh, "ai-edit a.txt");
    assert!(r.editor_mode_active);
    assert!(r.output.contains("File: a.txt (1 lines) | Modified: No"));
    type_text(&mut sh, "hi");
    let r = ok(&mut sh, "ctrl+x");
    assert!(!r.editor_mode_active);
    assert_eq!(r.output, "File saved: a.txt\nExited editor mode.");

    assert_eq!(ok(&mut sh, "cat a.txt").output, "hi");
    assert_eq!(ok(&mut sh, "pwd").output, "/home/user/test");
}

#[test]
fn discard_keeps_original_content() {
    let mut sh = shell();
    ok(&mut sh, "ai-edit sample.txt");
    type_text(&mut sh, "scribble");
    assert_eq!(ok(&mut sh, "ctrl+z").output, "Exited editor mode.");
    assert!(ok(&mut sh, "head -n 1 sample.txt").output.starts_with("This is a sample"));
}

#[test]
fn failed_removals_leave_tree_alone() {
    let mut sh = shell();
    let before = ok(&mut sh, "ls -1 Documents").output;

    let r = sh.execute("rm Documents");
    assert!(!r.success && r.is_error);
    assert_eq!(r.output, "rm: cannot remove 'Documents': Is a directory");

    let r = sh.execute("rmdir Documents");
    assert_eq!(r.output, "rmdir: cannot remove 'Documents': Directory not empty");

    assert_eq!(ok(&mut sh, "ls -1 Documents").output, before);
    assert!(sh.vfs().get("/home/user/Documents/notes.txt").is_some());
}

#[test]
fn echo_strips_quotes_only() {
    let mut sh = shell();
    assert_eq!(ok(&mut sh, "echo \"a b\"").output, "a b");
    assert_eq!(ok(&mut sh, "echo \"a   b\"").output, "a   b");
}

#[test]
fn unknown_and_help() {
    let mut sh = shell();
    let r = sh.execute("frobnicate --now");
    assert!(!r.success);
    assert_eq!(r.output, "bash: frobnicate: command not found");
    assert!(ok(&mut sh, "ls --help").output.starts_with("Usage: ls [OPTION]... [FILE]..."));
}

#[test]
fn network_policy_end_to_end() {
    let mut sh = shell();
    let r = sh.execute("dig evil.test");
    assert!(!r.success);
    assert_eq!(r.output, "dig: evil.test: Name or service not known (restricted domain)");

    for _ in 0..10 {
        assert_eq!(ok(&mut sh, "ping -c 1 example.com").output, "ping ok");
    }
    let r = sh.execute("ping example.com");
    assert!(!r.success);
    assert!(r.output.starts_with("ping: rate limit exceeded"));
}

#[test]
fn clear_requests_wipe() {
    let mut sh = shell();
    let r = ok(&mut sh, "clear");
    assert!(r.clear_screen_requested);
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["clearScreen"], true);
}

#[test]
fn whole_tree_from_root() {
    let mut sh = shell();
    ok(&mut sh, "cd /");
    assert_eq!(ok(&mut sh, "ls").output, "home");
    let found = ok(&mut sh, "find . txt").output;
    assert_eq!(found.lines().count(), 6);
    assert!(found.lines().all(|p| p.starts_with("/home/user/")));
}

#[test]
fn transfers_refuse_to_clobber_directories() {
    let mut sh = shell();
    ok(&mut sh, "mkdir -p src/inner dst/src");
    ok(&mut sh, "touch dst/src/keep.txt");
    let r = sh.execute("cp src dst");
    assert!(!r.success);
    assert_eq!(r.output, "cp: cannot copy 'src' to 'dst/src': Directory not empty");
    let r = sh.execute("mv src dst");
    assert!(!r.success);
    assert!(sh.vfs().get("/home/user/dst/src/keep.txt").is_some());
    assert!(sh.vfs().get("/home/user/src/inner").is_some());
}

fn name_set() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[a-zA-Z0-9_]{1,8}", 1..8)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ls_reverse_is_exact_reversal(names in name_set(), flag in prop::sample::select(vec!["", "-S", "-X", "-t", "-U"])) {
        let mut sh = shell();
        ok(&mut sh, "mkdir -p /tmp/p");
        ok(&mut sh, "cd /tmp/p");
        for name in &names {
            ok(&mut sh, &format!("touch {name}"));
        }
        let forward = ok(&mut sh, &format!("ls -1 {flag}")).output;
        let backward = ok(&mut sh, &format!("ls -1 -r {flag}")).output;
        let mut reversed: Vec<&str> = backward.lines().collect();
        reversed.reverse();
        prop_assert_eq!(forward.lines().collect::<Vec<_>>(), reversed);
        prop_assert_eq!(forward.lines().count(), names.len());
    }

    #[test]
    fn ls_default_is_sorted(names in name_set()) {
        let mut sh = shell();
        ok(&mut sh, "mkdir -p /tmp/s");
        for name in &names {
            ok(&mut sh, &format!("touch /tmp/s/{name}"));
        }
        let listed: Vec<String> = ok(&mut sh, "ls -1 /tmp/s").output.lines().map(String::from).collect();
        let mut expected = names.clone();
        expected.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn cat_n_agrees_with_wc(text in "[a-z ]{0,6}(\n[a-z ]{0,6}){0,4}") {
        let mut sh = shell();
        ok(&mut sh, "ai-edit t.txt");
        type_text(&mut sh, &text);
        ok(&mut sh, "ctrl+x");

        let numbered = ok(&mut sh, "cat -n t.txt").output;
        let wc = ok(&mut sh, "wc -l t.txt").output;
        let numbered_lines = numbered.split('\n').count();
        prop_assert_eq!(wc, format!("{numbered_lines} t.txt"));

        let blank_numbered = ok(&mut sh, "cat -b t.txt").output;
        let nonblank = text.split('\n').filter(|l| !l.is_empty()).count();
        let last = blank_numbered
            .lines()
            .filter_map(|l| l.trim_start().split("  ").next()?.parse::<usize>().ok())
            .max()
            .unwrap_or(0);
        prop_assert_eq!(last, nonblank);
    }
}
