//! End-to-end tests: drive the built binary through piped stdin.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Run the shell with `script` on stdin and collect its output.
fn run_script(script: impl AsRef<[u8]>, cwd: &Path) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tinysh"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn shell");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_ref())
        .unwrap();
    child.wait_with_output().expect("failed to wait for shell")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(run_script("exit 0\n", dir.path()).status.code(), Some(0));
    assert_eq!(run_script("exit 7\n", dir.path()).status.code(), Some(7));
    assert_eq!(run_script("exit\n", dir.path()).status.code(), Some(1));
}

#[test]
fn non_integer_exit_keeps_running() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_script("exit abc\necho alive\nexit 3\n", dir.path());
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout_of(&output), "$ $ alive\n$ ");
}

#[test]
fn end_of_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_script("echo hello world\n", dir.path());
    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("$ hello world\n$ Error during reading command occurred!  "), "{stdout}");
}

#[test]
fn builtins_and_unknown_commands() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_script(
        "type echo\ntype nonexistent_xyz\ndoesnotexist123\npwd extra\nexit 0\n",
        dir.path(),
    );
    assert_eq!(
        stdout_of(&output),
        "$ echo is a shell builtin\n\
         $ nonexistent_xyz: not found\n\
         $ doesnotexist123: command not found\n\
         $ \n\
         $ "
    );
}

#[test]
fn cd_and_pwd() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = std::fs::canonicalize(dir.path()).unwrap();
    std::fs::create_dir(canonical.join("sub")).unwrap();

    let output = run_script(
        "pwd\ncd sub\npwd\ncd ..\npwd\ncd /no/such/dir\nexit 0\n",
        &canonical,
    );
    let root = canonical.display();
    assert_eq!(
        stdout_of(&output),
        format!(
            "$ {root}\n$ $ {root}/sub\n$ $ {root}\n$ cd: /no/such/dir: No such file or directory\n$ "
        )
    );
}

#[test]
#[cfg(unix)]
fn external_command_output_passes_through() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_script("printf hello\nls /no/such/dir/at/all\nexit 0\n", dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "$ hello$ $ ");
    assert!(!output.stderr.is_empty());
}

#[test]
fn invalid_utf8_line_does_not_end_session() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_script(b"echo \xff\xfe\necho after\nexit 0\n", dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "$ \u{FFFD}\u{FFFD}\n$ after\n$ ");
}

#[test]
fn exit_accepts_wide_integers() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_script("exit 4294967296\necho still running\nexit 5\n", dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "$ ");
}

#[test]
fn cd_usage_message() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_script("cd\nexit 0\n", dir.path());
    assert_eq!(stdout_of(&output), "$ Usage: cd <directory>\n$ ");
}
