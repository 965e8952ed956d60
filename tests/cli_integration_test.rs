// End-to-end runs of the binary against a fake `sh` converter.
#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};
use std::time::{Duration, Instant};
use tempfile::TempDir;

const FAKE_CONVERTER: &str = r#"#!/bin/sh
pwd -P > "$MARKER_DIR/cwd.tmp" && mv "$MARKER_DIR/cwd.tmp" "$MARKER_DIR/cwd"
ls -A | sort > "$MARKER_DIR/listing"
echo "$@" > "$MARKER_DIR/args"
if [ -n "$FAKE_SLEEP" ]; then sleep "$FAKE_SLEEP"; fi
exit "${FAKE_EXIT:-0}"
"#;

struct Fixture {
    root: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let root = TempDir::new().expect("tempdir");
        for dir in ["work", "talks", "markers", "home", "tmp"] {
            fs::create_dir_all(root.path().join(dir)).expect("mkdir");
        }
        fs::write(root.path().join("converter.sh"), FAKE_CONVERTER).expect("script");
        Self { root }
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    fn file(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).expect("mkdir");
        fs::write(&path, relative).expect("write");
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ipynb-present"));
        cmd.current_dir(self.path("work"))
            .env("HOME", self.path("home"))
            .env("MARKER_DIR", self.path("markers"))
            .env("TMPDIR", self.path("tmp"))
            .env("RUST_LOG", "ipynb_present=debug")
            .env_remove("IPYNB_PRESENT_FALLBACK_STATIC")
            .arg("--converter")
            .arg(format!("sh {}", self.path("converter.sh").display()));
        cmd
    }

    fn marker(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.path("markers").join(name))
            .ok()
            .map(|s| s.trim().to_string())
    }

    fn staging_dirs(&self) -> Vec<PathBuf> {
        fs::read_dir(self.path("tmp"))
            .expect("tmp dir")
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().starts_with("ipynb_present_"))
                    .unwrap_or(false)
            })
            .collect()
    }

    fn listing(&self) -> Vec<String> {
        self.marker("listing")
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn serves_notebook_from_temp_root_and_removes_it() {
    let fx = Fixture::new();
    let notebook = fx.file("talks/talk.ipynb");

    let output = fx.cmd().arg("-n").arg(&notebook).output().expect("run");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let cwd = PathBuf::from(fx.marker("cwd").expect("converter ran"));
    assert!(cwd
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("ipynb_present_"));
    assert!(!cwd.exists());
    assert!(fx.staging_dirs().is_empty());
    assert_eq!(fx.listing(), vec!["talk.ipynb"]);
    assert_eq!(
        fx.marker("args").unwrap(),
        "talk.ipynb --to slides --post serve --config slides_config.py"
    );
}

#[test]
fn stages_static_tree_with_other_files() {
    let fx = Fixture::new();
    let notebook = fx.file("talks/talk.ipynb");
    let img = fx.file("assets/img1.png");
    let data = fx.file("assets/data.csv");
    fx.file("work/static/index.html");

    let output = fx
        .cmd()
        .arg("-n")
        .arg(&notebook)
        .arg("-o")
        .arg(&img)
        .arg("--other")
        .arg(&data)
        .output()
        .expect("run");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let cwd = PathBuf::from(fx.marker("cwd").unwrap());
    assert_eq!(cwd.file_name().unwrap(), "slides");
    assert!(!cwd.parent().unwrap().exists());
    assert_eq!(fx.listing(), vec!["data.csv", "img1.png", "index.html", "talk.ipynb"]);
}

#[test]
fn explicit_static_beats_working_directory() {
    let fx = Fixture::new();
    let notebook = fx.file("talks/talk.ipynb");
    fx.file("work/static/cwd.html");
    fx.file("theme/override.html");

    let output = fx
        .cmd()
        .arg("-n")
        .arg(&notebook)
        .arg("-s")
        .arg(fx.path("theme"))
        .output()
        .expect("run");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(fx.listing(), vec!["override.html", "talk.ipynb"]);
}

#[test]
fn home_fallback_is_used_last() {
    let fx = Fixture::new();
    let notebook = fx.file("talks/talk.ipynb");
    fx.file("home/Dropbox/Documents/ipynb/templates/static/reveal.css");

    let output = fx.cmd().arg("-n").arg(&notebook).output().expect("run");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(fx.listing(), vec!["reveal.css", "talk.ipynb"]);
}

#[test]
fn missing_other_file_never_runs_converter() {
    let fx = Fixture::new();
    let notebook = fx.file("talks/talk.ipynb");

    let output = fx
        .cmd()
        .arg("-n")
        .arg(&notebook)
        .arg("-o")
        .arg(fx.path("assets/missing.png"))
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing.png"));
    assert!(fx.marker("cwd").is_none());
}

#[test]
fn missing_notebook_exits_non_zero() {
    let fx = Fixture::new();

    let output = fx
        .cmd()
        .arg("-n")
        .arg(fx.path("talks/absent.ipynb"))
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(1));
    assert!(fx.marker("cwd").is_none());
}

#[test]
fn converter_failure_exits_non_zero_and_cleans_up() {
    let fx = Fixture::new();
    let notebook = fx.file("talks/talk.ipynb");

    let output = fx
        .cmd()
        .env("FAKE_EXIT", "1")
        .arg("-n")
        .arg(&notebook)
        .output()
        .expect("run");

    assert_ne!(output.status.code(), Some(0));
    let cwd = PathBuf::from(fx.marker("cwd").expect("converter ran"));
    assert!(!cwd.exists());
}

#[test]
fn missing_notebook_flag_is_usage_error() {
    let fx = Fixture::new();
    let output = fx.cmd().output().expect("run");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn dry_run_prints_plan_without_staging() {
    let fx = Fixture::new();
    let notebook = fx.file("talks/talk.ipynb");
    fx.file("talks/static/index.html");

    let output = fx
        .cmd()
        .arg("--dry-run")
        .arg("-n")
        .arg(&notebook)
        .output()
        .expect("run");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("notebook folder"));
    assert!(stdout.contains("talk.ipynb --to slides --post serve"));
    assert!(fx.marker("cwd").is_none());
    assert!(fx.staging_dirs().is_empty());
}

fn wait_for(path: &Path, timeout: Duration) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if path.exists() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    false
}

// Known limitation: SIGKILL bypasses the cleanup guard, so the staging folder stays behind.
#[test]
fn sigkill_leaks_staging_dir() {
    let fx = Fixture::new();
    let notebook = fx.file("talks/talk.ipynb");

    let mut child = fx
        .cmd()
        .env("FAKE_SLEEP", "5")
        .arg("-n")
        .arg(&notebook)
        .spawn()
        .expect("spawn");

    assert!(wait_for(&fx.path("markers/cwd"), Duration::from_secs(10)));
    child.kill().expect("kill");
    child.wait().expect("wait");

    let cwd = PathBuf::from(fx.marker("cwd").unwrap());
    assert!(cwd.exists());
    assert_eq!(fx.staging_dirs().len(), 1);
    fs::remove_dir_all(&cwd).expect("manual cleanup");
}

fn interrupt(child: &Child) {
    let status = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .expect("kill -INT");
    assert!(status.success());
}

#[test]
fn sigint_while_serving_stops_converter_and_cleans_up() {
    let fx = Fixture::new();
    let notebook = fx.file("talks/talk.ipynb");

    let mut child = fx
        .cmd()
        .env("FAKE_SLEEP", "10")
        .arg("-n")
        .arg(&notebook)
        .stdout(Stdio::null())
        .spawn()
        .expect("spawn");

    assert!(wait_for(&fx.path("markers/cwd"), Duration::from_secs(10)));
    interrupt(&child);
    let status = child.wait().expect("wait");

    assert_eq!(status.code(), Some(130));
    let cwd = PathBuf::from(fx.marker("cwd").unwrap());
    assert!(!cwd.exists());
    assert!(fx.staging_dirs().is_empty());
}

#[test]
fn sigint_while_staging_still_removes_temp_dir() {
    let fx = Fixture::new();
    let notebook = fx.file("talks/talk.ipynb");
    let statics = fx.path("work/static");
    for group in 0..100 {
        let dir = statics.join(format!("plugin{}", group));
        fs::create_dir_all(&dir).expect("mkdir");
        for n in 0..200 {
            fs::write(dir.join(format!("part{}.js", n)), b"/* reveal */").expect("write");
        }
    }

    let mut child = fx
        .cmd()
        .env("FAKE_SLEEP", "10")
        .arg("-n")
        .arg(&notebook)
        .stdout(Stdio::null())
        .spawn()
        .expect("spawn");

    let start = Instant::now();
    while fx.staging_dirs().is_empty() && start.elapsed() < Duration::from_secs(10) {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(!fx.staging_dirs().is_empty(), "staging dir never appeared");
    interrupt(&child);
    let status = child.wait().expect("wait");

    assert_eq!(status.code(), Some(130));
    assert!(fx.staging_dirs().is_empty());
}
