//! Cross-process determinism: the `search_fixture` binary prints the same
//! scenario lines under different working directories and locales, and
//! they match an in-process run.

use std::path::Path;
use std::process::Command;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(baseline.contains("graph_bfs.outcome_digest=sha256:"));
    assert!(baseline.contains("graph_bfs.status=Solved"));
    assert!(baseline.contains("endless_bfs.status=ResourceExhausted"));

    let tmp_dir = std::env::temp_dir().to_string_lossy().to_string();
    let variants: [(&str, &[(&str, &str)]); 3] = [
        (tmp_dir.as_str(), &[]),
        (root.as_str(), &[("LC_ALL", "C")]),
        (
            root.as_str(),
            &[("LANG", "en_US.UTF-8"), ("LC_COLLATE", "tr_TR.UTF-8")],
        ),
    ];
    for (dir, env) in variants {
        let output = run_variant(dir, env);
        assert_eq!(
            baseline, output,
            "output diverged (work_dir={dir}, env={env:?})"
        );
    }
}

#[test]
fn crossproc_matches_inproc() {
    let root = workspace_root();
    let spawned = run_variant(&root, &[]);
    let inproc = lock_tests::fixtures::scenario_lines().expect("scenarios run");
    let expected: String = inproc.iter().map(|line| format!("{line}\n")).collect();
    assert_eq!(spawned, expected);
}
