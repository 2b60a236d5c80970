use std::{fs, path::PathBuf};

use tempfile::tempdir;

use wellbore_cli::{Args, run};

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demo completions live at the workspace root, not in the crate.
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: Option<String>, output: &std::path::Path, set: Vec<String>) -> Args {
    Args {
        input,
        output: output.to_string_lossy().to_string(),
        config: None,
        set,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_toml_files(demos_path());
    assert!(!valid_demos.is_empty(), "No demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.svg", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        let args = args_for(
            Some(demo_path.to_string_lossy().to_string()),
            &output_path,
            Vec::new(),
        );

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Output should exist");
                assert!(svg.contains("</svg>"), "Incomplete SVG for {}", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_toml_files(demos_path().join("errors"));
    assert!(!error_demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = args_for(
            Some(demo_path.to_string_lossy().to_string()),
            &output_path,
            Vec::new(),
        );

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    assert!(
        unexpectedly_succeeded.is_empty(),
        "Error demos unexpectedly succeeded: {unexpectedly_succeeded:?}"
    );
}

#[test]
fn e2e_default_completion_without_input() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("default.svg");

    run(&args_for(None, &output_path, Vec::new())).expect("Default completion should render");

    let svg = fs::read_to_string(&output_path).expect("Output should exist");
    assert!(svg.contains("Pump 120 stages"));
    assert!(svg.contains("Downhole sensor"));
}

#[test]
fn e2e_overrides_are_applied_in_order() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("overrides.svg");

    let set = vec![
        "packer=on".to_string(),
        "y_tool=on".to_string(),
        "sensor=off".to_string(),
        "stages=240".to_string(),
    ];
    run(&args_for(None, &output_path, set)).expect("Overrides should render");

    let svg = fs::read_to_string(&output_path).expect("Output should exist");
    assert!(svg.contains("Pump 240 stages"));
    assert!(svg.contains("Y-tool system"));
    assert!(!svg.contains("Production packer"));
    assert!(!svg.contains("Downhole sensor"));
}

#[test]
fn e2e_invalid_override_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("invalid.svg");

    let result = run(&args_for(None, &output_path, vec!["stages".to_string()]));
    assert!(result.is_err());
    assert!(!output_path.exists());
}
