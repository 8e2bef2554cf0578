use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

static ITEM_COUNTER: AtomicUsize = AtomicUsize::new(0);

const OWNER: &str = "owner@example.com";
const FRIEND: &str = "friend@example.com";

fn wishlist(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wishlist").expect("failed to locate wishlist binary");
    cmd.arg("--data-dir").arg(data_dir.path()).arg("--quiet");
    cmd
}

fn run_quietly(mut cmd: Command, what: &str) {
    cmd.stdout(Stdio::null()).stderr(Stdio::null());
    let status = cmd.status().expect("failed to execute wishlist");
    assert!(status.success(), "wishlist {what} failed");
}

/// Registers the owner and a friend in a fresh data directory.
fn initialize_data_dir(data_dir: &TempDir) {
    for (name, email) in [("owner", OWNER), ("friend", FRIEND)] {
        let mut cmd = wishlist(data_dir);
        cmd.args(["add-user", "--name", name, "--email", email]);
        run_quietly(cmd, "add-user");
    }
}

fn add_item(data_dir: &TempDir, name: &str) {
    let mut cmd = wishlist(data_dir);
    cmd.args(["add-item", "--as", OWNER, "--name", name]);
    run_quietly(cmd, "add-item");
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("wishlist").expect("failed to locate wishlist binary");
            let output = cmd.arg("--version").output().expect("failed to run wishlist");
            black_box(output);
        });
    });
}

fn bench_cli_add_item(c: &mut Criterion) {
    c.bench_function("cli_add_item", |b| {
        b.iter_batched(
            || {
                let data_dir = TempDir::new().expect("failed to create temp dir");
                initialize_data_dir(&data_dir);
                data_dir
            },
            |data_dir| {
                let counter = ITEM_COUNTER.fetch_add(1, Ordering::Relaxed);
                let mut cmd = wishlist(&data_dir);
                cmd.stdout(Stdio::null()).stderr(Stdio::null());
                let status = cmd
                    .args(["add-item", "--as", OWNER, "--name", &format!("gift-{counter}")])
                    .status()
                    .expect("failed to execute wishlist add-item");

                black_box(status.success());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_cli_list(c: &mut Criterion) {
    c.bench_function("cli_list", |b| {
        b.iter_batched(
            || {
                let data_dir = TempDir::new().expect("failed to create temp dir");
                initialize_data_dir(&data_dir);

                for i in 0..50 {
                    add_item(&data_dir, &format!("gift-{i}"));
                }

                data_dir
            },
            |data_dir| {
                let output = wishlist(&data_dir)
                    .args(["list", "--as", FRIEND, "--format", "json"])
                    .output()
                    .expect("failed to execute wishlist list");

                black_box(output);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    cli_benches,
    bench_cli_startup,
    bench_cli_add_item,
    bench_cli_list
);
criterion_main!(cli_benches);
