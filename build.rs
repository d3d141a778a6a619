use std::process::Command;

/// Run `git rev-parse` with the given extra args, falling back to "unknown"
/// when git is missing or the crate is built outside a checkout.
fn git_rev(args: &[&str]) -> String {
    match Command::new("git").arg("rev-parse").args(args).output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // short hash goes into `boggle --version`
    println!("cargo:rustc-env=GIT_HASH={}", git_rev(&["--short", "HEAD"]));
    println!("cargo:rustc-env=GIT_HASH_FULL={}", git_rev(&["HEAD"]));

    println!("cargo:rerun-if-changed=.git/HEAD");
}
