// Embeds the build timestamp shown by `--version`. Release builds can pin it
// through GREYBEARD_BUILD_TIME for reproducibility.
fn main() {
    let built = std::env::var("GREYBEARD_BUILD_TIME")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string());
    println!("cargo:rustc-env=GREYBEARD_BUILD_TIME={built}");
    println!("cargo:rerun-if-env-changed=GREYBEARD_BUILD_TIME");
    println!("cargo:rerun-if-changed=src");
}
