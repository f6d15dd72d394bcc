fn main() {
    // Stamped into the binary; seo::build_time reads it for the sitemap's <lastmod>.
    println!(
        "cargo:rustc-env=BUILD_TIME={}",
        chrono::Utc::now().to_rfc3339()
    );
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/content.rs");
}
