#![forbid(unsafe_code)]
#![warn(
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Bunbuster binary: mounts the app in the browser, prints build hints elsewhere.

#[cfg(target_arch = "wasm32")]
fn main() {
    bunbuster_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    writeln!(
        std::io::stderr().lock(),
        "bunbuster-ui only runs in the browser; use `trunk serve` (set BUNBUSTER_API_URL to target another API)."
    )
}
