//! Build script for patchctl-pulse.
//!
//! Checks that libpulse is available.

fn main() {
    // Check for libpulse
    if let Err(e) = pkg_config::probe_library("libpulse") {
        eprintln!("Warning: libpulse not found: {e}");
        eprintln!("Install pulseaudio-libs-devel (Fedora) or libpulse-dev (Debian/Ubuntu)");
        // Don't fail the build - the crate can still compile, just won't link
    }
}
