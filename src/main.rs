//! Trunk binary target; mounts the portal in the browser.

fn main() {
    #[cfg(feature = "csr")]
    foodhub_portal::start();
}
