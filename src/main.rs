#[cfg(feature = "csr")]
fn main() {
    // Trunk entry point; wasm-pack hosts call `mount` from the JS glue instead
    portfolio_site::mount();
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no native entry point, the site only runs in the browser
    // see lib.rs for the mount function
}
