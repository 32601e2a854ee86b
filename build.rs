const DEFAULT_CONTACT_EMAIL: &str = "your.email@example.com";
const DEFAULT_SITE_TITLE: &str = "Game Dev & AI Programmer";

fn main() {
    // Mail hand-off recipient, baked in at compile time
    let recipient = std::env::var("PORTFOLIO_CONTACT_EMAIL")
        .unwrap_or_else(|_| DEFAULT_CONTACT_EMAIL.to_string());
    println!("cargo:rustc-env=CONTACT_RECIPIENT={}", recipient);

    let title =
        std::env::var("PORTFOLIO_SITE_TITLE").unwrap_or_else(|_| DEFAULT_SITE_TITLE.to_string());
    println!("cargo:rustc-env=SITE_TITLE={}", title);

    println!("cargo:rerun-if-env-changed=PORTFOLIO_CONTACT_EMAIL");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_SITE_TITLE");
    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
