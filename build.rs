use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=WIDGET_DOCS_ROOT_HINT");

    let hint = env::var("WIDGET_DOCS_ROOT_HINT").ok();

    if let Some(raw_hint) = hint {
        let candidate = PathBuf::from(raw_hint);
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!("cargo:rustc-env=WIDGET_DOCS_ROOT_HINT={}", canonical.display());
    }
}
