fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let version_script = format!("{manifest_dir}/version_scripts/xattrshim.map");
    // The script demands `__errno_location`, which is un-mangled only in
    // release builds; apply it only where the symbol exists.
    let release = std::env::var("PROFILE").as_deref() == Ok("release");
    if release && std::path::Path::new(&version_script).exists() {
        println!("cargo:rustc-cdylib-link-arg=-Wl,--version-script={version_script}");
    }
    println!("cargo:rerun-if-changed=version_scripts/xattrshim.map");
}
