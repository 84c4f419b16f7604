fn main() {
    // The version resource only exists in Windows executables.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    let mut res = winres::WindowsResource::new();
    res.set("ProductName", "batlaunch");
    res.set("FileDescription", "Companion script launcher");

    if let Err(e) = res.compile() {
        // The resource is cosmetic; never fail the build over it.
        println!("cargo:warning=failed to embed version resource: {e}");
    }
}
