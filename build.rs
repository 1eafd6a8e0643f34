#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    let mut res = WindowsResource::new();
    res.set("FileDescription", "offwork CLI")
        .set("ProductName", "offwork")
        .set("OriginalFilename", "offwork.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"));

    if let Err(e) = res.compile() {
        println!("cargo:warning=failed to embed version resource: {e}");
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {}
