fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use the vendored protoc unless the caller already points at one.
    if std::env::var_os("PROTOC").is_none() {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }
    println!("cargo:rerun-if-changed=proto");
    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR")?);
    tonic_build::configure()
        .file_descriptor_set_path(out_dir.join("m1_article_descriptor.bin"))
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/article.proto", "proto/log.proto"], &["proto"])?;
    Ok(())
}
