use std::fs;
use std::path::PathBuf;

use ui_kit_core::VariantCatalog;

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("variants.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog = VariantCatalog::from_toml_str(&raw)
        .unwrap_or_else(|err| panic!("invalid variant catalog {}: {err}", path.display()));
    if catalog.is_empty() {
        panic!("variant catalog {} declares no components", path.display());
    }

    let json = catalog
        .to_json_string()
        .unwrap_or_else(|err| panic!("failed to serialize variant catalog: {err}"));
    if json.contains("\"##") {
        panic!("variant catalog JSON cannot be embedded as a raw string literal");
    }
    let generated = format!(
        "/// Build-time generated variant catalog JSON.\n\
pub const VARIANT_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("variant_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
