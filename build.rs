use std::path::PathBuf;

fn main() {
    println!("cargo::rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap());
    for def in astgen::lox::DEFINITIONS {
        let source = match def.generate() {
            Ok(source) => source,
            Err(err) => panic!("failed to generate `{}`: {err}", def.base_name),
        };
        std::fs::write(out_dir.join(def.file_name()), source).unwrap();
    }
}
