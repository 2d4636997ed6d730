use std::{
    env, fs,
    path::{Path, PathBuf},
};

fn main() {
    println!("cargo:rerun-if-changed=settings.json");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let target_dir = out_dir.ancestors().nth(3).unwrap();

    // The server reads settings.json from its working directory; keep a
    // copy next to the binary so running from target/ works too. Tests
    // construct Settings directly, so a missing file is not an error.
    if Path::new("settings.json").exists() {
        fs::copy("settings.json", target_dir.join("settings.json"))
            .expect("Failed to copy settings.json");
    }
}
