use modpath::{check, escape_path, escape_version, ModuleVersion};

fn main() {
    let module = ModuleVersion::new("github.com/GoogleCloudPlatform/cloudsql-proxy", "v1.2.0-RC1");

    if let Err(err) = check(&module.path, &module.version) {
        eprintln!("check failed: {}", err);
        std::process::exit(1);
    }

    match (escape_path(&module.path), escape_version(&module.version)) {
        (Ok(path), Ok(version)) => println!("{}/@v/{}.zip", path, version),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("escaping failed: {}", err);
            std::process::exit(1);
        }
    }
}
