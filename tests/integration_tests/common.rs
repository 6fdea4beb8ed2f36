// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub const SPY_CIPHERTEXT: &str = "Guvf vf n frperg zrffntr sebz gur fcl. \
    Gur zvffvba vf rkgerzryl vzcbegnag naq zhfg or pbzcyrgrq orsber zvqavtug. \
    Zrrg zr ng gur byq jnerubhfr arne gur qbpxf.";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_config_file(dir: &Path, lines: &[&str]) -> Result<()> {
    create_test_file(dir, ".smd.toml", &lines.join("\n"))
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "inbox/spy.txt", SPY_CIPHERTEXT)?;
    create_test_file(temp_dir.path(), "inbox/plain.txt", "the the a")?;
    create_test_file(temp_dir.path(), "inbox/empty.txt", "\n\n")?;

    Ok(temp_dir)
}
