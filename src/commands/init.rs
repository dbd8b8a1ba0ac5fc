use crate::config::CONFIG_FILE;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Redtable configuration

[dataset]
# Analyzed when the CLI gives no path.
path = "AAG_Languages_extracted.csv"

[deadline]
# Pentecost 2033; override for what-if runs.
date = "2033-06-05"

[report]
# Drill-down list length in the terminal report.
top = 10
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE} configuration file");

    Ok(())
}
