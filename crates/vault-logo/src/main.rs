use vault_engine::logging::{init_logging, LoggingConfig};
use vault_logo::batch::{generate_all, project_root};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    println!("Generating Vault logos...");
    generate_all(project_root(), |logo| {
        println!("  ✓ {} ({}x{})", logo.spec.path, logo.spec.size, logo.spec.size);
    })?;
    println!();
    println!("All logos generated!");

    Ok(())
}
