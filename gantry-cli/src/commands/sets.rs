//! Partition-set listing and lookup commands

use anyhow::Result;
use gantry_core::RepositorySelector;
use gantry_query::{PartitionSetCatalog, WorkspaceHost};

/// List partition sets for a pipeline, in catalog order.
pub async fn list(
    host: &dyn WorkspaceHost,
    selector: &RepositorySelector,
    pipeline: &str,
) -> Result<()> {
    let catalog = PartitionSetCatalog::new(host);
    let sets = catalog.for_pipeline(selector, pipeline).await?;

    if sets.is_empty() {
        println!("No partition sets found for pipeline '{}'.", pipeline);
        return Ok(());
    }

    println!("{:<30} {:<24} {:<12}", "NAME", "PIPELINE", "MODE");
    println!("{}", "-".repeat(68));
    for set in &sets {
        println!(
            "{:<30} {:<24} {:<12}",
            set.name(),
            set.pipeline_name(),
            set.mode()
        );
    }
    println!("\n{} partition set(s)", sets.len());

    Ok(())
}

/// Show a single partition set by name.
pub async fn show(
    host: &dyn WorkspaceHost,
    selector: &RepositorySelector,
    name: &str,
) -> Result<()> {
    let catalog = PartitionSetCatalog::new(host);
    let set = catalog.find(selector, name).await?;

    println!("Name: {}", set.name());
    println!("Pipeline: {}", set.pipeline_name());
    println!("Mode: {}", set.mode());
    println!(
        "Repository: {} ({})",
        set.repository().repository_name,
        set.repository().location_name
    );

    Ok(())
}
