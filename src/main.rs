use minirel::consts::catalog_consts::DATA_DIR;
use minirel::record::read_field;
use minirel::{
    AttrRef, AttrSpec, AttrValue, CatalogManager, Datatype, Executor, HeapEngine, Operator,
};
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let data_dir = std::env::args().nth(1).unwrap_or_else(|| DATA_DIR.to_string());
    let mut catalog = CatalogManager::open(&data_dir)?;
    info!(dir = %data_dir, "using data directory");

    // Create the demo relations on first run
    if catalog.relation("Employees").is_err() {
        catalog.create_relation(
            "Employees",
            &[AttrSpec::integer("id"), AttrSpec::string("name", 10)],
        )?;
    }
    if catalog.relation("Result").is_ok() {
        catalog.destroy_relation("Result")?;
    }
    catalog.create_relation("Result", &[AttrSpec::string("name", 10)])?;

    let engine = HeapEngine::new(&catalog);
    let exec = Executor::new(&catalog, &engine);

    exec.insert(
        "Employees",
        &[AttrValue::new("id", "7"), AttrValue::new("name", "Ann")],
    )?;
    exec.select_project(
        "Result",
        &[AttrRef::new("Employees", "name")],
        Some(&AttrRef::new("Employees", "id")),
        Operator::Eq,
        "7",
    )?;

    // Print what landed in the result relation
    for (rid, record) in catalog.heap_file("Result")?.scan_all()? {
        if let Some(value) = read_field(&record, Datatype::String) {
            println!("{rid} {value}");
        }
    }

    exec.delete("Employees", Some("id"), Operator::Gt, Datatype::Integer, "5")?;
    Ok(())
}
