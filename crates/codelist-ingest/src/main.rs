//! Code-list ingest binary.
//!
//! One-shot batch job: normalizes each known code-list source file, then
//! loads the cleaned records into the SQLite store as a new dataset.

use std::path::Path;
use std::process::ExitCode;

use codelist_loader::{read_cleaned_file, DatasetLoader, DatasetSpec, SqliteStore, StoreConfig};
use codelist_normalizer::{normalize_file, FilterConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DB_PATH: &str = "codelists.db";

/// One code-list source: input file, standardized output file, dataset
/// name, dataset description.
struct Source {
    input: &'static str,
    output: &'static str,
    name: &'static str,
    description: &'static str,
}

const SOURCES: &[Source] = &[
    Source {
        input: "icd10cm_codes_2025.txt",
        output: "icd10cm_codes_2025_standardized.txt",
        name: "ICD-10-CM 2025",
        description:
            "International Classification of Diseases, 10th Revision, Clinical Modification",
    },
    Source {
        input: "HCPCS_codes_2025.txt",
        output: "HCPCS_codes_2025_standardized.txt",
        name: "HCPCS 2025",
        description: "Healthcare Common Procedure Coding System",
    },
];

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Get paths from env or use defaults
    let data_dir = std::env::var("CODELIST_DATA_DIR").unwrap_or_else(|_| ".".to_string());
    let db_path = std::env::var("CODELIST_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());

    let config = FilterConfig::default();
    let mut any_failed = false;

    for source in SOURCES {
        if let Err(e) = ingest_source(Path::new(&data_dir), &db_path, source, &config) {
            tracing::error!("Failed to ingest {}: {}", source.name, e);
            any_failed = true;
        }
    }

    if any_failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Normalizes one source file and loads the cleaned records as a dataset.
fn ingest_source(
    data_dir: &Path,
    db_path: &str,
    source: &Source,
    config: &FilterConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = data_dir.join(source.input);
    let output = data_dir.join(source.output);

    tracing::info!("Normalizing {}", input.display());
    let stats = normalize_file(&input, &output, config)?;
    tracing::info!(
        "Accepted {} of {} lines ({:.1}%); {} malformed",
        stats.accepted,
        stats.lines_read,
        stats.accept_rate(),
        stats.malformed
    );

    let records = read_cleaned_file(&output)?;

    // One store value per load run: connection opens here and closes when
    // the loader is dropped, committed or not
    let store = SqliteStore::open(&StoreConfig::new(db_path))?;
    let mut loader = DatasetLoader::new(store);
    let report = loader.load(
        &DatasetSpec::new(source.name, source.description, output.display().to_string()),
        &records,
    )?;

    tracing::info!(
        "Dataset {}: inserted {} of {} entries ({} failed)",
        report.dataset_id,
        report.inserted,
        report.attempted,
        report.failed
    );

    Ok(())
}
