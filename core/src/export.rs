//! CSV export of the three datasets.
//!
//! Files are staged as `<name>.csv.tmp` and only renamed to `<name>.csv`
//! once all three were written. If any write or rename fails, the staging
//! files and every target already renamed are removed, so a failed export
//! never leaves a partial set.

use crate::{
    customer::Customer,
    engine::Dataset,
    error::GenResult,
    order::Order,
    payment::Payment,
    table::Table,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub customers: PathBuf,
    pub orders: PathBuf,
    pub payments: PathBuf,
}

/// Write rows to `path` with `T::COLUMNS` as the header. Missing values
/// become empty cells.
pub fn write_table<T: Table>(rows: &[T], path: &Path) -> GenResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(T::COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn final_path<T: Table>(dir: &Path) -> PathBuf {
    dir.join(format!("{}.csv", T::NAME))
}

fn staging_path<T: Table>(dir: &Path) -> PathBuf {
    dir.join(format!("{}.csv.tmp", T::NAME))
}

pub fn export_dataset(dataset: &Dataset, dir: &Path) -> GenResult<ExportedFiles> {
    fs::create_dir_all(dir)?;
    let staging = [
        staging_path::<Customer>(dir),
        staging_path::<Order>(dir),
        staging_path::<Payment>(dir),
    ];

    let written = write_table(&dataset.customers, &staging[0])
        .and_then(|_| write_table(&dataset.orders, &staging[1]))
        .and_then(|_| write_table(&dataset.payments, &staging[2]));
    if let Err(e) = written {
        discard(&staging);
        return Err(e);
    }

    let files = ExportedFiles {
        customers: final_path::<Customer>(dir),
        orders: final_path::<Order>(dir),
        payments: final_path::<Payment>(dir),
    };
    let targets = [&files.customers, &files.orders, &files.payments];
    let mut published: Vec<&Path> = Vec::with_capacity(targets.len());
    for (staged, target) in staging.iter().zip(targets) {
        if let Err(e) = fs::rename(staged, target) {
            log::warn!(
                "export to {} failed at {}: {e}; rolling back",
                dir.display(),
                target.display()
            );
            discard(&published);
            discard(&staging);
            return Err(e.into());
        }
        published.push(target);
    }

    log::info!(
        "exported {} customers, {} orders, {} payments to {}",
        dataset.customers.len(),
        dataset.orders.len(),
        dataset.payments.len(),
        dir.display()
    );
    Ok(files)
}

/// Best-effort removal; paths that are already gone are fine.
fn discard<P: AsRef<Path>>(paths: &[P]) {
    for path in paths {
        let _ = fs::remove_file(path);
    }
}
