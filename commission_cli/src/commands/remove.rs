//! The `remove` subcommand: deletes one deal by id.

use anyhow::{bail, Result};
use clap::Args;
use commission_lib::{DealStore, KeyValueStore};

#[derive(Args)]
pub struct RemoveArgs {
    /// Id of the deal to delete (see `commission list`)
    pub id: String,
}

pub fn run<S: KeyValueStore>(args: &RemoveArgs, store: &mut DealStore<S>) -> Result<()> {
    match store.remove(&args.id)? {
        Some(record) => {
            eprintln!(
                "Removed deal {} ({}, {})",
                record.id, record.client_name, record.address
            );
            Ok(())
        }
        None => bail!("no deal with id '{}'", args.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commission_lib::{DealRecord, MemoryStore, DEFAULT_STORAGE_KEY};

    fn seeded(backend: &MemoryStore) -> DealStore<&MemoryStore> {
        let deals: Vec<DealRecord> =
            serde_json::from_str(include_str!("../../../fixtures/deals.json")).unwrap();
        let mut store = DealStore::load(backend, DEFAULT_STORAGE_KEY);
        for deal in deals.into_iter().rev() {
            store.add(deal).unwrap();
        }
        store
    }

    #[test]
    fn test_remove_existing() {
        let backend = MemoryStore::new();
        let mut store = seeded(&backend);
        let args = RemoveArgs {
            id: "0b9d2a61-3c7f-4f0e-8d2b-6a1e5c4f9b20".to_string(),
        };
        run(&args, &mut store).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].client_name, "John Doe");
    }

    #[test]
    fn test_remove_unknown_id_fails() {
        let backend = MemoryStore::new();
        let mut store = seeded(&backend);
        let args = RemoveArgs {
            id: "missing".to_string(),
        };
        let err = run(&args, &mut store).unwrap_err();
        assert!(err.to_string().contains("missing"));
        assert_eq!(store.len(), 2);
    }
}
