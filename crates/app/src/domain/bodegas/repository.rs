//! Bodegas Repository

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::RwLock;

use crate::domain::bodegas::{errors::BodegasRepositoryError, records::BodegaRecord};

/// In-memory record table, kept in seed order.
#[derive(Debug, Default)]
pub struct MemoryBodegasRepository {
    bodegas: RwLock<Vec<BodegaRecord>>,
}

impl MemoryBodegasRepository {
    #[must_use]
    pub fn new(bodegas: Vec<BodegaRecord>) -> Self {
        Self {
            bodegas: RwLock::new(bodegas),
        }
    }
}

#[async_trait]
impl BodegasRepository for MemoryBodegasRepository {
    async fn list_bodegas(&self) -> Result<Vec<BodegaRecord>, BodegasRepositoryError> {
        Ok(self.bodegas.read().await.clone())
    }

    async fn get_bodega(&self, id: &str) -> Result<BodegaRecord, BodegasRepositoryError> {
        self.bodegas
            .read()
            .await
            .iter()
            .find(|bodega| bodega.id == id)
            .cloned()
            .ok_or(BodegasRepositoryError::NotFound)
    }

    async fn find_bodega(&self, identifier: &str) -> Result<BodegaRecord, BodegasRepositoryError> {
        self.bodegas
            .read()
            .await
            .iter()
            .find(|bodega| bodega.is_identified_by(identifier))
            .cloned()
            .ok_or(BodegasRepositoryError::NotFound)
    }

    async fn replace_bodega(
        &self,
        bodega: BodegaRecord,
    ) -> Result<BodegaRecord, BodegasRepositoryError> {
        let mut bodegas = self.bodegas.write().await;

        let slot = bodegas
            .iter_mut()
            .find(|current| current.id == bodega.id)
            .ok_or(BodegasRepositoryError::NotFound)?;

        slot.clone_from(&bodega);

        Ok(bodega)
    }
}

/// Storage for bodega records.
///
/// Lookups by `identifier` accept the internal id or the display code.
#[automock]
#[async_trait]
pub trait BodegasRepository: Send + Sync {
    /// All records, in seed order.
    async fn list_bodegas(&self) -> Result<Vec<BodegaRecord>, BodegasRepositoryError>;

    /// Record with exactly this internal id.
    async fn get_bodega(&self, id: &str) -> Result<BodegaRecord, BodegasRepositoryError>;

    /// Record whose id or codigo equals `identifier`.
    async fn find_bodega(&self, identifier: &str) -> Result<BodegaRecord, BodegasRepositoryError>;

    /// Replace the record sharing `bodega.id`.
    async fn replace_bodega(
        &self,
        bodega: BodegaRecord,
    ) -> Result<BodegaRecord, BodegasRepositoryError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::make_bodega;

    use super::*;

    fn repository() -> MemoryBodegasRepository {
        let mut coded = make_bodega("A2");
        coded.codigo = "B-102".to_string();

        MemoryBodegasRepository::new(vec![make_bodega("A1"), coded, make_bodega("A3")])
    }

    #[tokio::test]
    async fn list_keeps_seed_order() -> TestResult {
        let ids: Vec<String> = repository()
            .list_bodegas()
            .await?
            .into_iter()
            .map(|bodega| bodega.id)
            .collect();

        assert_eq!(ids, ["A1", "A2", "A3"]);

        Ok(())
    }

    #[tokio::test]
    async fn get_matches_id_only() -> TestResult {
        let repository = repository();

        assert_eq!(repository.get_bodega("A2").await?.codigo, "B-102");

        let result = repository.get_bodega("B-102").await;

        assert!(
            matches!(result, Err(BodegasRepositoryError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn find_matches_id_or_codigo() -> TestResult {
        let repository = repository();

        assert_eq!(repository.find_bodega("B-102").await?.id, "A2");
        assert_eq!(repository.find_bodega("A3").await?.id, "A3");
        assert!(repository.find_bodega("Z9").await.is_err(), "Z9 is unknown");

        Ok(())
    }

    #[tokio::test]
    async fn replace_overwrites_in_place() -> TestResult {
        let repository = repository();

        let mut bodega = repository.get_bodega("A3").await?;
        bodega.piso = -1;

        repository.replace_bodega(bodega).await?;

        let listed = repository.list_bodegas().await?;

        assert_eq!(listed.len(), 3);
        assert_eq!(listed.last().map(|bodega| bodega.piso), Some(-1));

        Ok(())
    }

    #[tokio::test]
    async fn replace_unknown_id_is_not_found() {
        let result = repository().replace_bodega(make_bodega("Z9")).await;

        assert!(
            matches!(result, Err(BodegasRepositoryError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
