//! Bodegas service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{Timestamp, civil::Date};
use mockall::automock;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::{
    bodegas::{
        data::BodegaPatch, errors::BodegasServiceError, records::BodegaRecord,
        repository::BodegasRepository,
    },
    contracts::{ContractDocument, render_contract},
    floor_plan::FloorPlan,
};

pub struct DefaultBodegasService {
    repository: Arc<dyn BodegasRepository>,

    /// Writer lock, holding the time of the last committed change.
    last_update: Mutex<Timestamp>,
}

impl DefaultBodegasService {
    #[must_use]
    pub fn new(repository: Arc<dyn BodegasRepository>) -> Self {
        Self {
            repository,
            last_update: Mutex::new(Timestamp::now()),
        }
    }
}

#[async_trait]
impl BodegasService for DefaultBodegasService {
    async fn list_bodegas(&self) -> Result<Vec<BodegaRecord>, BodegasServiceError> {
        Ok(self.repository.list_bodegas().await?)
    }

    async fn get_bodega(&self, id: &str) -> Result<BodegaRecord, BodegasServiceError> {
        Ok(self.repository.get_bodega(id).await?)
    }

    async fn update_bodega(
        &self,
        identifier: &str,
        patch: BodegaPatch,
    ) -> Result<BodegaRecord, BodegasServiceError> {
        let mut last_update = self.last_update.lock().await;

        let current = self.repository.find_bodega(identifier).await?;

        let update = patch.sanitize()?;

        if update.is_empty() {
            debug!(bodega = %current.id, "empty update, record unchanged");

            return Ok(current);
        }

        let fields = update.len();
        let merged = update.apply_to(&current)?;
        let updated = self.repository.replace_bodega(merged).await?;

        *last_update = Timestamp::now();

        info!(bodega = %updated.id, fields, "bodega updated");

        Ok(updated)
    }

    async fn contract_document(
        &self,
        identifier: &str,
        generated_on: Date,
    ) -> Result<ContractDocument, BodegasServiceError> {
        let bodega = self.repository.find_bodega(identifier).await?;

        Ok(render_contract(&bodega, generated_on)?)
    }

    async fn floor_plan(&self) -> Result<FloorPlan, BodegasServiceError> {
        let last_updated_at = *self.last_update.lock().await;
        let bodegas = self.repository.list_bodegas().await?;

        Ok(FloorPlan::new(&bodegas, last_updated_at))
    }
}

#[automock]
#[async_trait]
pub trait BodegasService: Send + Sync {
    /// Every bodega, in seed order.
    async fn list_bodegas(&self) -> Result<Vec<BodegaRecord>, BodegasServiceError>;

    /// Bodega with exactly this internal id.
    async fn get_bodega(&self, id: &str) -> Result<BodegaRecord, BodegasServiceError>;

    /// Validate `patch` and merge it into the bodega matching `identifier`
    /// (id or codigo). An empty patch returns the bodega unchanged.
    async fn update_bodega(
        &self,
        identifier: &str,
        patch: BodegaPatch,
    ) -> Result<BodegaRecord, BodegasServiceError>;

    /// Contract text of the bodega matching `identifier` (id or codigo).
    async fn contract_document(
        &self,
        identifier: &str,
        generated_on: Date,
    ) -> Result<ContractDocument, BodegasServiceError>;

    /// Floor plan projection with the time of the last committed change.
    async fn floor_plan(&self) -> Result<FloorPlan, BodegasServiceError>;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use jiff::civil::date;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::{
            bodegas::{
                errors::{BodegasRepositoryError, ValidationError},
                records::EstadoBodega,
                repository::{MemoryBodegasRepository, MockBodegasRepository},
            },
            contracts::ContractsError,
        },
        test::{make_bodega, make_contracted_bodega},
    };

    use super::*;

    fn service(bodegas: Vec<BodegaRecord>) -> DefaultBodegasService {
        DefaultBodegasService::new(Arc::new(MemoryBodegasRepository::new(bodegas)))
    }

    fn patch(payload: serde_json::Value) -> BodegaPatch {
        BodegaPatch::from(payload)
    }

    #[tokio::test]
    async fn update_trims_and_keeps_other_fields() -> TestResult {
        let service = service(vec![make_bodega("A1"), make_bodega("A2")]);

        let updated = service
            .update_bodega("A1", patch(json!({ "nombre": "  Bodega Norte  ", "piso": 3 })))
            .await?;

        let mut expected = make_bodega("A1");
        expected.nombre = "Bodega Norte".to_string();
        expected.piso = 3;

        assert_eq!(updated, expected);
        assert_eq!(service.get_bodega("A1").await?, expected);
        assert_eq!(service.get_bodega("A2").await?, make_bodega("A2"));

        Ok(())
    }

    #[tokio::test]
    async fn update_resolves_codigo() -> TestResult {
        let mut bodega = make_bodega("bodega-1");
        bodega.codigo = "B1".to_string();

        let service = service(vec![bodega]);

        let updated = service
            .update_bodega("B1", patch(json!({ "estado": "OCUPADA" })))
            .await?;

        assert_eq!(updated.id, "bodega-1");
        assert_eq!(updated.estado, EstadoBodega::Ocupada);

        Ok(())
    }

    #[tokio::test]
    async fn get_does_not_resolve_codigo() {
        let mut bodega = make_bodega("bodega-1");
        bodega.codigo = "B1".to_string();

        let result = service(vec![bodega]).get_bodega("B1").await;

        assert!(
            matches!(result, Err(BodegasServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unknown_identifier_is_not_found_before_validation() {
        let result = service(vec![make_bodega("A1")])
            .update_bodega("Z9", patch(json!({ "nombre": "" })))
            .await;

        assert!(
            matches!(result, Err(BodegasServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn invalid_patch_is_never_persisted() -> TestResult {
        let mut repository = MockBodegasRepository::new();

        repository
            .expect_find_bodega()
            .returning(|identifier| Ok(make_bodega(identifier)));

        repository.expect_replace_bodega().never();

        let service = DefaultBodegasService::new(Arc::new(repository));

        let result = service
            .update_bodega("A1", patch(json!({ "metrosCuadrados": 0 })))
            .await;

        assert!(
            matches!(
                result,
                Err(BodegasServiceError::Validation(
                    ValidationError::MetrosCuadrados
                ))
            ),
            "expected metrosCuadrados error, got {result:?}"
        );

        let result = service
            .update_bodega(
                "A1",
                patch(json!({
                    "fechaContratacion": "2024-01-10",
                    "fechaTermino": "2024-01-01",
                })),
            )
            .await;

        assert!(
            matches!(result, Err(BodegasServiceError::EndBeforeStart)),
            "expected EndBeforeStart, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn empty_patch_does_not_write_or_touch_last_update() -> TestResult {
        let mut repository = MockBodegasRepository::new();

        repository
            .expect_find_bodega()
            .returning(|identifier| Ok(make_bodega(identifier)));

        repository
            .expect_list_bodegas()
            .returning(|| Ok(vec![make_bodega("A1")]));

        repository.expect_replace_bodega().never();

        let service = DefaultBodegasService::new(Arc::new(repository));
        let before = service.floor_plan().await?.last_updated_at;

        let updated = service
            .update_bodega("A1", patch(json!({ "desconocido": true })))
            .await?;

        assert_eq!(updated, make_bodega("A1"));
        assert_eq!(service.floor_plan().await?.last_updated_at, before);

        Ok(())
    }

    #[tokio::test]
    async fn committed_update_bumps_last_update() -> TestResult {
        let service = service(vec![make_bodega("A1")]);
        let before = service.floor_plan().await?.last_updated_at;

        tokio::time::sleep(Duration::from_millis(5)).await;

        service
            .update_bodega("A1", patch(json!({ "piso": -2 })))
            .await?;

        assert!(service.floor_plan().await?.last_updated_at > before);

        Ok(())
    }

    #[tokio::test]
    async fn failed_update_keeps_last_update() -> TestResult {
        let service = service(vec![make_contracted_bodega("A1", EstadoBodega::Ocupada)]);
        let before = service.floor_plan().await?.last_updated_at;

        tokio::time::sleep(Duration::from_millis(5)).await;

        let result = service
            .update_bodega("A1", patch(json!({ "fechaTermino": "2024-01-01" })))
            .await;

        assert!(
            matches!(result, Err(BodegasServiceError::EndBeforeStart)),
            "expected EndBeforeStart, got {result:?}"
        );

        let result = service
            .update_bodega("A1", patch(json!({ "tarifaUf": -1 })))
            .await;

        assert!(
            matches!(
                result,
                Err(BodegasServiceError::Validation(ValidationError::TarifaUf))
            ),
            "expected tarifaUf error, got {result:?}"
        );

        assert_eq!(service.floor_plan().await?.last_updated_at, before);
        assert_eq!(
            service.get_bodega("A1").await?,
            make_contracted_bodega("A1", EstadoBodega::Ocupada)
        );

        Ok(())
    }

    #[tokio::test]
    async fn lost_replace_is_not_found() {
        let mut repository = MockBodegasRepository::new();

        repository
            .expect_find_bodega()
            .returning(|identifier| Ok(make_bodega(identifier)));

        repository
            .expect_replace_bodega()
            .once()
            .returning(|_| Err(BodegasRepositoryError::NotFound));

        let service = DefaultBodegasService::new(Arc::new(repository));

        let result = service
            .update_bodega("A1", patch(json!({ "piso": 1 })))
            .await;

        assert!(
            matches!(result, Err(BodegasServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_updates_on_different_fields_all_land() -> TestResult {
        let service = Arc::new(service(vec![make_bodega("A1")]));

        let tasks = [
            json!({ "nombre": "Bodega Sur" }),
            json!({ "piso": 4 }),
            json!({ "observaciones": "Acceso por rampa" }),
            json!({ "tarifaUf": 6.5 }),
            json!({ "estado": "RESERVADA" }),
        ]
        .into_iter()
        .map(|payload| {
            let service = Arc::clone(&service);

            tokio::spawn(async move { service.update_bodega("A1", patch(payload)).await })
        })
        .collect::<Vec<_>>();

        for task in tasks {
            task.await??;
        }

        let bodega = service.get_bodega("A1").await?;

        assert_eq!(bodega.nombre, "Bodega Sur");
        assert_eq!(bodega.piso, 4);
        assert_eq!(bodega.observaciones, "Acceso por rampa");
        assert!((bodega.tarifa_uf - 6.5).abs() < f64::EPSILON);
        assert_eq!(bodega.estado, EstadoBodega::Reservada);

        Ok(())
    }

    #[tokio::test]
    async fn contract_resolves_codigo() -> TestResult {
        let mut bodega = make_contracted_bodega("bodega-4", EstadoBodega::Ocupada);
        bodega.codigo = "B1".to_string();

        let document = service(vec![bodega])
            .contract_document("B1", date(2024, 6, 3))
            .await?;

        assert_eq!(document.bodega_id, "bodega-4");
        assert_eq!(document.generated_on, date(2024, 6, 3));

        Ok(())
    }

    #[tokio::test]
    async fn available_bodega_has_no_contract() {
        let result = service(vec![make_bodega("A1")])
            .contract_document("A1", date(2024, 6, 3))
            .await;

        assert!(
            matches!(
                result,
                Err(BodegasServiceError::Contract(
                    ContractsError::NotContractable(EstadoBodega::Disponible)
                ))
            ),
            "expected NotContractable, got {result:?}"
        );
    }

    #[tokio::test]
    async fn floor_plan_projects_every_bodega() -> TestResult {
        let plan = service(vec![make_bodega("A1"), make_bodega("B1")])
            .floor_plan()
            .await?;

        let identifiers: Vec<&str> = plan
            .units
            .iter()
            .map(|unit| unit.identifier.as_str())
            .collect();

        assert_eq!(identifiers, ["A1", "B1"]);

        Ok(())
    }
}
