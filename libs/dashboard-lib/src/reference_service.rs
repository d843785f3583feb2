use std::sync::Arc;

use crate::entities::{
    Disease, DiseaseChanges, DiseaseFilter, Location, LocationChanges, NewDisease, NewLocation,
};
use crate::errors_service::{from_repository, ServiceError};
use crate::repository::traits::{DiseaseRepositoryTrait, LocationRepositoryTrait};
use crate::repository::{DiseaseRepository, LocationRepository};
use crate::validation::{normalize_optional_text, validate_coordinate, validate_name};

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// Diseases and locations: flat lookup tables with no ties to access control.
#[derive(Debug, Clone)]
pub struct ReferenceDataService<D = DiseaseRepository, L = LocationRepository>
where
    D: DiseaseRepositoryTrait,
    L: LocationRepositoryTrait,
{
    pub disease_repo: Arc<D>,
    pub location_repo: Arc<L>,
}

impl ReferenceDataService<DiseaseRepository, LocationRepository> {
    pub fn new(disease_repo: DiseaseRepository, location_repo: LocationRepository) -> Self {
        Self {
            disease_repo: Arc::new(disease_repo),
            location_repo: Arc::new(location_repo),
        }
    }
}

impl<D, L> ReferenceDataService<D, L>
where
    D: DiseaseRepositoryTrait,
    L: LocationRepositoryTrait,
{
    pub fn with_repos(disease_repo: Arc<D>, location_repo: Arc<L>) -> Self {
        Self {
            disease_repo,
            location_repo,
        }
    }

    pub async fn get_diseases(&self, filter: DiseaseFilter) -> Result<Vec<Disease>, ServiceError> {
        let rows = self
            .disease_repo
            .get_diseases(filter)
            .await
            .map_err(ServiceError::from)?;
        Ok(rows.into_iter().map(Disease::from).collect())
    }

    pub async fn get_disease(&self, disease_id: i64) -> Result<Option<Disease>, ServiceError> {
        let row = self
            .disease_repo
            .get_disease(disease_id)
            .await
            .map_err(ServiceError::from)?;
        Ok(row.map(Disease::from))
    }

    pub async fn create_disease(&self, disease: NewDisease) -> Result<Disease, ServiceError> {
        let disease = NewDisease {
            disease_name: validate_name("disease_name", &disease.disease_name)?,
            is_active: disease.is_active,
        };
        let row = self
            .disease_repo
            .create_disease(disease)
            .await
            .map_err(ServiceError::from)?;
        tracing::info!(disease_id = row.id, disease_name = %row.disease_name, "disease created");
        Ok(Disease::from(row))
    }

    pub async fn update_disease(&self, disease_id: i64, changes: DiseaseChanges) -> Result<Disease, ServiceError> {
        let changes = DiseaseChanges {
            disease_name: changes
                .disease_name
                .map(|name| validate_name("disease_name", &name))
                .transpose()?,
            is_active: changes.is_active,
        };
        let row = self
            .disease_repo
            .update_disease(disease_id, changes)
            .await
            .map_err(|e| from_repository(e, "disease", disease_id))?;
        Ok(Disease::from(row))
    }

    pub async fn delete_disease(&self, disease_id: i64) -> Result<(), ServiceError> {
        self.disease_repo
            .delete_disease(disease_id)
            .await
            .map_err(|e| from_repository(e, "disease", disease_id))
    }

    pub async fn get_locations(&self) -> Result<Vec<Location>, ServiceError> {
        let rows = self
            .location_repo
            .get_locations()
            .await
            .map_err(ServiceError::from)?;
        Ok(rows.into_iter().map(Location::from).collect())
    }

    pub async fn get_location(&self, location_id: i64) -> Result<Option<Location>, ServiceError> {
        let row = self
            .location_repo
            .get_location(location_id)
            .await
            .map_err(ServiceError::from)?;
        Ok(row.map(Location::from))
    }

    pub async fn create_location(&self, location: NewLocation) -> Result<Location, ServiceError> {
        validate_coordinate("latitude", location.latitude, MAX_LATITUDE)?;
        validate_coordinate("longitude", location.longitude, MAX_LONGITUDE)?;
        let location = NewLocation {
            district_name: validate_name("district_name", &location.district_name)?,
            area_name: normalize_optional_text(location.area_name),
            ..location
        };
        let row = self
            .location_repo
            .create_location(location)
            .await
            .map_err(ServiceError::from)?;
        tracing::info!(location_id = row.id, district_name = %row.district_name, "location created");
        Ok(Location::from(row))
    }

    pub async fn update_location(&self, location_id: i64, changes: LocationChanges) -> Result<Location, ServiceError> {
        validate_coordinate("latitude", changes.latitude.flatten(), MAX_LATITUDE)?;
        validate_coordinate("longitude", changes.longitude.flatten(), MAX_LONGITUDE)?;
        let changes = LocationChanges {
            district_name: changes
                .district_name
                .map(|name| validate_name("district_name", &name))
                .transpose()?,
            area_name: changes.area_name.map(normalize_optional_text),
            ..changes
        };
        let row = self
            .location_repo
            .update_location(location_id, changes)
            .await
            .map_err(|e| from_repository(e, "location", location_id))?;
        Ok(Location::from(row))
    }

    pub async fn delete_location(&self, location_id: i64) -> Result<(), ServiceError> {
        self.location_repo
            .delete_location(location_id)
            .await
            .map_err(|e| from_repository(e, "location", location_id))
    }
}
