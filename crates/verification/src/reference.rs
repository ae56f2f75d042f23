use async_trait::async_trait;
use scoring::AgeCategory;
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::{Result, VerificationError};

/// Resolves the age category a competition event is run under. The category
/// is part of the scoring context, so promotion fails closed when the event
/// is unknown.
#[async_trait]
pub trait AgeCategoryProvider: Send + Sync {
    async fn age_category(&self, event_id: Uuid) -> Result<AgeCategory>;
}

/// Map-backed category reference, loaded once at startup.
#[derive(Default)]
pub struct StaticAgeCategories {
    categories: HashMap<Uuid, AgeCategory>,
}

impl StaticAgeCategories {
    pub fn new(categories: impl IntoIterator<Item = (Uuid, AgeCategory)>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
        }
    }
}

#[async_trait]
impl AgeCategoryProvider for StaticAgeCategories {
    async fn age_category(&self, event_id: Uuid) -> Result<AgeCategory> {
        self.categories
            .get(&event_id)
            .copied()
            .ok_or(VerificationError::NotFound)
    }
}
