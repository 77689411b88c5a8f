//! Analytic catalog endpoints

use reqwest::Method;
use strata_core::domain::analytic::Analytic;
use strata_core::dto::analytic::AnalyticQuery;

use crate::StrataClient;
use crate::error::Result;

impl StrataClient {
    // =============================================================================
    // Analytic Catalog
    // =============================================================================

    /// List analytics in the catalog
    ///
    /// # Arguments
    /// * `query` - Filters; unset fields are not sent
    ///
    /// # Returns
    /// The matching analytics
    pub async fn list_analytics(&self, query: &AnalyticQuery) -> Result<Vec<Analytic>> {
        let response = self
            .request(Method::GET, &["analytics"])?
            .query(query)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get an analytic by id
    ///
    /// # Arguments
    /// * `analytic_id` - The analytic id
    ///
    /// # Returns
    /// The analytic details, including its declared inputs
    pub async fn get_analytic(&self, analytic_id: &str) -> Result<Analytic> {
        let response = self
            .request(Method::GET, &["analytics", analytic_id])?
            .send()
            .await?;

        self.handle_response(response).await
    }
}
