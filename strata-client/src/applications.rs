//! Application administration endpoints

use reqwest::Method;
use strata_core::domain::application::Application;
use strata_core::dto::application::CreateApplication;

use crate::StrataClient;
use crate::error::Result;

impl StrataClient {
    // =============================================================================
    // Application Management
    // =============================================================================

    /// List registered applications
    pub async fn list_applications(&self) -> Result<Vec<Application>> {
        let response = self.request(Method::GET, &["applications"])?.send().await?;

        self.handle_response(response).await
    }

    /// Register an application
    ///
    /// # Arguments
    /// * `req` - The application registration request
    ///
    /// # Returns
    /// The registered application with its issued client id
    pub async fn create_application(&self, req: CreateApplication) -> Result<Application> {
        let response = self
            .request(Method::POST, &["applications"])?
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete an application
    ///
    /// # Arguments
    /// * `application_id` - The application id to delete
    pub async fn delete_application(&self, application_id: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, &["applications", application_id])?
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Credentials, StrataClient};
    use strata_core::dto::application::CreateApplication;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_delete_application() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/applications/app-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = StrataClient::new(server.uri(), Credentials::new("t").unwrap());
        client.delete_application("app-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_list_applications() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/applications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "app-1", "name": "dashboard", "client_id": "c-1"}
            ])))
            .mount(&server)
            .await;

        let client = StrataClient::new(server.uri(), Credentials::new("t").unwrap());
        let apps = client.list_applications().await.unwrap();

        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].client_id.as_deref(), Some("c-1"));
    }

    #[tokio::test]
    async fn test_create_application() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/applications"))
            .and(body_json(serde_json::json!({"name": "dashboard"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "app-1",
                "name": "dashboard",
                "client_id": "c-1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = StrataClient::new(server.uri(), Credentials::new("t").unwrap());
        let app = client
            .create_application(CreateApplication {
                name: "dashboard".to_string(),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(app.id, "app-1");
    }
}
