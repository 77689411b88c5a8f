//! User administration endpoints

use reqwest::Method;
use strata_core::domain::user::User;
use strata_core::dto::user::CreateUser;

use crate::StrataClient;
use crate::error::Result;

impl StrataClient {
    // =============================================================================
    // User Query
    // =============================================================================

    /// Get the user the credentials belong to
    pub async fn current_user(&self) -> Result<User> {
        let response = self.request(Method::GET, &["users", "me"])?.send().await?;

        self.handle_response(response).await
    }

    /// List all users
    ///
    /// # Returns
    /// A list of all users visible to the caller
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let response = self.request(Method::GET, &["users"])?.send().await?;

        self.handle_response(response).await
    }

    /// Get details for a specific user
    ///
    /// # Arguments
    /// * `user_id` - The user id
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        let response = self
            .request(Method::GET, &["users", user_id])?
            .send()
            .await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // User Management
    // =============================================================================

    /// Create a user
    ///
    /// # Arguments
    /// * `req` - The user creation request
    ///
    /// # Returns
    /// The created user
    pub async fn create_user(&self, req: CreateUser) -> Result<User> {
        let response = self
            .request(Method::POST, &["users"])?
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a user
    ///
    /// # Arguments
    /// * `user_id` - The user id to delete
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, &["users", user_id])?
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Credentials, StrataClient};
    use strata_core::domain::user::UserRole;
    use strata_core::dto::user::CreateUser;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users"))
            .and(body_json(serde_json::json!({
                "email": "ada@example.com",
                "role": "ADMIN"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "u-1",
                "email": "ada@example.com",
                "role": "ADMIN"
            })))
            .mount(&server)
            .await;

        let client = StrataClient::new(server.uri(), Credentials::new("t").unwrap());
        let user = client
            .create_user(CreateUser {
                email: "ada@example.com".to_string(),
                display_name: None,
                role: UserRole::Admin,
            })
            .await
            .unwrap();

        assert_eq!(user.id, "u-1");
        assert_eq!(user.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_current_user_forbidden() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(401).set_body_string("expired token"))
            .mount(&server)
            .await;

        let client = StrataClient::new(server.uri(), Credentials::new("t").unwrap());
        let err = client.current_user().await.unwrap_err();
        assert!(err.is_client_error());
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_list_users() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "u-1", "email": "ada@example.com", "role": "ADMIN"},
                {"id": "u-2", "email": "bob@example.com", "role": "MEMBER"}
            ])))
            .mount(&server)
            .await;

        let client = StrataClient::new(server.uri(), Credentials::new("t").unwrap());
        let users = client.list_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[1].role, UserRole::Member);
    }

    #[tokio::test]
    async fn test_get_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/u-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "u-1",
                "email": "ada@example.com",
                "role": "ADMIN"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = StrataClient::new(server.uri(), Credentials::new("t").unwrap());
        assert_eq!(client.get_user("u-1").await.unwrap().email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_delete_user() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/users/u-2"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = StrataClient::new(server.uri(), Credentials::new("t").unwrap());
        client.delete_user("u-2").await.unwrap();
    }
}
