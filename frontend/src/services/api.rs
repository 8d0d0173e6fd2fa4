use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::config::join_url;
use shared::error::Result;
use shared::transaction::{normalize_categories, normalize_transactions};
use shared::{
    normalize_users, Category, CategoryCreateRequest, ClientError, CreateUserRequest,
    FileUploadResponse, ManualTransactionRequest, RawCategory, RawTransaction, RawUser,
    Transaction, TransactionFeedbackRequest, UpdateUserRequest, UploadKind, User,
};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use super::logging::Logger;

const COMPONENT: &str = "api";

/// API client for communicating with the finance backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client for `base_url`; an empty base sends same-origin relative requests
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    // Users

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        let response = send(Request::post(&self.url("/api/users")).json(request)).await?;
        let raw: RawUser = decode(response).await?;
        raw.normalize()
            .ok_or_else(|| ClientError::Decode("user response carried no userId".to_string()))
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User> {
        let url = self.url(&format!("/api/users/{}", user_id));
        let response = send(Request::get(&url).build()).await?;
        let raw: RawUser = decode(response).await?;
        Ok(raw.normalize_or(user_id))
    }

    pub async fn get_users(&self) -> Result<Vec<User>> {
        let response = send(Request::get(&self.url("/api/users")).build()).await?;
        let raw: Option<Vec<RawUser>> = decode(response).await?;
        Ok(normalize_users(raw.unwrap_or_default()))
    }

    pub async fn update_user(&self, user_id: i64, request: &UpdateUserRequest) -> Result<User> {
        let url = self.url(&format!("/api/users/{}", user_id));
        let response = send(Request::put(&url).json(request)).await?;
        let raw: RawUser = decode(response).await?;
        Ok(raw.normalize_or(user_id))
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        let url = self.url(&format!("/api/users/{}", user_id));
        let response = send(Request::delete(&url).build()).await?;
        expect_ok(response).await
    }

    // Transactions

    pub async fn get_transactions(&self, user_id: i64) -> Result<Vec<Transaction>> {
        let url = self.url(&format!("/api/transactions/user/{}", user_id));
        let response = send(Request::get(&url).build()).await?;
        let raw: Option<Vec<RawTransaction>> = decode(response).await?;
        Ok(normalize_transactions(raw.unwrap_or_default()))
    }

    pub async fn add_manual_transaction(&self, request: &ManualTransactionRequest) -> Result<()> {
        let url = self.url("/api/transactions/manual");
        let response = send(Request::post(&url).json(request)).await?;
        expect_ok(response).await
    }

    pub async fn submit_feedback(&self, request: &TransactionFeedbackRequest) -> Result<()> {
        let url = self.url(&format!("/api/transactions/{}/feedback", request.transaction_id));
        let response = send(Request::post(&url).json(request)).await?;
        expect_ok(response).await
    }

    // Categories

    pub async fn get_categories(&self, user_id: i64) -> Result<Vec<Category>> {
        let url = self.url(&format!("/api/categories/user/{}", user_id));
        let response = send(Request::get(&url).build()).await?;
        let raw: Option<Vec<RawCategory>> = decode(response).await?;
        Ok(normalize_categories(raw.unwrap_or_default()))
    }

    pub async fn create_category(&self, request: &CategoryCreateRequest) -> Result<()> {
        let response = send(Request::post(&self.url("/api/categories")).json(request)).await?;
        expect_ok(response).await
    }

    // Files

    /// Multipart upload of a receipt or statement for `user_id`
    pub async fn upload_file(
        &self,
        kind: UploadKind,
        user_id: i64,
        file: &File,
    ) -> Result<FileUploadResponse> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(js_error)?;
        form.append_with_str("userId", &user_id.to_string())
            .map_err(js_error)?;

        let response = send(Request::post(&self.url(kind.path())).body(form)).await?;
        let body: Option<FileUploadResponse> = decode(response).await?;
        Ok(body.unwrap_or_default())
    }
}

async fn send(request: std::result::Result<Request, gloo::net::Error>) -> Result<Response> {
    let request = request.map_err(|e| ClientError::Request(e.to_string()))?;
    let url = request.url();
    match request.send().await {
        Ok(response) => Ok(response),
        Err(e) => {
            Logger::error_with_component(COMPONENT, &format!("Request to {} failed: {}", url, e));
            Err(ClientError::Network(e.to_string()))
        }
    }
}

async fn error_from(response: Response) -> ClientError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Logger::warn_with_component(
        COMPONENT,
        &format!("{} answered {}: {}", response.url(), status, body),
    );
    ClientError::from_response(status, &body)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

async fn expect_ok(response: Response) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_from(response).await)
    }
}

fn js_error(value: JsValue) -> ClientError {
    ClientError::Request(format!("{:?}", value))
}
