//! Record store client.
//!
//! Translates list, get, create/update and delete for the three
//! collections into HTTP calls against the record store:
//! - `GET    {base}/apps/{appId}/records`      → object keyed by record id
//! - `GET    {base}/apps/{appId}/records/{id}` → one record body
//! - `POST   {base}/apps/{appId}/records`      → created record
//! - `PATCH  {base}/apps/{appId}/records/{id}` → updated record
//! - `DELETE {base}/apps/{appId}/records/{id}` → any 2xx is success
//!
//! Bodies are JSON (`{"fields": {...}}` for writes). Credentials are the
//! configured session cookie. Reference fields are converted to and from
//! typed identifiers here and nowhere else.

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use studio_models::wire::{FieldsEnvelope, RecordBody};
use studio_models::{Collection, Record, RecordFields, RecordId, ReferenceCodec};
use tracing::{debug, warn};

use crate::config::{AppIds, RecordsConfig};
use crate::error::{Error, Result};

/// Client for the hosted record store.
#[derive(Debug, Clone)]
pub struct RecordClient {
    client: Client,
    base_url: String,
    apps: AppIds,
    codec: ReferenceCodec,
}

impl RecordClient {
    /// Create a client from the records configuration.
    pub fn new(config: &RecordsConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(cookie) = &config.session_cookie {
            let value = header::HeaderValue::from_str(cookie)
                .map_err(|e| Error::Internal(format!("Invalid session cookie: {}", e)))?;
            headers.insert(header::COOKIE, value);
        }

        let mut builder = Client::builder()
            .user_agent(concat!("yoga-studio/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let codec = ReferenceCodec::new(&base_url, &config.apps.courses);

        Ok(Self {
            client,
            base_url,
            apps: config.apps.clone(),
            codec,
        })
    }

    fn collection_url(&self, collection: Collection) -> String {
        format!("{}/apps/{}/records", self.base_url, self.apps.get(collection))
    }

    fn record_url(&self, collection: Collection, id: &RecordId) -> String {
        format!("{}/{}", self.collection_url(collection), id)
    }

    /// List all records of a collection, in the order the store returns them.
    pub async fn list<F: RecordFields>(&self) -> Result<Vec<Record<F>>> {
        let collection = F::COLLECTION;
        let request = self.client.get(self.collection_url(collection));
        let response = self.send(request, collection, "list").await?;
        let keyed: Map<String, Value> = read_json(response).await?;

        let mut records = Vec::with_capacity(keyed.len());
        for (id, value) in keyed {
            let body: RecordBody<F::Wire> = serde_json::from_value(value)?;
            records.push(Record::from_body(RecordId::new(id), body, &self.codec));
        }
        debug!(%collection, count = records.len(), "Listed records");
        Ok(records)
    }

    /// Fetch one record.
    pub async fn get<F: RecordFields>(&self, id: &RecordId) -> Result<Record<F>> {
        let collection = F::COLLECTION;
        let request = self.client.get(self.record_url(collection, id));
        let response = self.send(request, collection, "get").await?;
        let body: RecordBody<F::Wire> = read_json(response).await?;
        let record_id = body.id.clone().map(RecordId::new).unwrap_or_else(|| id.clone());
        Ok(Record::from_body(record_id, body, &self.codec))
    }

    /// Create a record from a full field set.
    pub async fn create<F: RecordFields>(&self, fields: &F) -> Result<Record<F>> {
        let collection = F::COLLECTION;
        let wire = fields.to_wire(&self.codec);
        let request = self
            .client
            .post(self.collection_url(collection))
            .json(&FieldsEnvelope { fields: &wire });
        let response = self.send(request, collection, "create").await?;
        let body: RecordBody<F::Wire> = read_json(response).await?;
        let id = body
            .id
            .clone()
            .map(RecordId::new)
            .ok_or_else(|| Error::Decode("created record carries no id".to_string()))?;
        Ok(Record::from_body(id, body, &self.codec))
    }

    /// Update a record. Absent fields are left out of the request and stay
    /// unchanged in the store.
    pub async fn update<F: RecordFields>(&self, id: &RecordId, fields: &F) -> Result<Record<F>> {
        let collection = F::COLLECTION;
        let wire = fields.to_wire(&self.codec);
        let request = self
            .client
            .patch(self.record_url(collection, id))
            .json(&FieldsEnvelope { fields: &wire });
        let response = self.send(request, collection, "update").await?;
        let body: RecordBody<F::Wire> = read_json(response).await?;
        let record_id = body.id.clone().map(RecordId::new).unwrap_or_else(|| id.clone());
        Ok(Record::from_body(record_id, body, &self.codec))
    }

    /// Create when `id` is `None`, update otherwise.
    pub async fn save<F: RecordFields>(
        &self,
        id: Option<&RecordId>,
        fields: &F,
    ) -> Result<Record<F>> {
        match id {
            Some(id) => self.update(id, fields).await,
            None => self.create(fields).await,
        }
    }

    /// Delete a record. The response body is ignored.
    pub async fn delete<F: RecordFields>(&self, id: &RecordId) -> Result<()> {
        let collection = F::COLLECTION;
        let request = self.client.delete(self.record_url(collection, id));
        self.send(request, collection, "delete").await?;
        Ok(())
    }

    async fn send(
        &self,
        request: RequestBuilder,
        collection: Collection,
        operation: &'static str,
    ) -> Result<Response> {
        debug!(%collection, operation, "Record store request");

        let response = request.send().await.map_err(|e| {
            warn!(%collection, operation, error = %e, "Record store unreachable");
            Error::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                %collection,
                operation,
                status = status.as_u16(),
                "Record store rejected request"
            );
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_per_collection() {
        let client = RecordClient::new(&RecordsConfig::with_base_url("http://store.test/rest/"))
            .unwrap();
        assert_eq!(
            client.collection_url(Collection::Courses),
            "http://store.test/rest/apps/6899d0d3ca4dc3817f92802b/records"
        );
        assert_eq!(
            client.record_url(
                Collection::Participants,
                &RecordId::new("68a0b1c2d3e4f5a6b7c8d9e0")
            ),
            "http://store.test/rest/apps/6899d0d7ab6cda2d36ea30f4/records/68a0b1c2d3e4f5a6b7c8d9e0"
        );
    }

    #[test]
    fn test_invalid_session_cookie_is_rejected() {
        let mut config = RecordsConfig::with_base_url("http://store.test/rest");
        config.session_cookie = Some("bad\nvalue".to_string());
        assert!(matches!(RecordClient::new(&config), Err(Error::Internal(_))));
    }
}
