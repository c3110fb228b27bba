use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::api::{Api, PostParams};
use kube::Client;

use crate::errors::{AppError, AppResult};

/// Field manager recorded on every write, for server-side-apply bookkeeping.
pub const FIELD_MANAGER: &str = "tokenGetter";

/// Narrow CRUD seam over namespaced Secret storage, mockable in tests.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// `None` means the secret does not exist; any other failure aborts the run.
    async fn get(&self, name: &str) -> AppResult<Option<Secret>>;

    async fn create(&self, secret: &Secret) -> AppResult<()>;

    /// Full replace of the named secret, not a merge.
    async fn replace(&self, name: &str, secret: &Secret) -> AppResult<()>;
}

pub struct KubeSecretStore {
    api: Api<Secret>,
}

impl KubeSecretStore {
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
        }
    }

    fn post_params() -> PostParams {
        PostParams {
            field_manager: Some(FIELD_MANAGER.to_string()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl SecretStore for KubeSecretStore {
    async fn get(&self, name: &str) -> AppResult<Option<Secret>> {
        match self.api.get(name).await {
            Ok(secret) => Ok(Some(secret)),
            Err(kube::Error::Api(ae)) if ae.code == 404 => Ok(None),
            Err(source) => Err(AppError::SecretRead {
                name: name.to_string(),
                source,
            }),
        }
    }

    async fn create(&self, secret: &Secret) -> AppResult<()> {
        let name = secret.metadata.name.clone().unwrap_or_default();
        self.api
            .create(&Self::post_params(), secret)
            .await
            .map_err(|source| AppError::SecretWrite { name, source })?;
        Ok(())
    }

    async fn replace(&self, name: &str, secret: &Secret) -> AppResult<()> {
        self.api
            .replace(name, &Self::post_params(), secret)
            .await
            .map_err(|source| AppError::SecretWrite {
                name: name.to_string(),
                source,
            })?;
        Ok(())
    }
}
