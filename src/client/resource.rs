use std::marker::PhantomData;

use async_trait::async_trait;

use super::{ApiClient, ClientError};
use crate::database::models::Record;

/// Remote CRUD surface for one collection
#[async_trait]
pub trait Resource<T: Record>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, ClientError>;

    async fn create(&self, record: &T) -> Result<T, ClientError>;

    async fn update(&self, key: i32, record: &T) -> Result<T, ClientError>;

    async fn delete(&self, key: i32) -> Result<(), ClientError>;
}

/// `Resource` backed by `{base_url}/{collection}` on the inventory API
#[derive(Debug, Clone)]
pub struct HttpResource<T> {
    client: ApiClient,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: Record> HttpResource<T> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _phantom: PhantomData,
        }
    }

    fn item_path(key: i32) -> String {
        format!("{}/{}", T::COLLECTION, key)
    }
}

#[async_trait]
impl<T: Record> Resource<T> for HttpResource<T> {
    async fn list(&self) -> Result<Vec<T>, ClientError> {
        self.client.get(T::COLLECTION).await
    }

    async fn create(&self, record: &T) -> Result<T, ClientError> {
        self.client.post(T::COLLECTION, record).await
    }

    async fn update(&self, key: i32, record: &T) -> Result<T, ClientError> {
        self.client.put(&Self::item_path(key), record).await
    }

    async fn delete(&self, key: i32) -> Result<(), ClientError> {
        self.client.delete(&Self::item_path(key)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::Release;

    #[test]
    fn item_paths_use_collection() {
        assert_eq!(HttpResource::<Release>::item_path(12), "releases/12");
    }
}
