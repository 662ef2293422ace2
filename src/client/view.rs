use std::marker::PhantomData;
use std::sync::Arc;

use tracing::info;

use super::{ClientError, Resource, UndoController};
use crate::database::models::Record;

/// Local copy of one collection plus the undo prompt for its last mutation
pub struct CollectionView<T, R> {
    resource: Arc<R>,
    records: Vec<T>,
    undo: UndoController<T>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T, R> CollectionView<T, R>
where
    T: Record,
    R: Resource<T> + 'static,
{
    pub fn new(resource: Arc<R>) -> Self {
        Self {
            resource,
            records: Vec::new(),
            undo: UndoController::new(),
            _phantom: PhantomData,
        }
    }

    pub async fn refresh(&mut self) -> Result<&[T], ClientError> {
        self.records = self.resource.list().await?;
        Ok(&self.records)
    }

    pub async fn add(&mut self, record: T) -> Result<T, ClientError> {
        record.validate()?;
        let created = self.resource.create(&record).await?;
        info!("Created {} #{}", T::COLLECTION, created.key());
        self.refresh().await?;
        Ok(created)
    }

    /// Deletes `key` and offers to re-create it. Returns `false` when the
    /// key is not in the local copy.
    pub async fn remove(&mut self, key: i32) -> Result<bool, ClientError> {
        let Some(snapshot) = self.find(key).cloned() else {
            return Ok(false);
        };

        self.resource.delete(key).await?;
        info!("Deleted {} #{}", T::COLLECTION, key);

        // Registered before the re-fetch so a failed refresh keeps the undo.
        // The server assigns a fresh key on re-create.
        let resource = Arc::clone(&self.resource);
        let recreate = snapshot.clone();
        let message = format!("Deleted {}. Undo?", snapshot.label());
        self.undo.register_undo(
            snapshot,
            move || async move { resource.create(&recreate).await.map(|_| ()) },
            message,
        );

        self.refresh().await?;
        Ok(true)
    }

    /// Replaces `key` with `record` and offers to put the old record back
    /// in full. Returns `false` when the key is not in the local copy.
    pub async fn save(&mut self, key: i32, record: T) -> Result<bool, ClientError> {
        record.validate()?;
        let Some(previous) = self.find(key).cloned() else {
            return Ok(false);
        };

        self.resource.update(key, &record).await?;
        info!("Updated {} #{}", T::COLLECTION, key);

        let resource = Arc::clone(&self.resource);
        let restore = previous.clone();
        let message = format!("Updated {}. Undo?", previous.label());
        self.undo.register_undo(
            previous,
            move || async move { resource.update(key, &restore).await.map(|_| ()) },
            message,
        );

        self.refresh().await?;
        Ok(true)
    }

    /// Runs the pending reversal, then re-fetches so the list shows it.
    pub async fn undo(&mut self) -> Result<(), ClientError> {
        if !self.undo.has_pending() {
            return Ok(());
        }
        self.undo.undo().await?;
        self.refresh().await?;
        Ok(())
    }

    pub fn dismiss(&mut self) {
        self.undo.clear_message();
    }

    pub fn message(&self) -> Option<&str> {
        self.undo.message()
    }

    pub fn has_pending_undo(&self) -> bool {
        self.undo.has_pending()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn find(&self, key: i32) -> Option<&T> {
        self.records.iter().find(|r| r.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::UNDO_COMPLETE;
    use crate::database::models::Product;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// In-memory collection that records every call it receives
    #[derive(Default)]
    struct MemoryResource {
        rows: Mutex<Vec<Product>>,
        next_id: Mutex<i32>,
        calls: Mutex<Vec<String>>,
        list_down: AtomicBool,
    }

    impl MemoryResource {
        fn seeded(names: &[&str]) -> Arc<Self> {
            let resource = Self::default();
            for name in names {
                resource.insert(Product::new(*name));
            }
            Arc::new(resource)
        }

        fn insert(&self, mut product: Product) -> Product {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            product.product_id = *next_id;
            self.rows.lock().unwrap().push(product.clone());
            product
        }

        fn log(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Resource<Product> for MemoryResource {
        async fn list(&self) -> Result<Vec<Product>, ClientError> {
            self.log("list".to_string());
            if self.list_down.load(Ordering::SeqCst) {
                return Err(ClientError::Remote {
                    status: 503,
                    message: "list down".to_string(),
                });
            }
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn create(&self, record: &Product) -> Result<Product, ClientError> {
            self.log(format!("create {}", record.drug_name));
            Ok(self.insert(record.clone()))
        }

        async fn update(&self, key: i32, record: &Product) -> Result<Product, ClientError> {
            self.log(format!("update {}", key));
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|p| p.product_id == key)
                .ok_or_else(|| ClientError::Remote {
                    status: 404,
                    message: format!("product {} not found", key),
                })?;
            row.drug_name = record.drug_name.clone();
            Ok(row.clone())
        }

        async fn delete(&self, key: i32) -> Result<(), ClientError> {
            self.log(format!("delete {}", key));
            self.rows.lock().unwrap().retain(|p| p.product_id != key);
            Ok(())
        }
    }

    type MemoryView = CollectionView<Product, MemoryResource>;

    async fn loaded(names: &[&str]) -> (Arc<MemoryResource>, MemoryView) {
        let resource = MemoryResource::seeded(names);
        let mut view = CollectionView::new(Arc::clone(&resource));
        view.refresh().await.unwrap();
        (resource, view)
    }

    #[tokio::test]
    async fn delete_then_undo_recreates_under_new_key() {
        let (_, mut view) = loaded(&["Aspirin", "Insulin"]).await;

        assert!(view.remove(2).await.unwrap());
        assert_eq!(view.message(), Some("Deleted Insulin. Undo?"));
        assert!(view.find(2).is_none());

        view.undo().await.unwrap();
        assert_eq!(view.message(), Some(UNDO_COMPLETE));
        let restored = view.records().iter().find(|p| p.drug_name == "Insulin").unwrap();
        assert_eq!(restored.product_id, 3);
        assert!(!view.has_pending_undo());
    }

    #[tokio::test]
    async fn edit_then_undo_restores_old_record() {
        let (resource, mut view) = loaded(&["Aspirin"]).await;

        assert!(view.save(1, Product::new("Aspirin 100mg")).await.unwrap());
        assert_eq!(view.message(), Some("Updated Aspirin. Undo?"));
        assert_eq!(view.find(1).unwrap().drug_name, "Aspirin 100mg");

        view.undo().await.unwrap();
        assert_eq!(view.find(1).unwrap().drug_name, "Aspirin");
        assert_eq!(resource.calls().iter().filter(|c| *c == "update 1").count(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_after_delete_keeps_undo() {
        let (resource, mut view) = loaded(&["Aspirin"]).await;
        resource.list_down.store(true, Ordering::SeqCst);

        let err = view.remove(1).await.unwrap_err();
        assert_eq!(err.to_string(), "list down");
        assert!(view.has_pending_undo());
        assert_eq!(view.message(), Some("Deleted Aspirin. Undo?"));

        resource.list_down.store(false, Ordering::SeqCst);
        view.undo().await.unwrap();
        assert_eq!(view.records().len(), 1);
        assert_eq!(view.records()[0].drug_name, "Aspirin");
    }

    #[tokio::test]
    async fn failed_refresh_after_edit_keeps_undo() {
        let (resource, mut view) = loaded(&["Aspirin"]).await;
        resource.list_down.store(true, Ordering::SeqCst);

        assert!(view.save(1, Product::new("Aspirin 75mg")).await.is_err());
        assert_eq!(view.message(), Some("Updated Aspirin. Undo?"));

        resource.list_down.store(false, Ordering::SeqCst);
        view.undo().await.unwrap();
        assert_eq!(view.find(1).unwrap().drug_name, "Aspirin");
    }

    #[tokio::test]
    async fn unknown_key_is_left_alone() {
        let (resource, mut view) = loaded(&["Aspirin"]).await;

        assert!(!view.remove(42).await.unwrap());
        assert!(!view.save(42, Product::new("Other")).await.unwrap());
        assert_eq!(view.message(), None);
        assert_eq!(resource.calls(), vec!["list".to_string()]);
    }

    #[tokio::test]
    async fn invalid_record_never_reaches_resource() {
        let (resource, mut view) = loaded(&["Aspirin"]).await;

        let err = view.add(Product::new(" ")).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(ref m) if m == "Drug name is required"));
        assert!(view.save(1, Product::new("")).await.is_err());
        assert_eq!(resource.calls(), vec!["list".to_string()]);
    }

    #[tokio::test]
    async fn dismiss_keeps_deletion() {
        let (resource, mut view) = loaded(&["Aspirin"]).await;

        view.remove(1).await.unwrap();
        view.dismiss();
        view.undo().await.unwrap();

        assert!(view.records().is_empty());
        assert!(!resource.calls().iter().any(|c| c.starts_with("create")));
    }

    #[tokio::test]
    async fn add_refreshes_without_undo() {
        let (_, mut view) = loaded(&[]).await;

        let created = view.add(Product::new("Cetirizine")).await.unwrap();
        assert_eq!(created.product_id, 1);
        assert_eq!(view.records().len(), 1);
        assert!(!view.has_pending_undo());
    }
}
