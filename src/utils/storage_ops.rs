//! Object storage abstraction for testability

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::path::Path;
use tracing::debug;

/// Abstraction for archive uploads, enabling mocking in tests
#[async_trait]
pub trait StorageOperations: Send + Sync {
    /// Upload a local file to `bucket` under `key`
    async fn upload_file(&self, path: &Path, bucket: &str, key: &str) -> Result<()>;
}

/// Default implementation backed by the AWS SDK
#[derive(Debug, Clone)]
pub struct RealS3Ops {
    client: Client,
}

impl RealS3Ops {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_conf(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(sdk_config))
    }
}

#[async_trait]
impl StorageOperations for RealS3Ops {
    async fn upload_file(&self, path: &Path, bucket: &str, key: &str) -> Result<()> {
        let body = ByteStream::from_path(path)
            .await
            .context(format!("Failed to open archive for upload: {:?}", path))?;

        let output = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .context(format!("Failed to upload {:?} to s3://{}/{}", path, bucket, key))?;

        debug!("PutObject etag: {:?}", output.e_tag());
        Ok(())
    }
}

/// Mock implementation for testing
/// Available for use in external test crates
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Recorded upload
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct UploadCall {
        pub path: String,
        pub bucket: String,
        pub key: String,
    }

    /// Mock storage operations for testing
    #[derive(Clone, Default)]
    pub struct MockStorageOps {
        /// Recorded uploads
        pub uploads: Arc<Mutex<Vec<UploadCall>>>,
        /// Whether uploads should fail
        pub should_fail_upload: Arc<Mutex<bool>>,
    }

    impl MockStorageOps {
        pub fn new() -> Self {
            Self::default()
        }

        /// Configure uploads to fail
        pub fn with_failing_upload(self) -> Self {
            *self.should_fail_upload.lock().unwrap() = true;
            self
        }

        /// Get all recorded uploads
        pub fn get_uploads(&self) -> Vec<UploadCall> {
            self.uploads.lock().unwrap().clone()
        }

        /// Check if any upload was attempted
        pub fn upload_called(&self) -> bool {
            !self.uploads.lock().unwrap().is_empty()
        }
    }

    #[async_trait]
    impl StorageOperations for MockStorageOps {
        async fn upload_file(&self, path: &Path, bucket: &str, key: &str) -> Result<()> {
            self.uploads.lock().unwrap().push(UploadCall {
                path: path.display().to_string(),
                bucket: bucket.to_string(),
                key: key.to_string(),
            });
            if *self.should_fail_upload.lock().unwrap() {
                anyhow::bail!("Mock upload failure for s3://{}/{}", bucket, key);
            }
            Ok(())
        }
    }
}
