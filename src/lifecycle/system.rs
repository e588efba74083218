use crate::clients::{DepartmentClient, UserClient};
use crate::resource::UserResource;
use crate::seed::Seed;
use crate::{department_store, user_store};
use store_actor::FrameworkError;
use tracing::{error, info};

/// Errors raised while starting or stopping the system.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("Cannot seed store: {0}")]
    Seed(#[from] FrameworkError),

    #[error("Store task failed: {0}")]
    StoreTaskFailed(String),
}

/// The runtime orchestrator: owns the User and Department store actors.
///
/// `UserDeptSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both store actors
/// - **Wiring**: Handing out a [`UserResource`] bound to both stores
/// - **Seeding**: Pre-loading stores before their actors start serving
///
/// # Example
///
/// ```ignore
/// let system = UserDeptSystem::with_seed(32, Seed::builtin())?;
/// let resource = system.resource(false);
/// // ... serve requests with `resource` ...
/// drop(resource);
/// system.shutdown().await?;
/// ```
pub struct UserDeptSystem {
    /// Client for interacting with the User store
    pub user_client: UserClient,

    /// Client for interacting with the Department store
    pub department_client: DepartmentClient,

    /// Task handles for both running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl UserDeptSystem {
    /// Starts both stores empty.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (department_actor, department_client) = department_store::new(buffer_size);
        let (user_actor, user_client) = user_store::new(buffer_size);

        Self {
            user_client,
            department_client,
            handles: vec![
                tokio::spawn(department_actor.run()),
                tokio::spawn(user_actor.run()),
            ],
        }
    }

    /// Starts both stores pre-loaded with `seed`.
    ///
    /// Departments and users keep the ids the seed gives them; entries without
    /// an id are numbered by their store. Nothing is spawned if a store cannot
    /// take the seed.
    pub fn with_seed(buffer_size: usize, seed: Seed) -> Result<Self, LifecycleError> {
        let (departments, users) = seed.into_entities();
        info!(
            departments = departments.len(),
            users = users.len(),
            "Starting stores"
        );

        let (department_actor, department_client) = department_store::new(buffer_size);
        let (user_actor, user_client) = user_store::new(buffer_size);
        let department_actor = department_actor.with_entities(departments)?;
        let user_actor = user_actor.with_entities(users)?;

        Ok(Self {
            user_client,
            department_client,
            handles: vec![
                tokio::spawn(department_actor.run()),
                tokio::spawn(user_actor.run()),
            ],
        })
    }

    /// A handler bound to this system's stores.
    pub fn resource(&self, strict_department_refs: bool) -> UserResource {
        UserResource::new(self.user_client.clone(), self.department_client.clone())
            .with_strict_department_refs(strict_department_refs)
    }

    /// Gracefully shuts down both stores.
    ///
    /// Drops the system's clients so the actors' channels close, then waits for
    /// the actor tasks. Every other clone (e.g. inside a [`UserResource`]) must
    /// already be gone, otherwise this waits for it.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down stores...");

        drop(self.user_client);
        drop(self.department_client);

        for handle in self.handles {
            // A panicked actor task surfaces as a JoinError here.
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(LifecycleError::StoreTaskFailed(e.to_string()));
            }
        }

        info!("Shutdown complete.");
        Ok(())
    }
}
