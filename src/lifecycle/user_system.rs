use crate::clients::UserClient;
use crate::config::Config;
use crate::model::{demo_users, User};
use resource_actor::FrameworkError;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator for the user registry.
///
/// `UserSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the User actor
/// - **Seeding**: Populating the store with its initial records
///
/// # Example
///
/// ```ignore
/// let system = UserSystem::new(&Config::default())?;
///
/// let user = system.user_client.create_user(UserCreate::new("Sam", "sam@x.com")).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct UserSystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl UserSystem {
    /// Starts the User actor as configured: channel capacity from `config`, seeded with the
    /// demo users when `seed_demo_users` is set.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &Config) -> Result<Self, FrameworkError> {
        let seed = if config.seed_demo_users {
            demo_users()
        } else {
            Vec::new()
        };
        Self::with_seed(config.channel_capacity, seed)
    }

    /// Starts the User actor with an explicit seed.
    ///
    /// Fails if two seed users share an id or a seed id is `u64::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. [`Config`] rejects a zero `channel_capacity` at load
    /// time, so this only concerns direct callers.
    pub fn with_seed(capacity: usize, seed: Vec<User>) -> Result<Self, FrameworkError> {
        let (user_actor, user_client) = crate::user_actor::with_seed(capacity, seed)?;

        // User has no dependencies (Context = ())
        let handle = tokio::spawn(user_actor.run(()));

        Ok(Self {
            user_client,
            handle,
        })
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping `user_client` closes the channel once every other clone is gone too (for
    /// example the HTTP router's copy). The actor then drains queued requests and exits.
    /// Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(e);
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
