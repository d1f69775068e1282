use std::collections::HashSet;
use user_registry::clients::ActorClient;
use user_registry::config::Config;
use user_registry::lifecycle::UserSystem;
use user_registry::model::{demo_users, User, UserCreate, UserUpdate};
use user_registry::user_actor::UserError;

fn demo_system() -> UserSystem {
    UserSystem::with_seed(32, demo_users()).expect("Failed to start system")
}

/// Seeded store walk-through: create, delete, lookup of the deleted id, ordered listing.
#[tokio::test]
async fn test_seeded_create_delete_list() {
    let system = demo_system();
    let users = &system.user_client;

    let sam = users
        .create_user(UserCreate::new("Sam", "sam@x.com"))
        .await
        .expect("Failed to create user");
    assert_eq!(sam, User::new(3, "Sam", "sam@x.com"));

    users.delete(1).await.expect("Failed to delete user");

    let err = users.get(1).await.unwrap_err();
    assert_eq!(err, UserError::NotFound("1".into()));

    let ids: Vec<u64> = users.list().await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![2, 3]);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_create_with_empty_name_changes_nothing() {
    let system = demo_system();
    let users = &system.user_client;

    let err = users
        .create_user(UserCreate::new("", "a@b.com"))
        .await
        .unwrap_err();
    assert_eq!(err, UserError::ValidationError(vec!["name".into()]));
    assert_eq!(users.list().await.unwrap().len(), 2);

    // the rejected create did not burn an id
    let created = users
        .create_user(UserCreate::new("Ann", "ann@b.com"))
        .await
        .unwrap();
    assert_eq!(created.id, 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let system = demo_system();

    let update = UserUpdate {
        name: Some("X".into()),
        email: Some("y@z.com".into()),
    };
    let err = system.user_client.update_user(99, update).await.unwrap_err();
    assert_eq!(err, UserError::NotFound("99".into()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_preserves_id_position_and_unspecified_fields() {
    let system = demo_system();
    let users = &system.user_client;

    let update = UserUpdate {
        name: Some("Johnny".into()),
        email: None,
    };
    let updated = users.update_user(1, update).await.unwrap();
    assert_eq!(updated, User::new(1, "Johnny", "john.doe@example.com"));

    let listed = users.list().await.unwrap();
    assert_eq!(listed[0], updated);
    assert_eq!(listed[1].id, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_update_is_atomic() {
    let system = demo_system();
    let users = &system.user_client;

    // name is valid, email is blank: neither may be applied
    let update = UserUpdate {
        name: Some("Changed".into()),
        email: Some("   ".into()),
    };
    let err = users.update_user(2, update).await.unwrap_err();
    assert_eq!(err, UserError::ValidationError(vec!["email".into()]));

    let jane = users.get(2).await.unwrap();
    assert_eq!(jane, User::new(2, "Jane Smith", "jane.smith@example.com"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleted_ids_never_return() {
    let system = UserSystem::with_seed(32, Vec::new()).unwrap();
    let users = &system.user_client;

    let mut seen = HashSet::new();
    let mut last = 0;
    for round in 0..5 {
        let created = users
            .create_user(UserCreate::new(format!("u{round}"), "u@x.com"))
            .await
            .unwrap();
        assert!(created.id > last, "ids must strictly increase");
        assert!(seen.insert(created.id));
        last = created.id;

        users.delete(created.id).await.unwrap();
        assert_eq!(
            users.get(created.id).await.unwrap_err(),
            UserError::NotFound(created.id.to_string())
        );
        assert_eq!(
            users.delete(created.id).await.unwrap_err(),
            UserError::NotFound(created.id.to_string())
        );
    }

    assert!(users.list().await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

/// Concurrent creates through cloned clients must yield distinct, gap-free ids.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates() {
    let system = UserSystem::with_seed(8, demo_users()).unwrap();

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let users = system.user_client.clone();
            tokio::spawn(async move {
                users
                    .create_user(UserCreate::new(format!("user{i}"), format!("user{i}@x.com")))
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let user = handle.await.unwrap().unwrap();
        assert!(ids.insert(user.id), "duplicate id {}", user.id);
    }
    assert_eq!(ids, (3..=102).collect::<HashSet<u64>>());
    assert_eq!(system.user_client.list().await.unwrap().len(), 102);

    system.shutdown().await.unwrap();
}

/// A delete racing updates on the same id: every update either lands before the delete
/// or fails with NotFound, and the record ends up gone.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_delete_racing_updates() {
    let system = demo_system();

    let mut handles = Vec::new();
    for i in 0..20 {
        let users = system.user_client.clone();
        handles.push(tokio::spawn(async move {
            let update = UserUpdate {
                name: Some(format!("name{i}")),
                email: None,
            };
            users.update_user(1, update).await.map(|_| ())
        }));
    }
    let deleter = system.user_client.clone();
    handles.push(tokio::spawn(async move { deleter.delete(1).await }));

    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) | Err(UserError::NotFound(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert!(matches!(
        system.user_client.get(1).await,
        Err(UserError::NotFound(_))
    ));
    assert_eq!(system.user_client.list().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_system_from_config() {
    let config = Config {
        seed_demo_users: false,
        ..Config::default()
    };
    let system = UserSystem::new(&config).unwrap();
    assert!(system.user_client.list().await.unwrap().is_empty());
    system.shutdown().await.unwrap();

    let system = UserSystem::new(&Config::default()).unwrap();
    assert_eq!(system.user_client.list().await.unwrap(), demo_users());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_seed_is_rejected() {
    let seed = vec![User::new(1, "A", "a@x.com"), User::new(1, "B", "b@x.com")];
    assert!(UserSystem::with_seed(8, seed).is_err());
}

#[tokio::test]
async fn test_ids_run_out_at_top_of_range() {
    let max = User::new(u64::MAX, "Max", "max@x.com");
    assert!(UserSystem::with_seed(8, vec![max]).is_err());

    let system = UserSystem::with_seed(8, vec![User::new(u64::MAX - 1, "Ann", "ann@x.com")])
        .unwrap();
    let users = &system.user_client;

    let last = users
        .create_user(UserCreate::new("Max", "max@x.com"))
        .await
        .unwrap();
    assert_eq!(last.id, u64::MAX);

    let err = users
        .create_user(UserCreate::new("Sam", "sam@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::ActorCommunicationError(_)));

    users.delete(u64::MAX).await.unwrap();
    assert_eq!(
        users.list().await.unwrap(),
        vec![User::new(u64::MAX - 1, "Ann", "ann@x.com")]
    );
    assert_eq!(
        users.get(u64::MAX).await.unwrap_err(),
        UserError::NotFound(u64::MAX.to_string())
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
#[should_panic]
async fn test_zero_capacity_is_a_caller_error() {
    let _ = UserSystem::with_seed(0, demo_users());
}
