use collection_actor::storage::{InMemoryStorage, JsonFileStorage};
use collection_actor::{CollectionActor, CollectionEntity, FrameworkError};
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Contact {
    id: u32,
    name: String,
    email: String,
}

#[derive(Debug)]
struct ContactCreate {
    name: String,
    email: String,
}

#[derive(Debug, Default)]
struct ContactUpdate {
    name: Option<String>,
    email: Option<String>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum ContactError {
    #[error("Email taken: {0}")]
    EmailTaken(String),
    #[error("Name required")]
    NameRequired,
    #[error("No ids left")]
    IdsExhausted,
}

impl CollectionEntity for Contact {
    type Id = u32;
    type Create = ContactCreate;
    type Update = ContactUpdate;
    type Error = ContactError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn next_id(contacts: &[Self]) -> Result<u32, ContactError> {
        let max = contacts.iter().map(|c| c.id).max().unwrap_or(0);
        max.checked_add(1).ok_or(ContactError::IdsExhausted)
    }

    fn from_create_params(id: u32, params: ContactCreate) -> Result<Self, ContactError> {
        if params.name.is_empty() {
            return Err(ContactError::NameRequired);
        }
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
        })
    }

    fn on_create(&self, existing: &[Self]) -> Result<(), ContactError> {
        if existing.iter().any(|c| c.email == self.email) {
            return Err(ContactError::EmailTaken(self.email.clone()));
        }
        Ok(())
    }

    fn on_update(&mut self, update: ContactUpdate, others: &[Self]) -> Result<(), ContactError> {
        if let Some(email) = update.email {
            if others.iter().any(|c| c.email == email) {
                return Err(ContactError::EmailTaken(email));
            }
            self.email = email;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }
}

fn contact(name: &str, email: &str) -> ContactCreate {
    ContactCreate {
        name: name.to_string(),
        email: email.to_string(),
    }
}

#[tokio::test]
async fn test_actor_crud_cycle() {
    let storage = InMemoryStorage::<Contact>::new();
    let (actor, client) = CollectionActor::new(10, storage.clone());
    let handle = tokio::spawn(actor.run());

    let alice = client.create(contact("Alice", "alice@example.com")).await.unwrap();
    let bob = client.create(contact("Bob", "bob@example.com")).await.unwrap();
    assert_eq!(alice.id, 1);
    assert_eq!(bob.id, 2);

    let fetched = client.get(1).await.unwrap();
    assert_eq!(fetched, Some(alice.clone()));
    assert_eq!(client.get(99).await.unwrap(), None);

    let renamed = client
        .update(
            1,
            ContactUpdate {
                name: Some("Alicia".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Alicia");
    assert_eq!(renamed.email, "alice@example.com");

    // Updated record keeps its position
    let all = client.list().await.unwrap();
    assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(all[0].name, "Alicia");

    client.delete(1).await.unwrap();
    assert_eq!(storage.snapshot(), vec![bob]);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_operations_never_save() {
    let storage = InMemoryStorage::<Contact>::new();
    let (actor, client) = CollectionActor::new(10, storage.clone());
    tokio::spawn(actor.run());

    client.create(contact("Alice", "alice@example.com")).await.unwrap();
    client.create(contact("Bob", "bob@example.com")).await.unwrap();
    assert_eq!(storage.save_count(), 2);

    let duplicate = client.create(contact("Eve", "alice@example.com")).await;
    let err = duplicate.unwrap_err().downcast_entity::<ContactError>().unwrap();
    assert_eq!(err, ContactError::EmailTaken("alice@example.com".to_string()));

    let invalid = client.create(contact("", "nobody@example.com")).await;
    assert_eq!(
        invalid.unwrap_err().downcast_entity::<ContactError>().unwrap(),
        ContactError::NameRequired
    );

    let clash = client
        .update(
            2,
            ContactUpdate {
                email: Some("alice@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(clash, Err(FrameworkError::EntityError(_))));

    let missing = client.update(42, ContactUpdate::default()).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "42"));

    let missing = client.delete(42).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(_))));

    assert_eq!(storage.save_count(), 2);
    assert_eq!(storage.snapshot().len(), 2);
}

#[tokio::test]
async fn test_update_may_keep_its_own_unique_value() {
    let storage = InMemoryStorage::<Contact>::new();
    let (actor, client) = CollectionActor::new(10, storage);
    tokio::spawn(actor.run());

    client.create(contact("Alice", "alice@example.com")).await.unwrap();

    let same = client
        .update(
            1,
            ContactUpdate {
                email: Some("alice@example.com".to_string()),
                name: Some("Alice B.".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(same.name, "Alice B.");
}

#[tokio::test]
async fn test_failing_next_id_rejects_create_and_keeps_actor_alive() {
    let last = Contact {
        id: u32::MAX,
        name: "Last".to_string(),
        email: "last@example.com".to_string(),
    };
    let storage = InMemoryStorage::with_items(vec![last.clone()]);
    let (actor, client) = CollectionActor::new(10, storage.clone());
    tokio::spawn(actor.run());

    let result = client.create(contact("Alice", "alice@example.com")).await;
    assert_eq!(
        result.unwrap_err().downcast_entity::<ContactError>().unwrap(),
        ContactError::IdsExhausted
    );
    assert_eq!(storage.save_count(), 0);

    assert_eq!(client.list().await.unwrap(), vec![last]);
}

#[tokio::test]
async fn test_delete_removes_every_record_with_the_id() {
    let twin = |email: &str| Contact {
        id: 1,
        name: "Twin".to_string(),
        email: email.to_string(),
    };
    let other = Contact {
        id: 2,
        name: "Other".to_string(),
        email: "other@example.com".to_string(),
    };
    let storage = InMemoryStorage::with_items(vec![
        twin("a@example.com"),
        other.clone(),
        twin("b@example.com"),
    ]);
    let (actor, client) = CollectionActor::new(10, storage.clone());
    tokio::spawn(actor.run());

    client.delete(1).await.unwrap();
    assert_eq!(storage.snapshot(), vec![other]);
}

#[tokio::test]
async fn test_storage_failure_is_reported() {
    let storage = InMemoryStorage::<Contact>::new();
    let (actor, client) = CollectionActor::new(10, storage.clone());
    tokio::spawn(actor.run());

    storage.set_fail_writes(true);
    let result = client.create(contact("Alice", "alice@example.com")).await;
    assert!(matches!(result, Err(FrameworkError::Storage(_))));
    assert!(storage.snapshot().is_empty());

    storage.set_fail_writes(false);
    let created = client.create(contact("Alice", "alice@example.com")).await.unwrap();
    assert_eq!(created.id, 1);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let storage = InMemoryStorage::<Contact>::new();
    let (actor, client) = CollectionActor::new(4, storage.clone());
    tokio::spawn(actor.run());

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .create(contact(&format!("user{i}"), &format!("user{i}@example.com")))
                .await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();

    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    assert_eq!(storage.snapshot().len(), 20);
}

#[tokio::test]
async fn test_closed_actor_is_reported() {
    let (actor, client) = CollectionActor::new(10, InMemoryStorage::<Contact>::new());
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}

#[tokio::test]
async fn test_json_file_backed_actor() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("contacts.json");

    let (actor, client) = CollectionActor::<Contact, _>::new(10, JsonFileStorage::new(&path));
    let handle = tokio::spawn(actor.run());

    assert!(client.list().await.unwrap().is_empty());
    assert!(!path.exists());

    client.create(contact("Alice", "alice@example.com")).await.unwrap();
    drop(client);
    handle.await.unwrap();

    // A fresh actor over the same file sees the persisted record
    let (actor, client) = CollectionActor::<Contact, _>::new(10, JsonFileStorage::new(&path));
    tokio::spawn(actor.run());

    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].email, "alice@example.com");
}
