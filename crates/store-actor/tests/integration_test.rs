use store_actor::{FrameworkError, ResourceActor, ResourceClient, StoreClient, StoreEntity};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Book {
    id: Option<u64>,
    title: String,
}

impl StoreEntity for Book {
    type Id = u64;

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn with_id(self, id: u64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum BookError {
    #[error("book not found: {0}")]
    NotFound(String),
    #[error("book store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Clone)]
struct BookClient {
    inner: ResourceClient<Book>,
}

#[async_trait]
impl StoreClient<Book> for BookClient {
    type Error = BookError;

    fn inner(&self) -> &ResourceClient<Book> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => BookError::NotFound(id),
            other => BookError::Unavailable(other.to_string()),
        }
    }
}

fn book(title: &str) -> Book {
    Book {
        id: None,
        title: title.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    let handle = tokio::spawn(actor.run());
    let books = BookClient { inner: client };

    // 1. Save
    let dune = books.save(book("Dune")).await.unwrap();
    let emma = books.save(book("Emma")).await.unwrap();
    assert_eq!(dune.id, Some(1));
    assert_eq!(emma.id, Some(2));

    // 2. Find all, ascending by id
    let all = books.find_all().await.unwrap();
    assert_eq!(all, vec![dune.clone(), emma.clone()]);

    // 3. Replace
    let renamed = books
        .save(Book {
            title: "Dune Messiah".into(),
            ..dune
        })
        .await
        .unwrap();
    assert_eq!(renamed.id, Some(1));
    assert_eq!(
        books.find_by_id(1).await.unwrap().unwrap().title,
        "Dune Messiah"
    );

    // 4. Delete
    books.delete_by_id(1).await.unwrap();
    assert!(books.find_by_id(1).await.unwrap().is_none());
    assert_eq!(
        books.delete_by_id(1).await,
        Err(BookError::NotFound("1".into()))
    );

    // 5. Shutdown once the last client is gone
    drop(books);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_closed_store_reports_unavailable() {
    let (actor, client) = ResourceActor::<Book>::new(10);
    drop(actor);
    let books = BookClient { inner: client };

    let result = books.find_all().await;
    assert!(matches!(result, Err(BookError::Unavailable(_))));
}

#[tokio::test]
async fn test_concurrent_saves_get_distinct_ids() {
    let (actor, client) = ResourceActor::<Book>::new(4);
    tokio::spawn(actor.run());

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.save(book(&format!("Volume {i}"))).await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
}
