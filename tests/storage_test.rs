use uuid::Uuid;

use repscount::storage::{ExerciseStore, LocalStorage, StoreError};

#[tokio::test]
async fn test_storage_creation_seeds_catalog() {
    let storage = LocalStorage::new_in_memory().await.unwrap();

    let templates = storage.all_templates().await.unwrap();
    assert!(!templates.is_empty(), "fresh store should seed default templates");
    assert!(templates.iter().any(|t| t.name == "Push-ups"));
}

#[tokio::test]
async fn test_insert_and_list_exercises() {
    let storage = LocalStorage::new_in_memory().await.unwrap();

    assert!(storage.all_exercises().await.unwrap().is_empty());

    storage
        .insert_exercise("Push-ups", "Core", Some("2024-01-01T08:00:00+00:00".to_string()))
        .await
        .unwrap();
    storage.insert_exercise("Squats", "Legs", None).await.unwrap();

    let exercises = storage.all_exercises().await.unwrap();
    assert_eq!(exercises.len(), 2);
    // Insertion order is preserved through order_index
    assert_eq!(exercises[0].name, "Push-ups");
    assert_eq!(exercises[1].name, "Squats");
    assert_eq!(exercises[1].timestamp, None);
}

#[tokio::test]
async fn test_delete_exercise_by_identity() {
    let storage = LocalStorage::new_in_memory().await.unwrap();

    let kept = storage.insert_exercise("Push-ups", "Core", None).await.unwrap();
    let doomed = storage.insert_exercise("Squats", "Legs", None).await.unwrap();

    let doomed_uuid = Uuid::parse_str(&doomed.uuid).unwrap();
    storage.delete_exercise(&doomed_uuid).await.unwrap();

    let remaining = storage.all_exercises().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].uuid, kept.uuid);
}

#[tokio::test]
async fn test_delete_missing_exercise_is_not_found() {
    let storage = LocalStorage::new_in_memory().await.unwrap();

    let result = storage.delete_exercise(&Uuid::new_v4()).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_template_crud() {
    let storage = LocalStorage::new_in_memory().await.unwrap();

    let before = storage.all_templates().await.unwrap().len();
    let created = storage.insert_template("Mountain climbers", "Cardio").await.unwrap();
    assert_eq!(storage.all_templates().await.unwrap().len(), before + 1);

    let created_uuid = Uuid::parse_str(&created.uuid).unwrap();
    storage.delete_template(&created_uuid).await.unwrap();
    assert_eq!(storage.all_templates().await.unwrap().len(), before);

    let result = storage.delete_template(&created_uuid).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_timestamps_roundtrip_verbatim() {
    let storage = LocalStorage::new_in_memory().await.unwrap();

    let stamp = "2024-06-01T07:30:00+02:00".to_string();
    storage
        .insert_exercise("Plank", "Core", Some(stamp.clone()))
        .await
        .unwrap();

    let exercises = storage.all_exercises().await.unwrap();
    assert_eq!(exercises[0].timestamp.as_deref(), Some(stamp.as_str()));
}
