//! MCP tool handler tests
mod common;

use common::{extract_id_from_response, get_test_handler, tasks_path};
use todo_mcp::{Priority, SortMode, TodoServerHandler};

#[tokio::test]
async fn test_add_and_list() {
    let (handler, _dir) = get_test_handler();

    let response = handler
        .handle_add("Buy milk".to_string(), None)
        .await
        .unwrap();
    assert!(response.starts_with("Task created with ID: "));
    assert!(response.contains("(priority: low)"));

    let list = handler.handle_list(None, None, None, None).await.unwrap();
    assert!(list.contains("Buy milk"));
    assert!(list.contains(&extract_id_from_response(&response)));
}

#[tokio::test]
async fn test_add_empty_text_is_not_an_error() {
    let (handler, _dir) = get_test_handler();

    let response = handler.handle_add("   ".to_string(), None).await.unwrap();
    assert_eq!(response, "Nothing added: task text is empty");
    assert!(handler.tasks().is_empty());
}

#[tokio::test]
async fn test_add_invalid_priority_is_rejected() {
    let (handler, _dir) = get_test_handler();

    let result = handler
        .handle_add("Buy milk".to_string(), Some("urgent".to_string()))
        .await;
    assert!(result.is_err());
    assert!(handler.tasks().is_empty());
}

#[tokio::test]
async fn test_complete_and_reopen() {
    let (handler, _dir) = get_test_handler();
    let response = handler
        .handle_add("Call dentist".to_string(), Some("high".to_string()))
        .await
        .unwrap();
    let id = extract_id_from_response(&response);

    let done = handler.handle_complete(id.clone(), None).await.unwrap();
    assert_eq!(done, format!("Task {} marked as completed", id));
    assert!(handler.tasks()[0].completed);

    let reopened = handler
        .handle_complete(format!(" {} ", id), Some(false))
        .await
        .unwrap();
    assert_eq!(reopened, format!("Task {} marked as not completed", id));
    assert!(!handler.tasks()[0].completed);
}

#[tokio::test]
async fn test_unknown_id_is_reported_not_failed() {
    let (handler, _dir) = get_test_handler();

    let complete = handler
        .handle_complete("missing".to_string(), None)
        .await
        .unwrap();
    let priority = handler
        .handle_set_priority("missing".to_string(), "high".to_string())
        .await
        .unwrap();
    let remove = handler.handle_remove("missing".to_string()).await.unwrap();

    for response in [complete, priority, remove] {
        assert_eq!(response, "No task with ID 'missing'");
    }
}

#[tokio::test]
async fn test_set_priority() {
    let (handler, _dir) = get_test_handler();
    let id = extract_id_from_response(
        &handler
            .handle_add("Buy milk".to_string(), None)
            .await
            .unwrap(),
    );

    let response = handler
        .handle_set_priority(id.clone(), "Medium".to_string())
        .await
        .unwrap();
    assert_eq!(response, format!("Task {} priority set to medium", id));
    assert_eq!(handler.tasks()[0].priority, Priority::Medium);

    assert!(
        handler
            .handle_set_priority(id, "someday".to_string())
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_remove_and_clear_completed() {
    let (handler, _dir) = get_test_handler();
    let mut ids = Vec::new();
    for text in ["one", "two", "three", "four"] {
        let response = handler.handle_add(text.to_string(), None).await.unwrap();
        ids.push(extract_id_from_response(&response));
    }

    handler.handle_remove(ids[0].clone()).await.unwrap();
    handler.handle_complete(ids[1].clone(), None).await.unwrap();
    handler.handle_complete(ids[2].clone(), None).await.unwrap();

    let response = handler.handle_clear_completed().await.unwrap();
    assert_eq!(response, "Cleared 2 completed task(s)");

    let remaining = handler.tasks();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].text, "four");
}

#[tokio::test]
async fn test_list_sort_becomes_current_mode() {
    let (handler, _dir) = get_test_handler();
    handler
        .handle_add("banana".to_string(), Some("high".to_string()))
        .await
        .unwrap();
    handler
        .handle_add("Apple".to_string(), Some("low".to_string()))
        .await
        .unwrap();

    let by_priority = handler.handle_list(None, None, None, Some(true)).await.unwrap();
    assert_eq!(by_priority, "[ ] banana\n[ ] Apple");

    let alphabetical = handler
        .handle_list(Some("alphabetical".to_string()), None, None, Some(true))
        .await
        .unwrap();
    assert_eq!(alphabetical, "[ ] Apple\n[ ] banana");
    assert_eq!(handler.current_sort(), SortMode::Alphabetical);

    // The mode sticks for later listings
    let again = handler.handle_list(None, None, None, Some(true)).await.unwrap();
    assert_eq!(again, alphabetical);
}

#[tokio::test]
async fn test_set_sort() {
    let (handler, _dir) = get_test_handler();

    let response = handler
        .handle_set_sort("creation date".to_string())
        .await
        .unwrap();
    assert_eq!(response, "Tasks are now sorted by creation_date");
    assert_eq!(handler.current_sort(), SortMode::CreationDate);

    assert!(handler.handle_set_sort("random".to_string()).await.is_err());
    assert_eq!(handler.current_sort(), SortMode::CreationDate);
}

#[tokio::test]
async fn test_list_filters() {
    let (handler, _dir) = get_test_handler();
    let milk = extract_id_from_response(
        &handler
            .handle_add("Buy milk".to_string(), None)
            .await
            .unwrap(),
    );
    handler
        .handle_add("Buy bread".to_string(), None)
        .await
        .unwrap();
    handler
        .handle_add("Walk dog".to_string(), None)
        .await
        .unwrap();
    handler.handle_complete(milk, None).await.unwrap();

    let pending = handler
        .handle_list(None, Some(true), None, Some(true))
        .await
        .unwrap();
    assert!(!pending.contains("Buy milk"));
    assert!(pending.contains("Buy bread"));
    assert!(pending.contains("Walk dog"));

    let buys = handler
        .handle_list(None, None, Some("buy".to_string()), Some(true))
        .await
        .unwrap();
    assert_eq!(buys, "[ ] Buy bread\n[x] Buy milk");

    let nothing = handler
        .handle_list(None, None, Some("xyz".to_string()), None)
        .await
        .unwrap();
    assert_eq!(nothing, "No tasks found");
}

#[tokio::test]
async fn test_list_empty_store() {
    let (handler, _dir) = get_test_handler();
    let list = handler.handle_list(None, None, None, None).await.unwrap();
    assert!(list.starts_with("No tasks yet"));
}

#[tokio::test]
async fn test_list_invalid_sort_is_rejected() {
    let (handler, _dir) = get_test_handler();
    let result = handler
        .handle_list(Some("shuffle".to_string()), None, None, None)
        .await;
    assert!(result.is_err());
    assert_eq!(handler.current_sort(), SortMode::Priority);
}

// A new handler on the same file sees earlier changes
#[tokio::test]
async fn test_handler_reloads_from_file() {
    let (handler, dir) = get_test_handler();
    handler
        .handle_add("Persist me".to_string(), Some("medium".to_string()))
        .await
        .unwrap();
    drop(handler);

    let reopened = TodoServerHandler::new(tasks_path(&dir), false);
    let tasks = reopened.tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "Persist me");
    assert_eq!(tasks[0].priority, Priority::Medium);
}

// A save failure surfaces as a tool error
#[tokio::test]
async fn test_save_failure_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    // The tasks path is a directory, so writes fail
    let handler = TodoServerHandler::new(dir.path(), false);

    let result = handler.handle_add("Buy milk".to_string(), None).await;
    assert!(result.is_err());
}
