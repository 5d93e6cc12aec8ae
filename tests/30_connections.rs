mod common;

use std::sync::Arc;

use anyhow::Result;
use common::{ScriptedIds, TestContext};
use sync_operations::config::{DanglingReferencePolicy, OperationsConfig};
use sync_operations::database::RecordKind;
use sync_operations::{
    ConfigRepository, Connection, ConnectionIdRequestBody, MemoryRepository, OperationError,
    OperationIdRequestBody, OperationsService,
};
use uuid::Uuid;

async fn attach(ctx: &TestContext, operation_ids: Vec<Uuid>) -> Result<Uuid> {
    let connection_id = Uuid::new_v4();
    ctx.repository
        .write_connection(&Connection::new(connection_id, "postgres to warehouse", operation_ids))
        .await?;
    Ok(connection_id)
}

#[tokio::test]
async fn lists_operations_in_connection_order() -> Result<()> {
    let ctx = TestContext::with_capacity(3);
    let first = ctx.service.create_operation(common::normalization_create("first")).await?;
    let second = ctx.service.create_operation(common::dbt_create("second")).await?;
    let third = ctx.service.create_operation(common::normalization_create("third")).await?;

    let order = vec![third.operation_id, first.operation_id, second.operation_id];
    let connection_id = attach(&ctx, order.clone()).await?;

    let list = ctx
        .service
        .list_operations_for_connection(ConnectionIdRequestBody { connection_id })
        .await?;

    let listed: Vec<Uuid> = list.operations.iter().map(|op| op.operation_id).collect();
    assert_eq!(listed, order);
    assert_eq!(list.operations[1], first);
    Ok(())
}

#[tokio::test]
async fn empty_connection_lists_nothing() -> Result<()> {
    let ctx = TestContext::with_capacity(0);
    let connection_id = attach(&ctx, vec![]).await?;

    let list = ctx
        .service
        .list_operations_for_connection(ConnectionIdRequestBody { connection_id })
        .await?;

    assert!(list.operations.is_empty());
    Ok(())
}

#[tokio::test]
async fn unknown_connection_is_not_found() -> Result<()> {
    let ctx = TestContext::with_capacity(0);
    let connection_id = Uuid::new_v4();

    let result = ctx
        .service
        .list_operations_for_connection(ConnectionIdRequestBody { connection_id })
        .await;

    assert!(matches!(
        result,
        Err(OperationError::NotFound { kind: RecordKind::Connection, id }) if id == connection_id
    ));
    Ok(())
}

#[tokio::test]
async fn dangling_reference_fails_by_default() -> Result<()> {
    let ctx = TestContext::with_capacity(1);
    let live = ctx.service.create_operation(common::normalization_create("live")).await?;
    let dangling = Uuid::new_v4();
    let connection_id = attach(&ctx, vec![live.operation_id, dangling]).await?;

    let result = ctx
        .service
        .list_operations_for_connection(ConnectionIdRequestBody { connection_id })
        .await;

    assert!(matches!(
        result,
        Err(OperationError::NotFound { kind: RecordKind::Operation, id }) if id == dangling
    ));
    Ok(())
}

#[tokio::test]
async fn dangling_reference_can_be_skipped() -> Result<()> {
    let repository = Arc::new(MemoryRepository::new());
    let live_id = Uuid::new_v4();
    let service = OperationsService::with_config(
        repository.clone(),
        Arc::new(ScriptedIds::new([live_id])),
        OperationsConfig {
            dangling_references: DanglingReferencePolicy::Skip,
            include_tombstoned: false,
        },
    )?;
    service.create_operation(common::dbt_create("live")).await?;

    let connection_id = Uuid::new_v4();
    repository
        .write_connection(&Connection::new(connection_id, "c", vec![Uuid::new_v4(), live_id]))
        .await?;

    let list = service
        .list_operations_for_connection(ConnectionIdRequestBody { connection_id })
        .await?;

    assert_eq!(list.operations.len(), 1);
    assert_eq!(list.operations[0].operation_id, live_id);
    Ok(())
}

#[tokio::test]
async fn tombstoned_operations_are_left_out() -> Result<()> {
    let ctx = TestContext::with_capacity(2);
    let kept = ctx.service.create_operation(common::normalization_create("kept")).await?;
    let deleted = ctx.service.create_operation(common::dbt_create("deleted")).await?;
    ctx.service
        .delete_operation(OperationIdRequestBody {
            operation_id: deleted.operation_id,
        })
        .await?;
    let connection_id = attach(&ctx, vec![deleted.operation_id, kept.operation_id]).await?;

    let list = ctx
        .service
        .list_operations_for_connection(ConnectionIdRequestBody { connection_id })
        .await?;

    assert_eq!(list.operations, vec![kept]);
    Ok(())
}

#[tokio::test]
async fn tombstoned_operations_can_be_included() -> Result<()> {
    let repository = Arc::new(MemoryRepository::new());
    let id = Uuid::new_v4();
    let service = OperationsService::with_config(
        repository.clone(),
        Arc::new(ScriptedIds::new([id])),
        OperationsConfig {
            dangling_references: DanglingReferencePolicy::Fail,
            include_tombstoned: true,
        },
    )?;
    service.create_operation(common::dbt_create("deleted")).await?;
    service
        .delete_operation(OperationIdRequestBody { operation_id: id })
        .await?;

    let connection_id = Uuid::new_v4();
    repository
        .write_connection(&Connection::new(connection_id, "c", vec![id]))
        .await?;

    let list = service
        .list_operations_for_connection(ConnectionIdRequestBody { connection_id })
        .await?;

    assert_eq!(list.operations.len(), 1);
    Ok(())
}

#[tokio::test]
async fn detaching_tombstones_only_unshared_operations() -> Result<()> {
    let ctx = TestContext::with_capacity(3);
    let own = ctx.service.create_operation(common::normalization_create("own")).await?;
    let shared = ctx.service.create_operation(common::dbt_create("shared")).await?;
    let kept = ctx.service.create_operation(common::dbt_create("kept")).await?;

    let connection_id = attach(
        &ctx,
        vec![own.operation_id, shared.operation_id, kept.operation_id],
    )
    .await?;
    let other_id = attach(&ctx, vec![shared.operation_id]).await?;

    ctx.service
        .delete_operations_for_connection(connection_id, &[own.operation_id, shared.operation_id])
        .await?;

    let connection = ctx.repository.get_connection(connection_id).await?;
    assert_eq!(connection.operation_ids, vec![kept.operation_id]);

    assert!(ctx.repository.get_sync_operation(own.operation_id).await?.tombstone);
    assert!(!ctx.repository.get_sync_operation(shared.operation_id).await?.tombstone);
    assert!(!ctx.repository.get_sync_operation(kept.operation_id).await?.tombstone);

    let other = ctx.repository.get_connection(other_id).await?;
    assert_eq!(other.operation_ids, vec![shared.operation_id]);
    Ok(())
}

#[tokio::test]
async fn detaching_an_unknown_id_changes_nothing() -> Result<()> {
    let ctx = TestContext::with_capacity(1);
    let own = ctx.service.create_operation(common::normalization_create("own")).await?;
    let missing = Uuid::new_v4();
    let connection_id = attach(&ctx, vec![own.operation_id, missing]).await?;

    let result = ctx
        .service
        .delete_operations_for_connection(connection_id, &[own.operation_id, missing])
        .await;

    assert!(matches!(
        result,
        Err(OperationError::NotFound { kind: RecordKind::Operation, id }) if id == missing
    ));
    assert!(!ctx.repository.get_sync_operation(own.operation_id).await?.tombstone);
    let connection = ctx.repository.get_connection(connection_id).await?;
    assert_eq!(connection.operation_ids, vec![own.operation_id, missing]);
    Ok(())
}
