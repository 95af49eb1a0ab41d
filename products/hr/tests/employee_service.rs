use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use entity::employees;
use migration::{Migrator, MigratorTrait};
use platform_db::{
    DatabaseSettings, DbError, DbResult, EmployeeRepository, SeaOrmEmployeeRepository,
    connect_url,
};
use products_hr::{EmployeeDto, EmployeeService, HrError};
use sea_orm::DbErr;

async fn setup() -> (EmployeeService, Arc<SeaOrmEmployeeRepository>) {
    let pool = connect_url("sqlite::memory:", &DatabaseSettings::default())
        .await
        .unwrap();
    Migrator::up(&pool, None).await.unwrap();
    let repo = Arc::new(SeaOrmEmployeeRepository::new(pool));
    (EmployeeService::new(repo.clone()), repo)
}

fn employee(name: &str, joined: &str, active: bool) -> EmployeeDto {
    EmployeeDto {
        id: None,
        name: name.into(),
        date_of_joining: joined.parse::<NaiveDate>().unwrap(),
        is_active: active,
    }
}

#[tokio::test]
async fn create_returns_generated_id_and_same_fields() {
    let (service, _) = setup().await;
    let input = employee("Alice", "2024-01-10", true);

    let created = service.create_employee(input.clone()).await.unwrap();

    assert!(created.id.is_some());
    assert_eq!(created.name, "Alice");
    assert_eq!(created.date_of_joining, input.date_of_joining);
    assert!(created.is_active);
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let (service, _) = setup().await;
    let mut input = employee("Mallory", "2022-07-04", false);
    input.id = Some(9_999);

    let created = service.create_employee(input).await.unwrap();
    let id = created.id.unwrap();

    assert_ne!(id, 9_999);
    assert_eq!(service.get_employee_by_id(id).await.unwrap(), created);
    assert!(matches!(
        service.get_employee_by_id(9_999).await,
        Err(HrError::NotFound(9_999))
    ));
}

#[tokio::test]
async fn get_missing_employee_is_not_found() {
    let (service, _) = setup().await;
    let err = service.get_employee_by_id(12).await.unwrap_err();
    assert!(matches!(err, HrError::NotFound(12)));
    assert_eq!(err.to_string(), "employee 12 not found");
}

#[tokio::test]
async fn delete_reports_presence() {
    let (service, repo) = setup().await;
    let created = service
        .create_employee(employee("Bob", "2023-06-01", true))
        .await
        .unwrap();
    let id = created.id.unwrap();

    assert!(service.delete_employee_by_id(id).await.unwrap());
    assert!(!repo.exists_by_id(id).await.unwrap());
    assert!(!service.delete_employee_by_id(id).await.unwrap());
}

#[tokio::test]
async fn delete_of_unknown_id_leaves_storage_unchanged() {
    let (service, _) = setup().await;
    let kept = service
        .create_employee(employee("Carol", "2021-03-15", false))
        .await
        .unwrap();

    assert!(!service.delete_employee_by_id(kept.id.unwrap() + 100).await.unwrap());
    assert_eq!(service.get_all_employees().await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn list_returns_live_records_in_storage_order() {
    let (service, _) = setup().await;
    assert!(service.get_all_employees().await.unwrap().is_empty());

    let first = service
        .create_employee(employee("Alice", "2024-01-10", true))
        .await
        .unwrap();
    let second = service
        .create_employee(employee("Bob", "2023-06-01", false))
        .await
        .unwrap();
    assert_eq!(
        service.get_all_employees().await.unwrap(),
        vec![first.clone(), second.clone()]
    );

    let third = service
        .create_employee(employee("Dave", "2019-11-30", true))
        .await
        .unwrap();
    service
        .delete_employee_by_id(second.id.unwrap())
        .await
        .unwrap();
    assert_eq!(
        service.get_all_employees().await.unwrap(),
        vec![first, third]
    );
}

struct UnavailableRepository;

#[async_trait]
impl EmployeeRepository for UnavailableRepository {
    async fn find_by_id(&self, _id: i64) -> DbResult<Option<employees::Model>> {
        Err(unavailable())
    }

    async fn exists_by_id(&self, _id: i64) -> DbResult<bool> {
        Err(unavailable())
    }

    async fn save(&self, _record: employees::ActiveModel) -> DbResult<employees::Model> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: i64) -> DbResult<()> {
        Err(unavailable())
    }

    async fn find_all(&self) -> DbResult<Vec<employees::Model>> {
        Err(unavailable())
    }
}

fn unavailable() -> DbError {
    DbError::Query(DbErr::Conn(sea_orm::RuntimeErr::Internal(
        "connection refused".into(),
    )))
}

#[tokio::test]
async fn storage_faults_propagate_unmodified() {
    let service = EmployeeService::new(Arc::new(UnavailableRepository));

    assert!(matches!(
        service.get_employee_by_id(1).await,
        Err(HrError::Storage(DbError::Query(DbErr::Conn(_))))
    ));
    assert!(matches!(
        service.delete_employee_by_id(1).await,
        Err(HrError::Storage(_))
    ));
    assert!(matches!(
        service.get_all_employees().await,
        Err(HrError::Storage(_))
    ));
    assert!(matches!(
        service
            .create_employee(employee("Zed", "2024-02-29", true))
            .await,
        Err(HrError::Storage(_))
    ));
}
