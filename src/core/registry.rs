//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 이 모듈은 백엔드 서비스를 위한 싱글톤 기반 의존성 주입 시스템의 핵심을 담당합니다.
//! 전역 컨테이너에 컴포넌트를 명시적으로 등록하고, 애플리케이션 어디서든
//! 타입 기반으로 동일한 인스턴스를 꺼내 쓸 수 있게 합니다.
//!
//! ## 주요 구성 요소
//!
//! ### ServiceLocator
//! - **전역 싱글톤 컨테이너**: 모든 서비스/리포지토리 인스턴스 관리
//! - **명시적 등록**: 프로세스 진입점에서 `set()`으로 인프라 컴포넌트 등록
//! - **Thread-safe**: `RwLock`을 사용한 동시성 안전성 보장
//!
//! ### initialize_all
//! - **초기화 순서 보장**: Repository 먼저, Service 나중
//! - **init 훅**: 각 컴포넌트의 `init()`에서 인덱스 생성 등 초기화 수행
//!
//! ## 동작 흐름
//!
//! ```text
//! 1. 인프라 등록 (main.rs)
//!    ├─ Database 연결 생성
//!    └─ ServiceLocator::set(database)
//!
//! 2. 컴포넌트 일괄 초기화 (initialize_all)
//!    ├─ Repository 인스턴스 생성 + init() (인덱스 생성)
//!    ├─ Service 인스턴스 생성 + init()
//!    └─ 전역 컨테이너에 등록
//!
//! 3. 요청 처리 (handlers)
//!    └─ RecipeService::instance() → 등록된 동일 인스턴스 반환
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//! use crate::db::Database;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let database = Arc::new(Database::new().await.expect("DB 연결 실패"));
//!     ServiceLocator::set(database);
//!     ServiceLocator::initialize_all().await.expect("서비스 초기화 실패");
//!     // HTTP 서버 시작...
//!     Ok(())
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::db::Database;
use crate::repositories::recipes::recipe_repo::RecipeRepository;
use crate::repositories::shopping::shopping_list_repo::ShoppingListRepository;
use crate::repositories::users::user_repo::UserRepository;
use crate::services::auth::token_service::TokenService;
use crate::services::recipes::recipe_service::RecipeService;
use crate::services::shopping::shopping_list_service::ShoppingListService;
use crate::services::users::user_service::UserService;
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// 서비스의 기본 메타데이터와 생명주기 관리를 담당합니다.
/// `initialize_all()`이 각 서비스의 `init()`을 호출합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 서비스 초기화 로직을 수행합니다.
    ///
    /// 이 메서드는 서비스가 생성된 직후 호출되며,
    /// 필요한 초기 설정이나 리소스 준비 작업을 수행할 수 있습니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// 데이터 저장소와의 상호작용과 관련된 메타데이터를 관리합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 고유 이름을 반환합니다.
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션의 이름을 반환합니다.
    fn collection_name(&self) -> &str;

    /// 리포지토리 초기화 로직을 수행합니다.
    ///
    /// 데이터베이스 인덱스 생성, 연결 상태 확인 등
    /// 데이터 액세스와 관련된 초기화 작업을 수행합니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 싱글톤 의존성 주입 컨테이너
///
/// 전체 DI 시스템의 핵심으로, 타입별로 정확히 하나의 인스턴스를 보관합니다.
///
/// # 주요 기능
///
/// - **싱글톤 보장**: 각 타입당 정확히 하나의 인스턴스만 보관
/// - **명시적 등록**: `set()`으로 등록된 인스턴스만 조회 가능
/// - **Thread-safe**: `RwLock`을 사용한 동시성 안전성
pub struct ServiceLocator {
    /// 등록된 인스턴스들의 저장소
    /// `TypeId`를 키로 사용하여 각 타입당 하나의 인스턴스를 저장
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    /// 새로운 ServiceLocator 인스턴스를 생성합니다.
    /// 전역 Lazy static에서만 호출됩니다.
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// # Panics
    ///
    /// 해당 타입이 등록되지 않은 경우 패닉이 발생합니다.
    /// 모든 컴포넌트는 `initialize_all()`이 완료된 후에만 조회해야 합니다.
    ///
    /// # 사용 예제
    ///
    /// ```rust,ignore
    /// let recipe_service = ServiceLocator::get::<RecipeService>();
    /// let user_repo = ServiceLocator::get::<UserRepository>();
    /// ```
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        Self::try_get::<T>().unwrap_or_else(|| {
            panic!(
                "Component not found: {}. Make sure it is registered with ServiceLocator::set() or created by initialize_all()",
                std::any::type_name::<T>()
            )
        })
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다. (등록되지 않은 경우 None)
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap();
        instances
            .get(&TypeId::of::<T>())
            .map(|instance| {
                instance
                    .clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator")
            })
    }

    /// 타입 이름에서 실제 타입 이름을 추출합니다.
    ///
    /// Rust의 `std::any::type_name::<T>()`는 전체 모듈 경로를 포함하므로
    /// (예: `recipe_service_backend::services::RecipeService`),
    /// 실제 타입 이름만 추출하여 로그 출력에 사용합니다.
    fn extract_clean_type_name(type_name: &str) -> String {
        if let Some(pos) = type_name.rfind("::") {
            type_name[pos + 2..].to_string()
        } else {
            type_name.to_string()
        }
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// 인프라 컴포넌트(Database 등)를 프로세스 진입점에서 수동으로 등록할 때,
    /// 그리고 `initialize_all()`이 생성한 컴포넌트를 보관할 때 사용됩니다.
    ///
    /// # 등록 시나리오
    ///
    /// ```rust,ignore
    /// // 데이터베이스 연결
    /// let db = Arc::new(Database::new().await?);
    /// ServiceLocator::set(db);
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();
        let clean_name = Self::extract_clean_type_name(type_name);

        println!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 모든 리포지토리와 서비스를 생성하고 초기화합니다.
    ///
    /// 이 메서드는 애플리케이션 시작 시 호출되어 모든 컴포넌트의
    /// 인스턴스를 의존성 순서대로 생성하고 전역 컨테이너에 등록합니다.
    ///
    /// # 초기화 순서
    ///
    /// 1. **Repository 먼저**: 데이터 계층이 비즈니스 계층보다 먼저 초기화
    ///    (각 리포지토리의 `init()`에서 인덱스 생성)
    /// 2. **Service 나중에**: 리포지토리 의존성이 해결된 후 서비스 초기화
    ///
    /// # Errors
    ///
    /// - `Database`가 사전에 등록되지 않은 경우
    /// - 컴포넌트의 `init()`이 실패한 경우 (예: 인덱스 생성 실패)
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let database = Self::try_get::<Database>()
            .ok_or("Database must be registered before initialize_all()")?;

        // 1단계: 리포지토리 생성 및 초기화
        print_step_start(1, "Creating Repository instances");

        let user_repo = Arc::new(UserRepository::new(database.clone()));
        let recipe_repo = Arc::new(RecipeRepository::new(database.clone()));
        let shopping_list_repo = Arc::new(ShoppingListRepository::new(database.clone()));

        let repositories: Vec<Arc<dyn Repository>> = vec![
            user_repo.clone(),
            recipe_repo.clone(),
            shopping_list_repo.clone(),
        ];

        for repository in &repositories {
            print_sub_task(repository.name(), "Initializing...");
            repository.init().await?;
            print_sub_task(repository.name(), "✓ Ready");
        }

        Self::set(user_repo.clone());
        Self::set(recipe_repo.clone());
        Self::set(shopping_list_repo.clone());

        print_step_complete(1, "Repository instances created", repositories.len());

        // 2단계: 서비스 생성 및 초기화
        print_step_start(2, "Creating Service instances");

        let token_service = Arc::new(TokenService::new());
        let user_service = Arc::new(UserService::new(user_repo.clone(), recipe_repo.clone()));
        let recipe_service = Arc::new(RecipeService::new(recipe_repo.clone(), user_repo.clone()));
        let shopping_list_service =
            Arc::new(ShoppingListService::new(shopping_list_repo.clone()));

        let services: Vec<Arc<dyn Service>> = vec![
            token_service.clone(),
            user_service.clone(),
            recipe_service.clone(),
            shopping_list_service.clone(),
        ];

        for service in &services {
            print_sub_task(service.name(), "Initializing...");
            service.init().await?;
            print_sub_task(service.name(), "✓ Ready");
        }

        Self::set(token_service);
        Self::set(user_service);
        Self::set(recipe_service);
        Self::set(shopping_list_service);

        print_step_complete(2, "Service instances created", services.len());

        print_final_summary(repositories.len(), services.len());

        Ok(())
    }
}

/// 전역 서비스 로케이터 인스턴스
///
/// 애플리케이션 전체에서 사용되는 유일한 ServiceLocator 인스턴스입니다.
/// `Lazy<T>`를 사용하여 첫 접근 시에만 초기화되며, 이후에는 동일한
/// 인스턴스가 재사용됩니다.
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("crate::services::RecipeService"),
            "RecipeService"
        );
        assert_eq!(
            ServiceLocator::extract_clean_type_name("Database"),
            "Database"
        );
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        struct Marker(u32);

        ServiceLocator::set(Arc::new(Marker(7)));
        let restored = ServiceLocator::get::<Marker>();

        assert_eq!(restored.0, 7);
    }

    #[test]
    fn test_try_get_unregistered_returns_none() {
        struct NeverRegistered;

        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());
    }
}
