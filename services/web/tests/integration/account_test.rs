use cafehop_domain::role::CustomerRole;
use cafehop_web::error::WebServiceError;
use cafehop_web::usecase::account::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, hash_password,
};

use crate::helpers::{MockCustomerRepo, test_customer};

fn register_input(email: &str) -> RegisterInput {
    RegisterInput {
        name: "Alice".to_owned(),
        email: email.to_owned(),
        password: "correct horse".to_owned(),
        address: "1 Rue de Rivoli, Paris".to_owned(),
    }
}

// ── RegisterUseCase ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_first_customer_as_admin() {
    let repo = MockCustomerRepo::empty();
    let customers = repo.customers_handle();
    let usecase = RegisterUseCase { repo };

    let first = usecase
        .execute(register_input("alice@example.com"))
        .await
        .unwrap();
    let second = usecase
        .execute(register_input("bob@example.com"))
        .await
        .unwrap();

    assert_eq!(first.role, CustomerRole::Admin);
    assert_eq!(second.role, CustomerRole::Customer);
    assert_eq!(customers.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn should_store_password_as_argon2_hash() {
    let repo = MockCustomerRepo::empty();
    let customers = repo.customers_handle();
    let usecase = RegisterUseCase { repo };

    usecase
        .execute(register_input("alice@example.com"))
        .await
        .unwrap();

    let stored = customers.lock().unwrap()[0].password_hash.clone();
    assert!(stored.starts_with("$argon2"));
    assert!(!stored.contains("correct horse"));
}

#[tokio::test]
async fn should_reject_duplicate_email_and_leave_customers_unchanged() {
    let repo = MockCustomerRepo::new(vec![test_customer(1, "alice@example.com")]);
    let customers = repo.customers_handle();
    let usecase = RegisterUseCase { repo };

    let result = usecase.execute(register_input("alice@example.com")).await;

    assert!(
        matches!(result, Err(WebServiceError::EmailAlreadyRegistered)),
        "expected EmailAlreadyRegistered, got {result:?}"
    );
    assert_eq!(customers.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_grant_admin_once_when_first_registrations_race() {
    let repo = MockCustomerRepo::interleaved(2);
    let customers = repo.customers_handle();
    let a = RegisterUseCase { repo: repo.clone() };
    let b = RegisterUseCase { repo };

    let (first, second) = tokio::join!(
        a.execute(register_input("alice@example.com")),
        b.execute(register_input("bob@example.com")),
    );
    first.unwrap();
    second.unwrap();

    let customers = customers.lock().unwrap();
    assert_eq!(customers.len(), 2);
    let admins = customers
        .iter()
        .filter(|c| c.role == CustomerRole::Admin)
        .count();
    assert_eq!(admins, 1);
}

// ── LoginUseCase ─────────────────────────────────────────────────────────────

fn registered_customer() -> MockCustomerRepo {
    let mut customer = test_customer(1, "alice@example.com");
    customer.password_hash = hash_password("correct horse").unwrap();
    MockCustomerRepo::new(vec![customer])
}

#[tokio::test]
async fn should_login_with_correct_password() {
    let usecase = LoginUseCase {
        repo: registered_customer(),
    };
    let customer = usecase
        .execute(LoginInput {
            email: "alice@example.com".to_owned(),
            password: "correct horse".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(customer.id, 1);
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let usecase = LoginUseCase {
        repo: registered_customer(),
    };
    let result = usecase
        .execute(LoginInput {
            email: "alice@example.com".to_owned(),
            password: "battery staple".to_owned(),
        })
        .await;
    assert!(
        matches!(result, Err(WebServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unknown_email() {
    let repo = registered_customer();
    let customers = repo.customers_handle();
    let usecase = LoginUseCase { repo };

    let result = usecase
        .execute(LoginInput {
            email: "mallory@example.com".to_owned(),
            password: "correct horse".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(WebServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
    assert_eq!(customers.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_not_accept_trimmed_password() {
    let repo = MockCustomerRepo::empty();
    let register = RegisterUseCase { repo: repo.clone() };
    register
        .execute(RegisterInput {
            password: "  secret  ".to_owned(),
            ..register_input("alice@example.com")
        })
        .await
        .unwrap();

    let login = LoginUseCase { repo };
    let trimmed = login
        .execute(LoginInput {
            email: "alice@example.com".to_owned(),
            password: "secret".to_owned(),
        })
        .await;
    assert!(
        matches!(trimmed, Err(WebServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {trimmed:?}"
    );

    let exact = login
        .execute(LoginInput {
            email: "alice@example.com".to_owned(),
            password: "  secret  ".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(exact.id, 1);
}
