//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use payroll_core::entities::{Employee, ACCOUNTANT_POSITION};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Seed an employee with the given ledger balance and register a user
/// account against its code
async fn register_user(
    server: &TestServer,
    position: &str,
    earnings: Decimal,
) -> (AuthResponse, Employee) {
    let employee = server
        .seed_employee(position, earnings)
        .await
        .expect("Failed to seed employee");

    let request = RegisterRequest::for_code(&employee.employee_code);
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .expect("Registration request failed");
    let auth = assert_json(response, StatusCode::CREATED)
        .await
        .expect("Registration should succeed");

    (auth, employee)
}

/// Register an accountant (any employee in the accountant position)
async fn register_accountant(server: &TestServer) -> AuthResponse {
    let (auth, _) = register_user(server, ACCOUNTANT_POSITION, dec!(0.00)).await;
    auth
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, employee) = register_user(&server, "Designer", dec!(0.00)).await;

    assert_eq!(auth.user.employee_id, Some(employee.id.to_string()));
    assert!(!auth.user.is_accountant);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_accountant_position_grants_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server, ACCOUNTANT_POSITION, dec!(0.00)).await;

    assert!(auth.user.is_accountant);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server, "Designer", dec!(0.00)).await;

    // A second employee, but the same username
    let other = server
        .seed_employee("Manager", dec!(0.00))
        .await
        .expect("Failed to seed employee");
    let mut request = RegisterRequest::for_code(&other.employee_code);
    request.username = auth.user.username.clone();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_invalid_employee_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::for_code("0000000000");

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_employee_already_linked() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, employee) = register_user(&server, "Designer", dec!(0.00)).await;

    // Someone else tries to claim the same employee record
    let request = RegisterRequest::for_code(&employee.employee_code);
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_password_mismatch() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let employee = server
        .seed_employee("Designer", dec!(0.00))
        .await
        .expect("Failed to seed employee");

    let mut request = RegisterRequest::for_code(&employee.employee_code);
    request.confirm_password = "SomethingElse1".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let employee = server
        .seed_employee("Designer", dec!(0.00))
        .await
        .expect("Failed to seed employee");

    let register_req = RegisterRequest::for_code(&employee.employee_code);
    server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        username: "nonexistent_user".to_string(),
        password: "WrongPass123".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_rotates_tokens() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server, "Designer", dec!(0.00)).await;

    // Refresh succeeds once
    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server
        .post("/api/v1/auth/refresh", &refresh_req)
        .await
        .unwrap();
    let rotated: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!rotated.access_token.is_empty());

    // The old refresh token was revoked by the rotation
    let response = server
        .post("/api/v1/auth/refresh", &refresh_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server, "Designer", dec!(0.00)).await;

    let body = serde_json::json!({ "refresh_token": auth.refresh_token });
    let response = server
        .post_auth("/api/v1/auth/logout", &auth.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token.clone(),
    };
    let response = server
        .post("/api/v1/auth/refresh", &refresh_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, employee) = register_user(&server, "Designer", dec!(0.00)).await;

    let response = server
        .get_auth("/api/v1/auth/me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.employee_id, Some(employee.id.to_string()));
}

#[tokio::test]
async fn test_unauthenticated_request_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/profile").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_profile_shows_pending_total() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server, "Designer", dec!(100.00)).await;

    let response = server
        .post_auth(
            "/api/v1/payout-requests",
            &auth.access_token,
            &CreatePayoutRequest::of("40.00"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/profile", &auth.access_token)
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        profile
            .employee
            .available_earnings
            .parse::<Decimal>()
            .unwrap(),
        dec!(100.00)
    );
    assert_eq!(
        profile.total_pending_amount.parse::<Decimal>().unwrap(),
        dec!(40.00)
    );
}

// ============================================================================
// Employee Administration Tests
// ============================================================================

#[tokio::test]
async fn test_employee_admin_requires_accountant() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server, "Designer", dec!(0.00)).await;

    let response = server
        .get_auth("/api/v1/employees", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/employees",
            &auth.access_token,
            &CreateEmployeeRequest::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_employee_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let accountant = register_accountant(&server).await;

    // Create
    let create_req = CreateEmployeeRequest::unique();
    let response = server
        .post_auth("/api/v1/employees", &accountant.access_token, &create_req)
        .await
        .unwrap();
    let created: EmployeeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.last_name, create_req.last_name);
    assert_eq!(created.employee_code.len(), 10);
    assert_eq!(
        created.available_earnings.parse::<Decimal>().unwrap(),
        dec!(0.00)
    );

    // List contains it
    let response = server
        .get_auth("/api/v1/employees", &accountant.access_token)
        .await
        .unwrap();
    let employees: Vec<EmployeeResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(employees.iter().any(|e| e.id == created.id));

    // Update: change position, grant earnings
    let update_req = UpdateEmployeeRequest {
        position: Some("Manager".to_string()),
        available_earnings: Some("250.00".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/employees/{}", created.id),
            &accountant.access_token,
            &update_req,
        )
        .await
        .unwrap();
    let updated: EmployeeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.position, "Manager");
    assert_eq!(
        updated.available_earnings.parse::<Decimal>().unwrap(),
        dec!(250.00)
    );

    // Negative earnings grant is rejected
    let bad_update = UpdateEmployeeRequest {
        available_earnings: Some("-1.00".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/employees/{}", created.id),
            &accountant.access_token,
            &bad_update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Delete, then it is gone
    let response = server
        .delete_auth(
            &format!("/api/v1/employees/{}", created.id),
            &accountant.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/employees/{}", created.id),
            &accountant.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Payout Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_payout_request_exceeding_balance_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, employee) = register_user(&server, "Designer", dec!(100.00)).await;

    let response = server
        .post_auth(
            "/api/v1/payout-requests",
            &auth.access_token,
            &CreatePayoutRequest::of("150.00"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Balance unchanged, nothing persisted
    let balance = server.employee_balance(employee.id).await.unwrap();
    assert_eq!(balance, dec!(100.00));

    let response = server
        .get_auth("/api/v1/profile", &auth.access_token)
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        profile.total_pending_amount.parse::<Decimal>().unwrap(),
        dec!(0.00)
    );
}

#[tokio::test]
async fn test_payout_request_non_positive_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server, "Designer", dec!(100.00)).await;

    for amount in ["0.00", "-5.00"] {
        let response = server
            .post_auth(
                "/api/v1/payout-requests",
                &auth.access_token,
                &CreatePayoutRequest::of(amount),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    }
}

#[tokio::test]
async fn test_process_payout_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let accountant = register_accountant(&server).await;
    let (auth, employee) = register_user(&server, "Designer", dec!(100.00)).await;

    // Employee requests 40.00
    let response = server
        .post_auth(
            "/api/v1/payout-requests",
            &auth.access_token,
            &CreatePayoutRequest::of("40.00"),
        )
        .await
        .unwrap();
    let request: PayoutRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(request.status, "pending");
    assert!(request.processed_at.is_none());

    // Accountant processes it
    let response = server
        .post_auth(
            &format!("/api/v1/payout-requests/{}/process", request.id),
            &accountant.access_token,
            &(),
        )
        .await
        .unwrap();
    let processed: PayoutRequestResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(processed.status, "processed");
    assert!(processed.processed_at.is_some());
    assert_eq!(processed.amount.parse::<Decimal>().unwrap(), dec!(40.00));

    // The ledger was decremented exactly once
    let balance = server.employee_balance(employee.id).await.unwrap();
    assert_eq!(balance, dec!(60.00));
}

#[tokio::test]
async fn test_process_twice_fails_without_double_decrement() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let accountant = register_accountant(&server).await;
    let (auth, employee) = register_user(&server, "Designer", dec!(100.00)).await;

    let response = server
        .post_auth(
            "/api/v1/payout-requests",
            &auth.access_token,
            &CreatePayoutRequest::of("40.00"),
        )
        .await
        .unwrap();
    let request: PayoutRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let process_url = format!("/api/v1/payout-requests/{}/process", request.id);
    let response = server
        .post_auth(&process_url, &accountant.access_token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Second call fails as already processed and leaves the balance alone
    let response = server
        .post_auth(&process_url, &accountant.access_token, &())
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "ALREADY_PROCESSED");

    let balance = server.employee_balance(employee.id).await.unwrap();
    assert_eq!(balance, dec!(60.00));
}

#[tokio::test]
async fn test_process_requires_accountant() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, employee) = register_user(&server, "Designer", dec!(100.00)).await;

    let response = server
        .post_auth(
            "/api/v1/payout-requests",
            &auth.access_token,
            &CreatePayoutRequest::of("40.00"),
        )
        .await
        .unwrap();
    let request: PayoutRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The requesting employee cannot approve their own payout
    let response = server
        .post_auth(
            &format!("/api/v1/payout-requests/{}/process", request.id),
            &auth.access_token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let balance = server.employee_balance(employee.id).await.unwrap();
    assert_eq!(balance, dec!(100.00));
}

#[tokio::test]
async fn test_insufficient_funds_at_processing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let accountant = register_accountant(&server).await;
    let (auth, employee) = register_user(&server, "Designer", dec!(100.00)).await;

    let response = server
        .post_auth(
            "/api/v1/payout-requests",
            &auth.access_token,
            &CreatePayoutRequest::of("80.00"),
        )
        .await
        .unwrap();
    let request: PayoutRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The balance shrinks between request and processing
    let update = UpdateEmployeeRequest {
        available_earnings: Some("50.00".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/employees/{}", employee.id),
            &accountant.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/payout-requests/{}/process", request.id),
            &accountant.access_token,
            &(),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "INSUFFICIENT_EARNINGS");

    // No state change: request still pending, balance untouched
    let response = server
        .get_auth(
            &format!("/api/v1/payout-requests/{}", request.id),
            &accountant.access_token,
        )
        .await
        .unwrap();
    let fetched: PayoutRequestResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.status, "pending");

    let balance = server.employee_balance(employee.id).await.unwrap();
    assert_eq!(balance, dec!(50.00));
}

#[tokio::test]
async fn test_ledger_conservation_across_payouts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let accountant = register_accountant(&server).await;
    let (auth, employee) = register_user(&server, "Designer", dec!(100.00)).await;

    // Process three payouts; the decrements must add up exactly
    let mut processed_total = Decimal::ZERO;
    for amount in ["10.00", "20.00", "30.00"] {
        let response = server
            .post_auth(
                "/api/v1/payout-requests",
                &auth.access_token,
                &CreatePayoutRequest::of(amount),
            )
            .await
            .unwrap();
        let request: PayoutRequestResponse =
            assert_json(response, StatusCode::CREATED).await.unwrap();

        let response = server
            .post_auth(
                &format!("/api/v1/payout-requests/{}/process", request.id),
                &accountant.access_token,
                &(),
            )
            .await
            .unwrap();
        let processed: PayoutRequestResponse = assert_json(response, StatusCode::OK).await.unwrap();
        processed_total += processed.amount.parse::<Decimal>().unwrap();
    }

    let balance = server.employee_balance(employee.id).await.unwrap();
    assert_eq!(processed_total, dec!(100.00) - balance);
    assert_eq!(balance, dec!(40.00));
}

// ============================================================================
// Listing & Sorting Tests
// ============================================================================

#[tokio::test]
async fn test_pending_list_sorted_by_amount() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let accountant = register_accountant(&server).await;
    let (auth, employee) = register_user(&server, "Designer", dec!(100.00)).await;

    for amount in ["30.00", "10.00", "20.00"] {
        let response = server
            .post_auth(
                "/api/v1/payout-requests",
                &auth.access_token,
                &CreatePayoutRequest::of(amount),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get_auth(
            "/api/v1/payout-requests?sort_by=amount&order=desc",
            &accountant.access_token,
        )
        .await
        .unwrap();
    let requests: Vec<PayoutRequestResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    // The shared database may hold other tests' requests; this
    // employee's subsequence must still come back largest first
    let amounts: Vec<Decimal> = requests
        .iter()
        .filter(|r| r.employee_id == employee.id.to_string())
        .map(|r| r.amount.parse().unwrap())
        .collect();
    assert_eq!(amounts, vec![dec!(30.00), dec!(20.00), dec!(10.00)]);
}

#[tokio::test]
async fn test_pending_list_rejects_unknown_sort_field() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let accountant = register_accountant(&server).await;

    let response = server
        .get_auth(
            "/api/v1/payout-requests?sort_by=salary",
            &accountant.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_payout_history_scoped_to_employee() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let accountant = register_accountant(&server).await;
    let (auth_a, employee_a) = register_user(&server, "Designer", dec!(100.00)).await;
    let (auth_b, _) = register_user(&server, "Manager", dec!(100.00)).await;

    // Employee A gets a processed payout
    let response = server
        .post_auth(
            "/api/v1/payout-requests",
            &auth_a.access_token,
            &CreatePayoutRequest::of("25.00"),
        )
        .await
        .unwrap();
    let request: PayoutRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/payout-requests/{}/process", request.id),
            &accountant.access_token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // A sees their own history
    let response = server
        .get_auth("/api/v1/payout-history", &auth_a.access_token)
        .await
        .unwrap();
    let history: Vec<PayoutRequestResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(history.iter().any(|r| r.id == request.id));
    assert!(history
        .iter()
        .all(|r| r.employee_id == employee_a.id.to_string()));

    // B sees nothing of A's
    let response = server
        .get_auth("/api/v1/payout-history", &auth_b.access_token)
        .await
        .unwrap();
    let history: Vec<PayoutRequestResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(history.iter().all(|r| r.id != request.id));

    // The accountant sees everything
    let response = server
        .get_auth("/api/v1/payout-history", &accountant.access_token)
        .await
        .unwrap();
    let history: Vec<PayoutRequestResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(history.iter().any(|r| r.id == request.id));
}

#[tokio::test]
async fn test_pending_list_requires_accountant() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (auth, _) = register_user(&server, "Designer", dec!(0.00)).await;

    let response = server
        .get_auth("/api/v1/payout-requests", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}
