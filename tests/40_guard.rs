mod common;

use academy_client::{Capability, Guard, GuardState, GuardView, RoleResolver, Route};
use common::TestApi;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mount_user_with_role(api: &TestApi, role: &str) {
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u7"})))
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/u7/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"user_id": "u7", "role": role}])))
        .mount(&api.server)
        .await;
}

#[tokio::test]
async fn authorized_viewer_renders_inside_shell() {
    let api = TestApi::start(Some("t")).await;
    mount_user_with_role(&api, "editor").await;

    let resolver = RoleResolver::new(&api.client, &api.client);
    let mut guard = Guard::new(Capability::Editor).with_shell();
    assert_eq!(guard.view(), GuardView::Placeholder);

    assert_eq!(guard.check(&resolver).await, GuardView::Render { shell: true });
    assert_eq!(guard.state(), GuardState::Authorized);
}

#[tokio::test]
async fn unauthorized_viewer_is_redirected_with_replace() {
    let api = TestApi::start(Some("t")).await;
    mount_user_with_role(&api, "lider").await;

    let resolver = RoleResolver::new(&api.client, &api.client);
    let mut guard = Guard::new(Capability::AdminMaster);

    assert_eq!(
        guard.check(&resolver).await,
        GuardView::Redirect { to: Route::home(), replace: true }
    );
}

#[tokio::test]
async fn signed_out_viewer_is_redirected_to_custom_landing() {
    let api = TestApi::start(None).await;

    let resolver = RoleResolver::new(&api.client, &api.client);
    let mut guard = Guard::new(Capability::Leader).redirect_to(Route("/login".into()));

    assert_eq!(
        guard.check(&resolver).await,
        GuardView::Redirect { to: Route("/login".into()), replace: true }
    );
}

#[tokio::test]
async fn role_lookup_failure_redirects() {
    let api = TestApi::start(Some("t")).await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u7"})))
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/u7/roles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&api.server)
        .await;

    let resolver = RoleResolver::new(&api.client, &api.client);
    let mut guard = Guard::new(Capability::Admin);
    assert!(matches!(guard.check(&resolver).await, GuardView::Redirect { .. }));
    assert_eq!(guard.state(), GuardState::Unauthorized);
}
