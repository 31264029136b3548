//! Write-pattern behavior for partner contact updates: invalidation
//! exactly once on success, untouched cache on failure, cancellation.

mod common;

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, partner_row, shared_cache, RecordingNotifier, ORG_ID, PARTNER_ID};
use painel_core::domains::organizations::{OrganizationStore, PartnerContactUpdate};
use painel_core::{Field, ViewScope};
use supabase::SupabaseError;

fn store_with(
    server: &MockServer,
    notifier: Arc<RecordingNotifier>,
) -> (OrganizationStore, Arc<painel_core::QueryCache>) {
    let cache = shared_cache();
    (
        OrganizationStore::new(client_for(server), cache.clone(), notifier),
        cache,
    )
}

async fn mount_partner_list(server: &MockServer, expected_fetches: u64) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/organization_partners"))
        .and(query_param("organization_id", format!("eq.{ORG_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([partner_row()])))
        .expect(expected_fetches)
        .mount(server)
        .await;
}

#[tokio::test]
async fn successful_update_invalidates_partner_list_exactly_once() {
    let server = MockServer::start().await;
    mount_partner_list(&server, 2).await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/organization_partners"))
        .and(query_param("id", format!("eq.{PARTNER_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([partner_row()])))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let (store, _cache) = store_with(&server, notifier.clone());
    let scope = ViewScope::new();

    // populate the cache, confirm the second read stays local
    store.partners(ORG_ID).await.unwrap();
    store.partners(ORG_ID).await.unwrap();

    let update = PartnerContactUpdate {
        email: Field::Set("ana@example.com".into()),
        ..Default::default()
    };
    store
        .update_partner_contact(&scope, PARTNER_ID, ORG_ID, update)
        .await
        .unwrap();

    assert_eq!(notifier.success_messages(), vec!["Contact details saved"]);

    // invalidated once: the next read refetches, the one after is cached
    store.partners(ORG_ID).await.unwrap();
    store.partners(ORG_ID).await.unwrap();
}

#[tokio::test]
async fn update_sends_only_touched_fields_and_nulls_cleared_ones() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/organization_partners"))
        .and(query_param("id", format!("eq.{PARTNER_ID}")))
        .and(body_json(json!({
            "email": "ana@example.com",
            "phone": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([partner_row()])))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let (store, _cache) = store_with(&server, notifier);
    let scope = ViewScope::new();

    let update = PartnerContactUpdate {
        email: Field::Set("ana@example.com".into()),
        phone: Field::from_input("   "),
        whatsapp: Field::Keep,
        postal_code: Field::Keep,
    };
    store
        .update_partner_contact(&scope, PARTNER_ID, ORG_ID, update)
        .await
        .unwrap();
}

#[tokio::test]
async fn failed_update_leaves_cache_untouched_and_notifies() {
    let server = MockServer::start().await;
    mount_partner_list(&server, 1).await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/organization_partners"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let (store, _cache) = store_with(&server, notifier.clone());
    let scope = ViewScope::new();

    store.partners(ORG_ID).await.unwrap();

    let result = store
        .update_partner_contact(&scope, PARTNER_ID, ORG_ID, PartnerContactUpdate::default())
        .await;
    assert!(matches!(result, Err(SupabaseError::Api { status: 500, .. })));
    assert_eq!(notifier.error_messages(), vec!["Could not save contact details"]);
    assert!(notifier.success_messages().is_empty());

    // still served from cache: the list mock expects exactly one fetch
    store.partners(ORG_ID).await.unwrap();
}

#[tokio::test]
async fn update_matching_no_rows_is_a_notified_failure() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/organization_partners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let (store, _cache) = store_with(&server, notifier.clone());
    let scope = ViewScope::new();

    let result = store
        .update_partner_contact(&scope, PARTNER_ID, ORG_ID, PartnerContactUpdate::default())
        .await;
    assert!(matches!(result, Err(SupabaseError::NoRows)));
    assert_eq!(notifier.error_messages(), vec!["Could not save contact details"]);
}

#[tokio::test]
async fn success_after_cancellation_is_a_no_op() {
    let server = MockServer::start().await;
    mount_partner_list(&server, 1).await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/organization_partners"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([partner_row()])))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let (store, _cache) = store_with(&server, notifier.clone());
    let scope = ViewScope::new();

    store.partners(ORG_ID).await.unwrap();
    scope.cancel();

    let partner = store
        .update_partner_contact(&scope, PARTNER_ID, ORG_ID, PartnerContactUpdate::default())
        .await
        .unwrap();
    assert_eq!(partner.name, "Ana Souza");

    // no invalidation, no notification
    assert!(notifier.is_silent());
    store.partners(ORG_ID).await.unwrap();
}
