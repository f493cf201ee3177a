//! Dashboard, dialog and delete flows through the served pages.

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FORM: &str = "application/x-www-form-urlencoded";

// ============================================================================
// Dashboard
// ============================================================================

#[tokio::test]
async fn test_health() {
    let store = MockServer::start().await;
    let server = test_app(&store);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_empty_dashboard_shows_empty_states() {
    let store = MockServer::start().await;
    mount_empty_lists(&store).await;
    let server = test_app(&store);

    let response = server.get("/").await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Noch keine Kurse"));
    assert!(page.contains("Noch keine Teilnehmer vorhanden."));
    assert!(page.contains("Noch keine Kursleiter vorhanden."));
}

#[tokio::test]
async fn test_failing_initial_load_shows_error_state_only() {
    let store = MockServer::start().await;
    mount_list(
        &store,
        courses_path(),
        json!({ COURSE_A: {"fields": {"kurs_name": "Yoga A", "kurs_zeitplan": "2026-10-20T10:00"}} }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(instructors_path()))
        .respond_with(ResponseTemplate::new(500).set_body_string("Service down"))
        .mount(&store)
        .await;
    mount_list(&store, participants_path(), json!({})).await;
    let server = test_app(&store);

    let response = server.get("/").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let page = response.text();
    assert!(page.contains("Fehler beim Laden"));
    assert!(page.contains("Service down"));
    assert!(page.contains(r#"href="/">Erneut versuchen"#));
    assert!(!page.contains("Yoga A"));
    assert!(!page.contains("Nächste Kurse"));
}

#[tokio::test]
async fn test_participant_badges_skip_malformed_references() {
    let store = MockServer::start().await;
    mount_list(
        &store,
        courses_path(),
        json!({ COURSE_A: {"fields": {"kurs_name": "Yoga A", "kurs_zeitplan": "2026-10-20T10:00"}} }),
    )
    .await;
    mount_list(&store, instructors_path(), json!({})).await;
    let refs = format!("{},urlB", course_url(&store, COURSE_A));
    mount_list(
        &store,
        participants_path(),
        json!({
            PARTICIPANT: {"fields": {
                "teilnehmer_vorname": "Lena",
                "teilnehmer_nachname": "Keller",
                "angemeldete_kurse": refs,
            }}
        }),
    )
    .await;
    let server = test_app(&store);

    let dashboard: Value = server.get("/api/dashboard").await.json();

    assert_eq!(dashboard["participants"][0]["courses"], json!(["Yoga A"]));
    assert_eq!(dashboard["participants"][0]["email"], "—");
    assert_eq!(dashboard["courses"][0]["participant_count"], 1);
    assert_eq!(dashboard["courses"][0]["when"], "20. Okt., 10:00 Uhr");

    let page = server.get("/").await.text();
    assert_eq!(page.matches(r#"<span class="badge">Yoga A</span>"#).count(), 1);
}

#[tokio::test]
async fn test_course_detail_lists_participants() {
    let store = MockServer::start().await;
    mount_list(
        &store,
        courses_path(),
        json!({ COURSE_A: {"fields": {"kurs_name": "Yoga A", "kurs_zeitplan": "2026-10-20T10:00"}} }),
    )
    .await;
    mount_list(
        &store,
        instructors_path(),
        json!({ INSTRUCTOR: {"fields": {
            "kursleiter_vorname": "Mira",
            "kursleiter_nachname": "Sommer",
            "zugewiesener_kurs": course_url(&store, COURSE_A),
        }} }),
    )
    .await;
    mount_list(&store, participants_path(), json!({})).await;
    let server = test_app(&store);

    let response = server.get(&format!("/courses/{COURSE_A}")).await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("20.10.2026 um 10:00 Uhr"));
    assert!(page.contains("Mira Sommer"));
    assert!(page.contains("Noch keine Teilnehmer angemeldet."));

    server
        .get(&format!("/courses/{COURSE_B}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Dialogs
// ============================================================================

#[tokio::test]
async fn test_new_course_dialog_defaults_schedule() {
    let store = MockServer::start().await;
    mount_empty_lists(&store).await;
    let server = test_app(&store);

    let response = server.get("/courses/new").await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Neuen Kurs erstellen"));
    assert!(page.contains(r#"action="/courses""#));
    assert!(page.contains("T10:00"));
}

#[tokio::test]
async fn test_course_creation_flow() {
    let store = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(courses_path()))
        .and(body_json(json!({
            "fields": {
                "kurs_name": "Hatha Yoga Anfänger",
                "kurs_zeitplan": "2026-10-20T10:00",
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": COURSE_A,
            "fields": {"kurs_name": "Hatha Yoga Anfänger", "kurs_zeitplan": "2026-10-20T10:00"}
        })))
        .expect(1)
        .mount(&store)
        .await;
    mount_list(
        &store,
        courses_path(),
        json!({ COURSE_A: {"fields": {"kurs_name": "Hatha Yoga Anfänger", "kurs_zeitplan": "2026-10-20T10:00"}} }),
    )
    .await;
    mount_list(&store, instructors_path(), json!({})).await;
    mount_list(&store, participants_path(), json!({})).await;
    let server = test_app(&store);

    let response = server
        .post("/courses")
        .text("name=Hatha+Yoga+Anf%C3%A4nger&description=&schedule=2026-10-20T10%3A00&location=")
        .content_type(FORM)
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
    let notice = response.cookie("studio_notice");

    let page = server.get("/").add_cookie(notice).await.text();
    assert!(page.contains("Neuer Kurs wurde erstellt."));
    assert!(page.contains("Hatha Yoga Anfänger"));
    assert!(page.contains("20. Okt., 10:00 Uhr"));
}

#[tokio::test]
async fn test_invalid_submission_never_contacts_store() {
    let store = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(participants_path()))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&store)
        .await;
    mount_empty_lists(&store).await;
    let server = test_app(&store);

    let response = server
        .post("/participants")
        .text("first_name=&last_name=Keller&email=lena")
        .content_type(FORM)
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let page = response.text();
    assert!(page.contains("Vorname ist erforderlich."));
    assert!(page.contains("Ungültige E-Mail-Adresse."));
    assert!(page.contains(r#"value="Keller""#));
}

#[tokio::test]
async fn test_participant_multi_select_submission() {
    let store = MockServer::start().await;
    let expected = format!("{},{}", course_url(&store, COURSE_A), course_url(&store, COURSE_B));
    Mock::given(method("POST"))
        .and(path(participants_path()))
        .and(body_json(json!({
            "fields": {
                "teilnehmer_vorname": "Lena",
                "teilnehmer_nachname": "Keller",
                "teilnehmer_email": "lena@example.de",
                "angemeldete_kurse": expected,
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": PARTICIPANT, "fields": {}})))
        .expect(1)
        .mount(&store)
        .await;
    let server = test_app(&store);

    let response = server
        .post("/participants")
        .text(format!(
            "first_name=Lena&last_name=Keller&email=lena%40example.de&enrolled_courses={COURSE_A}&enrolled_courses={COURSE_B}"
        ))
        .content_type(FORM)
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_edit_dialog_prefills_record() {
    let store = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/{}", instructors_path(), INSTRUCTOR)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": INSTRUCTOR,
            "fields": {
                "kursleiter_vorname": "Mira",
                "kursleiter_nachname": "Sommer",
                "zugewiesener_kurs": course_url(&store, COURSE_A),
            }
        })))
        .mount(&store)
        .await;
    mount_list(
        &store,
        courses_path(),
        json!({ COURSE_A: {"fields": {"kurs_name": "Yoga A"}} }),
    )
    .await;
    mount_list(&store, instructors_path(), json!({})).await;
    mount_list(&store, participants_path(), json!({})).await;
    let server = test_app(&store);

    let response = server.get(&format!("/instructors/{INSTRUCTOR}/edit")).await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Kursleiter bearbeiten"));
    assert!(page.contains(r#"value="Mira""#));
    assert!(page.contains(&format!(r#"<option value="{COURSE_A}" selected>Yoga A</option>"#)));
}

#[tokio::test]
async fn test_failed_update_keeps_dialog_open() {
    let store = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{}/{}", courses_path(), COURSE_A)))
        .respond_with(ResponseTemplate::new(500).set_body_string("nope"))
        .mount(&store)
        .await;
    mount_empty_lists(&store).await;
    let server = test_app(&store);

    let response = server
        .post(&format!("/courses/{COURSE_A}"))
        .text("name=Yin&description=&schedule=2026-10-20T18%3A30&location=Raum+2")
        .content_type(FORM)
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let page = response.text();
    assert!(page.contains("Fehler beim Speichern."));
    assert!(page.contains(r#"value="Raum 2""#));
    assert!(page.contains("Kurs bearbeiten"));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_instructor_deletion_flow() {
    let store = MockServer::start().await;
    mount_list(
        &store,
        courses_path(),
        json!({ COURSE_A: {"fields": {"kurs_name": "Yoga A", "kurs_zeitplan": "2026-10-20T10:00"}} }),
    )
    .await;
    mount_list(
        &store,
        participants_path(),
        json!({
            PARTICIPANT: {"fields": {
                "teilnehmer_vorname": "Lena",
                "teilnehmer_nachname": "Keller",
                "angemeldete_kurse": course_url(&store, COURSE_A),
            }}
        }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(instructors_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            INSTRUCTOR: {"fields": {
                "kursleiter_vorname": "Mira",
                "kursleiter_nachname": "Sommer",
                "zugewiesener_kurs": course_url(&store, COURSE_A),
            }}
        })))
        .up_to_n_times(1)
        .mount(&store)
        .await;
    mount_list(&store, instructors_path(), json!({})).await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/{}", instructors_path(), INSTRUCTOR)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&store)
        .await;
    let server = test_app(&store);

    let response = server
        .post(&format!("/instructors/{INSTRUCTOR}/delete"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    let notice = response.cookie("studio_notice");

    let page = server.get("/").add_cookie(notice).await.text();
    assert!(page.contains("&quot;Mira Sommer&quot; wurde gelöscht."));
    assert!(page.contains("Noch keine Kursleiter vorhanden."));
    // The course and its enrolment survive the instructor.
    assert!(page.contains(r#"<a href="/courses/68a0b1c2d3e4f5a6b7c8d9e0">Yoga A</a>"#));
    assert!(page.contains("1 Teiln."));
    assert!(page.contains("Lena Keller"));
    assert_eq!(page.matches(r#"<span class="badge">Yoga A</span>"#).count(), 1);
}

#[tokio::test]
async fn test_delete_proceeds_when_record_cannot_be_read() {
    let store = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(courses_path()))
        .respond_with(ResponseTemplate::new(500).set_body_string("Service down"))
        .mount(&store)
        .await;
    mount_list(&store, instructors_path(), json!({})).await;
    mount_list(&store, participants_path(), json!({})).await;
    Mock::given(method("GET"))
        .and(path(format!("{}/{}", participants_path(), PARTICIPANT)))
        .respond_with(ResponseTemplate::new(503).set_body_string("try later"))
        .mount(&store)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/{}", participants_path(), PARTICIPANT)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&store)
        .await;
    let server = test_app(&store);

    let response = server
        .post(&format!("/participants/{PARTICIPANT}/delete"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
    let notice = response.cookie("studio_notice");
    assert!(notice.value().contains("Eintrag"));
}

#[tokio::test]
async fn test_delete_of_missing_record_is_not_found() {
    let store = MockServer::start().await;
    mount_empty_lists(&store).await;
    Mock::given(method("GET"))
        .and(path(format!("{}/{}", participants_path(), PARTICIPANT)))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such record"))
        .mount(&store)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/{}", participants_path(), PARTICIPANT)))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&store)
        .await;
    let server = test_app(&store);

    let response = server
        .post(&format!("/participants/{PARTICIPANT}/delete"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_failed_delete_shows_error_notice() {
    let store = MockServer::start().await;
    mount_list(
        &store,
        courses_path(),
        json!({ COURSE_A: {"fields": {"kurs_name": "Yoga A"}} }),
    )
    .await;
    mount_list(&store, instructors_path(), json!({})).await;
    mount_list(&store, participants_path(), json!({})).await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/{}", courses_path(), COURSE_A)))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&store)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/{}", courses_path(), COURSE_A)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": COURSE_A,
            "fields": {"kurs_name": "Yoga A"}
        })))
        .mount(&store)
        .await;
    let server = test_app(&store);

    let confirm = server.get(&format!("/courses/{COURSE_A}/delete")).await;
    confirm.assert_status_ok();
    assert!(confirm.text().contains(r#""Yoga A" wirklich löschen"#));

    let response = server.post(&format!("/courses/{COURSE_A}/delete")).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let page = response.text();
    assert!(page.contains("Eintrag konnte nicht gelöscht werden."));
    assert!(page.contains(r#""Yoga A" wirklich löschen"#));
}
