use std::time::Duration;

use password_change_form::{
    password_client::DEFAULT_ENDPOINT_PATH, view::AlertKind, view_engine::TeraView,
};
use wiremock::{matchers::path, Mock, ResponseTemplate};

use crate::helpers::spawn_app;

#[tokio::test]
async fn rendered_form_shows_the_rejection_and_no_passwords() {
    let test_app = spawn_app().await;
    Mock::given(path(DEFAULT_ENDPOINT_PATH))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "message": "<b>bad</b> password" })),
        )
        .expect(1)
        .mount(&test_app.endpoint_server)
        .await;
    test_app.fill_valid();
    test_app.form.submit().await;

    let view = test_app.form.view();
    let alert = view.alert.as_ref().expect("No alert after a rejection.");
    assert_eq!(alert.kind, AlertKind::Error);
    let html = view
        .render(&TeraView::build().expect("Failed to load views."))
        .expect("Failed to render the form.");

    assert!(html.contains("Error!"));
    assert!(html.contains("&lt;b&gt;bad&lt;&#x2F;b&gt; password"));
    assert!(html.contains(r#"id="confirmNewPassword""#));
    assert!(!html.contains(&test_app.test_user.old_password));
    assert!(!html.contains(&test_app.test_user.new_password));
}

#[tokio::test]
async fn rendered_form_disables_the_button_while_submitting() {
    let test_app = spawn_app().await;
    let delay = Duration::from_millis(300);
    Mock::given(path(DEFAULT_ENDPOINT_PATH))
        .respond_with(ResponseTemplate::new(200).set_delay(delay))
        .mount(&test_app.endpoint_server)
        .await;
    let views = TeraView::build().expect("Failed to load views.");
    test_app.fill_valid();

    let observer = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        test_app.form.view().render(&views)
    };
    let (_, html) = tokio::join!(test_app.form.submit(), observer);
    let html = html.expect("Failed to render the form.");

    assert!(html.contains("Saving..."));
    assert!(html.contains("disabled"));
    assert!(!html.contains("role=\"alert\""));
}
