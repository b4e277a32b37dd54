use fake::{faker::internet::en::Password, Fake};
use once_cell::sync::Lazy;
use password_change_form::{
    configuration::get_configuration, domain::Field, form::PasswordChangeForm,
    password_client::PasswordClient, telemetry::init,
};
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let configuration = get_configuration().expect("Failed to read configuration.");
    // local configuration logs to the console only, so there is no guard to keep
    let _ = init(&configuration.logger);
});

pub struct TestApp {
    pub endpoint_server: MockServer,
    pub form: PasswordChangeForm<PasswordClient>,
    pub test_user: TestUser,
}

impl TestApp {
    pub fn fill(&self, old_password: &str, new_password: &str, confirm_new_password: &str) {
        self.form.set_field(Field::OldPassword, old_password);
        self.form.set_field(Field::NewPassword, new_password);
        self.form
            .set_field(Field::ConfirmNewPassword, confirm_new_password);
    }

    pub fn fill_valid(&self) {
        self.fill(
            &self.test_user.old_password,
            &self.test_user.new_password,
            &self.test_user.new_password,
        );
    }

    pub fn fields_are_empty(&self) -> bool {
        let fields = self.form.fields();
        Field::ALL.iter().all(|field| fields.is_empty(*field))
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let endpoint_server = MockServer::start().await;

    let mut configuration = get_configuration().expect("Failed to read configuration.");
    configuration.client.base_url = endpoint_server.uri();
    let client = configuration
        .client
        .client()
        .expect("Failed to build password client.");

    TestApp {
        endpoint_server,
        form: PasswordChangeForm::new(client),
        test_user: TestUser::generate(),
    }
}

/// A base url nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", address)
}

pub struct TestUser {
    pub old_password: String,
    pub new_password: String,
}

impl TestUser {
    pub fn generate() -> Self {
        Self {
            old_password: Password(12..24).fake(),
            new_password: Password(12..24).fake(),
        }
    }
}
